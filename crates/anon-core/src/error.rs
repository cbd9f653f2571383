use thiserror::Error;

use crate::scope::Scope;
use crate::task::AnonTask;

#[derive(Error, Debug)]
pub enum AnonError {
    #[error("Unknown anonymization task: {0}")]
    UnknownTask(String),

    #[error("Invalid locale code: {0:?}")]
    InvalidLocale(String),

    #[error("Invalid pattern for {task}: {source}")]
    InvalidPattern {
        task: AnonTask,
        #[source]
        source: regex::Error,
    },

    #[error("Initializer for {task} failed: {source}")]
    InitializerFailed {
        task: AnonTask,
        #[source]
        source: anyhow::Error,
    },

    #[error("Task {task} registered twice in scope {scope}")]
    DuplicateTask { task: AnonTask, scope: Scope },

    #[error("Invalid placeholder template {template:?}: {reason}")]
    InvalidTemplate { template: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AnonError>;
