//! Core domain types for the text anonymizer
//!
//! This crate contains:
//! - The closed set of anonymization tasks and their priority order
//! - Locale scopes (global, language, language + country)
//! - The detector contract shared by every leaf detector

pub mod detector;
pub mod error;
pub mod scope;
pub mod task;

pub use detector::{
    CandidateSource, Descriptor, DetectorModule, Procedure, Producer, Substitution,
};
pub use error::{AnonError, Result};
pub use scope::{ALL_COUNTRIES, CountrySelection, Scope, TASK_ANY, TaskSelection, normalize_code};
pub use task::AnonTask;
