//! Detector contract
//!
//! A [`Descriptor`] pairs an [`AnonTask`] with the thing that finds its
//! matches. Two shapes exist:
//! - pattern detectors: a regex that both finds and replaces, compiled when
//!   the descriptor is declared
//! - procedural detectors: a [`Procedure`] that yields suspicious substrings,
//!   with state built once by its initializer
//!
//! Both are bound into a [`Substitution`], the single operation the engine
//! knows how to run.

use std::fmt;

use once_cell::sync::OnceCell;
use regex::{NoExpand, Regex};

use crate::error::{AnonError, Result};
use crate::scope::Scope;
use crate::task::AnonTask;

/// A candidate producer with a one-time initializer
///
/// `initialize` runs at most once per descriptor, before the first call to
/// `candidates`, no matter how many engines share the descriptor. Detectors
/// with nothing to set up use `State = ()`.
pub trait Procedure: Send + Sync + 'static {
    type State: Send + Sync + 'static;

    fn initialize(&self) -> anyhow::Result<Self::State>;

    /// Substrings of `text` that should be replaced
    fn candidates<'a>(
        &'a self,
        state: &'a Self::State,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a;
}

pub type CandidateFn<'a> = Box<dyn Fn(&str) -> Vec<String> + Send + Sync + 'a>;

/// Object-safe view of a [`Procedure`] together with its state cell
pub trait CandidateSource: Send + Sync {
    /// Run the initializer if needed and return the candidate function
    fn bind(&self) -> anyhow::Result<CandidateFn<'_>>;

    fn is_initialized(&self) -> bool;
}

struct LazyProcedure<P: Procedure> {
    procedure: P,
    state: OnceCell<P::State>,
}

impl<P: Procedure> CandidateSource for LazyProcedure<P> {
    fn bind(&self) -> anyhow::Result<CandidateFn<'_>> {
        let state = self.state.get_or_try_init(|| self.procedure.initialize())?;
        let procedure = &self.procedure;
        Ok(Box::new(move |text: &str| {
            procedure
                .candidates(state, text)
                .map(str::to_owned)
                .collect()
        }))
    }

    fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }
}

pub enum Producer {
    Pattern(Regex),
    Procedural(Box<dyn CandidateSource>),
}

pub struct Descriptor {
    task: AnonTask,
    description: &'static str,
    producer: Producer,
}

impl Descriptor {
    /// Declare a pattern detector. Fails if the pattern does not compile.
    pub fn pattern(task: AnonTask, pattern: &str, description: &'static str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|source| AnonError::InvalidPattern { task, source })?;

        Ok(Self {
            task,
            description,
            producer: Producer::Pattern(regex),
        })
    }

    /// Declare a procedural detector. Its initializer is deferred until the
    /// first [`Descriptor::bind`].
    pub fn procedural<P: Procedure>(task: AnonTask, procedure: P, description: &'static str) -> Self {
        Self {
            task,
            description,
            producer: Producer::Procedural(Box::new(LazyProcedure {
                procedure,
                state: OnceCell::new(),
            })),
        }
    }

    pub fn task(&self) -> AnonTask {
        self.task
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn producer(&self) -> &Producer {
        &self.producer
    }

    /// Whether the detector still needs its initializer to run
    pub fn is_initialized(&self) -> bool {
        match &self.producer {
            Producer::Pattern(_) => true,
            Producer::Procedural(source) => source.is_initialized(),
        }
    }

    /// Initialize the detector (once) and wrap it with its rendered placeholder
    pub fn bind(&self, placeholder: String) -> Result<Substitution<'_>> {
        let operation = match &self.producer {
            Producer::Pattern(regex) => Operation::Pattern(regex),
            Producer::Procedural(procedure) => {
                let candidates = procedure
                    .bind()
                    .map_err(|source| AnonError::InitializerFailed {
                        task: self.task,
                        source,
                    })?;
                Operation::Procedural(candidates)
            }
        };

        Ok(Substitution {
            task: self.task,
            description: self.description,
            placeholder,
            operation,
        })
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.producer {
            Producer::Pattern(regex) => format!("pattern({})", regex.as_str()),
            Producer::Procedural(_) => "procedural".to_string(),
        };
        f.debug_struct("Descriptor")
            .field("task", &self.task)
            .field("producer", &kind)
            .field("description", &self.description)
            .finish()
    }
}

/// A leaf detector module: the scope it registers into and its loader
#[derive(Debug, Clone)]
pub struct DetectorModule {
    pub name: &'static str,
    pub scope: Scope,
    pub load: fn() -> Result<Vec<Descriptor>>,
}

impl DetectorModule {
    pub fn new(name: &'static str, scope: Scope, load: fn() -> Result<Vec<Descriptor>>) -> Self {
        Self { name, scope, load }
    }
}

enum Operation<'a> {
    Pattern(&'a Regex),
    Procedural(CandidateFn<'a>),
}

/// A detector bound to its placeholder: `text -> (new_text, match_count)`
pub struct Substitution<'a> {
    task: AnonTask,
    description: &'static str,
    placeholder: String,
    operation: Operation<'a>,
}

impl Substitution<'_> {
    pub fn task(&self) -> AnonTask {
        self.task
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn apply(&self, text: &str) -> (String, usize) {
        match &self.operation {
            Operation::Pattern(regex) => {
                let count = regex.find_iter(text).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                let result = regex
                    .replace_all(text, NoExpand(&self.placeholder))
                    .into_owned();
                (result, count)
            }
            Operation::Procedural(candidates) => {
                let mut distinct: Vec<String> = Vec::new();
                for candidate in candidates(text) {
                    if !candidate.is_empty() && !distinct.contains(&candidate) {
                        distinct.push(candidate);
                    }
                }

                let mut result = text.to_string();
                for candidate in &distinct {
                    result = result.replace(candidate.as_str(), &self.placeholder);
                }
                (result, distinct.len())
            }
        }
    }
}

impl fmt::Debug for Substitution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("task", &self.task)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}
