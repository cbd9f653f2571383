//! Task resolution and ordered substitution
//!
//! - [`registry`]: the process-wide index of detectors by scope
//! - [`resolver`]: picks the most specific detector variant for a locale
//! - [`engine`]: runs bound detectors over a document in priority order
//! - [`TextAnonymizer`]: the facade callers construct once per locale

pub mod anonymizer;
pub mod engine;
pub mod registry;
pub mod resolver;
pub mod stats;

pub use anonymizer::TextAnonymizer;
pub use engine::{DEFAULT_TEMPLATE, SubstitutionEngine, validate_template};
pub use registry::{TaskIndex, TaskMap, get_task_index};
pub use resolver::{resolve_all, resolve_one, resolve_tasks};
pub use stats::Stats;
