pub mod anonymize;
pub mod list;
