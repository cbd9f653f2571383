use anon_core::{AnonTask, Descriptor, Result};

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::pattern(
        AnonTask::EmailAddress,
        EMAIL_PATTERN,
        "Email addresses",
    )?])
}
