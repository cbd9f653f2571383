use anon_core::{AnonTask, Descriptor, Result};

const IPV4_PATTERN: &str = r"(?x)
    \b
    (?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}
    (?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])
    \b";

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::pattern(
        AnonTask::IpAddress,
        IPV4_PATTERN,
        "IPv4 addresses in dotted-quad notation",
    )?])
}
