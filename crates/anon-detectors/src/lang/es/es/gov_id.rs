//! Spanish national identity numbers: DNI and NIE, checked by control letter

use anon_core::{AnonTask, Descriptor, Procedure, Result};
use regex::Regex;

use crate::validate;

const ID_PATTERN: &str = r"\b(?:\d{8}|[XYZ]\d{7})-?[A-Z]\b";

pub struct GovId;

impl Procedure for GovId {
    type State = Regex;

    fn initialize(&self) -> anyhow::Result<Regex> {
        Ok(Regex::new(ID_PATTERN)?)
    }

    fn candidates<'a>(
        &'a self,
        state: &'a Regex,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        state
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|id| validate::spanish_dni_letter(id))
    }
}

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::procedural(
        AnonTask::GovId,
        GovId,
        "Spanish identity numbers (DNI & NIE), recognize & validate control letter",
    )])
}
