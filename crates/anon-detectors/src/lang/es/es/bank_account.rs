//! Spanish bank account numbers (CCC, código cuenta cliente)
//!
//! These are the pre-IBAN 20-digit codes. IBAN numbers are country and
//! language independent and do not belong here.

use anon_core::{AnonTask, Descriptor, Procedure, Result};
use regex::Regex;

use crate::validate;

// Bank, branch, control digits and account, optionally space separated
const CCC_PATTERN: &str = r"\d{4}\s?\d{4}\s?\d{2}\s?\d{10}";

pub struct BankAccount;

impl Procedure for BankAccount {
    type State = Regex;

    fn initialize(&self) -> anyhow::Result<Regex> {
        Ok(Regex::new(CCC_PATTERN)?)
    }

    fn candidates<'a>(
        &'a self,
        state: &'a Regex,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        state
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|ccc| validate::spanish_ccc(ccc))
    }
}

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::procedural(
        AnonTask::BankAccount,
        BankAccount,
        "Spanish Bank Accounts (código cuenta cliente, 10-digit code, pre-IBAN), recognize & validate",
    )])
}
