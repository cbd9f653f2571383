//! Credit card numbers
//!
//! 1. Candidates: 16 digits with optional single space/dash separators
//! 2. Validation: the bare number must match an issuer prefix and length,
//!    and pass the Luhn check

use anon_core::{AnonTask, Descriptor, Procedure, Result};
use regex::Regex;

use crate::validate;

const CANDIDATE_PATTERN: &str = r"\b[0-9](?:[0-9][ -]?){14}[0-9]\b";

// https://www.regular-expressions.info/creditcard.html
const ISSUER_PATTERN: &str = r"(?x)^(?:
      4[0-9]{12}(?:[0-9]{3})?
    | (?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}
    | 3[47][0-9]{13}
    | 3(?:0[0-5]|[68][0-9])[0-9]{11}
    | 6(?:011|5[0-9]{2})[0-9]{12}
    | (?:2131|1800|35[0-9]{3})[0-9]{11}
)$";

pub struct CreditCard;

pub struct CreditCardState {
    candidate: Regex,
    issuer: Regex,
}

impl Procedure for CreditCard {
    type State = CreditCardState;

    fn initialize(&self) -> anyhow::Result<CreditCardState> {
        Ok(CreditCardState {
            candidate: Regex::new(CANDIDATE_PATTERN)?,
            issuer: Regex::new(ISSUER_PATTERN)?,
        })
    }

    fn candidates<'a>(
        &'a self,
        state: &'a CreditCardState,
        text: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        state
            .candidate
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|cc| {
                let digits: String = cc.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
                state.issuer.is_match(&digits) && validate::luhn(&digits)
            })
    }
}

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::procedural(
        AnonTask::CreditCard,
        CreditCard,
        "Credit card numbers for most international credit cards (recognize & validate)",
    )])
}
