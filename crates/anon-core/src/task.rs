//! The closed set of anonymization tasks
//!
//! Declaration order is the execution priority: tasks declared earlier run
//! first, so generic tasks that might swallow the matches of more specific
//! ones belong at the end.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnonTask {
    CreditCard,
    BitcoinAddress,
    IpAddress,
    EmailAddress,
    Age,
    BirthDate,
    DeathDate,
    Norp,
    Disease,
    BankAccount,
    GovId,
    PhoneNumber,
    LicensePlate,
    StreetAddress,
}

impl AnonTask {
    /// Every task, in priority order
    pub const ALL: [AnonTask; 14] = [
        AnonTask::CreditCard,
        AnonTask::BitcoinAddress,
        AnonTask::IpAddress,
        AnonTask::EmailAddress,
        AnonTask::Age,
        AnonTask::BirthDate,
        AnonTask::DeathDate,
        AnonTask::Norp,
        AnonTask::Disease,
        AnonTask::BankAccount,
        AnonTask::GovId,
        AnonTask::PhoneNumber,
        AnonTask::LicensePlate,
        AnonTask::StreetAddress,
    ];

    /// Identifier used in placeholders and statistics
    pub fn name(self) -> &'static str {
        match self {
            AnonTask::CreditCard => "CREDIT_CARD",
            AnonTask::BitcoinAddress => "BITCOIN_ADDRESS",
            AnonTask::IpAddress => "IP_ADDRESS",
            AnonTask::EmailAddress => "EMAIL_ADDRESS",
            AnonTask::Age => "AGE",
            AnonTask::BirthDate => "BIRTH_DATE",
            AnonTask::DeathDate => "DEATH_DATE",
            AnonTask::Norp => "NORP",
            AnonTask::Disease => "DISEASE",
            AnonTask::BankAccount => "BANK_ACCOUNT",
            AnonTask::GovId => "GOV_ID",
            AnonTask::PhoneNumber => "PHONE_NUMBER",
            AnonTask::LicensePlate => "LICENSE_PLATE",
            AnonTask::StreetAddress => "STREET_ADDRESS",
        }
    }
}

impl fmt::Display for AnonTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnonTask {
    type Err = AnonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_uppercase();
        AnonTask::ALL
            .into_iter()
            .find(|task| task.name() == wanted)
            .ok_or_else(|| AnonError::UnknownTask(s.to_string()))
    }
}
