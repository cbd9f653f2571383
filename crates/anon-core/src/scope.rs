//! Locale granularity at which a detector variant is registered

use std::fmt;

use crate::error::{AnonError, Result};
use crate::task::AnonTask;

/// Name used for the language-independent scope and for "no country"
pub const TASK_ANY: &str = "any";

/// Sentinel country meaning "every country known for the language"
pub const ALL_COUNTRIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Global,
    Language(String),
    Country(String, String),
}

impl Scope {
    pub fn language(lang: &str) -> Self {
        Scope::Language(lang.to_string())
    }

    pub fn country(lang: &str, country: &str) -> Self {
        Scope::Country(lang.to_string(), country.to_string())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str(TASK_ANY),
            Scope::Language(lang) => write!(f, "{}/{}", lang, TASK_ANY),
            Scope::Country(lang, country) => write!(f, "{}/{}", lang, country),
        }
    }
}

/// Trim and lowercase a language or country code
pub fn normalize_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() || code.chars().any(char::is_whitespace) {
        return Err(AnonError::InvalidLocale(code.to_string()));
    }
    Ok(code.to_lowercase())
}

/// Which country scopes a request covers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountrySelection {
    #[default]
    None,
    All,
    List(Vec<String>),
}

impl CountrySelection {
    /// Build from raw codes; an `all` entry selects every country
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut countries = Vec::new();
        for code in codes {
            let code = normalize_code(code.as_ref())?;
            if code == ALL_COUNTRIES {
                return Ok(CountrySelection::All);
            }
            if !countries.contains(&code) {
                countries.push(code);
            }
        }

        if countries.is_empty() {
            Ok(CountrySelection::None)
        } else {
            Ok(CountrySelection::List(countries))
        }
    }
}

/// Which tasks a request asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSelection {
    All,
    Tasks(Vec<AnonTask>),
}

impl From<AnonTask> for TaskSelection {
    fn from(task: AnonTask) -> Self {
        TaskSelection::Tasks(vec![task])
    }
}

impl From<Vec<AnonTask>> for TaskSelection {
    fn from(tasks: Vec<AnonTask>) -> Self {
        TaskSelection::Tasks(tasks)
    }
}
