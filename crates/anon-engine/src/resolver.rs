//! Task resolution for a locale
//!
//! Precedence is by scope specificity: requested countries (in request
//! order), then the language-generic scope, then the global scope.

use anon_core::{AnonTask, CountrySelection, Descriptor, Scope};
use tracing::warn;

use crate::registry::TaskIndex;

/// Countries a request covers, with `All` expanded from the index
fn requested_countries(index: &TaskIndex, lang: &str, countries: &CountrySelection) -> Vec<String> {
    match countries {
        CountrySelection::None => Vec::new(),
        CountrySelection::All => index.countries(lang).into_iter().map(String::from).collect(),
        CountrySelection::List(list) => list.clone(),
    }
}

/// Scopes to consult for a locale, most specific first
pub fn candidate_scopes(index: &TaskIndex, lang: &str, countries: &CountrySelection) -> Vec<Scope> {
    let mut scopes: Vec<Scope> = requested_countries(index, lang, countries)
        .iter()
        .map(|country| Scope::country(lang, country))
        .collect();
    scopes.push(Scope::language(lang));
    scopes.push(Scope::Global);
    scopes
}

/// Every descriptor available for a locale: global first, then
/// language-generic, then each country. No deduplication across scopes.
pub fn resolve_all<'a>(
    index: &'a TaskIndex,
    lang: &str,
    countries: &CountrySelection,
) -> Vec<&'a Descriptor> {
    let mut scopes = vec![Scope::Global, Scope::language(lang)];
    scopes.extend(
        requested_countries(index, lang, countries)
            .iter()
            .map(|country| Scope::country(lang, country)),
    );

    scopes
        .iter()
        .filter_map(|scope| index.scope(scope))
        .flat_map(|tasks| tasks.values())
        .collect()
}

/// The most specific descriptor for `task`, if any scope defines it
pub fn resolve_one<'a>(
    index: &'a TaskIndex,
    task: AnonTask,
    lang: &str,
    countries: &CountrySelection,
) -> Option<&'a Descriptor> {
    let found = candidate_scopes(index, lang, countries)
        .iter()
        .find_map(|scope| index.lookup(task, scope));

    if found.is_none() {
        warn!(
            task = %task,
            lang,
            countries = ?countries,
            "Cannot find any anonymization task for locale"
        );
    }
    found
}

/// Resolve each requested task in turn, skipping (with a warning) the ones
/// the locale does not define. Request order is preserved.
pub fn resolve_tasks<'a>(
    index: &'a TaskIndex,
    tasks: &[AnonTask],
    lang: &str,
    countries: &CountrySelection,
) -> Vec<&'a Descriptor> {
    tasks
        .iter()
        .filter_map(|&task| resolve_one(index, task, lang, countries))
        .collect()
}
