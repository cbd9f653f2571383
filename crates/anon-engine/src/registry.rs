//! Task registry: every detector indexed by the scope it was declared in
//!
//! The process-wide index is built on first use and never mutated after
//! that. Concurrent first calls build it once; later readers take no lock.

use std::collections::{BTreeMap, BTreeSet};

use anon_core::{AnonError, AnonTask, Descriptor, DetectorModule, Result, Scope};
use once_cell::sync::OnceCell;
use tracing::debug;

pub type TaskMap = BTreeMap<AnonTask, Descriptor>;

#[derive(Debug, Default)]
struct LanguageTasks {
    generic: TaskMap,
    countries: BTreeMap<String, TaskMap>,
}

#[derive(Debug, Default)]
pub struct TaskIndex {
    global: TaskMap,
    languages: BTreeMap<String, LanguageTasks>,
}

static TASK_INDEX: OnceCell<TaskIndex> = OnceCell::new();

/// The process-wide index over the built-in detector catalog
///
/// A failed build (malformed pattern, duplicate task) is returned to the
/// caller and not cached.
pub fn get_task_index() -> Result<&'static TaskIndex> {
    TASK_INDEX.get_or_try_init(|| TaskIndex::build(&anon_detectors::catalog()))
}

impl TaskIndex {
    /// Load every module and index its descriptors by scope
    ///
    /// A task declared twice within one scope is a configuration error.
    pub fn build(modules: &[DetectorModule]) -> Result<Self> {
        let mut index = TaskIndex::default();

        for module in modules {
            let descriptors = (module.load)()?;
            let tasks = index.scope_mut(&module.scope);

            for descriptor in descriptors {
                let task = descriptor.task();
                if tasks.contains_key(&task) {
                    return Err(AnonError::DuplicateTask {
                        task,
                        scope: module.scope.clone(),
                    });
                }
                tasks.insert(task, descriptor);
            }
        }

        debug!(
            modules = modules.len(),
            global = index.global.len(),
            languages = index.languages.len(),
            "Task index built"
        );

        Ok(index)
    }

    fn scope_mut(&mut self, scope: &Scope) -> &mut TaskMap {
        match scope {
            Scope::Global => &mut self.global,
            Scope::Language(lang) => &mut self.languages.entry(lang.clone()).or_default().generic,
            Scope::Country(lang, country) => self
                .languages
                .entry(lang.clone())
                .or_default()
                .countries
                .entry(country.clone())
                .or_default(),
        }
    }

    /// Tasks declared in one scope; `None` for a scope nothing registers into
    pub fn scope(&self, scope: &Scope) -> Option<&TaskMap> {
        match scope {
            Scope::Global => Some(&self.global),
            Scope::Language(lang) => self.languages.get(lang).map(|l| &l.generic),
            Scope::Country(lang, country) => self
                .languages
                .get(lang)
                .and_then(|l| l.countries.get(country)),
        }
    }

    /// The descriptor for `task` in exactly this scope, without fallback
    pub fn lookup(&self, task: AnonTask, scope: &Scope) -> Option<&Descriptor> {
        self.scope(scope).and_then(|tasks| tasks.get(&task))
    }

    pub fn global(&self) -> &TaskMap {
        &self.global
    }

    /// Languages with at least one language-generic or country detector
    pub fn languages(&self) -> BTreeSet<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    /// Countries with detectors for `lang`; empty for unknown languages
    pub fn countries(&self, lang: &str) -> BTreeSet<&str> {
        self.languages
            .get(lang)
            .map(|l| l.countries.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every non-empty scope with its tasks, global first
    pub fn scopes(&self) -> Vec<(Scope, &TaskMap)> {
        let mut scopes = vec![(Scope::Global, &self.global)];
        for (lang, tasks) in &self.languages {
            if !tasks.generic.is_empty() {
                scopes.push((Scope::language(lang), &tasks.generic));
            }
            for (country, country_tasks) in &tasks.countries {
                scopes.push((Scope::country(lang, country), country_tasks));
            }
        }
        scopes
    }
}
