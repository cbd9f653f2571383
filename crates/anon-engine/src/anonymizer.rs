//! Caller-facing anonymizer: one per (language, countries, tasks, template)

use anon_core::{AnonTask, CountrySelection, Descriptor, Result, TaskSelection, normalize_code};
use tracing::trace;

use crate::engine::{DEFAULT_TEMPLATE, SubstitutionEngine};
use crate::registry::{TaskIndex, get_task_index};
use crate::resolver::{resolve_all, resolve_tasks};
use crate::stats::Stats;

#[derive(Debug)]
pub struct TextAnonymizer<'a> {
    lang: String,
    countries: CountrySelection,
    engine: SubstitutionEngine<'a>,
    stats: Stats,
}

impl TextAnonymizer<'static> {
    /// Build against the process-wide task index
    ///
    /// ```no_run
    /// use anon_core::{AnonTask, CountrySelection};
    /// use anon_engine::TextAnonymizer;
    ///
    /// let countries = CountrySelection::from_codes(["es"])?;
    /// let mut anon = TextAnonymizer::new("es", countries, AnonTask::BankAccount, None)?;
    /// assert_eq!(anon.process("2085 8720 60 1902070563"), "<BANK_ACCOUNT>");
    /// # Ok::<(), anon_core::AnonError>(())
    /// ```
    pub fn new(
        lang: &str,
        countries: CountrySelection,
        tasks: impl Into<TaskSelection>,
        template: Option<&str>,
    ) -> Result<Self> {
        let index = get_task_index()?;
        Self::with_index(index, lang, countries, tasks, template)
    }
}

impl<'a> TextAnonymizer<'a> {
    /// Build against an explicit index
    pub fn with_index(
        index: &'a TaskIndex,
        lang: &str,
        countries: CountrySelection,
        tasks: impl Into<TaskSelection>,
        template: Option<&str>,
    ) -> Result<Self> {
        let lang = normalize_code(lang)?;
        let countries = match countries {
            CountrySelection::List(codes) => CountrySelection::from_codes(&codes)?,
            other => other,
        };

        let requested = match tasks.into() {
            TaskSelection::Tasks(tasks) => distinct(tasks),
            TaskSelection::All => available_tasks(index, &lang, &countries),
        };
        let descriptors: Vec<&'a Descriptor> = resolve_tasks(index, &requested, &lang, &countries);

        let engine = SubstitutionEngine::build(&descriptors, template.unwrap_or(DEFAULT_TEMPLATE))?;

        Ok(Self {
            lang,
            countries,
            engine,
            stats: Stats::new(),
        })
    }

    /// Redact one document and update the running statistics
    pub fn process(&mut self, text: &str) -> String {
        trace!(len = text.len(), "Processing document");
        self.engine.process(text, &mut self.stats)
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn countries(&self) -> &CountrySelection {
        &self.countries
    }

    /// Installed tasks, in execution order
    pub fn tasks(&self) -> Vec<AnonTask> {
        self.engine.substitutions().iter().map(|s| s.task()).collect()
    }

    pub fn task_descriptions(&self) -> Vec<(AnonTask, &'static str)> {
        self.engine
            .substitutions()
            .iter()
            .map(|s| (s.task(), s.description()))
            .collect()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

/// Every task id reachable for the locale, each once, in first-seen order
fn available_tasks(index: &TaskIndex, lang: &str, countries: &CountrySelection) -> Vec<AnonTask> {
    distinct(
        resolve_all(index, lang, countries)
            .into_iter()
            .map(|descriptor| descriptor.task()),
    )
}

fn distinct(tasks: impl IntoIterator<Item = AnonTask>) -> Vec<AnonTask> {
    let mut seen = Vec::new();
    for task in tasks {
        if !seen.contains(&task) {
            seen.push(task);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use anon_core::{AnonError, DetectorModule, Scope};

    fn global() -> Result<Vec<Descriptor>> {
        Ok(vec![
            Descriptor::pattern(AnonTask::GovId, r"ID-\d+", "global id")?,
            Descriptor::pattern(AnonTask::Age, r"\b\d+ years\b", "global age")?,
        ])
    }

    fn spain() -> Result<Vec<Descriptor>> {
        Ok(vec![Descriptor::pattern(AnonTask::GovId, r"ES-\d+", "spain id")?])
    }

    fn index() -> TaskIndex {
        TaskIndex::build(&[
            DetectorModule::new("any/ids", Scope::Global, global),
            DetectorModule::new("es/es/ids", Scope::country("es", "es"), spain),
        ])
        .unwrap()
    }

    #[test]
    fn test_locale_is_normalized() {
        let index = index();
        let countries = CountrySelection::List(vec!["ES".to_string(), " es".to_string()]);
        let anon = TextAnonymizer::with_index(&index, " ES", countries, AnonTask::GovId, None)
            .unwrap();

        assert_eq!(anon.lang(), "es");
        assert_eq!(
            anon.countries(),
            &CountrySelection::List(vec!["es".to_string()])
        );
        assert_eq!(anon.task_descriptions(), vec![(AnonTask::GovId, "spain id")]);
    }

    #[test]
    fn test_all_tasks_resolves_each_once() {
        let index = index();
        let anon = TextAnonymizer::with_index(
            &index,
            "es",
            CountrySelection::All,
            TaskSelection::All,
            None,
        )
        .unwrap();

        assert_eq!(anon.tasks(), vec![AnonTask::Age, AnonTask::GovId]);
        assert_eq!(
            anon.task_descriptions(),
            vec![(AnonTask::Age, "global age"), (AnonTask::GovId, "spain id")]
        );
    }

    #[test]
    fn test_repeated_task_installed_once() {
        let index = index();
        let mut anon = TextAnonymizer::with_index(
            &index,
            "es",
            CountrySelection::None,
            vec![AnonTask::Age, AnonTask::GovId, AnonTask::Age],
            None,
        )
        .unwrap();

        assert_eq!(anon.tasks(), vec![AnonTask::Age, AnonTask::GovId]);
        assert_eq!(anon.task_descriptions().len(), 2);
        assert_eq!(anon.process("40 years"), "<AGE>");
        assert_eq!(anon.stats().get("AGE"), Some(1));
    }

    #[test]
    fn test_process_and_stats() {
        let index = index();
        let mut anon = TextAnonymizer::with_index(
            &index,
            "en",
            CountrySelection::None,
            vec![AnonTask::Age, AnonTask::GovId],
            Some("[{id}]"),
        )
        .unwrap();

        assert_eq!(anon.process("ID-42 is 30 years old"), "[GOV_ID] is [AGE] old");
        assert_eq!(anon.process("ES-42"), "ES-42");
        assert_eq!(anon.stats().calls(), 2);
        assert_eq!(anon.stats().get("GOV_ID"), Some(1));
        assert_eq!(anon.stats().get("AGE"), Some(1));
    }

    #[test]
    fn test_bad_inputs() {
        let index = index();

        let err = TextAnonymizer::with_index(&index, "", CountrySelection::None, AnonTask::Age, None)
            .unwrap_err();
        assert!(matches!(err, AnonError::InvalidLocale(_)));

        let err = TextAnonymizer::with_index(
            &index,
            "es",
            CountrySelection::None,
            AnonTask::Age,
            Some("<ID>"),
        )
        .unwrap_err();
        assert!(matches!(err, AnonError::InvalidTemplate { .. }));
    }
}
