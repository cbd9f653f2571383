//! Substitution engine: runs bound detectors over a document in priority order

use anon_core::{AnonError, Descriptor, Result, Substitution};
use tracing::debug;

use crate::stats::Stats;

/// Placeholder template used when none is given
pub const DEFAULT_TEMPLATE: &str = "<{id}>";

const ID_FIELD: &str = "{id}";

/// A template must carry exactly one `{id}` field
pub fn validate_template(template: &str) -> Result<()> {
    match template.matches(ID_FIELD).count() {
        1 => Ok(()),
        0 => Err(AnonError::InvalidTemplate {
            template: template.to_string(),
            reason: "missing {id} field".to_string(),
        }),
        _ => Err(AnonError::InvalidTemplate {
            template: template.to_string(),
            reason: "more than one {id} field".to_string(),
        }),
    }
}

pub fn render_placeholder(template: &str, descriptor: &Descriptor) -> String {
    template.replace(ID_FIELD, descriptor.task().name())
}

/// Ordered list of substitutions ready to run
#[derive(Debug)]
pub struct SubstitutionEngine<'a> {
    substitutions: Vec<Substitution<'a>>,
}

impl<'a> SubstitutionEngine<'a> {
    /// Bind every descriptor with its placeholder and sort by task priority
    ///
    /// Initializers of procedural detectors run here (once per descriptor,
    /// process-wide). Descriptors of equal priority keep their given order.
    pub fn build(descriptors: &[&'a Descriptor], template: &str) -> Result<Self> {
        validate_template(template)?;

        let mut substitutions = descriptors
            .iter()
            .map(|descriptor| descriptor.bind(render_placeholder(template, descriptor)))
            .collect::<Result<Vec<_>>>()?;
        substitutions.sort_by_key(|sub| sub.task());

        debug!(
            substitutions = substitutions.len(),
            template, "Substitution engine built"
        );

        Ok(Self { substitutions })
    }

    pub fn substitutions(&self) -> &[Substitution<'a>] {
        &self.substitutions
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Apply every substitution in turn, each on the previous one's output
    pub fn process(&self, text: &str, stats: &mut Stats) -> String {
        stats.record_call();

        let mut current = text.to_string();
        for sub in &self.substitutions {
            let (next, count) = sub.apply(&current);
            stats.record_hits(sub.task(), count);
            current = next;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anon_core::AnonTask;

    fn descriptors() -> Vec<Descriptor> {
        vec![
            Descriptor::pattern(AnonTask::Age, r"\d+ years", "age").unwrap(),
            Descriptor::pattern(AnonTask::CreditCard, r"\d{4}-\d{4}", "card").unwrap(),
        ]
    }

    #[test]
    fn test_validate_template() {
        assert!(validate_template("<{id}>").is_ok());
        assert!(validate_template("{id}").is_ok());
        assert!(matches!(
            validate_template("<ID>"),
            Err(AnonError::InvalidTemplate { .. })
        ));
        assert!(matches!(
            validate_template("{id}-{id}"),
            Err(AnonError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_render_placeholder() {
        let descriptors = descriptors();
        assert_eq!(render_placeholder("<{id}>", &descriptors[1]), "<CREDIT_CARD>");
        assert_eq!(render_placeholder("[[{id}]]", &descriptors[0]), "[[AGE]]");
    }

    #[test]
    fn test_sorted_by_priority() {
        let descriptors = descriptors();
        let refs: Vec<&Descriptor> = descriptors.iter().collect();
        let engine = SubstitutionEngine::build(&refs, DEFAULT_TEMPLATE).unwrap();

        let order: Vec<AnonTask> = engine.substitutions().iter().map(|s| s.task()).collect();
        assert_eq!(order, vec![AnonTask::CreditCard, AnonTask::Age]);
    }

    #[test]
    fn test_process_records_stats() {
        let descriptors = descriptors();
        let refs: Vec<&Descriptor> = descriptors.iter().collect();
        let engine = SubstitutionEngine::build(&refs, "#{id}#").unwrap();
        let mut stats = Stats::new();

        let out = engine.process("card 1234-5678, aged 40 years", &mut stats);
        assert_eq!(out, "card #CREDIT_CARD#, aged #AGE#");

        let out = engine.process("nothing", &mut stats);
        assert_eq!(out, "nothing");

        assert_eq!(stats.calls(), 2);
        assert_eq!(stats.hits(AnonTask::CreditCard), 1);
        assert_eq!(stats.hits(AnonTask::Age), 1);
    }

    #[test]
    fn test_empty_engine_is_identity() {
        let engine = SubstitutionEngine::build(&[], DEFAULT_TEMPLATE).unwrap();
        let mut stats = Stats::new();

        assert!(engine.is_empty());
        assert_eq!(engine.process("4273966645815642", &mut stats), "4273966645815642");
        assert_eq!(stats.calls(), 1);
    }
}
