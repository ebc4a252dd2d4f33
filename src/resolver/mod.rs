//! Content resolution - maps a (step, skill) selection to a render outcome
//!
//! Resolution is a pure lookup over the registry and the static override
//! table. Precedence, in order: dedicated-unit override, populated
//! generic record, coming-soon placeholder.

mod overrides;

pub use overrides::{lookup as override_lookup, DedicatedUnit, OVERRIDES};

use crate::curriculum::model::{ContentRecord, StepId};
use crate::curriculum::CurriculumRegistry;

/// Placeholder description shown when no record exists for a skill.
pub const PLACEHOLDER_DESCRIPTION: &str = "Select a skill to see the details.";

/// Notice rendered inside the coming-soon info box.
pub const COMING_SOON_NOTICE: &str = "Content for this section is coming soon!";

/// The three possible render outcomes for a skill selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A dedicated, self-contained page replaces the generic template.
    Dedicated(DedicatedUnit),
    /// The generic template, fed with a populated content record.
    Generic(&'static ContentRecord),
    /// No usable detail content; render the coming-soon placeholder.
    ComingSoon { title: String, description: String },
}

/// Resolve a (step, skill) pair to its render outcome.
///
/// A skill listed by a step but absent from the detail mapping is the
/// normal "not yet authored" state and resolves to `ComingSoon`, never
/// an error. The function is pure; resolving the same pair twice gives
/// the same outcome.
pub fn resolve(registry: &CurriculumRegistry, step_id: StepId, skill: &str) -> Resolution {
    if let Some(unit) = overrides::lookup(step_id, skill) {
        return Resolution::Dedicated(unit);
    }
    match registry.skill_details(step_id, skill) {
        Some(record) if !record.learning_points.is_empty() => Resolution::Generic(record),
        Some(record) => Resolution::ComingSoon {
            title: record.title.to_string(),
            description: record.description.to_string(),
        },
        None => Resolution::ComingSoon {
            title: skill.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CurriculumRegistry {
        CurriculumRegistry::builtin()
    }

    #[test]
    fn test_override_wins_for_step_nine_guardrails() {
        let outcome = resolve(&registry(), 9, "Guardrails");
        assert_eq!(outcome, Resolution::Dedicated(DedicatedUnit::Guardrails));
    }

    #[test]
    fn test_override_wins_over_empty_generic_record() {
        // Step 4 has a generic mapping entry for Vector Databases with
        // zero learning points; the override still takes precedence.
        let reg = registry();
        let record = reg.skill_details(4, "Vector Databases");
        assert!(record.is_some());
        assert!(record.map(|r| r.learning_points.is_empty()).unwrap_or(false));

        let outcome = resolve(&reg, 4, "Vector Databases");
        assert_eq!(outcome, Resolution::Dedicated(DedicatedUnit::VectorDatabases));
    }

    #[test]
    fn test_populated_record_renders_generic_template() {
        let outcome = resolve(&registry(), 2, "KV caching");
        match outcome {
            Resolution::Generic(record) => {
                assert_eq!(record.learning_points.len(), 3);
                assert_eq!(record.learning_points[0].title, "What is KV Caching?");
                assert_eq!(record.learning_points[1].title, "How It Works: An Example");
                assert_eq!(record.learning_points[2].title, "Why is it a Game-Changer?");
            }
            other => panic!("expected generic outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_record_falls_back_with_record_title() {
        // Step 5 records all have empty learning points and no override.
        let outcome = resolve(&registry(), 5, "Reranking");
        match outcome {
            Resolution::ComingSoon { title, description } => {
                assert_eq!(title, "Advanced Reranking");
                assert!(!description.is_empty());
            }
            other => panic!("expected coming-soon outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_record_falls_back_with_skill_name() {
        let outcome = resolve(&registry(), 2, "Not a skill");
        assert_eq!(
            outcome,
            Resolution::ComingSoon {
                title: "Not a skill".to_string(),
                description: PLACEHOLDER_DESCRIPTION.to_string(),
            }
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let reg = registry();
        for step in reg.steps() {
            for skill in step.skills {
                let first = resolve(&reg, step.id, skill);
                let second = resolve(&reg, step.id, skill);
                assert_eq!(first, second, "({}, '{}') resolved differently", step.id, skill);
            }
        }
    }

    #[test]
    fn test_every_registered_override_resolves_dedicated() {
        let reg = registry();
        for (step_id, skill, unit) in OVERRIDES {
            let outcome = resolve(&reg, *step_id, skill);
            assert_eq!(outcome, Resolution::Dedicated(*unit));
        }
    }
}
