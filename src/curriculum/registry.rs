//! Read-only access to the configured roadmap

use crate::curriculum::data;
use crate::curriculum::model::{ContentRecord, Step, StepId};

/// Immutable registry of steps and per-skill content records.
///
/// Constructed once at startup and passed to whatever needs it; the
/// resolver stays a pure function over it.
#[derive(Debug, Clone, Copy)]
pub struct CurriculumRegistry {
    steps: &'static [Step],
    details: &'static [(StepId, &'static [(&'static str, ContentRecord)])],
}

impl CurriculumRegistry {
    /// The built-in roadmap content
    pub fn builtin() -> Self {
        Self {
            steps: data::STEPS,
            details: data::DETAILS,
        }
    }

    /// All configured steps, id-ordered. Never fails.
    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    /// Look up a step by id
    pub fn step(&self, id: StepId) -> Option<&'static Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Look up the authored content record for a skill within a step.
    ///
    /// `None` is the normal "content not yet authored" state, not an
    /// error; many skills have no record.
    pub fn skill_details(&self, id: StepId, skill: &str) -> Option<&'static ContentRecord> {
        let (_, records) = self.details.iter().find(|(step_id, _)| *step_id == id)?;
        records
            .iter()
            .find(|(name, _)| *name == skill)
            .map(|(_, record)| record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_id_ordered_from_one() {
        let registry = CurriculumRegistry::builtin();
        let steps = registry.steps();
        assert!(!steps.is_empty());
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.id, i as StepId + 1);
        }
    }

    #[test]
    fn test_every_step_has_skills() {
        let registry = CurriculumRegistry::builtin();
        for step in registry.steps() {
            assert!(!step.skills.is_empty(), "step {} has no skills", step.id);
        }
    }

    #[test]
    fn test_skills_unique_within_step() {
        let registry = CurriculumRegistry::builtin();
        for step in registry.steps() {
            for (i, skill) in step.skills.iter().enumerate() {
                assert!(
                    !step.skills[i + 1..].contains(skill),
                    "step {} repeats skill '{}'",
                    step.id,
                    skill
                );
            }
        }
    }

    #[test]
    fn test_unknown_step_is_none() {
        let registry = CurriculumRegistry::builtin();
        assert!(registry.step(99).is_none());
        assert!(registry.step(0).is_none());
    }

    #[test]
    fn test_detail_entries_refer_to_listed_skills() {
        let registry = CurriculumRegistry::builtin();
        for (step_id, records) in data::DETAILS {
            let step = registry.step(*step_id).expect("detail table for unknown step");
            for (skill, _) in *records {
                assert!(
                    step.skills.contains(skill),
                    "step {} detail entry '{}' is not in the skill list",
                    step_id,
                    skill
                );
            }
        }
    }

    #[test]
    fn test_records_compare_by_value() {
        let registry = CurriculumRegistry::builtin();
        let a = registry.skill_details(2, "KV caching");
        let b = registry.skill_details(2, "KV caching");
        assert!(a.is_some());
        assert_eq!(a, b);
        assert_ne!(a, registry.skill_details(2, "System prompts"));
    }

    #[test]
    fn test_unauthored_skill_is_absent_not_error() {
        let registry = CurriculumRegistry::builtin();
        // Step 1 lists "Bash" and it has a record; step 2's "KV caching"
        // does too; an arbitrary wrong name is simply absent.
        assert!(registry.skill_details(2, "No such skill").is_none());
    }
}
