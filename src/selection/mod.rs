//! Selection state - the (current step, current skill) navigation pair

use crate::core::{Result, RoadmapError};
use crate::curriculum::model::{Step, StepId};
use crate::curriculum::CurriculumRegistry;
use tracing::debug;

/// Tracks which step and skill the user is looking at.
///
/// Invariant: the current skill is always a member of the current
/// step's skill list. Changing step resets the skill to the new step's
/// first entry, so a stale skill from the previous step can never leak
/// into a lookup.
#[derive(Debug, Clone, Copy)]
pub struct SelectionController {
    registry: CurriculumRegistry,
    step: &'static Step,
    skill: &'static str,
}

impl SelectionController {
    /// Start at the first configured step with its first skill selected.
    pub fn new(registry: CurriculumRegistry) -> Result<Self> {
        let step = registry.steps().first().ok_or(RoadmapError::InvalidStep(1))?;
        Ok(Self {
            registry,
            step,
            skill: step.skills[0],
        })
    }

    /// Start at a specific step, e.g. from the --step flag.
    pub fn starting_at(registry: CurriculumRegistry, step_id: StepId) -> Result<Self> {
        let mut controller = Self::new(registry)?;
        controller.select_step(step_id)?;
        Ok(controller)
    }

    /// Jump to a step by id. Resets the skill selection to the new
    /// step's first skill. Unknown ids leave the selection untouched.
    pub fn select_step(&mut self, step_id: StepId) -> Result<()> {
        let step = self
            .registry
            .step(step_id)
            .ok_or(RoadmapError::InvalidStep(step_id))?;
        self.step = step;
        self.skill = step.skills[0];
        debug!(step = step_id, skill = self.skill, "step selected");
        Ok(())
    }

    /// Select a skill within the current step. Names not listed by the
    /// current step are rejected and the selection is unchanged.
    pub fn select_skill(&mut self, skill: &str) -> Result<()> {
        match self.step.skills.iter().find(|s| **s == skill) {
            Some(found) => {
                self.skill = found;
                Ok(())
            }
            None => Err(RoadmapError::InvalidSkill(skill.to_string())),
        }
    }

    /// The current (step id, skill name) pair.
    pub fn current(&self) -> (StepId, &'static str) {
        (self.step.id, self.skill)
    }

    pub fn step(&self) -> &'static Step {
        self.step
    }

    pub fn skill(&self) -> &'static str {
        self.skill
    }

    pub fn registry(&self) -> &CurriculumRegistry {
        &self.registry
    }

    /// Index of the current skill within the step's skill list.
    pub fn skill_index(&self) -> usize {
        self.step
            .skills
            .iter()
            .position(|s| *s == self.skill)
            .unwrap_or(0)
    }

    /// Move to the next step, clamping at the last one.
    pub fn next_step(&mut self) {
        let steps = self.registry.steps();
        if let Some(pos) = steps.iter().position(|s| s.id == self.step.id) {
            if pos + 1 < steps.len() {
                self.step = &steps[pos + 1];
                self.skill = self.step.skills[0];
            }
        }
    }

    /// Move to the previous step, clamping at the first one.
    pub fn prev_step(&mut self) {
        let steps = self.registry.steps();
        if let Some(pos) = steps.iter().position(|s| s.id == self.step.id) {
            if pos > 0 {
                self.step = &steps[pos - 1];
                self.skill = self.step.skills[0];
            }
        }
    }

    /// Move to the next skill in the current step, clamping at the end.
    pub fn next_skill(&mut self) {
        let idx = self.skill_index();
        if idx + 1 < self.step.skills.len() {
            self.skill = self.step.skills[idx + 1];
        }
    }

    /// Move to the previous skill in the current step, clamping at the start.
    pub fn prev_skill(&mut self) {
        let idx = self.skill_index();
        if idx > 0 {
            self.skill = self.step.skills[idx - 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SelectionController {
        SelectionController::new(CurriculumRegistry::builtin()).unwrap()
    }

    #[test]
    fn test_starts_at_first_step_first_skill() {
        let c = controller();
        assert_eq!(c.current(), (1, "Python"));
    }

    #[test]
    fn test_select_step_resets_skill() {
        let mut c = controller();
        c.select_skill("Bash").unwrap();
        c.select_step(9).unwrap();
        assert_eq!(c.current(), (9, "Guardrails"));
    }

    #[test]
    fn test_unknown_step_is_rejected_and_selection_unchanged() {
        let mut c = controller();
        c.select_step(3).unwrap();
        c.select_skill("Fine-tuning").unwrap();

        let err = c.select_step(99).unwrap_err();
        assert!(matches!(err, RoadmapError::InvalidStep(99)));
        assert_eq!(c.current(), (3, "Fine-tuning"));
    }

    #[test]
    fn test_skill_must_belong_to_current_step() {
        let mut c = controller();
        // "Guardrails" is a step 9 skill, not a step 1 skill.
        let err = c.select_skill("Guardrails").unwrap_err();
        assert!(matches!(err, RoadmapError::InvalidSkill(_)));
        assert_eq!(c.current(), (1, "Python"));
    }

    #[test]
    fn test_skill_reset_holds_for_every_step() {
        let mut c = controller();
        let registry = CurriculumRegistry::builtin();
        for step in registry.steps() {
            c.select_step(step.id).unwrap();
            assert_eq!(c.current(), (step.id, step.skills[0]));
        }
    }

    #[test]
    fn test_step_movement_clamps_at_both_ends() {
        let mut c = controller();
        c.prev_step();
        assert_eq!(c.current().0, 1);

        c.select_step(10).unwrap();
        c.next_step();
        assert_eq!(c.current().0, 10);
    }

    #[test]
    fn test_skill_movement_clamps_and_stays_in_step() {
        let mut c = controller();
        c.prev_skill();
        assert_eq!(c.skill(), "Python");

        for _ in 0..100 {
            c.next_skill();
        }
        assert_eq!(c.skill(), "Streamlit / Gradio");
        assert_eq!(c.current().0, 1);
    }

    #[test]
    fn test_starting_at_unknown_step_is_an_error() {
        let err = SelectionController::starting_at(CurriculumRegistry::builtin(), 0).unwrap_err();
        assert!(matches!(err, RoadmapError::InvalidStep(0)));
    }
}
