//! Data model for roadmap content

/// Identifier of a roadmap step. Positive, unique, and defines the display
/// order (1..N).
pub type StepId = u32;

/// One stage of the roadmap
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    /// Skill names in display order. Unique within the step; the first
    /// entry is the default selection when the step is entered.
    pub skills: &'static [&'static str],
}

/// Displayable detail payload for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRecord {
    pub title: &'static str,
    pub description: &'static str,
    /// May be empty: "no detailed content authored yet" is a valid state,
    /// distinct from the record being absent altogether.
    pub learning_points: &'static [LearningPoint],
}

/// One titled sub-topic within a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningPoint {
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [CodeExample],
}

/// A code snippet attached to a learning point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeExample {
    pub description: &'static str,
    pub code: &'static str,
}

/// Header copy for an interactive tool embedded in a dedicated unit
#[derive(Debug, Clone, Copy)]
pub struct InteractiveTool {
    pub title: &'static str,
    pub description: &'static str,
}
