//! Static override table mapping (step, skill) pairs to dedicated units

use crate::curriculum::data::{self, units};
use crate::curriculum::model::{ContentRecord, InteractiveTool, StepId};

/// The dedicated presentation units. Each one bypasses the generic
/// skill template and renders its own full detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedicatedUnit {
    PythonForAiMl,
    GitAndVersionControl,
    UiFrameworkBasics,
    DsAlgo,
    VectorDatabases,
    GraphDatabases,
    HybridRetrieval,
    RerankingPipelines,
    IndexingStrategies,
    ChunkingAndEmbedding,
    AgentInstrumentation,
    Guardrails,
    Sandboxing,
    PromptInjectionDefenses,
    ComputerUse,
    RoboticAgents,
}

impl DedicatedUnit {
    /// The full content record behind this unit's page.
    pub fn content(&self) -> &'static ContentRecord {
        match self {
            DedicatedUnit::PythonForAiMl => &units::PYTHON_FOR_AI_ML,
            DedicatedUnit::GitAndVersionControl => &units::GIT_AND_VERSION_CONTROL,
            DedicatedUnit::UiFrameworkBasics => &units::UI_FRAMEWORK_BASICS,
            DedicatedUnit::DsAlgo => &units::DS_ALGO,
            DedicatedUnit::VectorDatabases => &units::VECTOR_DATABASES,
            DedicatedUnit::GraphDatabases => &units::GRAPH_DATABASES,
            DedicatedUnit::HybridRetrieval => &units::HYBRID_RETRIEVAL,
            DedicatedUnit::RerankingPipelines => &units::RERANKING_PIPELINES,
            DedicatedUnit::IndexingStrategies => &units::INDEXING_STRATEGIES,
            DedicatedUnit::ChunkingAndEmbedding => &units::CHUNKING_AND_EMBEDDING,
            DedicatedUnit::AgentInstrumentation => &data::AGENT_INSTRUMENTATION,
            DedicatedUnit::Guardrails => &data::GUARDRAILS,
            DedicatedUnit::Sandboxing => &data::SANDBOXING,
            DedicatedUnit::PromptInjectionDefenses => &data::PROMPT_INJECTION_DEFENSES,
            DedicatedUnit::ComputerUse => &data::COMPUTER_USE,
            DedicatedUnit::RoboticAgents => &data::ROBOTIC_AGENTS,
        }
    }

    /// The interactive tool hosted on this unit's page, if any. Only the
    /// Git unit carries one (the commit-message generator).
    pub fn interactive_tool(&self) -> Option<&'static InteractiveTool> {
        match self {
            DedicatedUnit::GitAndVersionControl => Some(&units::GIT_COMMIT_TOOL),
            _ => None,
        }
    }
}

/// Override entries, keyed by the (step, skill) combination. A skill
/// name only matches under its registered step.
pub static OVERRIDES: &[(StepId, &str, DedicatedUnit)] = &[
    (1, "Python", DedicatedUnit::PythonForAiMl),
    (1, "UI Framework Basics (React)", DedicatedUnit::UiFrameworkBasics),
    (1, "Basic DS & Algos", DedicatedUnit::DsAlgo),
    (1, "Git & version control", DedicatedUnit::GitAndVersionControl),
    (4, "Vector Databases", DedicatedUnit::VectorDatabases),
    (4, "Graph Databases", DedicatedUnit::GraphDatabases),
    (4, "Hybrid retrieval", DedicatedUnit::HybridRetrieval),
    (4, "Reranking pipelines", DedicatedUnit::RerankingPipelines),
    (4, "Indexing strategies (HNSW, IVF)", DedicatedUnit::IndexingStrategies),
    (4, "Chunking and embedding", DedicatedUnit::ChunkingAndEmbedding),
    (8, "AI Agent instrumentation", DedicatedUnit::AgentInstrumentation),
    (9, "Guardrails", DedicatedUnit::Guardrails),
    (9, "Sandboxing", DedicatedUnit::Sandboxing),
    (9, "Prompt injection defenses", DedicatedUnit::PromptInjectionDefenses),
    (10, "Computer use", DedicatedUnit::ComputerUse),
    (10, "Robotic Agents", DedicatedUnit::RoboticAgents),
];

/// Look up the override for a (step, skill) pair, if one is registered.
pub fn lookup(step_id: StepId, skill: &str) -> Option<DedicatedUnit> {
    OVERRIDES
        .iter()
        .find(|(id, name, _)| *id == step_id && *name == skill)
        .map(|(_, _, unit)| *unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::CurriculumRegistry;

    #[test]
    fn test_lookup_is_keyed_by_step_and_skill() {
        assert_eq!(lookup(9, "Guardrails"), Some(DedicatedUnit::Guardrails));
        // Same skill name under another step must not match.
        assert_eq!(lookup(2, "Guardrails"), None);
        assert_eq!(lookup(9, "Ethical guidelines"), None);
    }

    #[test]
    fn test_every_entry_refers_to_a_listed_skill() {
        let registry = CurriculumRegistry::builtin();
        for (step_id, skill, _) in OVERRIDES {
            let step = registry.step(*step_id).expect("override for unknown step");
            assert!(
                step.skills.contains(skill),
                "override ({}, '{}') not in the step's skill list",
                step_id,
                skill
            );
        }
    }

    #[test]
    fn test_no_duplicate_entries() {
        for (i, (step_id, skill, _)) in OVERRIDES.iter().enumerate() {
            for (other_id, other_skill, _) in &OVERRIDES[i + 1..] {
                assert!(
                    !(step_id == other_id && skill == other_skill),
                    "duplicate override for ({}, '{}')",
                    step_id,
                    skill
                );
            }
        }
    }

    #[test]
    fn test_only_git_unit_carries_a_tool() {
        for (_, _, unit) in OVERRIDES {
            let has_tool = unit.interactive_tool().is_some();
            assert_eq!(has_tool, *unit == DedicatedUnit::GitAndVersionControl);
        }
    }

    #[test]
    fn test_unit_content_is_nonempty() {
        for (_, _, unit) in OVERRIDES {
            let record = unit.content();
            assert!(!record.title.is_empty());
            assert!(!record.description.is_empty());
        }
    }
}
