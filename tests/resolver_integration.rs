//! Content resolution integration tests
//!
//! Walks every (step, skill) pair in the built-in curriculum and checks
//! the precedence rules: dedicated override, then populated generic
//! record, then the coming-soon fallback.

use ai_roadmap::curriculum::CurriculumRegistry;
use ai_roadmap::resolver::{
    self, DedicatedUnit, Resolution, OVERRIDES, PLACEHOLDER_DESCRIPTION,
};

#[test]
fn test_step_four_override_beats_empty_generic_record() {
    let registry = CurriculumRegistry::builtin();

    // The generic mapping entry exists but has no learning points.
    let record = registry.skill_details(4, "Vector Databases").unwrap();
    assert!(record.learning_points.is_empty());

    let outcome = resolver::resolve(&registry, 4, "Vector Databases");
    assert_eq!(outcome, Resolution::Dedicated(DedicatedUnit::VectorDatabases));

    // The dedicated page has real content of its own.
    let unit_record = DedicatedUnit::VectorDatabases.content();
    assert_eq!(unit_record.title, "Vector Databases Explained");
    assert!(!unit_record.learning_points.is_empty());
}

#[test]
fn test_kv_caching_renders_generic_template_in_order() {
    let registry = CurriculumRegistry::builtin();
    let outcome = resolver::resolve(&registry, 2, "KV caching");

    let record = match outcome {
        Resolution::Generic(record) => record,
        other => panic!("expected generic outcome, got {:?}", other),
    };
    let titles: Vec<&str> = record.learning_points.iter().map(|p| p.title).collect();
    assert_eq!(
        titles,
        vec![
            "What is KV Caching?",
            "How It Works: An Example",
            "Why is it a Game-Changer?",
        ]
    );
}

#[test]
fn test_every_listed_skill_resolves_to_exactly_one_outcome() {
    let registry = CurriculumRegistry::builtin();
    let mut dedicated = 0;
    let mut generic = 0;
    let mut coming_soon = 0;

    for step in registry.steps() {
        for skill in step.skills {
            match resolver::resolve(&registry, step.id, skill) {
                Resolution::Dedicated(_) => dedicated += 1,
                Resolution::Generic(record) => {
                    assert!(!record.learning_points.is_empty());
                    generic += 1;
                }
                Resolution::ComingSoon { title, description } => {
                    assert!(!title.is_empty());
                    assert!(!description.is_empty());
                    coming_soon += 1;
                }
            }
        }
    }

    assert_eq!(dedicated, OVERRIDES.len());
    assert!(generic > 0);
    // Steps 5 and 6 carry only empty records, so fallbacks must exist.
    assert!(coming_soon > 0);
}

#[test]
fn test_fallback_title_prefers_record_title_over_skill_name() {
    let registry = CurriculumRegistry::builtin();

    // Record present with empty learning points: record title wins.
    match resolver::resolve(&registry, 6, "Memory") {
        Resolution::ComingSoon { title, .. } => assert_eq!(title, "Agent Memory"),
        other => panic!("expected coming-soon outcome, got {:?}", other),
    }

    // No record at all: the bare skill name and the generic placeholder.
    match resolver::resolve(&registry, 3, "Unheard-of skill") {
        Resolution::ComingSoon { title, description } => {
            assert_eq!(title, "Unheard-of skill");
            assert_eq!(description, PLACEHOLDER_DESCRIPTION);
        }
        other => panic!("expected coming-soon outcome, got {:?}", other),
    }
}

#[test]
fn test_override_names_do_not_leak_across_steps() {
    let registry = CurriculumRegistry::builtin();

    // "Guardrails" only exists as a step 9 skill; under any other step
    // the same name must not hit the step 9 override.
    for step in registry.steps() {
        if step.id == 9 {
            continue;
        }
        let outcome = resolver::resolve(&registry, step.id, "Guardrails");
        assert!(
            !matches!(outcome, Resolution::Dedicated(_)),
            "step {} wrongly matched the Guardrails override",
            step.id
        );
    }
}

#[test]
fn test_git_unit_is_the_only_tool_host() {
    let registry = CurriculumRegistry::builtin();
    let mut hosts = Vec::new();

    for step in registry.steps() {
        for skill in step.skills {
            if let Resolution::Dedicated(unit) = resolver::resolve(&registry, step.id, skill) {
                if unit.interactive_tool().is_some() {
                    hosts.push((step.id, *skill));
                }
            }
        }
    }

    assert_eq!(hosts, vec![(1, "Git & version control")]);
}
