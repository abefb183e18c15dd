// ABOUTME: Tests for the exercise catalog lookups and the coverage of the built-in data
// ABOUTME: Ensures every policy draw can be satisfied from the built-in catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use fitplan::intelligence::{ExerciseCatalog, ExerciseCatalogEntry, PlanPolicy};
use fitplan::models::{FitnessLevel, Goal};

#[test]
fn test_builtin_catalog_covers_every_allocation() {
    let catalog = ExerciseCatalog::builtin();
    let policy = PlanPolicy::builtin();

    for (goal, table) in &policy.allocations {
        for (day_category, draws) in table {
            for draw in draws {
                let available = catalog.category(*goal, &draw.category).len();
                assert!(
                    available >= draw.count,
                    "{goal}/{day_category} draws {} from {} but only {available} exist",
                    draw.count,
                    draw.category
                );
            }
        }
    }
}

#[test]
fn test_builtin_catalog_shape() {
    let catalog = ExerciseCatalog::builtin();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), 92);

    assert_eq!(
        catalog.categories(Goal::MuscleGain),
        vec!["arms", "back", "chest", "core", "legs", "shoulders"]
    );
    assert_eq!(
        catalog.categories(Goal::Endurance),
        vec!["cardio", "circuit", "core", "running"]
    );
}

#[test]
fn test_builtin_names_are_unique_within_a_category() {
    let catalog = ExerciseCatalog::builtin();
    for goal in Goal::ALL {
        for category in catalog.categories(goal) {
            let entries = catalog.category(goal, category);
            let names: HashSet<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
            assert_eq!(names.len(), entries.len(), "duplicate names in {goal}/{category}");
        }
    }
}

#[test]
fn test_weighted_entries_carry_a_percentage() {
    let catalog = ExerciseCatalog::builtin();
    for goal in Goal::ALL {
        for category in catalog.categories(goal) {
            for entry in catalog.category(goal, category) {
                if entry.uses_weight {
                    let percentage = entry.weight_percentage.unwrap();
                    assert!(percentage > 0.0 && percentage < 2.0, "{}", entry.name);
                } else {
                    assert!(entry.weight_percentage.is_none(), "{}", entry.name);
                }
            }
        }
    }
}

#[test]
fn test_unknown_lookups_are_empty() {
    let catalog = ExerciseCatalog::builtin();
    assert!(catalog.category(Goal::Endurance, "chest").is_empty());
    assert!(catalog.category(Goal::General, "").is_empty());
    assert!(ExerciseCatalog::new().categories(Goal::General).is_empty());
}

#[test]
fn test_prescription_falls_back_to_beginner() {
    let entry = ExerciseCatalogEntry::new("Plank", "30 seconds");
    for level in FitnessLevel::ALL {
        assert_eq!(entry.prescriptions.for_level(level), "30 seconds");
    }

    let leveled = entry.with_levels("45 seconds", "60 seconds");
    assert_eq!(leveled.prescriptions.for_level(FitnessLevel::Beginner), "30 seconds");
    assert_eq!(leveled.prescriptions.for_level(FitnessLevel::Intermediate), "45 seconds");
    assert_eq!(leveled.prescriptions.for_level(FitnessLevel::Advanced), "60 seconds");
}

#[test]
fn test_insert_and_builder_accumulate() {
    let mut catalog = ExerciseCatalog::new();
    assert!(catalog.is_empty());

    catalog.insert(Goal::General, "core", ExerciseCatalogEntry::new("Plank", "30 seconds"));
    catalog.insert(Goal::General, "core", ExerciseCatalogEntry::new("Dead Bug", "3x10"));
    let catalog = catalog.with_category(
        Goal::Endurance,
        "running",
        vec![ExerciseCatalogEntry::new("Easy Run", "20 minutes")],
    );

    assert_eq!(catalog.len(), 3);
    let names: Vec<&str> = catalog
        .category(Goal::General, "core")
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Plank", "Dead Bug"]);
    assert_eq!(catalog.categories(Goal::Endurance), vec!["running"]);
}

#[test]
fn test_weighted_builder_sets_flags() {
    let entry = ExerciseCatalogEntry::new("Back Squat", "3x8")
        .weighted(0.75)
        .with_notes("Brace before each rep");
    assert!(entry.uses_weight);
    assert_eq!(entry.weight_percentage, Some(0.75));
    assert_eq!(entry.notes.as_deref(), Some("Brace before each rep"));
}
