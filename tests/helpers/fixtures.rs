// ABOUTME: Deterministic fixtures for plan generation, meal planning, and leaderboard tests
// ABOUTME: Small hand-built catalogs keep expected output easy to reason about
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::{DateTime, Duration, TimeZone, Utc};
use fitplan::constants::catalog_categories::{BACK, CHEST, CORE, LEGS, SHOULDERS};
use fitplan::intelligence::{ExerciseCatalog, ExerciseCatalogEntry, MealCatalog, MealCatalogEntry};
use fitplan::models::{Goal, MealSlot, ProgressKind, ProgressRecord};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Seeded random source for reproducible draws
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fixed reference instant: Monday 2025-03-03 09:00 UTC
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()
}

/// Muscle gain catalog with exactly one chest exercise loaded at 30% body weight
pub fn single_weighted_catalog() -> ExerciseCatalog {
    ExerciseCatalog::new().with_category(
        Goal::MuscleGain,
        CHEST,
        vec![ExerciseCatalogEntry::new("Bench Press", "3x10")
            .with_levels("4x8", "5x5")
            .weighted(0.3)
            .with_notes("Control the bar")],
    )
}

/// Muscle gain catalog covering every full-body category with a few entries each
pub fn small_full_body_catalog() -> ExerciseCatalog {
    ExerciseCatalog::new()
        .with_category(
            Goal::MuscleGain,
            CHEST,
            vec![
                ExerciseCatalogEntry::new("Bench Press", "3x10").weighted(0.5),
                ExerciseCatalogEntry::new("Push-ups", "3x12"),
            ],
        )
        .with_category(
            Goal::MuscleGain,
            BACK,
            vec![
                ExerciseCatalogEntry::new("Barbell Row", "3x10").weighted(0.4),
                ExerciseCatalogEntry::new("Pull-ups", "3x6"),
            ],
        )
        .with_category(
            Goal::MuscleGain,
            LEGS,
            vec![ExerciseCatalogEntry::new("Back Squat", "3x8").weighted(0.75)],
        )
        .with_category(
            Goal::MuscleGain,
            SHOULDERS,
            vec![ExerciseCatalogEntry::new("Overhead Press", "3x8").weighted(0.25)],
        )
        .with_category(
            Goal::MuscleGain,
            CORE,
            vec![ExerciseCatalogEntry::new("Plank", "30 seconds")],
        )
}

/// Catalog with one category of `count` uniquely named bodyweight entries
pub fn numbered_catalog(goal: Goal, category: &str, count: usize) -> ExerciseCatalog {
    let entries = (0..count)
        .map(|i| ExerciseCatalogEntry::new(format!("Exercise {i}"), "3x10"))
        .collect();
    ExerciseCatalog::new().with_category(goal, category, entries)
}

/// Dish with round reference numbers
pub fn dish(name: &str, calories: u32, vegetarian: bool) -> MealCatalogEntry {
    MealCatalogEntry {
        name: name.to_owned(),
        description: format!("{name} description"),
        calories,
        protein_grams: 40,
        carbs_grams: 50,
        fat_grams: 10,
        vegetarian,
    }
}

/// General-goal meal catalog with one 500 kcal dish per slot
pub fn one_dish_per_slot_catalog() -> MealCatalog {
    MealSlot::ALL
        .iter()
        .fold(MealCatalog::new(), |catalog, slot| {
            catalog.with_entry(
                Goal::General,
                *slot,
                dish(&format!("{} Dish", slot.label()), 500, true),
            )
        })
}

/// Progress record `days` after the reference time
pub fn record(
    user_id: Uuid,
    name: &str,
    days: i64,
    kind: ProgressKind,
    exercises_logged: u32,
) -> ProgressRecord {
    ProgressRecord {
        user_id,
        display_name: name.to_owned(),
        recorded_at: reference_time() + Duration::days(days),
        kind,
        exercises_logged,
    }
}

/// Completed workout with no logged exercises
pub fn workout(user_id: Uuid, name: &str, days: i64) -> ProgressRecord {
    record(user_id, name, days, ProgressKind::WorkoutCompleted, 0)
}

/// Followed meal plan day
pub fn meal_day(user_id: Uuid, name: &str, days: i64) -> ProgressRecord {
    record(user_id, name, days, ProgressKind::MealPlanFollowed, 0)
}
