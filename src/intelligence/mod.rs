// ABOUTME: Plan intelligence: exercise and meal catalogs, plan policy, generators, and leaderboard
// ABOUTME: Pure synchronous engines that borrow read-only data and take an injected random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Intelligence Module
//!
//! Rule-based content selection for weekly workout and meal plans, plus the
//! points arithmetic behind the leaderboard.
//!
//! Catalogs and policies are immutable once built. Generators borrow them and
//! draw randomness from a caller-supplied [`rand::Rng`], so a seeded RNG gives
//! reproducible plans.

/// Exercise catalog grouped by goal and category
pub mod exercise_catalog;
/// Points awarding and leaderboard ranking
pub mod leaderboard;
/// Dishes grouped by goal and meal slot
pub mod meal_catalog;
/// Weekly meal plan generation
pub mod meal_planner;
/// Weekly workout plan generation
pub mod plan_generator;
/// Split and allocation tables
pub mod plan_policy;

pub use exercise_catalog::{ExerciseCatalog, ExerciseCatalogEntry, Prescriptions};
pub use leaderboard::{
    award_points, build_leaderboard, window_start, PointsPolicy, StreakSummary,
};
pub use meal_catalog::{MealCatalog, MealCatalogEntry};
pub use meal_planner::{scale_dish, CalorieTargets, MealPlanner};
pub use plan_generator::{
    generate_workout_plan, sample_distinct_indices, split_prescription, weight_for, PlanGenerator,
};
pub use plan_policy::{CategoryDraw, PlanPolicy, SplitBucket};
