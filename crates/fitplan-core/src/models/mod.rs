// ABOUTME: Core data models shared by the workout generator, meal planner, and leaderboard
// ABOUTME: Defines goals, fitness levels, and the lenient parsing of web-form inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::planning::{DEFAULT_DAYS_PER_WEEK, MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK};

/// Workout plan request and generated plan structures
pub mod workout;

/// Meal plan request and generated meal plan structures
pub mod meal;

/// Progress records and leaderboard rows
pub mod progress;

pub use meal::{GeneratedMealDay, GeneratedMealPlan, MealPlanRequest, MealSlot, PlannedMeal};
pub use progress::{LeaderboardEntry, ProgressKind, ProgressRecord};
pub use workout::{ExercisePrescription, GeneratedDay, GeneratedPlan, PlanRequest};

/// Top-level training goal
///
/// Selects both the split table and the exercise catalog partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    /// Caloric burn and conditioning
    WeightLoss,
    /// Hypertrophy-oriented strength work
    MuscleGain,
    /// Aerobic capacity and stamina
    Endurance,
    /// Balanced general fitness
    #[default]
    General,
}

impl Goal {
    /// Every goal, in table order
    pub const ALL: [Self; 4] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Endurance,
        Self::General,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weightLoss",
            Self::MuscleGain => "muscleGain",
            Self::Endurance => "endurance",
            Self::General => "general",
        }
    }

    /// Phrase used in plan summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Endurance => "endurance",
            Self::General => "general fitness",
        }
    }

    /// Parse from the web form representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match normalize_token(s).as_str() {
            "weightloss" => Self::WeightLoss,
            "musclegain" => Self::MuscleGain,
            "endurance" => Self::Endurance,
            // Default to General for unrecognized values
            _ => Self::General,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill level used to pick a prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced lifter or athlete
    Advanced,
}

impl FitnessLevel {
    /// Every level, easiest first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from the web form representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match normalize_token(s).as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            // Default to Beginner for unrecognized values
            _ => Self::Beginner,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase and drop separators so `weight_loss`, `Weight-Loss` and `weightLoss` agree
fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Longest leading numeric prefix of `raw`, the way browsers coerce form fields
fn numeric_prefix(raw: &str) -> &str {
    let trimmed = raw.trim();
    let mut seen_dot = false;
    let end = trimmed
        .char_indices()
        .take_while(|&(i, c)| match c {
            '0'..='9' => true,
            '+' | '-' => i == 0,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            _ => false,
        })
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &trimmed[..end]
}

/// Parse a body weight field
///
/// Returns `None` for empty, unparseable, non-finite, or non-positive input.
#[must_use]
pub fn parse_body_weight(raw: &str) -> Option<f64> {
    numeric_prefix(raw)
        .parse::<f64>()
        .ok()
        .and_then(sanitize_body_weight)
}

/// Keep only finite, positive body weights
#[must_use]
pub fn sanitize_body_weight(weight: f64) -> Option<f64> {
    (weight.is_finite() && weight > 0.0).then_some(weight)
}

/// Parse a days-per-week field, clamping into `1..=7`
///
/// Unparseable input falls back to [`DEFAULT_DAYS_PER_WEEK`].
#[must_use]
pub fn parse_days_per_week(raw: &str) -> u8 {
    let prefix = numeric_prefix(raw);
    let integral = prefix.split('.').next().unwrap_or_default();
    integral
        .parse::<i64>()
        .map_or(DEFAULT_DAYS_PER_WEEK, clamp_days_per_week)
}

/// Clamp any integer day count into `1..=7`
#[must_use]
pub fn clamp_days_per_week(days: i64) -> u8 {
    days.clamp(i64::from(MIN_DAYS_PER_WEEK), i64::from(MAX_DAYS_PER_WEEK)) as u8
}
