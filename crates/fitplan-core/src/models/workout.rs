// ABOUTME: Workout plan request and generated weekly plan data structures
// ABOUTME: Serializes to the camelCase JSON shape consumed by storage and presentation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{
    clamp_days_per_week, parse_body_weight, parse_days_per_week, sanitize_body_weight,
    FitnessLevel, Goal,
};

/// Inputs for one workout plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Body weight in user-supplied units; `None` when missing or unusable
    pub weight: Option<f64>,
    /// Training goal
    pub goal: Goal,
    /// Skill level
    pub fitness_level: FitnessLevel,
    /// Training days, `1..=7`
    pub days_per_week: u8,
    /// Injuries or constraints mentioned by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limitations: Option<String>,
}

impl PlanRequest {
    /// Build a request from typed values
    ///
    /// Non-finite or non-positive weights are dropped and the day count is
    /// clamped into `1..=7`.
    #[must_use]
    pub fn new(weight: f64, goal: Goal, fitness_level: FitnessLevel, days_per_week: i64) -> Self {
        Self {
            weight: sanitize_body_weight(weight),
            goal,
            fitness_level,
            days_per_week: clamp_days_per_week(days_per_week),
            limitations: None,
        }
    }

    /// Build a request from raw web-form strings, applying silent defaults
    #[must_use]
    pub fn from_raw(
        weight: &str,
        goal: &str,
        fitness_level: &str,
        days_per_week: &str,
        limitations: Option<&str>,
    ) -> Self {
        Self {
            weight: parse_body_weight(weight),
            goal: Goal::parse(goal),
            fitness_level: FitnessLevel::parse(fitness_level),
            days_per_week: parse_days_per_week(days_per_week),
            limitations: limitations.map(str::to_owned),
        }
    }

    /// Attach limitations text
    #[must_use]
    pub fn with_limitations(mut self, limitations: impl Into<String>) -> Self {
        self.limitations = Some(limitations.into());
        self
    }

    /// Day count clamped into `1..=7`, whatever the field holds
    #[must_use]
    pub fn days(&self) -> usize {
        usize::from(clamp_days_per_week(i64::from(self.days_per_week)))
    }

    /// Limitations text when present and not blank
    #[must_use]
    pub fn limitations_text(&self) -> Option<&str> {
        self.limitations
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Accept a string, number, boolean or null where a text field is expected
///
/// AI-authored plans often send `"sets": 3` instead of `"sets": "3"`. Null
/// reads as an empty string.
fn deserialize_flexible_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}

/// One prescribed exercise within a day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExercisePrescription {
    /// Exercise name
    pub name: String,
    /// Number of sets
    #[serde(deserialize_with = "deserialize_flexible_text")]
    pub sets: String,
    /// Repetitions or duration per set
    #[serde(deserialize_with = "deserialize_flexible_text")]
    pub reps: String,
    /// "bodyweight", "moderate", or a computed load such as "45 lbs"
    #[serde(deserialize_with = "deserialize_flexible_text")]
    pub weight: String,
    /// Coaching notes
    pub notes: String,
}

/// One training day of a weekly plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedDay {
    /// Weekday name
    pub day: String,
    /// Human-readable training focus
    pub focus: String,
    /// Warmup routine
    pub warmup: String,
    /// Prescribed exercises in draw order
    pub exercises: Vec<ExercisePrescription>,
    /// Cooldown routine
    pub cooldown: String,
}

/// A complete weekly workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// One-sentence description of the plan
    #[serde(default)]
    pub summary: String,
    /// Training days in weekday order
    pub workout_days: Vec<GeneratedDay>,
}

impl GeneratedPlan {
    /// Focus labels in day order
    #[must_use]
    pub fn focus_sequence(&self) -> Vec<&str> {
        self.workout_days
            .iter()
            .map(|day| day.focus.as_str())
            .collect()
    }

    /// Exercise counts in day order
    #[must_use]
    pub fn exercise_counts(&self) -> Vec<usize> {
        self.workout_days
            .iter()
            .map(|day| day.exercises.len())
            .collect()
    }
}
