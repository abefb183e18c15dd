// ABOUTME: Meal plan request and generated meal plan data structures
// ABOUTME: Defines meal slots with their share of the daily calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

use super::{clamp_days_per_week, parse_body_weight, parse_days_per_week, Goal};

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealSlot {
    /// Slots in serving order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }

    /// Fraction of the daily calorie target served in this slot
    #[must_use]
    pub const fn calorie_share(&self) -> f64 {
        match self {
            Self::Breakfast => 0.25,
            Self::Lunch => 0.35,
            Self::Dinner => 0.30,
            Self::Snack => 0.10,
        }
    }
}

/// Inputs for one meal plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// Body weight in user-supplied units; `None` when missing or unusable
    pub weight: Option<f64>,
    /// Training goal
    pub goal: Goal,
    /// Planned days, `1..=7`
    pub days_per_week: u8,
    /// Dietary restrictions or preferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<String>,
}

impl MealPlanRequest {
    /// Build a request from raw web-form strings, applying silent defaults
    #[must_use]
    pub fn from_raw(
        weight: &str,
        goal: &str,
        days_per_week: &str,
        restrictions: Option<&str>,
    ) -> Self {
        Self {
            weight: parse_body_weight(weight),
            goal: Goal::parse(goal),
            days_per_week: parse_days_per_week(days_per_week),
            restrictions: restrictions.map(str::to_owned),
        }
    }

    /// Day count clamped into `1..=7`
    #[must_use]
    pub fn days(&self) -> usize {
        usize::from(clamp_days_per_week(i64::from(self.days_per_week)))
    }

    /// Restrictions text when present and not blank
    #[must_use]
    pub fn restrictions_text(&self) -> Option<&str> {
        self.restrictions
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// One meal scaled to its slot's calorie share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannedMeal {
    /// Slot label ("Breakfast", "Lunch", ...)
    pub meal: String,
    /// Dish name
    pub name: String,
    /// Short description of the dish
    pub description: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein_grams: u32,
    /// Carbohydrates in grams
    pub carbs_grams: u32,
    /// Fat in grams
    pub fat_grams: u32,
}

/// One day of a meal plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedMealDay {
    /// Weekday name
    pub day: String,
    /// Meals in serving order
    pub meals: Vec<PlannedMeal>,
    /// Sum of meal calories
    pub total_calories: u32,
}

/// A complete weekly meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMealPlan {
    /// One-sentence description of the plan
    #[serde(default)]
    pub summary: String,
    /// Daily calorie target
    #[serde(default)]
    pub daily_calories: u32,
    /// Planned days in weekday order
    pub meal_days: Vec<GeneratedMealDay>,
}
