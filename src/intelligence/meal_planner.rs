// ABOUTME: Rule-based weekly meal plan generator driven by goal calorie targets
// ABOUTME: Draws one dish per slot and scales it to the slot's share of the daily target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Meal plan generation
//!
//! The daily target is body weight times a goal multiplier, or a fixed
//! fallback when the weight is unusable. Each day serves breakfast, lunch,
//! dinner and a snack, each scaled to its share of that target. Like the
//! workout generator, this never fails.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::meal_catalog::{MealCatalog, MealCatalogEntry};
use crate::constants::calendar::weekday_name;
use crate::constants::nutrition::{FALLBACK_DAILY_CALORIES, MAX_DAILY_CALORIES};
use crate::models::{
    sanitize_body_weight, GeneratedMealDay, GeneratedMealPlan, Goal, MealPlanRequest, MealSlot,
    PlannedMeal,
};

/// Restriction keywords that limit the plan to vegetarian dishes
const VEGETARIAN_KEYWORDS: [&str; 3] = ["vegetarian", "vegan", "plant-based"];

/// Calories per unit of body weight for each goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTargets {
    /// Multiplier for weight loss
    pub weight_loss: f64,
    /// Multiplier for muscle gain
    pub muscle_gain: f64,
    /// Multiplier for endurance
    pub endurance: f64,
    /// Multiplier for general fitness
    pub general: f64,
    /// Daily target when body weight is missing or unusable
    pub fallback_daily_calories: u32,
}

impl Default for CalorieTargets {
    fn default() -> Self {
        Self {
            weight_loss: 12.0,
            muscle_gain: 18.0,
            endurance: 16.0,
            general: 15.0,
            fallback_daily_calories: FALLBACK_DAILY_CALORIES,
        }
    }
}

impl CalorieTargets {
    /// Multiplier for `goal`
    #[must_use]
    pub const fn multiplier(&self, goal: Goal) -> f64 {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::MuscleGain => self.muscle_gain,
            Goal::Endurance => self.endurance,
            Goal::General => self.general,
        }
    }

    /// Daily calorie target for an optional body weight
    ///
    /// Computed targets are capped at [`MAX_DAILY_CALORIES`].
    #[must_use]
    pub fn daily_calories(&self, weight: Option<f64>, goal: Goal) -> u32 {
        weight
            .and_then(sanitize_body_weight)
            .map(|weight| (weight * self.multiplier(goal)).round())
            .filter(|calories| calories.is_finite() && *calories >= 1.0)
            .map_or(self.fallback_daily_calories, |calories| {
                calories.min(f64::from(MAX_DAILY_CALORIES)) as u32
            })
    }
}

/// Weekly meal plan generator
#[derive(Debug, Clone)]
pub struct MealPlanner<'a> {
    catalog: &'a MealCatalog,
    targets: CalorieTargets,
}

impl MealPlanner<'static> {
    /// Planner over the built-in meal catalog with default targets
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(MealCatalog::builtin(), CalorieTargets::default())
    }
}

impl<'a> MealPlanner<'a> {
    /// Create a planner over an injected catalog
    #[must_use]
    pub const fn new(catalog: &'a MealCatalog, targets: CalorieTargets) -> Self {
        Self { catalog, targets }
    }

    /// Calorie targets in use
    #[must_use]
    pub const fn targets(&self) -> &CalorieTargets {
        &self.targets
    }

    /// Generate a weekly meal plan
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &MealPlanRequest,
        rng: &mut R,
    ) -> GeneratedMealPlan {
        let days = request.days();
        let daily_calories = self.targets.daily_calories(request.weight, request.goal);
        let vegetarian_only = request
            .restrictions_text()
            .is_some_and(requires_vegetarian);

        debug!(
            goal = %request.goal,
            days,
            daily_calories,
            vegetarian_only,
            "Generating meal plan"
        );

        let meal_days = (0..days)
            .map(|index| {
                let meals: Vec<PlannedMeal> = MealSlot::ALL
                    .iter()
                    .filter_map(|&slot| {
                        let dish = self.pick_dish(request.goal, slot, vegetarian_only, rng)?;
                        Some(scale_dish(dish, slot, daily_calories))
                    })
                    .collect();
                let total_calories = meals
                    .iter()
                    .fold(0_u32, |total, meal| total.saturating_add(meal.calories));
                GeneratedMealDay {
                    day: weekday_name(index).to_owned(),
                    meals,
                    total_calories,
                }
            })
            .collect();

        GeneratedMealPlan {
            summary: meal_summary(request, days, daily_calories),
            daily_calories,
            meal_days,
        }
    }

    fn pick_dish<R: Rng + ?Sized>(
        &self,
        goal: Goal,
        slot: MealSlot,
        vegetarian_only: bool,
        rng: &mut R,
    ) -> Option<&'a MealCatalogEntry> {
        let dishes = self.catalog.slot(goal, slot);
        if dishes.is_empty() {
            warn!(%goal, slot = slot.as_str(), "No dishes for meal slot");
            return None;
        }

        if vegetarian_only {
            let vegetarian: Vec<&MealCatalogEntry> =
                dishes.iter().filter(|dish| dish.vegetarian).collect();
            if let Some(dish) = vegetarian.choose(rng) {
                return Some(*dish);
            }
            warn!(%goal, slot = slot.as_str(), "No vegetarian dishes, using full slot");
        }

        dishes.choose(rng)
    }
}

/// Scale a dish to `slot`'s share of the daily target
///
/// Macros scale by the same factor as calories. Dishes with no reference
/// calories keep their macros unchanged.
#[must_use]
pub fn scale_dish(dish: &MealCatalogEntry, slot: MealSlot, daily_calories: u32) -> PlannedMeal {
    let calories = (f64::from(daily_calories) * slot.calorie_share()).round();
    let factor = if dish.calories == 0 {
        1.0
    } else {
        calories / f64::from(dish.calories)
    };
    let scale = |grams: u32| (f64::from(grams) * factor).round() as u32;

    PlannedMeal {
        meal: slot.label().to_owned(),
        name: dish.name.clone(),
        description: dish.description.clone(),
        calories: calories as u32,
        protein_grams: scale(dish.protein_grams),
        carbs_grams: scale(dish.carbs_grams),
        fat_grams: scale(dish.fat_grams),
    }
}

fn requires_vegetarian(restrictions: &str) -> bool {
    let lowered = restrictions.to_lowercase();
    VEGETARIAN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

fn meal_summary(request: &MealPlanRequest, days: usize, daily_calories: u32) -> String {
    let mut summary = format!(
        "A {days}-day {} meal plan targeting {daily_calories} calories per day.",
        request.goal.label()
    );
    if let Some(restrictions) = request.restrictions_text() {
        summary.push_str(&format!(" Meals respect: {restrictions}."));
    }
    summary
}
