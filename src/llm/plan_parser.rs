// ABOUTME: Parses AI service responses into workout and meal plans
// ABOUTME: Extracts JSON from free-form text, deserializes it, and normalizes missing fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::constants::calendar::weekday_name;
use crate::constants::planning::{MAX_DAYS_PER_WEEK, SINGLE_SET};
use crate::errors::{AppError, AppResult};
use crate::models::{GeneratedMealPlan, GeneratedPlan};

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Extract the JSON object from an AI response that might contain extra text
///
/// Tries, in order: the whole response, the span from the first `{` to the
/// last `}`, and the contents of a ```` ```json ```` fenced block.
///
/// # Errors
///
/// Returns `InvalidFormat` when no candidate parses as JSON
pub fn extract_json(response: &str) -> AppResult<&str> {
    let trimmed = response.trim();
    if is_json(trimmed) {
        return Ok(trimmed);
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            let candidate = &trimmed[start..=end];
            if is_json(candidate) {
                return Ok(candidate);
            }
        }
    }

    if let Some(start) = trimmed.find(JSON_FENCE) {
        let body = &trimmed[start + JSON_FENCE.len()..];
        let block = body.find(FENCE).map_or(body, |end| &body[..end]).trim();
        if is_json(block) {
            return Ok(block);
        }
    }

    Err(AppError::invalid_format(
        "Could not extract valid JSON from AI response",
    ))
}

/// Parse an AI workout plan response
///
/// Blank day names are re-stamped by position, blank sets become a single
/// set, and days beyond a full week are dropped.
///
/// # Errors
///
/// Returns `InvalidFormat` when the response holds no JSON or no workout
/// days, and `SerializationError` when the JSON does not match the plan shape
pub fn parse_workout_plan(response: &str) -> AppResult<GeneratedPlan> {
    let mut plan: GeneratedPlan = deserialize(response, "workout plan")?;

    if plan.workout_days.is_empty() {
        return Err(AppError::invalid_format(
            "AI workout plan contained no workout days",
        ));
    }
    truncate_to_week(&mut plan.workout_days, "workout");

    for (index, day) in plan.workout_days.iter_mut().enumerate() {
        if day.day.trim().is_empty() {
            weekday_name(index).clone_into(&mut day.day);
        }
        for exercise in &mut day.exercises {
            if exercise.sets.trim().is_empty() {
                SINGLE_SET.clone_into(&mut exercise.sets);
            }
        }
    }

    debug!(days = plan.workout_days.len(), "Parsed AI workout plan");
    Ok(plan)
}

/// Parse an AI meal plan response
///
/// Blank day names are re-stamped by position, zero day totals are
/// recomputed from the meals, and a zero daily target becomes the mean of
/// the day totals.
///
/// # Errors
///
/// Returns `InvalidFormat` when the response holds no JSON or no meal days,
/// and `SerializationError` when the JSON does not match the plan shape
pub fn parse_meal_plan(response: &str) -> AppResult<GeneratedMealPlan> {
    let mut plan: GeneratedMealPlan = deserialize(response, "meal plan")?;

    if plan.meal_days.is_empty() {
        return Err(AppError::invalid_format("AI meal plan contained no meal days"));
    }
    truncate_to_week(&mut plan.meal_days, "meal");

    for (index, day) in plan.meal_days.iter_mut().enumerate() {
        if day.day.trim().is_empty() {
            weekday_name(index).clone_into(&mut day.day);
        }
        if day.total_calories == 0 {
            day.total_calories = day
                .meals
                .iter()
                .fold(0_u32, |total, meal| total.saturating_add(meal.calories));
        }
    }

    if plan.daily_calories == 0 {
        let sum: u64 = plan
            .meal_days
            .iter()
            .map(|day| u64::from(day.total_calories))
            .sum();
        let mean = sum / plan.meal_days.len() as u64;
        plan.daily_calories = u32::try_from(mean).unwrap_or(u32::MAX);
    }

    debug!(days = plan.meal_days.len(), "Parsed AI meal plan");
    Ok(plan)
}

fn deserialize<T: DeserializeOwned>(response: &str, what: &str) -> AppResult<T> {
    let json = extract_json(response)?;
    serde_json::from_str(json).map_err(|e| {
        warn!("Failed to parse AI {what} response: {e}");
        AppError::serialization(format!("Failed to parse AI {what}: {e}")).with_source(e)
    })
}

fn truncate_to_week<T>(days: &mut Vec<T>, what: &str) {
    let max = usize::from(MAX_DAYS_PER_WEEK);
    if days.len() > max {
        warn!(received = days.len(), max, "AI {what} plan has more days than a week, truncating");
        days.truncate(max);
    }
}

fn is_json(candidate: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(candidate).is_ok_and(|value| value.is_object())
}
