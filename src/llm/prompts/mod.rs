// ABOUTME: Prompt templates for AI-generated workout and meal plans loaded at compile time
// ABOUTME: Fills request values into markdown templates paired with the planner system prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Plan Prompts
//!
//! Templates live next to this file as markdown and are embedded at compile
//! time. Placeholders use `{{name}}` syntax.

use super::ChatMessage;
use crate::intelligence::CalorieTargets;
use crate::models::{MealPlanRequest, PlanRequest};

/// System prompt shared by workout and meal plan requests
pub const PLANNER_SYSTEM_PROMPT: &str = include_str!("planner_system.md");

/// Workout plan user prompt template
pub const WORKOUT_PLAN_TEMPLATE: &str = include_str!("workout_plan.md");

/// Meal plan user prompt template
pub const MEAL_PLAN_TEMPLATE: &str = include_str!("meal_plan.md");

const NOT_PROVIDED: &str = "not provided";
const NONE_STATED: &str = "none";

/// User prompt for a workout plan request
#[must_use]
pub fn workout_prompt(request: &PlanRequest) -> String {
    WORKOUT_PLAN_TEMPLATE
        .replace("{{days}}", &request.days().to_string())
        .replace("{{goal}}", request.goal.label())
        .replace("{{level}}", request.fitness_level.as_str())
        .replace("{{weight}}", &weight_text(request.weight))
        .replace(
            "{{limitations}}",
            request.limitations_text().unwrap_or(NONE_STATED),
        )
}

/// User prompt for a meal plan request, targeting the default calorie table
#[must_use]
pub fn meal_prompt(request: &MealPlanRequest) -> String {
    meal_prompt_with_targets(request, &CalorieTargets::default())
}

/// User prompt for a meal plan request with explicit calorie targets
#[must_use]
pub fn meal_prompt_with_targets(request: &MealPlanRequest, targets: &CalorieTargets) -> String {
    MEAL_PLAN_TEMPLATE
        .replace("{{days}}", &request.days().to_string())
        .replace("{{goal}}", request.goal.label())
        .replace("{{weight}}", &weight_text(request.weight))
        .replace(
            "{{calories}}",
            &targets
                .daily_calories(request.weight, request.goal)
                .to_string(),
        )
        .replace(
            "{{restrictions}}",
            request.restrictions_text().unwrap_or(NONE_STATED),
        )
}

/// System and user messages for a workout plan request
#[must_use]
pub fn workout_messages(request: &PlanRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(PLANNER_SYSTEM_PROMPT),
        ChatMessage::user(workout_prompt(request)),
    ]
}

/// System and user messages for a meal plan request
#[must_use]
pub fn meal_messages(request: &MealPlanRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(PLANNER_SYSTEM_PROMPT),
        ChatMessage::user(meal_prompt(request)),
    ]
}

fn weight_text(weight: Option<f64>) -> String {
    weight.map_or_else(|| NOT_PROVIDED.to_owned(), |weight| weight.to_string())
}
