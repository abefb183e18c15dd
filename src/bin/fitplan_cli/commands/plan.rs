// ABOUTME: Workout and meal plan generation commands for fitplan-cli
// ABOUTME: Loads the configured policy, runs the generator, and prints the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::time::Instant;

use anyhow::Result;
use fitplan::config::PlanConfig;
use fitplan::intelligence::{ExerciseCatalog, MealCatalog};
use fitplan::logging::PlanLogger;
use fitplan::models::{MealPlanRequest, PlanRequest};
use rand::Rng;

use crate::helpers::display::{display_meal_plan, display_workout_plan, print_json, OutputFormat};

/// Generate and print a workout plan
pub fn workout<R: Rng>(
    config: &PlanConfig,
    request: &PlanRequest,
    output: OutputFormat,
    rng: &mut R,
) -> Result<()> {
    let started = Instant::now();
    let policy = config.load_policy()?;
    let generator = config.plan_generator(ExerciseCatalog::builtin(), &policy);
    let plan = generator.generate(request, rng);

    PlanLogger::log_plan_generated(
        "workout",
        request.goal.as_str(),
        plan.workout_days.len(),
        elapsed_ms(started),
    );

    match output {
        OutputFormat::Json => print_json(&plan)?,
        OutputFormat::Text => display_workout_plan(&plan),
    }
    Ok(())
}

/// Generate and print a meal plan
pub fn meals<R: Rng>(
    config: &PlanConfig,
    request: &MealPlanRequest,
    output: OutputFormat,
    rng: &mut R,
) -> Result<()> {
    let started = Instant::now();
    let plan = config
        .meal_planner(MealCatalog::builtin())
        .generate(request, rng);

    PlanLogger::log_plan_generated(
        "meal",
        request.goal.as_str(),
        plan.meal_days.len(),
        elapsed_ms(started),
    );

    match output {
        OutputFormat::Json => print_json(&plan)?,
        OutputFormat::Text => display_meal_plan(&plan),
    }
    Ok(())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
