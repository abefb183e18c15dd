// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
// ABOUTME: Output formatting helpers for fitplan-cli
// ABOUTME: Provides consistent display functions for plans and leaderboards

use anyhow::Result;
use clap::ValueEnum;
use fitplan::models::{GeneratedMealPlan, GeneratedPlan, LeaderboardEntry};
use serde::Serialize;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a workout plan day by day
pub fn display_workout_plan(plan: &GeneratedPlan) {
    println!("\n{}", plan.summary);
    println!("{}", "=".repeat(80));

    for day in &plan.workout_days {
        println!("\n{} - {}", day.day, day.focus);
        println!("{}", "-".repeat(80));
        println!("   Warmup: {}", day.warmup);
        for exercise in &day.exercises {
            println!(
                "   • {} - {} x {} @ {}",
                exercise.name, exercise.sets, exercise.reps, exercise.weight
            );
            if !exercise.notes.is_empty() {
                println!("       {}", exercise.notes);
            }
        }
        if day.exercises.is_empty() {
            println!("   (no exercises)");
        }
        println!("   Cooldown: {}", day.cooldown);
    }
}

/// Display a meal plan day by day
pub fn display_meal_plan(plan: &GeneratedMealPlan) {
    println!("\n{}", plan.summary);
    println!("{}", "=".repeat(80));

    for day in &plan.meal_days {
        println!("\n{} - {} kcal", day.day, day.total_calories);
        println!("{}", "-".repeat(80));
        for meal in &day.meals {
            println!(
                "   {:<10} {} ({} kcal, P {}g / C {}g / F {}g)",
                meal.meal,
                meal.name,
                meal.calories,
                meal.protein_grams,
                meal.carbs_grams,
                meal.fat_grams
            );
        }
    }
}

/// Display leaderboard rows as a table
pub fn display_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No progress recorded in this window.");
        return;
    }

    println!(
        "{:>4}  {:<24} {:>7} {:>9} {:>7}",
        "Rank", "Name", "Points", "Workouts", "Streak"
    );
    println!("{}", "=".repeat(56));
    for entry in entries {
        println!(
            "{:>4}  {:<24} {:>7} {:>9} {:>7}",
            entry.rank,
            entry.display_name,
            entry.points,
            entry.workouts_completed,
            entry.longest_streak_days
        );
    }
}
