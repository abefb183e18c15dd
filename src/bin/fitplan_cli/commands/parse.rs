// ABOUTME: AI response parsing command for fitplan-cli
// ABOUTME: Reads a response from a file or stdin and prints the normalized plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use fitplan::llm::{parse_meal_plan, parse_workout_plan};
use fitplan::logging::PlanLogger;

use crate::helpers::display::{display_meal_plan, display_workout_plan, print_json, OutputFormat};

/// Plan type carried by an AI response
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanKind {
    /// Weekly workout plan
    Workout,
    /// Weekly meal plan
    Meal,
}

/// Parse an AI response and print the plan
pub fn run(kind: PlanKind, file: Option<&Path>, output: OutputFormat) -> Result<()> {
    let response = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read response from stdin")?;
            buffer
        }
    };

    match kind {
        PlanKind::Workout => {
            let parsed = parse_workout_plan(&response);
            PlanLogger::log_ai_response_parsed("workout", parsed.is_ok(), response.len());
            let plan = parsed?;
            match output {
                OutputFormat::Json => print_json(&plan)?,
                OutputFormat::Text => display_workout_plan(&plan),
            }
        }
        PlanKind::Meal => {
            let parsed = parse_meal_plan(&response);
            PlanLogger::log_ai_response_parsed("meal", parsed.is_ok(), response.len());
            let plan = parsed?;
            match output {
                OutputFormat::Json => print_json(&plan)?,
                OutputFormat::Text => display_meal_plan(&plan),
            }
        }
    }
    Ok(())
}
