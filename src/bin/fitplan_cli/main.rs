// ABOUTME: Fitplan CLI - command-line front end for the workout and meal plan engine
// ABOUTME: Generates plans, parses AI responses, builds leaderboards, and exports the plan policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//!
//! Usage:
//! ```bash
//! # Four-day muscle gain plan, reproducible
//! fitplan-cli --seed 7 workout --weight 180 --goal muscleGain --level intermediate --days 4
//!
//! # Vegetarian meal plan as JSON
//! fitplan-cli --output json meals --weight 150 --goal weightLoss --restrictions vegetarian
//!
//! # Validate an AI response
//! fitplan-cli parse workout --file response.txt
//!
//! # Top 10 over the last week
//! fitplan-cli leaderboard --records progress.json --since-days 7
//!
//! # Export the built-in policy tables, or check an edited copy
//! fitplan-cli policy export > policy.yaml
//! fitplan-cli policy check policy.yaml
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitplan::config::PlanConfig;
use fitplan::logging::LoggingConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use helpers::display::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "Workout and meal plan generator",
    long_about = "Generates rule-based weekly workout and meal plans, validates AI-generated \
                  plans, and ranks progress on a leaderboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for reproducible plans
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a weekly workout plan
    Workout {
        /// Body weight
        #[arg(long, default_value = "")]
        weight: String,

        /// weightLoss, muscleGain, endurance, or general
        #[arg(long, default_value = "general")]
        goal: String,

        /// beginner, intermediate, or advanced
        #[arg(long, default_value = "beginner")]
        level: String,

        /// Training days per week, 1-7
        #[arg(long)]
        days: Option<String>,

        /// Injuries or constraints to mention in the plan
        #[arg(long)]
        limitations: Option<String>,
    },

    /// Generate a weekly meal plan
    Meals {
        /// Body weight
        #[arg(long, default_value = "")]
        weight: String,

        /// weightLoss, muscleGain, endurance, or general
        #[arg(long, default_value = "general")]
        goal: String,

        /// Planned days, 1-7
        #[arg(long)]
        days: Option<String>,

        /// Dietary restrictions or preferences
        #[arg(long)]
        restrictions: Option<String>,
    },

    /// Parse and normalize an AI plan response
    Parse {
        /// Plan type in the response
        #[arg(value_enum)]
        kind: commands::parse::PlanKind,

        /// File with the response (reads stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Rank users from a JSON file of progress records
    Leaderboard {
        /// JSON array of progress records
        #[arg(long)]
        records: PathBuf,

        /// Only count records from the last N days
        #[arg(long)]
        since_days: Option<i64>,

        /// Maximum rows
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Plan policy tables
    Policy {
        #[command(subcommand)]
        action: PolicyCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PolicyCommand {
    /// Print the active policy as YAML
    Export,

    /// Validate a policy file
    Check {
        /// YAML policy file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("{e}");
    }

    let config = PlanConfig::load().unwrap_or_else(|e| {
        warn!("Invalid plan configuration: {e}, using defaults");
        PlanConfig::default()
    });

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    debug!(seed = ?cli.seed, "Random source ready");

    match cli.command {
        Command::Workout {
            weight,
            goal,
            level,
            days,
            limitations,
        } => {
            let days = days.unwrap_or_else(|| config.default_days_per_week.to_string());
            let request = fitplan::models::PlanRequest::from_raw(
                &weight,
                &goal,
                &level,
                &days,
                limitations.as_deref(),
            );
            commands::plan::workout(&config, &request, cli.output, &mut rng)?;
        }
        Command::Meals {
            weight,
            goal,
            days,
            restrictions,
        } => {
            let days = days.unwrap_or_else(|| config.default_days_per_week.to_string());
            let request = fitplan::models::MealPlanRequest::from_raw(
                &weight,
                &goal,
                &days,
                restrictions.as_deref(),
            );
            commands::plan::meals(&config, &request, cli.output, &mut rng)?;
        }
        Command::Parse { kind, file } => {
            commands::parse::run(kind, file.as_deref(), cli.output)?;
        }
        Command::Leaderboard {
            records,
            since_days,
            limit,
        } => {
            commands::leaderboard::run(&config, &records, since_days, limit, cli.output)?;
        }
        Command::Policy { action } => match action {
            PolicyCommand::Export => commands::policy::export(&config)?,
            PolicyCommand::Check { path } => commands::policy::check(&path)?,
        },
    }

    Ok(())
}
