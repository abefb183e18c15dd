// ABOUTME: Leaderboard command for fitplan-cli
// ABOUTME: Loads progress records from JSON, applies the time window, and prints the ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use fitplan::config::PlanConfig;
use fitplan::intelligence::{build_leaderboard, window_start};
use fitplan::logging::PlanLogger;
use fitplan::models::ProgressRecord;

use crate::helpers::display::{display_leaderboard, print_json, OutputFormat};

/// Build and print the leaderboard
pub fn run(
    config: &PlanConfig,
    records_path: &Path,
    since_days: Option<i64>,
    limit: usize,
    output: OutputFormat,
) -> Result<()> {
    let raw = fs::read_to_string(records_path)
        .with_context(|| format!("Failed to read {}", records_path.display()))?;
    let records: Vec<ProgressRecord> =
        serde_json::from_str(&raw).context("Progress records must be a JSON array")?;

    let since = since_days
        .map(|days| {
            window_start(Utc::now(), days)
                .ok_or_else(|| anyhow!("--since-days {days} reaches past the supported date range"))
        })
        .transpose()?;
    let entries = build_leaderboard(&records, &config.points, since, limit);

    let users: HashSet<_> = records.iter().map(|record| record.user_id).collect();
    PlanLogger::log_leaderboard_built(records.len(), users.len(), limit);

    match output {
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Text => display_leaderboard(&entries),
    }
    Ok(())
}
