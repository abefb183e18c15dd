// ABOUTME: Plan policy commands for fitplan-cli
// ABOUTME: Exports the active split and allocation tables as YAML and validates edited files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::path::Path;

use anyhow::Result;
use fitplan::config::PlanConfig;
use fitplan::intelligence::PlanPolicy;
use tracing::info;

/// Print the active policy as YAML
pub fn export(config: &PlanConfig) -> Result<()> {
    let policy = config.load_policy()?;
    print!("{}", policy.to_yaml()?);
    Ok(())
}

/// Validate a policy file and report tables without allocations
pub fn check(path: &Path) -> Result<()> {
    let policy = PlanPolicy::from_yaml_file(path)?;
    info!(path = %path.display(), "Policy file is valid");

    println!("{} is valid", path.display());
    for (goal, day_category) in policy.unallocated_day_categories() {
        println!("  note: {goal}/{day_category} has no allocation and will produce empty days");
    }
    Ok(())
}
