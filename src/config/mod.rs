// ABOUTME: Configuration module for plan generation, meal targets, and leaderboard points
// ABOUTME: Loads defaults, applies FITPLAN_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//! Configuration module for the fitplan engine
//!
//! - **Plan**: weight unit label, default day count, optional policy file
//! - **Nutrition**: per-goal calorie multipliers and the fallback target
//! - **Points**: leaderboard scoring
//!
//! Values start from built-in defaults and are overridden by `FITPLAN_*`
//! environment variables. See [`plan::PlanConfig::load`].

/// Configuration error types
pub mod error;
/// Plan engine configuration
pub mod plan;

pub use error::ConfigError;
pub use plan::PlanConfig;
