// ABOUTME: Main library entry point for the fitplan workout and meal plan engine
// ABOUTME: Provides rule-based plan generation, AI response parsing, and leaderboard scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan
//!
//! A rule-based engine for weekly workout and meal plans.
//!
//! ## Features
//!
//! - **Workout plans**: split selection, per-day allocation and sampling over
//!   an exercise catalog, with loads computed from body weight
//! - **Meal plans**: goal calorie targets split across meal slots
//! - **AI plans**: prompts for a generative-AI service and tolerant parsing of
//!   its JSON responses into the same plan types
//! - **Leaderboard**: points, streak bonuses, and competition ranking
//!
//! ## Architecture
//!
//! - **Models** (`fitplan-core`): requests, plans, progress records
//! - **Intelligence**: catalogs, policy tables, generators, leaderboard
//! - **LLM**: prompts and response parsing
//! - **Config**: `FITPLAN_*` environment configuration
//!
//! ## Example Usage
//!
//! ```rust
//! use fitplan::intelligence::PlanGenerator;
//! use fitplan::models::{FitnessLevel, Goal, PlanRequest};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let request = PlanRequest::new(80.0, Goal::MuscleGain, FitnessLevel::Intermediate, 4);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let plan = PlanGenerator::builtin().generate(&request, &mut rng);
//!
//! assert_eq!(plan.workout_days.len(), 4);
//! assert_eq!(plan.workout_days[0].focus, "Upper Body Strength");
//! ```

// Re-export core types so `crate::models` and friends resolve in this crate
pub use fitplan_core::{constants, errors, models};

/// Configuration management
pub mod config;

/// Plan generators, catalogs, policy tables, and leaderboard scoring
pub mod intelligence;

/// Prompts and response parsing for AI-generated plans
pub mod llm;

/// Structured logging setup
pub mod logging;
