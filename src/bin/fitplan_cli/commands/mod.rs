// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
// ABOUTME: Re-exports command modules for fitplan-cli
// ABOUTME: Provides plan generation, AI parsing, leaderboard, and policy commands

pub mod leaderboard;
pub mod parse;
pub mod plan;
pub mod policy;
