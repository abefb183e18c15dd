// ABOUTME: Progress records and leaderboard rows for the points system
// ABOUTME: Records are the query results the leaderboard aggregates over
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a progress record represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressKind {
    /// A workout day was completed
    WorkoutCompleted,
    /// A meal plan day was followed
    MealPlanFollowed,
}

/// One logged piece of user progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// User the record belongs to
    pub user_id: Uuid,
    /// Name shown on the leaderboard
    pub display_name: String,
    /// When the progress happened
    pub recorded_at: DateTime<Utc>,
    /// Record type
    pub kind: ProgressKind,
    /// Exercises logged with a completed workout
    #[serde(default)]
    pub exercises_logged: u32,
}

/// One ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Competition rank (ties share a rank)
    pub rank: u32,
    /// User identifier
    pub user_id: Uuid,
    /// Name shown on the leaderboard
    pub display_name: String,
    /// Total points in the window
    pub points: u32,
    /// Completed workouts in the window
    pub workouts_completed: u32,
    /// Longest run of consecutive active days in the window
    pub longest_streak_days: u32,
}
