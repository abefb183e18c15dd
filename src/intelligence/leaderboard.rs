// ABOUTME: Points awarding and leaderboard aggregation over progress records
// ABOUTME: Sums points per user, adds consecutive-day streak bonuses, and ranks with shared ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::{LeaderboardEntry, ProgressKind, ProgressRecord};

/// Points awarded per kind of progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsPolicy {
    /// Per completed workout
    pub workout_completed: u32,
    /// Per exercise logged with a workout
    pub exercise_logged: u32,
    /// Per day a meal plan was followed
    pub meal_plan_day: u32,
    /// Per active day that directly follows another active day
    pub streak_day_bonus: u32,
}

impl Default for PointsPolicy {
    fn default() -> Self {
        Self {
            workout_completed: 10,
            exercise_logged: 2,
            meal_plan_day: 5,
            streak_day_bonus: 3,
        }
    }
}

/// Points for a single record, excluding streak bonuses
#[must_use]
pub fn award_points(record: &ProgressRecord, policy: &PointsPolicy) -> u32 {
    match record.kind {
        ProgressKind::WorkoutCompleted => policy
            .workout_completed
            .saturating_add(policy.exercise_logged.saturating_mul(record.exercises_logged)),
        ProgressKind::MealPlanFollowed => policy.meal_plan_day,
    }
}

#[derive(Default)]
struct Tally<'a> {
    display_name: &'a str,
    points: u32,
    workouts: u32,
    active_days: BTreeSet<NaiveDate>,
}

/// Rank users by points earned at or after `since`
///
/// Ordering is points descending, then completed workouts descending, then
/// display name ascending. Users with equal points share a rank and the next
/// rank skips accordingly (1, 2, 2, 4). At most `limit` rows are returned.
#[must_use]
pub fn build_leaderboard(
    records: &[ProgressRecord],
    policy: &PointsPolicy,
    since: Option<DateTime<Utc>>,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let mut tallies: HashMap<Uuid, Tally<'_>> = HashMap::new();

    for record in records
        .iter()
        .filter(|record| since.is_none_or(|since| record.recorded_at >= since))
    {
        let tally = tallies.entry(record.user_id).or_default();
        if tally.display_name.is_empty() {
            tally.display_name = &record.display_name;
        }
        tally.points = tally.points.saturating_add(award_points(record, policy));
        if record.kind == ProgressKind::WorkoutCompleted {
            tally.workouts = tally.workouts.saturating_add(1);
        }
        tally.active_days.insert(record.recorded_at.date_naive());
    }

    let mut rows: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|(user_id, tally)| {
            let streaks = StreakSummary::from_days(&tally.active_days);
            LeaderboardEntry {
                rank: 0,
                user_id,
                display_name: tally.display_name.to_owned(),
                points: tally
                    .points
                    .saturating_add(policy.streak_day_bonus.saturating_mul(streaks.continued_days)),
                workouts_completed: tally.workouts,
                longest_streak_days: streaks.longest,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.workouts_completed.cmp(&a.workouts_completed))
            .then_with(|| a.display_name.cmp(&b.display_name))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    assign_competition_ranks(&mut rows);
    rows.truncate(limit);

    debug!(users = rows.len(), limit, "Built leaderboard");
    rows
}

fn assign_competition_ranks(rows: &mut [LeaderboardEntry]) {
    let mut previous: Option<(u32, u32)> = None;
    for (position, row) in rows.iter_mut().enumerate() {
        let rank = match previous {
            Some((points, rank)) if points == row.points => rank,
            _ => u32::try_from(position + 1).unwrap_or(u32::MAX),
        };
        row.rank = rank;
        previous = Some((row.points, rank));
    }
}

/// Start of a window covering the `days` days before `now`
///
/// Negative counts read as zero. Returns `None` when the start falls outside
/// the representable date range.
#[must_use]
pub fn window_start(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days.max(0)).and_then(|span| now.checked_sub_signed(span))
}

/// Consecutive-day statistics over a set of active dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    /// Length of the longest run of consecutive days
    pub longest: u32,
    /// Active days whose previous day was also active
    pub continued_days: u32,
}

impl StreakSummary {
    /// Summarize sorted, distinct active dates
    #[must_use]
    pub fn from_days(days: &BTreeSet<NaiveDate>) -> Self {
        let mut summary = Self::default();
        let mut current = 0_u32;
        let mut last: Option<NaiveDate> = None;

        for &day in days {
            if last.is_some_and(|last| last.succ_opt() == Some(day)) {
                current = current.saturating_add(1);
                summary.continued_days = summary.continued_days.saturating_add(1);
            } else {
                current = 1;
            }
            summary.longest = summary.longest.max(current);
            last = Some(day);
        }

        summary
    }
}
