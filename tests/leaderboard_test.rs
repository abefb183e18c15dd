// ABOUTME: Tests for points awarding, streak bonuses, and leaderboard ranking
// ABOUTME: Uses fixed timestamps so windows and consecutive-day streaks are exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use fitplan::intelligence::{
    award_points, build_leaderboard, window_start, PointsPolicy, StreakSummary,
};
use fitplan::models::ProgressKind;
use helpers::fixtures::{meal_day, record, reference_time, workout};
use uuid::Uuid;

fn ranks_and_names(rows: &[fitplan::models::LeaderboardEntry]) -> Vec<(u32, &str, u32)> {
    rows.iter()
        .map(|row| (row.rank, row.display_name.as_str(), row.points))
        .collect()
}

#[test]
fn test_award_points_per_kind() {
    let policy = PointsPolicy::default();
    let user = Uuid::new_v4();

    let bare = workout(user, "Ana", 0);
    assert_eq!(award_points(&bare, &policy), 10);

    let logged = record(user, "Ana", 0, ProgressKind::WorkoutCompleted, 4);
    assert_eq!(award_points(&logged, &policy), 18);

    let meal = meal_day(user, "Ana", 0);
    assert_eq!(award_points(&meal, &policy), 5);

    // exercises only count with a completed workout
    let odd = record(user, "Ana", 0, ProgressKind::MealPlanFollowed, 9);
    assert_eq!(award_points(&odd, &policy), 5);
}

#[test]
fn test_leaderboard_totals_and_streak_bonus() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let carol = Uuid::new_v4();
    let records = vec![
        record(alice, "Alice", 0, ProgressKind::WorkoutCompleted, 3),
        workout(alice, "Alice", 1),
        meal_day(alice, "Alice", 2),
        workout(bob, "Bob", 0),
        workout(bob, "Bob", 5),
        meal_day(carol, "Carol", 0),
        meal_day(carol, "Carol", 1),
        meal_day(carol, "Carol", 2),
        meal_day(carol, "Carol", 3),
    ];

    let rows = build_leaderboard(&records, &PointsPolicy::default(), None, 10);

    assert_eq!(
        ranks_and_names(&rows),
        vec![(1, "Alice", 37), (2, "Carol", 29), (3, "Bob", 20)]
    );
    assert_eq!(rows[0].workouts_completed, 2);
    assert_eq!(rows[0].longest_streak_days, 3);
    assert_eq!(rows[1].workouts_completed, 0);
    assert_eq!(rows[1].longest_streak_days, 4);
    assert_eq!(rows[2].longest_streak_days, 1);
    assert_eq!(rows[0].user_id, alice);
}

#[test]
fn test_ties_share_rank_and_skip() {
    let top = Uuid::new_v4();
    let records = vec![
        workout(top, "Zed", 0),
        workout(top, "Zed", 2),
        workout(Uuid::new_v4(), "Ann", 0),
        workout(Uuid::new_v4(), "Dee", 0),
        meal_day(Uuid::new_v4(), "Cal", 0),
        meal_day(Uuid::new_v4(), "Cal", 0),
        meal_day(Uuid::new_v4(), "Eve", 0),
    ];

    let rows = build_leaderboard(&records, &PointsPolicy::default(), None, 10);

    assert_eq!(
        ranks_and_names(&rows),
        vec![
            (1, "Zed", 20),
            (2, "Ann", 10),
            (2, "Dee", 10),
            (4, "Cal", 5),
            (4, "Cal", 5),
            (4, "Eve", 5),
        ]
    );
}

#[test]
fn test_equal_points_prefer_more_workouts() {
    let meals_only = Uuid::new_v4();
    let records = vec![
        meal_day(meals_only, "Alex", 0),
        meal_day(meals_only, "Alex", 2),
        workout(Uuid::new_v4(), "Zoe", 4),
    ];

    let rows = build_leaderboard(&records, &PointsPolicy::default(), None, 10);

    assert_eq!(ranks_and_names(&rows), vec![(1, "Zoe", 10), (1, "Alex", 10)]);
}

#[test]
fn test_window_excludes_older_records() {
    let user = Uuid::new_v4();
    let records = vec![
        workout(user, "Ana", 0),
        workout(user, "Ana", 1),
        workout(user, "Ana", 2),
        workout(user, "Ana", 3),
    ];
    let since = reference_time() + Duration::days(2);

    let rows = build_leaderboard(&records, &PointsPolicy::default(), Some(since), 10);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].workouts_completed, 2);
    assert_eq!(rows[0].points, 23);
    assert_eq!(rows[0].longest_streak_days, 2);

    let future = reference_time() + Duration::days(30);
    assert!(build_leaderboard(&records, &PointsPolicy::default(), Some(future), 10).is_empty());
}

#[test]
fn test_window_start_covers_requested_days() {
    let now = reference_time();
    assert_eq!(window_start(now, 7), Some(now - Duration::days(7)));
    assert_eq!(window_start(now, 0), Some(now));
    assert_eq!(window_start(now, -3), Some(now));
}

#[test]
fn test_window_start_out_of_range_is_none() {
    let now = reference_time();
    assert_eq!(window_start(now, i64::MAX), None);
    assert_eq!(window_start(now, 200_000_000), None);
    assert_eq!(window_start(DateTime::<Utc>::MIN_UTC, 1), None);
}

#[test]
fn test_limit_truncates_after_ranking() {
    let records: Vec<_> = (0..5)
        .map(|i| {
            let user = Uuid::new_v4();
            record(user, &format!("User {i}"), 0, ProgressKind::WorkoutCompleted, i)
        })
        .collect();

    let rows = build_leaderboard(&records, &PointsPolicy::default(), None, 2);

    assert_eq!(
        ranks_and_names(&rows),
        vec![(1, "User 4", 18), (2, "User 3", 16)]
    );
    assert!(build_leaderboard(&records, &PointsPolicy::default(), None, 0).is_empty());
}

#[test]
fn test_same_day_records_do_not_extend_streaks() {
    let user = Uuid::new_v4();
    let records = vec![
        workout(user, "Ana", 0),
        meal_day(user, "Ana", 0),
        workout(user, "Ana", 0),
    ];

    let rows = build_leaderboard(&records, &PointsPolicy::default(), None, 10);

    assert_eq!(rows[0].points, 25);
    assert_eq!(rows[0].longest_streak_days, 1);
}

#[test]
fn test_first_display_name_wins() {
    let user = Uuid::new_v4();
    let records = vec![workout(user, "First", 0), workout(user, "Renamed", 3)];

    let rows = build_leaderboard(&records, &PointsPolicy::default(), None, 10);

    assert_eq!(rows[0].display_name, "First");
}

#[test]
fn test_custom_policy_without_streak_bonus() {
    let policy = PointsPolicy {
        workout_completed: 1,
        exercise_logged: 0,
        meal_plan_day: 1,
        streak_day_bonus: 0,
    };
    let user = Uuid::new_v4();
    let records: Vec<_> = (0..7).map(|day| workout(user, "Ana", day)).collect();

    let rows = build_leaderboard(&records, &policy, None, 10);

    assert_eq!(rows[0].points, 7);
    assert_eq!(rows[0].longest_streak_days, 7);
}

#[test]
fn test_streak_summary() {
    let date = |day: u32| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();

    let days: BTreeSet<NaiveDate> = [1, 2, 3, 5, 6].into_iter().map(date).collect();
    let summary = StreakSummary::from_days(&days);
    assert_eq!(summary.longest, 3);
    assert_eq!(summary.continued_days, 3);

    assert_eq!(StreakSummary::from_days(&BTreeSet::new()), StreakSummary::default());

    let single: BTreeSet<NaiveDate> = [date(10)].into_iter().collect();
    assert_eq!(StreakSummary::from_days(&single).longest, 1);

    let edge: BTreeSet<NaiveDate> = [NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX]
        .into_iter()
        .collect();
    assert_eq!(StreakSummary::from_days(&edge).longest, 2);
}

#[test]
fn test_leaderboard_json_uses_camel_case() {
    let rows = build_leaderboard(
        &[workout(Uuid::new_v4(), "Ana", 0)],
        &PointsPolicy::default(),
        None,
        1,
    );
    let value = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(value["displayName"], "Ana");
    assert_eq!(value["longestStreakDays"], 1);
    assert_eq!(value["workoutsCompleted"], 1);
}
