// ABOUTME: Criterion benchmarks for plan generation, AI response parsing, and leaderboard ranking
// ABOUTME: Measures workout and meal generation across day counts and ranking over record batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Criterion benchmarks for the plan engines.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitplan::intelligence::{build_leaderboard, MealPlanner, PlanGenerator, PointsPolicy};
use fitplan::llm::parse_workout_plan;
use fitplan::models::{
    FitnessLevel, Goal, MealPlanRequest, PlanRequest, ProgressKind, ProgressRecord,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Users in the leaderboard stress batch
const LEADERBOARD_USERS: usize = 200;

#[allow(clippy::cast_possible_wrap)]
fn generate_records(count: usize) -> Vec<ProgressRecord> {
    let base = Utc
        .with_ymd_and_hms(2025, 1, 6, 7, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let users: Vec<Uuid> = (0..LEADERBOARD_USERS).map(|_| Uuid::new_v4()).collect();

    (0..count)
        .map(|index| {
            let kind = if index % 3 == 0 {
                ProgressKind::MealPlanFollowed
            } else {
                ProgressKind::WorkoutCompleted
            };
            ProgressRecord {
                user_id: users[index % users.len()],
                display_name: format!("User {}", index % users.len()),
                recorded_at: base + Duration::days(((index * 7) % 60) as i64),
                kind,
                exercises_logged: (index % 8) as u32,
            }
        })
        .collect()
}

fn bench_workout_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("workout_plan");
    let generator = PlanGenerator::builtin();

    for days in [1_i64, 3, 5, 7] {
        group.bench_with_input(BenchmarkId::new("muscle_gain", days), &days, |b, &days| {
            let request = PlanRequest::new(80.0, Goal::MuscleGain, FitnessLevel::Advanced, days);
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| generator.generate(black_box(&request), &mut rng));
        });
    }

    group.bench_function("all_goals_week", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        b.iter(|| {
            Goal::ALL
                .iter()
                .map(|goal| {
                    let request = PlanRequest::new(70.0, *goal, FitnessLevel::Intermediate, 7);
                    generator.generate(&request, &mut rng).workout_days.len()
                })
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_meal_generation(c: &mut Criterion) {
    let planner = MealPlanner::builtin();
    let request = MealPlanRequest::from_raw("165", "endurance", "7", Some("vegetarian"));
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    c.bench_function("meal_plan_week", |b| {
        b.iter(|| planner.generate(black_box(&request), &mut rng));
    });
}

fn bench_ai_response_parsing(c: &mut Criterion) {
    let request = PlanRequest::new(80.0, Goal::General, FitnessLevel::Beginner, 7);
    let plan = PlanGenerator::builtin().generate(&request, &mut ChaCha8Rng::seed_from_u64(3));
    let json = serde_json::to_string_pretty(&plan).unwrap_or_default();
    let wrapped = format!("Here is your plan:\n```json\n{json}\n```\nStay consistent!");

    let mut group = c.benchmark_group("ai_parsing");
    group.throughput(Throughput::Bytes(wrapped.len() as u64));
    group.bench_function("bare_json", |b| {
        b.iter(|| parse_workout_plan(black_box(&json)));
    });
    group.bench_function("wrapped_json", |b| {
        b.iter(|| parse_workout_plan(black_box(&wrapped)));
    });
    group.finish();
}

fn bench_leaderboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard");
    let policy = PointsPolicy::default();

    for count in [500_usize, 5_000, 50_000] {
        let records = generate_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("build", count), &records, |b, records| {
            b.iter(|| build_leaderboard(black_box(records), &policy, None, 25));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_workout_generation,
    bench_meal_generation,
    bench_ai_response_parsing,
    bench_leaderboard,
);
criterion_main!(benches);
