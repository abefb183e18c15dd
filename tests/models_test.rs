// ABOUTME: Tests for goal and level parsing and lenient web-form number handling
// ABOUTME: Covers silent defaults, numeric prefixes, and day-count clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitplan::models::{
    clamp_days_per_week, parse_body_weight, parse_days_per_week, FitnessLevel, Goal,
    MealPlanRequest, PlanRequest,
};

#[test]
fn test_goal_parsing_accepts_common_spellings() {
    for raw in ["weightLoss", "weight_loss", "Weight-Loss", "WEIGHT LOSS"] {
        assert_eq!(Goal::parse(raw), Goal::WeightLoss, "{raw}");
    }
    assert_eq!(Goal::parse("muscle_gain"), Goal::MuscleGain);
    assert_eq!(Goal::parse("Endurance"), Goal::Endurance);
    assert_eq!(Goal::parse("flexibility"), Goal::General);
    assert_eq!(Goal::parse(""), Goal::General);
}

#[test]
fn test_level_parsing_defaults_to_beginner() {
    assert_eq!(FitnessLevel::parse("Advanced"), FitnessLevel::Advanced);
    assert_eq!(FitnessLevel::parse("intermediate"), FitnessLevel::Intermediate);
    assert_eq!(FitnessLevel::parse("expert"), FitnessLevel::Beginner);
}

#[test]
fn test_goal_wire_names_and_labels() {
    let wire: Vec<String> = Goal::ALL
        .iter()
        .map(|goal| serde_json::to_string(goal).unwrap())
        .collect();
    assert_eq!(
        wire,
        vec!["\"weightLoss\"", "\"muscleGain\"", "\"endurance\"", "\"general\""]
    );
    assert_eq!(Goal::General.label(), "general fitness");
    assert_eq!(Goal::MuscleGain.to_string(), "muscleGain");
}

#[test]
fn test_body_weight_parsing() {
    assert_eq!(parse_body_weight("150"), Some(150.0));
    assert_eq!(parse_body_weight(" 72.5 kg"), Some(72.5));
    assert_eq!(parse_body_weight("180lbs"), Some(180.0));
    assert_eq!(parse_body_weight(""), None);
    assert_eq!(parse_body_weight("heavy"), None);
    assert_eq!(parse_body_weight("0"), None);
    assert_eq!(parse_body_weight("-80"), None);
}

#[test]
fn test_days_parsing_and_clamping() {
    assert_eq!(parse_days_per_week("4"), 4);
    assert_eq!(parse_days_per_week("5.8"), 5);
    assert_eq!(parse_days_per_week("6 days"), 6);
    assert_eq!(parse_days_per_week("12"), 7);
    assert_eq!(parse_days_per_week("0"), 1);
    assert_eq!(parse_days_per_week("-3"), 1);
    assert_eq!(parse_days_per_week("lots"), 3);
    assert_eq!(parse_days_per_week(""), 3);

    assert_eq!(clamp_days_per_week(i64::MAX), 7);
    assert_eq!(clamp_days_per_week(i64::MIN), 1);
}

#[test]
fn test_requests_from_raw_form_values() {
    let request = PlanRequest::from_raw("", "unknown", "expert", "9", Some("  "));
    assert_eq!(request.weight, None);
    assert_eq!(request.goal, Goal::General);
    assert_eq!(request.fitness_level, FitnessLevel::Beginner);
    assert_eq!(request.days(), 7);
    assert_eq!(request.limitations_text(), None);

    let meals = MealPlanRequest::from_raw("70", "endurance", "2", Some(" vegan "));
    assert_eq!(meals.weight, Some(70.0));
    assert_eq!(meals.days(), 2);
    assert_eq!(meals.restrictions_text(), Some("vegan"));
}
