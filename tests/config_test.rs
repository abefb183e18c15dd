// ABOUTME: Tests for plan configuration defaults, environment overrides, and validation
// ABOUTME: Environment-mutating tests run serially and clear FITPLAN_* variables afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::borrow::Cow;
use std::env;
use std::io::Write;

use fitplan::config::{ConfigError, PlanConfig};
use fitplan::errors::{AppError, ErrorCode};
use fitplan::intelligence::{ExerciseCatalog, MealCatalog, PlanPolicy};
use fitplan::models::{FitnessLevel, Goal, MealPlanRequest, PlanRequest};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serial_test::serial;
use tempfile::NamedTempFile;

const FITPLAN_VARS: [&str; 12] = [
    "FITPLAN_WEIGHT_UNIT",
    "FITPLAN_DEFAULT_DAYS",
    "FITPLAN_POLICY_PATH",
    "FITPLAN_FALLBACK_CALORIES",
    "FITPLAN_CALORIES_WEIGHT_LOSS",
    "FITPLAN_CALORIES_MUSCLE_GAIN",
    "FITPLAN_CALORIES_ENDURANCE",
    "FITPLAN_CALORIES_GENERAL",
    "FITPLAN_POINTS_WORKOUT",
    "FITPLAN_POINTS_EXERCISE",
    "FITPLAN_POINTS_MEAL_DAY",
    "FITPLAN_POINTS_STREAK_BONUS",
];

fn clear_env() {
    for var in FITPLAN_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = PlanConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.weight_unit, "lbs");
    assert_eq!(config.default_days_per_week, 3);
    assert!(config.policy_path.is_none());
    assert!((config.calorie_targets.weight_loss - 12.0).abs() < f64::EPSILON);
    assert_eq!(config.points.workout_completed, 10);
}

#[test]
#[serial]
fn test_load_without_environment_matches_defaults() {
    clear_env();
    assert_eq!(PlanConfig::load().unwrap(), PlanConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("FITPLAN_WEIGHT_UNIT", " kg ");
    env::set_var("FITPLAN_DEFAULT_DAYS", "5");
    env::set_var("FITPLAN_CALORIES_MUSCLE_GAIN", "20.5");
    env::set_var("FITPLAN_FALLBACK_CALORIES", "2200");
    env::set_var("FITPLAN_POINTS_STREAK_BONUS", "0");

    let config = PlanConfig::load().unwrap();

    assert_eq!(config.weight_unit, "kg");
    assert_eq!(config.default_days_per_week, 5);
    assert!((config.calorie_targets.muscle_gain - 20.5).abs() < 0.001);
    assert_eq!(config.calorie_targets.fallback_daily_calories, 2200);
    assert_eq!(config.points.streak_day_bonus, 0);

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_override_is_a_parse_error() {
    clear_env();
    env::set_var("FITPLAN_POINTS_WORKOUT", "ten");

    let err = PlanConfig::load().unwrap_err();
    assert!(
        matches!(err, ConfigError::Parse(ref message) if message.contains("FITPLAN_POINTS_WORKOUT"))
    );

    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_env();
    env::set_var("FITPLAN_DEFAULT_DAYS", "9");

    assert!(matches!(
        PlanConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
}

#[test]
#[serial]
fn test_blank_policy_path_is_ignored() {
    clear_env();
    env::set_var("FITPLAN_POLICY_PATH", "   ");

    assert!(PlanConfig::load().unwrap().policy_path.is_none());

    clear_env();
}

#[test]
fn test_validation_errors() {
    let blank_unit = PlanConfig {
        weight_unit: "  ".to_owned(),
        ..PlanConfig::default()
    };
    assert!(matches!(
        blank_unit.validate(),
        Err(ConfigError::MissingField("weight_unit"))
    ));

    let mut bad_multiplier = PlanConfig::default();
    bad_multiplier.calorie_targets.endurance = 0.0;
    assert!(matches!(
        bad_multiplier.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let mut zero_fallback = PlanConfig::default();
    zero_fallback.calorie_targets.fallback_daily_calories = 0;
    assert!(matches!(
        zero_fallback.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_config_error_maps_to_app_error_codes() {
    let missing: AppError = ConfigError::MissingField("weight_unit").into();
    assert_eq!(missing.code, ErrorCode::ConfigError);
    assert!(missing.message.contains("weight_unit"));

    let parse: AppError = ConfigError::Parse("Invalid FITPLAN_DEFAULT_DAYS".to_owned()).into();
    assert_eq!(parse.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_load_policy_defaults_to_builtin() {
    let policy = PlanConfig::default().load_policy().unwrap();
    assert!(matches!(policy, Cow::Borrowed(_)));
    assert_eq!(policy.as_ref(), PlanPolicy::builtin());
}

#[test]
fn test_load_policy_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PlanPolicy::builtin().to_yaml().unwrap().as_bytes())
        .unwrap();
    let config = PlanConfig {
        policy_path: Some(file.path().to_path_buf()),
        ..PlanConfig::default()
    };

    let policy = config.load_policy().unwrap();

    assert!(matches!(policy, Cow::Owned(_)));
    assert_eq!(policy.as_ref(), PlanPolicy::builtin());
}

#[test]
fn test_load_policy_reports_missing_file() {
    let config = PlanConfig {
        policy_path: Some("/nonexistent/fitplan/policy.yaml".into()),
        ..PlanConfig::default()
    };
    assert_eq!(
        config.load_policy().unwrap_err().code,
        ErrorCode::StorageError
    );
}

#[test]
fn test_configured_engines_use_settings() {
    let mut config = PlanConfig {
        weight_unit: "kg".to_owned(),
        ..PlanConfig::default()
    };
    config.calorie_targets.general = 20.0;

    let generator = config.plan_generator(ExerciseCatalog::builtin(), PlanPolicy::builtin());
    let request = PlanRequest::new(100.0, Goal::MuscleGain, FitnessLevel::Beginner, 4);
    let plan = generator.generate(&request, &mut ChaCha8Rng::seed_from_u64(3));
    let loads: Vec<&str> = plan
        .workout_days
        .iter()
        .flat_map(|day| day.exercises.iter())
        .map(|exercise| exercise.weight.as_str())
        .filter(|weight| *weight != "bodyweight")
        .collect();
    assert!(!loads.is_empty());
    assert!(loads.iter().all(|weight| weight.ends_with(" kg")));

    let planner = config.meal_planner(MealCatalog::builtin());
    let meals = planner.generate(
        &MealPlanRequest::from_raw("100", "general", "1", None),
        &mut ChaCha8Rng::seed_from_u64(3),
    );
    assert_eq!(meals.daily_calories, 2000);
}
