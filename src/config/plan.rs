// ABOUTME: Plan engine configuration with defaults and environment overrides
// ABOUTME: Wires weight units, calorie targets, points, and the policy file into the engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::borrow::Cow;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ConfigError;
use crate::constants::planning::{
    DEFAULT_DAYS_PER_WEEK, DEFAULT_WEIGHT_UNIT, MAX_DAYS_PER_WEEK, MIN_DAYS_PER_WEEK,
};
use crate::errors::AppResult;
use crate::intelligence::{
    CalorieTargets, ExerciseCatalog, MealCatalog, MealPlanner, PlanGenerator, PlanPolicy,
    PointsPolicy,
};

/// Plan engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanConfig {
    /// Unit label appended to computed loads
    pub weight_unit: String,
    /// Day count used when a caller does not supply one
    pub default_days_per_week: u8,
    /// YAML policy file replacing the built-in split and allocation tables
    pub policy_path: Option<PathBuf>,
    /// Meal plan calorie targets
    pub calorie_targets: CalorieTargets,
    /// Leaderboard scoring
    pub points: PointsPolicy,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weight_unit: DEFAULT_WEIGHT_UNIT.to_owned(),
            default_days_per_week: DEFAULT_DAYS_PER_WEEK,
            policy_path: None,
            calorie_targets: CalorieTargets::default(),
            points: PointsPolicy::default(),
        }
    }
}

impl PlanConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        info!(
            weight_unit = %config.weight_unit,
            policy_path = ?config.policy_path,
            "Plan configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weight_unit.trim().is_empty() {
            return Err(ConfigError::MissingField("weight_unit"));
        }

        if !(MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK).contains(&self.default_days_per_week) {
            return Err(ConfigError::ValueOutOfRange(
                "default_days_per_week must be between 1 and 7",
            ));
        }

        let targets = &self.calorie_targets;
        let multipliers = [
            targets.weight_loss,
            targets.muscle_gain,
            targets.endurance,
            targets.general,
        ];
        if multipliers
            .iter()
            .any(|multiplier| !multiplier.is_finite() || *multiplier <= 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "calorie multipliers must be positive",
            ));
        }

        if targets.fallback_daily_calories == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_daily_calories must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Policy named by `policy_path`, or the built-in policy
    ///
    /// # Errors
    ///
    /// Returns an error if the policy file cannot be read or is invalid
    pub fn load_policy(&self) -> AppResult<Cow<'static, PlanPolicy>> {
        match &self.policy_path {
            Some(path) => Ok(Cow::Owned(PlanPolicy::from_yaml_file(path)?)),
            None => Ok(Cow::Borrowed(PlanPolicy::builtin())),
        }
    }

    /// Workout generator over `catalog` and `policy` using the configured unit
    #[must_use]
    pub fn plan_generator<'a>(
        &self,
        catalog: &'a ExerciseCatalog,
        policy: &'a PlanPolicy,
    ) -> PlanGenerator<'a> {
        PlanGenerator::new(catalog, policy).with_weight_unit(self.weight_unit.clone())
    }

    /// Meal planner over `catalog` using the configured calorie targets
    #[must_use]
    pub const fn meal_planner<'a>(&self, catalog: &'a MealCatalog) -> MealPlanner<'a> {
        MealPlanner::new(catalog, self.calorie_targets)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(unit) = env::var("FITPLAN_WEIGHT_UNIT") {
            self.weight_unit = unit.trim().to_owned();
        }
        Self::apply_env_var("FITPLAN_DEFAULT_DAYS", &mut self.default_days_per_week)?;

        if let Ok(path) = env::var("FITPLAN_POLICY_PATH") {
            self.policy_path = (!path.trim().is_empty()).then(|| PathBuf::from(path.trim()));
        }

        // Nutrition overrides
        Self::apply_env_var(
            "FITPLAN_FALLBACK_CALORIES",
            &mut self.calorie_targets.fallback_daily_calories,
        )?;
        Self::apply_env_var(
            "FITPLAN_CALORIES_WEIGHT_LOSS",
            &mut self.calorie_targets.weight_loss,
        )?;
        Self::apply_env_var(
            "FITPLAN_CALORIES_MUSCLE_GAIN",
            &mut self.calorie_targets.muscle_gain,
        )?;
        Self::apply_env_var(
            "FITPLAN_CALORIES_ENDURANCE",
            &mut self.calorie_targets.endurance,
        )?;
        Self::apply_env_var("FITPLAN_CALORIES_GENERAL", &mut self.calorie_targets.general)?;

        // Points overrides
        Self::apply_env_var("FITPLAN_POINTS_WORKOUT", &mut self.points.workout_completed)?;
        Self::apply_env_var("FITPLAN_POINTS_EXERCISE", &mut self.points.exercise_logged)?;
        Self::apply_env_var("FITPLAN_POINTS_MEAL_DAY", &mut self.points.meal_plan_day)?;
        Self::apply_env_var("FITPLAN_POINTS_STREAK_BONUS", &mut self.points.streak_day_bonus)?;

        Ok(self)
    }
}
