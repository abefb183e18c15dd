// ABOUTME: Split and allocation tables that drive workout plan generation
// ABOUTME: Built-in tables can be replaced by a validated YAML policy file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Plan policy
//!
//! Two literal tables decide the shape of every generated plan:
//!
//! - **splits**: for each goal, day-count buckets mapping to an ordered
//!   pattern of day categories. The first bucket whose `max_days` covers the
//!   requested count wins and its pattern is repeated and truncated to length.
//! - **allocations**: for each goal and day category, how many exercises to
//!   draw from which catalog categories.
//!
//! A pair missing from the allocation table contributes no exercises.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{
    catalog_categories as catalog, day_categories as day, planning::MAX_DAYS_PER_WEEK,
};
use crate::errors::{AppError, AppResult};
use crate::models::Goal;

static BUILTIN_POLICY: OnceLock<PlanPolicy> = OnceLock::new();

/// Day-count bucket of a split table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitBucket {
    /// Largest day count this bucket serves
    pub max_days: u8,
    /// Day categories, repeated and truncated to the requested count
    pub pattern: Vec<String>,
}

/// Number of exercises to draw from one catalog category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraw {
    /// Catalog category tag
    pub category: String,
    /// Exercises to draw
    pub count: usize,
}

/// Split table, allocation table, and warmup/cooldown pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPolicy {
    /// Day-count buckets per goal, ascending by `max_days`
    pub splits: BTreeMap<Goal, Vec<SplitBucket>>,
    /// Catalog draws per goal and day category
    pub allocations: BTreeMap<Goal, BTreeMap<String, Vec<CategoryDraw>>>,
    /// Warmup routines, one drawn per day
    #[serde(default = "default_warmups")]
    pub warmups: Vec<String>,
    /// Cooldown routines, one drawn per day
    #[serde(default = "default_cooldowns")]
    pub cooldowns: Vec<String>,
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            splits: default_splits(),
            allocations: default_allocations(),
            warmups: default_warmups(),
            cooldowns: default_cooldowns(),
        }
    }
}

impl PlanPolicy {
    /// The built-in policy, built on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_POLICY.get_or_init(Self::default)
    }

    /// Parse and validate a YAML policy document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML for this structure
    /// or fails [`Self::validate`]
    pub fn from_yaml_str(yaml: &str) -> AppResult<Self> {
        let policy: Self = serde_yaml::from_str(yaml).map_err(|e| {
            AppError::config_invalid(format!("Invalid plan policy: {e}")).with_source(e)
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read, parse, and validate a YAML policy file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn from_yaml_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Cannot read plan policy {}: {e}", path.display()))
                .with_source(e)
        })?;
        debug!(path = %path.display(), "Loaded plan policy file");
        Self::from_yaml_str(&yaml)
    }

    /// Serialize to YAML, e.g. to export the built-in tables for editing
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::serialization(e.to_string()).with_source(e))
    }

    /// Check structural invariants
    ///
    /// Every goal needs buckets in strictly ascending order whose last bucket
    /// covers a full week, and no pattern, pool, or draw may be empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first violation found
    pub fn validate(&self) -> AppResult<()> {
        for goal in Goal::ALL {
            let buckets = self
                .splits
                .get(&goal)
                .ok_or_else(|| invalid(format!("no split buckets for goal {goal}")))?;

            if buckets.last().map_or(0, |bucket| bucket.max_days) < MAX_DAYS_PER_WEEK {
                return Err(invalid(format!(
                    "split buckets for {goal} must cover {MAX_DAYS_PER_WEEK} days"
                )));
            }
            if buckets.windows(2).any(|pair| pair[0].max_days >= pair[1].max_days) {
                return Err(invalid(format!(
                    "split buckets for {goal} must be in ascending maxDays order"
                )));
            }
            if buckets.iter().any(|bucket| bucket.pattern.is_empty()) {
                return Err(invalid(format!("empty split pattern for {goal}")));
            }
        }

        for (goal, table) in &self.allocations {
            for (day_category, draws) in table {
                if draws.iter().any(|draw| draw.category.trim().is_empty()) {
                    return Err(invalid(format!(
                        "blank catalog category in allocation {goal}/{day_category}"
                    )));
                }
            }
        }

        if self.warmups.is_empty() || self.cooldowns.is_empty() {
            return Err(invalid("warmup and cooldown pools must not be empty".to_owned()));
        }

        for (goal, day_category) in self.unallocated_day_categories() {
            warn!(%goal, day_category, "Split references a day category with no allocation");
        }

        Ok(())
    }

    /// Ordered day categories for `goal` and `days`
    ///
    /// Unknown goals use the general split.
    #[must_use]
    pub fn split(&self, goal: Goal, days: usize) -> Vec<&str> {
        let Some(buckets) = self
            .splits
            .get(&goal)
            .or_else(|| self.splits.get(&Goal::General))
        else {
            return Vec::new();
        };

        let bucket = buckets
            .iter()
            .find(|bucket| days <= usize::from(bucket.max_days))
            .or_else(|| buckets.last());

        bucket.map_or_else(Vec::new, |bucket| {
            bucket
                .pattern
                .iter()
                .map(String::as_str)
                .cycle()
                .take(days)
                .collect()
        })
    }

    /// Catalog draws for one day; empty when the pair is unknown
    #[must_use]
    pub fn allocation(&self, goal: Goal, day_category: &str) -> &[CategoryDraw] {
        self.allocations
            .get(&goal)
            .and_then(|table| table.get(day_category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Sum of draw counts for one day
    #[must_use]
    pub fn planned_exercise_count(&self, goal: Goal, day_category: &str) -> usize {
        self.allocation(goal, day_category)
            .iter()
            .map(|draw| draw.count)
            .sum()
    }

    /// (goal, day category) pairs used by a split but absent from the allocation table
    #[must_use]
    pub fn unallocated_day_categories(&self) -> Vec<(Goal, &str)> {
        let mut missing: Vec<(Goal, &str)> = self
            .splits
            .iter()
            .flat_map(|(goal, buckets)| {
                buckets
                    .iter()
                    .flat_map(|bucket| bucket.pattern.iter())
                    .map(move |category| (*goal, category.as_str()))
            })
            .filter(|(goal, category)| self.allocation(*goal, category).is_empty())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

fn invalid(message: String) -> AppError {
    AppError::config_invalid(message)
}

fn bucket(max_days: u8, pattern: &[&str]) -> SplitBucket {
    SplitBucket {
        max_days,
        pattern: pattern.iter().map(|tag| (*tag).to_owned()).collect(),
    }
}

fn draws(pairs: &[(&str, usize)]) -> Vec<CategoryDraw> {
    pairs
        .iter()
        .map(|(category, count)| CategoryDraw {
            category: (*category).to_owned(),
            count: *count,
        })
        .collect()
}

fn default_splits() -> BTreeMap<Goal, Vec<SplitBucket>> {
    BTreeMap::from([
        (
            Goal::WeightLoss,
            vec![
                // Full body with day 2 as intervals and day 3 as cardio
                bucket(3, &[day::FULL_BODY, day::HIIT, day::CARDIO]),
                bucket(
                    MAX_DAYS_PER_WEEK,
                    &[
                        day::FULL_BODY,
                        day::HIIT,
                        day::CARDIO,
                        day::CORE,
                        day::HIIT,
                        day::FULL_BODY,
                        day::CARDIO,
                    ],
                ),
            ],
        ),
        (
            Goal::MuscleGain,
            vec![
                bucket(3, &[day::FULL_BODY]),
                bucket(4, &[day::UPPER, day::LOWER]),
                bucket(MAX_DAYS_PER_WEEK, &[day::PUSH, day::PULL, day::LEGS]),
            ],
        ),
        (
            Goal::Endurance,
            vec![
                bucket(3, &[day::CARDIO, day::CIRCUIT, day::RUNNING]),
                bucket(
                    MAX_DAYS_PER_WEEK,
                    &[
                        day::RUNNING,
                        day::CIRCUIT,
                        day::CARDIO,
                        day::RUNNING,
                        day::CIRCUIT,
                        day::CARDIO,
                    ],
                ),
            ],
        ),
        (
            Goal::General,
            vec![
                bucket(3, &[day::FULL_BODY, day::CARDIO, day::FLEXIBILITY]),
                bucket(
                    MAX_DAYS_PER_WEEK,
                    &[
                        day::FULL_BODY,
                        day::CARDIO,
                        day::FLEXIBILITY,
                        day::FULL_BODY,
                        day::CARDIO,
                        day::CORE,
                    ],
                ),
            ],
        ),
    ])
}

fn default_allocations() -> BTreeMap<Goal, BTreeMap<String, Vec<CategoryDraw>>> {
    let weight_loss = BTreeMap::from([
        (
            day::FULL_BODY.to_owned(),
            draws(&[(catalog::STRENGTH, 3), (catalog::CORE, 1), (catalog::CARDIO, 1)]),
        ),
        (day::HIIT.to_owned(), draws(&[(catalog::HIIT, 4), (catalog::CORE, 1)])),
        (day::CARDIO.to_owned(), draws(&[(catalog::CARDIO, 2), (catalog::CORE, 1)])),
        (day::CORE.to_owned(), draws(&[(catalog::CORE, 3), (catalog::HIIT, 1)])),
    ]);

    let muscle_gain = BTreeMap::from([
        (
            day::FULL_BODY.to_owned(),
            draws(&[
                (catalog::CHEST, 1),
                (catalog::BACK, 1),
                (catalog::LEGS, 1),
                (catalog::SHOULDERS, 1),
                (catalog::CORE, 1),
            ]),
        ),
        (
            day::UPPER.to_owned(),
            draws(&[
                (catalog::CHEST, 2),
                (catalog::BACK, 2),
                (catalog::SHOULDERS, 1),
                (catalog::ARMS, 1),
            ]),
        ),
        (day::LOWER.to_owned(), draws(&[(catalog::LEGS, 4), (catalog::CORE, 1)])),
        (
            day::PUSH.to_owned(),
            draws(&[(catalog::CHEST, 3), (catalog::SHOULDERS, 2), (catalog::ARMS, 1)]),
        ),
        (day::PULL.to_owned(), draws(&[(catalog::BACK, 3), (catalog::ARMS, 2)])),
        (day::LEGS.to_owned(), draws(&[(catalog::LEGS, 4), (catalog::CORE, 1)])),
    ]);

    let endurance = BTreeMap::from([
        (day::CARDIO.to_owned(), draws(&[(catalog::CARDIO, 3), (catalog::CORE, 1)])),
        (day::CIRCUIT.to_owned(), draws(&[(catalog::CIRCUIT, 4), (catalog::CORE, 1)])),
        (day::RUNNING.to_owned(), draws(&[(catalog::RUNNING, 2), (catalog::CORE, 1)])),
    ]);

    let general = BTreeMap::from([
        (
            day::FULL_BODY.to_owned(),
            draws(&[(catalog::STRENGTH, 3), (catalog::CORE, 1), (catalog::CARDIO, 1)]),
        ),
        (day::CARDIO.to_owned(), draws(&[(catalog::CARDIO, 2), (catalog::CORE, 1)])),
        (day::FLEXIBILITY.to_owned(), draws(&[(catalog::FLEXIBILITY, 4)])),
        (day::CORE.to_owned(), draws(&[(catalog::CORE, 3), (catalog::FLEXIBILITY, 1)])),
    ]);

    BTreeMap::from([
        (Goal::WeightLoss, weight_loss),
        (Goal::MuscleGain, muscle_gain),
        (Goal::Endurance, endurance),
        (Goal::General, general),
    ])
}

fn default_warmups() -> Vec<String> {
    [
        "5 minutes of light jogging followed by dynamic stretches",
        "Jumping jacks and arm circles for 5 minutes",
        "10 minutes of brisk walking with leg swings",
        "5 minutes on the rowing machine at an easy pace, then hip openers",
        "Jump rope for 3 minutes followed by bodyweight squats",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_cooldowns() -> Vec<String> {
    [
        "5 minutes of walking followed by static stretching",
        "Foam rolling major muscle groups for 5-10 minutes",
        "Yoga-based stretching routine for 10 minutes",
        "Deep breathing and full-body stretch for 5 minutes",
        "Easy cycling for 5 minutes and hamstring stretches",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}
