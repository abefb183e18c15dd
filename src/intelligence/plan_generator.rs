// ABOUTME: Rule-based weekly workout plan generator over the exercise catalog
// ABOUTME: Picks a split, allocates exercises per day, samples without replacement, computes loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Workout plan generation
//!
//! Generation is a pure function of the request, the borrowed catalog and
//! policy, and a caller-supplied random source:
//!
//! 1. split selection from the policy's goal/day-count table
//! 2. per-day allocation of catalog categories and counts
//! 3. sampling of distinct entries per category
//! 4. load computation from body weight
//! 5. assembly with weekday names, focus labels, warmup and cooldown
//!
//! Generation never fails. Unknown lookups degrade to defaults or empty lists.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::exercise_catalog::{ExerciseCatalog, ExerciseCatalogEntry};
use super::plan_policy::PlanPolicy;
use crate::constants::calendar::weekday_name;
use crate::constants::focus_labels::focus_label;
use crate::constants::planning::{BODYWEIGHT, DEFAULT_WEIGHT_UNIT, MODERATE_WEIGHT, SINGLE_SET};
use crate::models::{
    sanitize_body_weight, ExercisePrescription, FitnessLevel, GeneratedDay, GeneratedPlan,
    PlanRequest,
};

/// Separators accepted between the sets and reps parts of a prescription
const SETS_SEPARATORS: [char; 3] = ['x', 'X', '\u{00d7}'];

/// Weekly workout plan generator
///
/// Borrows a read-only catalog and policy, so one generator can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct PlanGenerator<'a> {
    catalog: &'a ExerciseCatalog,
    policy: &'a PlanPolicy,
    weight_unit: String,
}

impl PlanGenerator<'static> {
    /// Generator over the built-in catalog and policy
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ExerciseCatalog::builtin(), PlanPolicy::builtin())
    }
}

impl<'a> PlanGenerator<'a> {
    /// Create a generator over an injected catalog and policy
    #[must_use]
    pub fn new(catalog: &'a ExerciseCatalog, policy: &'a PlanPolicy) -> Self {
        Self {
            catalog,
            policy,
            weight_unit: DEFAULT_WEIGHT_UNIT.to_owned(),
        }
    }

    /// Override the unit label appended to computed loads
    #[must_use]
    pub fn with_weight_unit(mut self, unit: impl Into<String>) -> Self {
        self.weight_unit = unit.into();
        self
    }

    /// Catalog this generator draws from
    #[must_use]
    pub const fn catalog(&self) -> &'a ExerciseCatalog {
        self.catalog
    }

    /// Policy this generator follows
    #[must_use]
    pub const fn policy(&self) -> &'a PlanPolicy {
        self.policy
    }

    /// Generate a weekly plan
    pub fn generate<R: Rng + ?Sized>(&self, request: &PlanRequest, rng: &mut R) -> GeneratedPlan {
        let days = request.days();
        let split = self.policy.split(request.goal, days);

        debug!(
            goal = %request.goal,
            level = %request.fitness_level,
            days,
            split = ?split,
            "Generating workout plan"
        );

        let workout_days = split
            .iter()
            .enumerate()
            .map(|(index, day_category)| self.generate_day(request, index, day_category, rng))
            .collect();

        GeneratedPlan {
            summary: plan_summary(request, days),
            workout_days,
        }
    }

    fn generate_day<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        index: usize,
        day_category: &str,
        rng: &mut R,
    ) -> GeneratedDay {
        let allocation = self.policy.allocation(request.goal, day_category);
        if allocation.is_empty() {
            warn!(goal = %request.goal, day_category, "No allocation for day category");
        }

        let mut exercises = Vec::new();
        for draw in allocation {
            let entries = self.catalog.category(request.goal, &draw.category);
            if entries.len() < draw.count {
                warn!(
                    goal = %request.goal,
                    category = %draw.category,
                    requested = draw.count,
                    available = entries.len(),
                    "Catalog category smaller than allocation"
                );
            }

            exercises.extend(
                sample_distinct_indices(entries.len(), draw.count, rng)
                    .into_iter()
                    .map(|i| self.prescribe(&entries[i], request.fitness_level, request.weight)),
            );
        }

        let warmup = self.policy.warmups.choose(rng).cloned().unwrap_or_default();
        let cooldown = self.policy.cooldowns.choose(rng).cloned().unwrap_or_default();

        debug!(
            day = weekday_name(index),
            day_category,
            exercises = exercises.len(),
            "Assembled workout day"
        );

        GeneratedDay {
            day: weekday_name(index).to_owned(),
            focus: focus_label(day_category).to_owned(),
            warmup,
            exercises,
            cooldown,
        }
    }

    fn prescribe(
        &self,
        entry: &ExerciseCatalogEntry,
        level: FitnessLevel,
        body_weight: Option<f64>,
    ) -> ExercisePrescription {
        let (sets, reps) = split_prescription(entry.prescriptions.for_level(level));
        ExercisePrescription {
            name: entry.name.clone(),
            sets,
            reps,
            weight: weight_for(entry, body_weight, &self.weight_unit),
            notes: entry.notes.clone().unwrap_or_default(),
        }
    }
}

/// Generate a plan from raw web-form values with the built-in catalog and policy
///
/// Unknown goals fall back to general, unknown levels to beginner, and
/// unparseable day counts to the default.
pub fn generate_workout_plan<R: Rng + ?Sized>(
    weight: &str,
    goal: &str,
    fitness_level: &str,
    days_per_week: &str,
    limitations: Option<&str>,
    rng: &mut R,
) -> GeneratedPlan {
    let request = PlanRequest::from_raw(weight, goal, fitness_level, days_per_week, limitations);
    PlanGenerator::builtin().generate(&request, rng)
}

/// Split a prescription into `(sets, reps)`
///
/// `"3x12"` gives `("3", "12")` and `"4 x 30 seconds"` gives `("4", "30 seconds")`.
/// Text without a numeric sets part before a separator is all reps with a
/// single set, e.g. `"20 minutes"` gives `("1", "20 minutes")`.
#[must_use]
pub fn split_prescription(prescription: &str) -> (String, String) {
    let text = prescription.trim();

    for (at, separator) in text.char_indices().filter(|(_, c)| SETS_SEPARATORS.contains(c)) {
        let sets = text[..at].trim();
        let reps = text[at + separator.len_utf8()..].trim();
        if !sets.is_empty() && sets.chars().all(|c| c.is_ascii_digit()) && !reps.is_empty() {
            return (sets.to_owned(), reps.to_owned());
        }
    }

    (SINGLE_SET.to_owned(), text.to_owned())
}

/// Displayed load for one entry
///
/// Entries without `uses_weight` show `"bodyweight"`. Weighted entries show
/// `round(body_weight * percentage)` and the unit, or `"moderate"` when the
/// body weight or the percentage is missing or unusable.
#[must_use]
pub fn weight_for(entry: &ExerciseCatalogEntry, body_weight: Option<f64>, unit: &str) -> String {
    if !entry.uses_weight {
        return BODYWEIGHT.to_owned();
    }

    let load = body_weight
        .and_then(sanitize_body_weight)
        .zip(entry.weight_percentage.filter(|pct| pct.is_finite()))
        .map(|(weight, pct)| (weight * pct).round());

    load.map_or_else(
        || MODERATE_WEIGHT.to_owned(),
        |load| format!("{} {unit}", load as i64),
    )
}

/// Draw `min(count, len)` distinct indices below `len`, uniformly, in draw order
///
/// Duplicate draws are rejected and redrawn.
pub fn sample_distinct_indices<R: Rng + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let wanted = count.min(len);
    let mut seen = HashSet::with_capacity(wanted);
    let mut picked = Vec::with_capacity(wanted);

    while picked.len() < wanted {
        let index = rng.gen_range(0..len);
        if seen.insert(index) {
            picked.push(index);
        }
    }

    picked
}

fn plan_summary(request: &PlanRequest, days: usize) -> String {
    let mut summary = format!(
        "This {days}-day {} plan is designed for the {} fitness level.",
        request.goal.label(),
        request.fitness_level
    );
    if let Some(limitations) = request.limitations_text() {
        summary.push_str(&format!(
            " It has been adjusted to account for: {limitations}."
        ));
    }
    summary
}
