// ABOUTME: Exercise catalog grouped by goal and category with per-level prescriptions
// ABOUTME: Ships a built-in read-only catalog and supports small injected catalogs for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Exercise catalog
//!
//! The catalog is read-only once built. The plan generator borrows it, so
//! callers can swap in their own catalog without touching generation logic.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::constants::catalog_categories::{
    ARMS, BACK, CARDIO, CHEST, CIRCUIT, CORE, FLEXIBILITY, HIIT, LEGS, RUNNING, SHOULDERS,
    STRENGTH,
};
use crate::models::{FitnessLevel, Goal};

static BUILTIN_CATALOG: OnceLock<ExerciseCatalog> = OnceLock::new();

/// Prescription text per fitness level
///
/// Intermediate and advanced text is optional and falls back to beginner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescriptions {
    /// Beginner prescription, always present
    pub beginner: String,
    /// Intermediate prescription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate: Option<String>,
    /// Advanced prescription
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<String>,
}

impl Prescriptions {
    /// Prescription for `level`, falling back to beginner text
    #[must_use]
    pub fn for_level(&self, level: FitnessLevel) -> &str {
        let specific = match level {
            FitnessLevel::Beginner => None,
            FitnessLevel::Intermediate => self.intermediate.as_deref(),
            FitnessLevel::Advanced => self.advanced.as_deref(),
        };
        specific.unwrap_or(&self.beginner)
    }
}

/// One exercise in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCatalogEntry {
    /// Exercise name
    pub name: String,
    /// Sets x reps (or duration) per level
    pub prescriptions: Prescriptions,
    /// Whether a load is computed from body weight
    #[serde(default)]
    pub uses_weight: bool,
    /// Fraction of body weight to load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_percentage: Option<f64>,
    /// Coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExerciseCatalogEntry {
    /// Bodyweight exercise with the same prescription at every level
    pub fn new(name: impl Into<String>, beginner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prescriptions: Prescriptions {
                beginner: beginner.into(),
                intermediate: None,
                advanced: None,
            },
            uses_weight: false,
            weight_percentage: None,
            notes: None,
        }
    }

    /// Set intermediate and advanced prescriptions
    #[must_use]
    pub fn with_levels(
        mut self,
        intermediate: impl Into<String>,
        advanced: impl Into<String>,
    ) -> Self {
        self.prescriptions.intermediate = Some(intermediate.into());
        self.prescriptions.advanced = Some(advanced.into());
        self
    }

    /// Load this exercise at `percentage` of body weight
    #[must_use]
    pub fn weighted(mut self, percentage: f64) -> Self {
        self.uses_weight = true;
        self.weight_percentage = Some(percentage);
        self
    }

    /// Attach coaching notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Exercises grouped by goal, then by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    entries: HashMap<Goal, HashMap<String, Vec<ExerciseCatalogEntry>>>,
}

impl ExerciseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog, built on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_CATALOG.get_or_init(build_builtin_catalog)
    }

    /// Append one entry under `goal` / `category`
    pub fn insert(&mut self, goal: Goal, category: impl Into<String>, entry: ExerciseCatalogEntry) {
        self.entries
            .entry(goal)
            .or_default()
            .entry(category.into())
            .or_default()
            .push(entry);
    }

    /// Builder form of [`Self::insert`] for a whole category
    #[must_use]
    pub fn with_category(
        mut self,
        goal: Goal,
        category: impl Into<String>,
        entries: Vec<ExerciseCatalogEntry>,
    ) -> Self {
        self.entries
            .entry(goal)
            .or_default()
            .entry(category.into())
            .or_default()
            .extend(entries);
        self
    }

    /// Entries for `goal` / `category`; empty when either is unknown
    #[must_use]
    pub fn category(&self, goal: Goal, category: &str) -> &[ExerciseCatalogEntry] {
        self.entries
            .get(&goal)
            .and_then(|categories| categories.get(category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Category tags present for `goal`, sorted
    #[must_use]
    pub fn categories(&self, goal: Goal) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .entries
            .get(&goal)
            .map(|categories| categories.keys().map(String::as_str).collect())
            .unwrap_or_default();
        tags.sort_unstable();
        tags
    }

    /// Total number of entries across all goals
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Built-in catalog data
// ============================================================================

struct ExerciseSeed {
    name: &'static str,
    levels: [&'static str; 3],
    weight_percentage: Option<f64>,
    notes: &'static str,
}

const fn bodyweight(
    name: &'static str,
    levels: [&'static str; 3],
    notes: &'static str,
) -> ExerciseSeed {
    ExerciseSeed {
        name,
        levels,
        weight_percentage: None,
        notes,
    }
}

const fn loaded(
    name: &'static str,
    levels: [&'static str; 3],
    percentage: f64,
    notes: &'static str,
) -> ExerciseSeed {
    ExerciseSeed {
        name,
        levels,
        weight_percentage: Some(percentage),
        notes,
    }
}

impl ExerciseSeed {
    fn to_entry(&self) -> ExerciseCatalogEntry {
        let [beginner, intermediate, advanced] = self.levels;
        let mut entry =
            ExerciseCatalogEntry::new(self.name, beginner).with_levels(intermediate, advanced);
        if let Some(percentage) = self.weight_percentage {
            entry = entry.weighted(percentage);
        }
        if !self.notes.is_empty() {
            entry = entry.with_notes(self.notes);
        }
        entry
    }
}

const WEIGHT_LOSS_STRENGTH: &[ExerciseSeed] = &[
    loaded("Goblet Squat", ["3x12", "3x15", "4x15"], 0.2, "Keep chest tall and heels down"),
    loaded(
        "Dumbbell Deadlift",
        ["3x10", "3x12", "4x12"],
        0.3,
        "Hinge at the hips with a flat back",
    ),
    bodyweight("Push-ups", ["3x8", "3x15", "4x20"], "Drop to knees if form breaks down"),
    loaded("Dumbbell Row", ["3x10", "3x12", "4x12"], 0.15, "Pull elbow toward the hip"),
    bodyweight("Walking Lunges", ["3x10", "3x12", "4x16"], "Alternate legs each step"),
];

const WEIGHT_LOSS_CARDIO: &[ExerciseSeed] = &[
    bodyweight(
        "Brisk Walking",
        ["20 minutes", "30 minutes", "45 minutes"],
        "Keep a pace where talking is possible",
    ),
    bodyweight(
        "Stationary Bike",
        ["15 minutes", "25 minutes", "35 minutes"],
        "Moderate resistance, steady cadence",
    ),
    bodyweight("Elliptical Trainer", ["15 minutes", "25 minutes", "30 minutes"], ""),
    bodyweight(
        "Rowing Machine",
        ["10 minutes", "20 minutes", "30 minutes"],
        "Drive with the legs first",
    ),
    bodyweight(
        "Incline Treadmill Walk",
        ["15 minutes", "25 minutes", "35 minutes"],
        "Avoid holding the handrails",
    ),
];

const WEIGHT_LOSS_HIIT: &[ExerciseSeed] = &[
    bodyweight("Burpees", ["3x8", "4x10", "5x12"], "Rest 30 seconds between sets"),
    bodyweight("Mountain Climbers", ["3x20 seconds", "4x30 seconds", "5x40 seconds"], ""),
    bodyweight("Jump Squats", ["3x10", "4x12", "5x15"], "Land softly through the whole foot"),
    bodyweight("High Knees", ["3x20 seconds", "4x30 seconds", "5x45 seconds"], ""),
    loaded(
        "Kettlebell Swings",
        ["3x12", "4x15", "5x20"],
        0.15,
        "Power comes from the hips, not the arms",
    ),
    bodyweight("Skater Jumps", ["3x10", "4x14", "5x20"], ""),
];

const WEIGHT_LOSS_CORE: &[ExerciseSeed] = &[
    bodyweight(
        "Plank",
        ["3x20 seconds", "3x40 seconds", "4x60 seconds"],
        "Squeeze glutes and brace the abs",
    ),
    bodyweight("Bicycle Crunches", ["3x12", "3x20", "4x25"], ""),
    bodyweight("Dead Bug", ["3x8", "3x12", "4x15"], "Press lower back into the floor"),
    bodyweight("Russian Twists", ["3x12", "3x20", "4x30"], ""),
    bodyweight("Flutter Kicks", ["3x15 seconds", "3x30 seconds", "4x45 seconds"], ""),
];

const MUSCLE_GAIN_CHEST: &[ExerciseSeed] = &[
    loaded(
        "Barbell Bench Press",
        ["3x8", "4x8-10", "5x5"],
        0.6,
        "Control the descent, touch mid-chest",
    ),
    loaded("Incline Dumbbell Press", ["3x10", "4x10", "4x8"], 0.25, "Bench at 30-45 degrees"),
    loaded("Dumbbell Flyes", ["3x12", "3x12", "4x10"], 0.1, "Slight bend in the elbows throughout"),
    bodyweight("Chest Dips", ["3x6", "3x10", "4x12"], "Lean forward to bias the chest"),
    loaded("Cable Crossover", ["3x12", "3x15", "4x15"], 0.1, ""),
];

const MUSCLE_GAIN_BACK: &[ExerciseSeed] = &[
    loaded("Barbell Row", ["3x8", "4x8-10", "5x6"], 0.5, "Keep torso near parallel to the floor"),
    bodyweight("Pull-ups", ["3x5", "4x8", "5x10"], "Use a band for assistance if needed"),
    loaded("Lat Pulldown", ["3x10", "4x10", "4x12"], 0.45, ""),
    loaded("Seated Cable Row", ["3x10", "4x12", "4x12"], 0.4, "Squeeze shoulder blades together"),
    loaded("Single-Arm Dumbbell Row", ["3x10", "4x10", "4x12"], 0.25, ""),
];

const MUSCLE_GAIN_SHOULDERS: &[ExerciseSeed] = &[
    loaded("Overhead Press", ["3x8", "4x8", "5x5"], 0.4, "Brace the core, avoid leaning back"),
    loaded("Lateral Raises", ["3x12", "3x15", "4x15"], 0.05, ""),
    loaded("Face Pulls", ["3x15", "3x15", "4x20"], 0.15, "Pull toward the forehead, elbows high"),
    loaded("Arnold Press", ["3x10", "4x10", "4x12"], 0.15, ""),
];

const MUSCLE_GAIN_LEGS: &[ExerciseSeed] = &[
    loaded("Barbell Back Squat", ["3x8", "4x8-10", "5x5"], 0.8, "Hit at least parallel depth"),
    loaded("Romanian Deadlift", ["3x10", "4x10", "4x8"], 0.6, "Feel the stretch in the hamstrings"),
    loaded("Leg Press", ["3x12", "4x12", "4x15"], 1.2, ""),
    loaded("Bulgarian Split Squat", ["3x8", "3x10", "4x12"], 0.2, "Rear foot elevated on a bench"),
    loaded("Leg Curl", ["3x12", "3x12", "4x15"], 0.25, ""),
    loaded("Standing Calf Raise", ["3x15", "4x15", "4x20"], 0.5, "Pause at the top of each rep"),
];

const MUSCLE_GAIN_ARMS: &[ExerciseSeed] = &[
    loaded("Barbell Curl", ["3x10", "3x12", "4x10"], 0.2, "No swinging"),
    loaded("Skull Crushers", ["3x10", "3x12", "4x10"], 0.2, ""),
    loaded("Hammer Curls", ["3x12", "3x12", "4x12"], 0.1, ""),
    loaded("Triceps Pushdown", ["3x12", "3x15", "4x15"], 0.2, "Keep elbows pinned to the sides"),
    bodyweight("Close-Grip Push-ups", ["3x8", "3x12", "4x15"], ""),
];

const MUSCLE_GAIN_CORE: &[ExerciseSeed] = &[
    bodyweight("Hanging Leg Raises", ["3x8", "3x12", "4x15"], "Avoid swinging"),
    loaded("Cable Crunch", ["3x12", "3x15", "4x15"], 0.3, ""),
    bodyweight("Ab Wheel Rollout", ["3x6", "3x10", "4x12"], "Stop before the lower back sags"),
    bodyweight("Side Plank", ["3x20 seconds", "3x30 seconds", "4x45 seconds"], ""),
];

const ENDURANCE_RUNNING: &[ExerciseSeed] = &[
    bodyweight("Easy Run", ["20 minutes", "35 minutes", "50 minutes"], "Conversational pace"),
    bodyweight("Tempo Run", ["15 minutes", "25 minutes", "35 minutes"], "Comfortably hard effort"),
    bodyweight(
        "Hill Repeats",
        ["4x60 seconds", "6x90 seconds", "8x90 seconds"],
        "Jog back down to recover",
    ),
    bodyweight("Interval 400s", ["4x400m", "6x400m", "10x400m"], "Equal time jog between reps"),
    bodyweight(
        "Long Run",
        ["30 minutes", "60 minutes", "90 minutes"],
        "Keep effort easy throughout",
    ),
];

const ENDURANCE_CARDIO: &[ExerciseSeed] = &[
    bodyweight("Cycling", ["30 minutes", "45 minutes", "60 minutes"], ""),
    bodyweight(
        "Swimming",
        ["15 minutes", "30 minutes", "45 minutes"],
        "Mix freestyle with easy backstroke",
    ),
    bodyweight(
        "Rowing Intervals",
        ["4x3 minutes", "5x4 minutes", "6x5 minutes"],
        "One minute easy between intervals",
    ),
    bodyweight("Stair Climber", ["10 minutes", "20 minutes", "30 minutes"], ""),
    bodyweight("Jump Rope", ["5x1 minute", "6x2 minutes", "8x2 minutes"], ""),
];

const ENDURANCE_CIRCUIT: &[ExerciseSeed] = &[
    bodyweight("Box Step-ups", ["3x10", "3x15", "4x20"], ""),
    loaded("Kettlebell Swings", ["3x15", "4x20", "5x25"], 0.15, "Hinge, don't squat"),
    bodyweight("Burpees", ["3x8", "4x12", "5x15"], ""),
    loaded("Thrusters", ["3x10", "4x12", "5x15"], 0.2, "Use the leg drive to press"),
    bodyweight("Battle Ropes", ["3x20 seconds", "4x30 seconds", "5x40 seconds"], ""),
    bodyweight("Walking Lunges", ["3x12", "4x16", "5x20"], ""),
];

const ENDURANCE_CORE: &[ExerciseSeed] = &[
    bodyweight("Plank", ["3x30 seconds", "3x45 seconds", "4x60 seconds"], ""),
    bodyweight("Bird Dog", ["3x10", "3x12", "4x15"], "Move slowly, keep hips level"),
    bodyweight("Hollow Body Hold", ["3x15 seconds", "3x30 seconds", "4x40 seconds"], ""),
    bodyweight("Mountain Climbers", ["3x20 seconds", "3x30 seconds", "4x45 seconds"], ""),
];

const GENERAL_STRENGTH: &[ExerciseSeed] = &[
    loaded("Dumbbell Squat", ["3x10", "3x12", "4x12"], 0.2, ""),
    bodyweight("Push-ups", ["3x8", "3x12", "4x20"], ""),
    loaded("Dumbbell Bench Press", ["3x10", "3x12", "4x10"], 0.2, ""),
    loaded("Bent-Over Row", ["3x10", "3x12", "4x12"], 0.3, "Neutral spine throughout"),
    bodyweight("Glute Bridges", ["3x12", "3x15", "4x20"], "Squeeze at the top"),
    loaded("Dumbbell Shoulder Press", ["3x10", "3x12", "4x12"], 0.1, ""),
];

const GENERAL_CARDIO: &[ExerciseSeed] = &[
    bodyweight("Jogging", ["15 minutes", "25 minutes", "35 minutes"], ""),
    bodyweight("Cycling", ["20 minutes", "30 minutes", "45 minutes"], ""),
    bodyweight("Jumping Jacks", ["3x30 seconds", "3x60 seconds", "4x60 seconds"], ""),
    bodyweight("Swimming", ["15 minutes", "25 minutes", "35 minutes"], ""),
    bodyweight(
        "Dance Cardio",
        ["15 minutes", "25 minutes", "30 minutes"],
        "Keep moving between songs",
    ),
];

const GENERAL_FLEXIBILITY: &[ExerciseSeed] = &[
    bodyweight(
        "Hamstring Stretch",
        ["2x30 seconds", "3x30 seconds", "3x45 seconds"],
        "No bouncing",
    ),
    bodyweight("Hip Flexor Stretch", ["2x30 seconds", "3x30 seconds", "3x45 seconds"], ""),
    bodyweight("Cat-Cow", ["2x10", "3x10", "3x15"], "Move with the breath"),
    bodyweight("Downward Dog", ["2x30 seconds", "3x30 seconds", "3x60 seconds"], ""),
    bodyweight("World's Greatest Stretch", ["2x5", "3x6", "3x8"], ""),
    bodyweight("Thoracic Rotations", ["2x8", "3x10", "3x12"], ""),
];

const GENERAL_CORE: &[ExerciseSeed] = &[
    bodyweight("Plank", ["3x20 seconds", "3x40 seconds", "4x60 seconds"], ""),
    bodyweight("Crunches", ["3x12", "3x20", "4x25"], ""),
    bodyweight("Bird Dog", ["3x8", "3x12", "4x15"], ""),
    bodyweight("Leg Raises", ["3x8", "3x12", "4x15"], "Lower slowly"),
    bodyweight("Side Plank", ["3x15 seconds", "3x30 seconds", "4x45 seconds"], ""),
];

const BUILTIN_TABLE: &[(Goal, &str, &[ExerciseSeed])] = &[
    (Goal::WeightLoss, STRENGTH, WEIGHT_LOSS_STRENGTH),
    (Goal::WeightLoss, CARDIO, WEIGHT_LOSS_CARDIO),
    (Goal::WeightLoss, HIIT, WEIGHT_LOSS_HIIT),
    (Goal::WeightLoss, CORE, WEIGHT_LOSS_CORE),
    (Goal::MuscleGain, CHEST, MUSCLE_GAIN_CHEST),
    (Goal::MuscleGain, BACK, MUSCLE_GAIN_BACK),
    (Goal::MuscleGain, SHOULDERS, MUSCLE_GAIN_SHOULDERS),
    (Goal::MuscleGain, LEGS, MUSCLE_GAIN_LEGS),
    (Goal::MuscleGain, ARMS, MUSCLE_GAIN_ARMS),
    (Goal::MuscleGain, CORE, MUSCLE_GAIN_CORE),
    (Goal::Endurance, RUNNING, ENDURANCE_RUNNING),
    (Goal::Endurance, CARDIO, ENDURANCE_CARDIO),
    (Goal::Endurance, CIRCUIT, ENDURANCE_CIRCUIT),
    (Goal::Endurance, CORE, ENDURANCE_CORE),
    (Goal::General, STRENGTH, GENERAL_STRENGTH),
    (Goal::General, CARDIO, GENERAL_CARDIO),
    (Goal::General, FLEXIBILITY, GENERAL_FLEXIBILITY),
    (Goal::General, CORE, GENERAL_CORE),
];

fn build_builtin_catalog() -> ExerciseCatalog {
    BUILTIN_TABLE
        .iter()
        .fold(ExerciseCatalog::new(), |catalog, (goal, category, seeds)| {
            let entries = seeds.iter().map(ExerciseSeed::to_entry).collect();
            catalog.with_category(*goal, *category, entries)
        })
}
