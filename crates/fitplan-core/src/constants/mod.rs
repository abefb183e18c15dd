// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Category tags, focus labels, weekday names, and planning defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Constants module
//!
//! Pure data constants organized by domain. Category tags are plain strings so
//! that policy tables can be loaded from configuration files.

/// Day-level category tags used by split tables
pub mod day_categories {
    /// Whole-body strength session
    pub const FULL_BODY: &str = "fullBody";
    /// High-intensity intervals
    pub const HIIT: &str = "hiit";
    /// Steady-state cardio
    pub const CARDIO: &str = "cardio";
    /// Core strength
    pub const CORE: &str = "core";
    /// Upper body strength
    pub const UPPER: &str = "upper";
    /// Lower body strength
    pub const LOWER: &str = "lower";
    /// Chest, shoulders, triceps
    pub const PUSH: &str = "push";
    /// Back and biceps
    pub const PULL: &str = "pull";
    /// Legs and glutes
    pub const LEGS: &str = "legs";
    /// Circuit conditioning
    pub const CIRCUIT: &str = "circuit";
    /// Running performance
    pub const RUNNING: &str = "running";
    /// Flexibility and mobility
    pub const FLEXIBILITY: &str = "flexibility";
}

/// Catalog category tags (goal-scoped exercise partitions)
pub mod catalog_categories {
    /// Chest exercises
    pub const CHEST: &str = "chest";
    /// Back exercises
    pub const BACK: &str = "back";
    /// Shoulder exercises
    pub const SHOULDERS: &str = "shoulders";
    /// Leg exercises
    pub const LEGS: &str = "legs";
    /// Arm exercises
    pub const ARMS: &str = "arms";
    /// Core exercises
    pub const CORE: &str = "core";
    /// Compound strength movements
    pub const STRENGTH: &str = "strength";
    /// Cardio machines and steady-state work
    pub const CARDIO: &str = "cardio";
    /// Interval drills
    pub const HIIT: &str = "hiit";
    /// Circuit stations
    pub const CIRCUIT: &str = "circuit";
    /// Running sessions
    pub const RUNNING: &str = "running";
    /// Stretching and mobility work
    pub const FLEXIBILITY: &str = "flexibility";
}

/// Human-readable focus labels for day categories
pub mod focus_labels {
    use super::day_categories;

    /// Label used when a category has no entry in [`FOCUS_LABELS`]
    pub const DEFAULT_FOCUS: &str = "General Workout";

    /// Category tag to focus label map
    pub const FOCUS_LABELS: &[(&str, &str)] = &[
        (day_categories::FULL_BODY, "Full Body Training"),
        (day_categories::HIIT, "High-Intensity Interval Training"),
        (day_categories::CARDIO, "Cardiovascular Endurance"),
        (day_categories::CORE, "Core Strength and Stability"),
        (day_categories::UPPER, "Upper Body Strength"),
        (day_categories::LOWER, "Lower Body Strength"),
        (day_categories::PUSH, "Push (Chest, Shoulders, Triceps)"),
        (day_categories::PULL, "Pull (Back, Biceps)"),
        (day_categories::LEGS, "Legs and Glutes"),
        (day_categories::CIRCUIT, "Circuit Training"),
        (day_categories::RUNNING, "Running Performance"),
        (day_categories::FLEXIBILITY, "Flexibility and Mobility"),
    ];

    /// Resolve the focus label for a category tag
    #[must_use]
    pub fn focus_label(category: &str) -> &'static str {
        FOCUS_LABELS
            .iter()
            .find(|(tag, _)| *tag == category)
            .map_or(DEFAULT_FOCUS, |(_, label)| *label)
    }
}

/// Calendar constants
pub mod calendar {
    /// Weekday names in plan order
    pub const WEEKDAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    /// Weekday name for a zero-based plan position (cycles past Sunday)
    #[must_use]
    pub const fn weekday_name(index: usize) -> &'static str {
        WEEKDAYS[index % WEEKDAYS.len()]
    }
}

/// Planning limits and fallbacks
pub mod planning {
    /// Fewest training days a plan can contain
    pub const MIN_DAYS_PER_WEEK: u8 = 1;
    /// Most training days a plan can contain
    pub const MAX_DAYS_PER_WEEK: u8 = 7;
    /// Day count used when the requested value cannot be parsed
    pub const DEFAULT_DAYS_PER_WEEK: u8 = 3;
    /// Unit appended to computed weights
    pub const DEFAULT_WEIGHT_UNIT: &str = "lbs";
    /// Weight text for exercises that need no external load
    pub const BODYWEIGHT: &str = "bodyweight";
    /// Weight text when body weight is missing or unusable
    pub const MODERATE_WEIGHT: &str = "moderate";
    /// Sets value for prescriptions without a sets component
    pub const SINGLE_SET: &str = "1";
}

/// Meal planning constants
pub mod nutrition {
    /// Daily calorie target when body weight is missing or unusable
    pub const FALLBACK_DAILY_CALORIES: u32 = 2000;
    /// Upper bound on any computed daily calorie target
    pub const MAX_DAILY_CALORIES: u32 = 10_000;
}
