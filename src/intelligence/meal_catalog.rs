// ABOUTME: Meal catalog keyed by goal and meal slot with reference calories and macros
// ABOUTME: Entries are scaled by the meal planner to each slot's share of the daily target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::{Goal, MealSlot};

static BUILTIN_MEAL_CATALOG: OnceLock<MealCatalog> = OnceLock::new();

/// One dish with reference nutrition for a single serving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCatalogEntry {
    /// Dish name
    pub name: String,
    /// Short description
    pub description: String,
    /// Reference serving energy in kcal
    pub calories: u32,
    /// Protein in grams per reference serving
    pub protein_grams: u32,
    /// Carbohydrates in grams per reference serving
    pub carbs_grams: u32,
    /// Fat in grams per reference serving
    pub fat_grams: u32,
    /// Contains no meat or fish
    #[serde(default)]
    pub vegetarian: bool,
}

/// Dishes grouped by goal and meal slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCatalog {
    entries: HashMap<Goal, HashMap<MealSlot, Vec<MealCatalogEntry>>>,
}

impl MealCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog, built on first use
    #[must_use]
    pub fn builtin() -> &'static Self {
        BUILTIN_MEAL_CATALOG.get_or_init(build_builtin_meal_catalog)
    }

    /// Append one dish under `goal` / `slot`
    pub fn insert(&mut self, goal: Goal, slot: MealSlot, entry: MealCatalogEntry) {
        self.entries
            .entry(goal)
            .or_default()
            .entry(slot)
            .or_default()
            .push(entry);
    }

    /// Builder form of [`Self::insert`]
    #[must_use]
    pub fn with_entry(mut self, goal: Goal, slot: MealSlot, entry: MealCatalogEntry) -> Self {
        self.insert(goal, slot, entry);
        self
    }

    /// Dishes for `goal` / `slot`; empty when unknown
    #[must_use]
    pub fn slot(&self, goal: Goal, slot: MealSlot) -> &[MealCatalogEntry] {
        self.entries
            .get(&goal)
            .and_then(|slots| slots.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of dishes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Whether the catalog has no dishes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Built-in catalog data
// ============================================================================

/// name, description, kcal, protein, carbs, fat, vegetarian
type MealSeed = (&'static str, &'static str, u32, u32, u32, u32, bool);

const WEIGHT_LOSS_MEALS: [(MealSlot, &[MealSeed]); 4] = [
    (
        MealSlot::Breakfast,
        &[
            (
                "Greek Yogurt Parfait",
                "Nonfat Greek yogurt with berries and a sprinkle of oats",
                300,
                25,
                35,
                6,
                true,
            ),
            (
                "Veggie Egg White Omelet",
                "Egg whites with spinach, peppers and onions",
                250,
                26,
                10,
                8,
                true,
            ),
            (
                "Overnight Oats",
                "Rolled oats soaked in almond milk with chia and apple",
                320,
                12,
                48,
                9,
                true,
            ),
        ],
    ),
    (
        MealSlot::Lunch,
        &[
            (
                "Grilled Chicken Salad",
                "Mixed greens, grilled chicken, cucumber and vinaigrette",
                420,
                38,
                18,
                20,
                false,
            ),
            (
                "Lentil Soup",
                "Red lentils simmered with carrots, celery and cumin",
                380,
                22,
                55,
                7,
                true,
            ),
            (
                "Turkey Lettuce Wraps",
                "Lean ground turkey with water chestnuts in butter lettuce",
                400,
                34,
                16,
                21,
                false,
            ),
        ],
    ),
    (
        MealSlot::Dinner,
        &[
            (
                "Baked Salmon with Asparagus",
                "Lemon-herb salmon fillet and roasted asparagus",
                450,
                40,
                12,
                26,
                false,
            ),
            (
                "Tofu Stir-Fry",
                "Firm tofu with broccoli, snap peas and light soy sauce",
                400,
                26,
                30,
                18,
                true,
            ),
            (
                "Zucchini Noodle Bolognese",
                "Lean beef sauce over spiralized zucchini",
                430,
                35,
                20,
                22,
                false,
            ),
        ],
    ),
    (
        MealSlot::Snack,
        &[
            (
                "Apple with Almond Butter",
                "One medium apple and a tablespoon of almond butter",
                190,
                4,
                25,
                9,
                true,
            ),
            (
                "Cottage Cheese Cup",
                "Low-fat cottage cheese with cucumber slices",
                150,
                20,
                8,
                3,
                true,
            ),
            (
                "Hummus and Carrots",
                "Carrot sticks with two tablespoons of hummus",
                160,
                5,
                18,
                8,
                true,
            ),
        ],
    ),
];

const MUSCLE_GAIN_MEALS: [(MealSlot, &[MealSeed]); 4] = [
    (
        MealSlot::Breakfast,
        &[
            (
                "Protein Pancakes",
                "Oat and whey pancakes with banana and maple syrup",
                650,
                45,
                80,
                14,
                true,
            ),
            (
                "Steak and Eggs",
                "Sirloin strip, three eggs and whole-grain toast",
                700,
                55,
                35,
                36,
                false,
            ),
            (
                "Peanut Butter Oatmeal",
                "Oats cooked in milk with peanut butter and honey",
                620,
                28,
                78,
                22,
                true,
            ),
        ],
    ),
    (
        MealSlot::Lunch,
        &[
            (
                "Chicken Rice Bowl",
                "Grilled chicken thighs, jasmine rice, black beans and salsa",
                800,
                55,
                95,
                20,
                false,
            ),
            (
                "Beef Burrito",
                "Lean ground beef, rice, cheese and pico de gallo in a flour tortilla",
                850,
                50,
                90,
                30,
                false,
            ),
            (
                "Tempeh Quinoa Bowl",
                "Marinated tempeh over quinoa with roasted sweet potato",
                750,
                40,
                88,
                24,
                true,
            ),
        ],
    ),
    (
        MealSlot::Dinner,
        &[
            (
                "Salmon with Sweet Potato",
                "Roasted salmon, mashed sweet potato and green beans",
                780,
                50,
                70,
                30,
                false,
            ),
            (
                "Turkey Meatball Pasta",
                "Whole-wheat spaghetti with turkey meatballs in marinara",
                820,
                55,
                95,
                22,
                false,
            ),
            (
                "Chickpea Curry with Rice",
                "Chickpeas and spinach in coconut curry over basmati rice",
                760,
                28,
                110,
                24,
                true,
            ),
        ],
    ),
    (
        MealSlot::Snack,
        &[
            ("Protein Shake", "Whey protein blended with milk and a banana", 350, 35, 40, 6, true),
            (
                "Trail Mix",
                "Almonds, cashews, raisins and dark chocolate chips",
                400,
                12,
                35,
                25,
                true,
            ),
            ("Tuna on Crackers", "Canned tuna with whole-grain crackers", 300, 30, 25, 8, false),
        ],
    ),
];

const ENDURANCE_MEALS: [(MealSlot, &[MealSeed]); 4] = [
    (
        MealSlot::Breakfast,
        &[
            (
                "Bagel with Eggs",
                "Whole-grain bagel, scrambled eggs and orange juice",
                550,
                25,
                75,
                15,
                true,
            ),
            (
                "Banana Oat Smoothie",
                "Oats, banana, yogurt and honey blended with milk",
                500,
                20,
                85,
                9,
                true,
            ),
            (
                "Breakfast Burrito",
                "Eggs, potatoes, turkey sausage and salsa in a tortilla",
                580,
                30,
                60,
                22,
                false,
            ),
        ],
    ),
    (
        MealSlot::Lunch,
        &[
            (
                "Pasta Primavera",
                "Penne with seasonal vegetables and parmesan",
                700,
                25,
                110,
                16,
                true,
            ),
            (
                "Chicken Pesto Wrap",
                "Grilled chicken, pesto, tomato and greens",
                650,
                42,
                65,
                22,
                false,
            ),
            (
                "Quinoa Power Salad",
                "Quinoa, black beans, corn, avocado and lime",
                620,
                22,
                85,
                20,
                true,
            ),
        ],
    ),
    (
        MealSlot::Dinner,
        &[
            (
                "Teriyaki Chicken with Rice",
                "Chicken breast glazed in teriyaki with steamed rice",
                680,
                45,
                95,
                12,
                false,
            ),
            (
                "Shrimp Pasta",
                "Linguine with garlic shrimp and cherry tomatoes",
                700,
                40,
                90,
                18,
                false,
            ),
            (
                "Black Bean Enchiladas",
                "Corn tortillas filled with black beans and cheese",
                650,
                28,
                85,
                20,
                true,
            ),
        ],
    ),
    (
        MealSlot::Snack,
        &[
            ("Energy Bar", "Oat and date bar with nuts", 250, 8, 38, 8, true),
            (
                "Rice Cakes with Honey",
                "Two rice cakes with honey and sliced banana",
                220,
                3,
                50,
                1,
                true,
            ),
            ("Chocolate Milk", "Low-fat chocolate milk", 200, 8, 30, 5, true),
        ],
    ),
];

const GENERAL_MEALS: [(MealSlot, &[MealSeed]); 4] = [
    (
        MealSlot::Breakfast,
        &[
            (
                "Avocado Toast with Egg",
                "Whole-grain toast, smashed avocado and a poached egg",
                420,
                16,
                35,
                24,
                true,
            ),
            (
                "Berry Smoothie Bowl",
                "Mixed berries, banana and yogurt topped with granola",
                400,
                14,
                65,
                10,
                true,
            ),
            (
                "Turkey Breakfast Sandwich",
                "English muffin with turkey, egg and cheese",
                450,
                30,
                35,
                18,
                false,
            ),
        ],
    ),
    (
        MealSlot::Lunch,
        &[
            (
                "Mediterranean Bowl",
                "Farro, chickpeas, cucumber, feta and olives",
                600,
                22,
                70,
                24,
                true,
            ),
            (
                "Chicken Caesar Wrap",
                "Grilled chicken, romaine and light Caesar dressing",
                580,
                40,
                45,
                24,
                false,
            ),
            (
                "Tomato Basil Soup and Sandwich",
                "Tomato soup with grilled cheese on whole-grain bread",
                560,
                20,
                65,
                22,
                true,
            ),
        ],
    ),
    (
        MealSlot::Dinner,
        &[
            (
                "Grilled Fish Tacos",
                "White fish, cabbage slaw and lime crema in corn tortillas",
                550,
                35,
                50,
                20,
                false,
            ),
            (
                "Vegetable Stir-Fry with Rice",
                "Mixed vegetables and edamame over brown rice",
                520,
                20,
                80,
                12,
                true,
            ),
            (
                "Herb Roasted Chicken",
                "Chicken breast, roasted potatoes and green salad",
                580,
                45,
                45,
                22,
                false,
            ),
        ],
    ),
    (
        MealSlot::Snack,
        &[
            ("Mixed Nuts", "A small handful of unsalted mixed nuts", 200, 6, 8, 17, true),
            ("Yogurt with Honey", "Plain yogurt with a drizzle of honey", 180, 10, 25, 4, true),
            ("Cheese and Grapes", "String cheese with a cup of grapes", 190, 8, 25, 6, true),
        ],
    ),
];

fn build_builtin_meal_catalog() -> MealCatalog {
    let tables = [
        (Goal::WeightLoss, &WEIGHT_LOSS_MEALS),
        (Goal::MuscleGain, &MUSCLE_GAIN_MEALS),
        (Goal::Endurance, &ENDURANCE_MEALS),
        (Goal::General, &GENERAL_MEALS),
    ];

    let mut catalog = MealCatalog::new();
    for (goal, slots) in tables {
        for (slot, seeds) in slots {
            for &(name, description, calories, protein_grams, carbs_grams, fat_grams, vegetarian) in
                *seeds
            {
                catalog.insert(
                    goal,
                    *slot,
                    MealCatalogEntry {
                        name: name.to_owned(),
                        description: description.to_owned(),
                        calories,
                        protein_grams,
                        carbs_grams,
                        fat_grams,
                        vegetarian,
                    },
                );
            }
        }
    }
    catalog
}
