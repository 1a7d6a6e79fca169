use serde::{Deserialize, Serialize};

/// A meal slot within the day.
///
/// Closed enum: an unrecognized meal-type string never reaches the budget
/// math. `parse` returns `None` for unknown input and the caller decides
/// what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }

    /// Fraction of the daily calorie target allotted to this slot.
    ///
    /// The four fractions sum to exactly 1.0.
    pub fn fraction(self) -> f64 {
        match self {
            MealType::Breakfast => 0.25,
            MealType::Lunch => 0.35,
            MealType::Dinner => 0.30,
            MealType::Snack => 0.10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// Daily calorie and macro targets computed from a body profile.
///
/// Serialized camelCase so the record can be written back into the profile
/// store alongside the raw profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    /// Basal metabolic rate, kcal/day (Mifflin-St Jeor).
    pub bmr: u32,

    /// Maintenance calories, kcal/day (BMR adjusted for activity).
    pub tdee: u32,

    /// Deficit-adjusted daily calorie target, kcal/day.
    pub daily_calorie_target: u32,

    pub daily_protein_target_g: u32,
    pub daily_carbs_target_g: u32,
    pub daily_fat_target_g: u32,
    pub daily_fiber_target_g: u32,

    /// Fixed daily sodium ceiling, mg.
    pub daily_sodium_target_mg: u32,

    /// Fixed daily added-sugar ceiling, g.
    pub daily_sugar_target_g: u32,
}

/// The calorie allotment for one meal slot within the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealBudget {
    pub meal_type: MealType,
    pub calories: u32,
}

/// Marks a profile field that was absent or unrecognized and resolved to
/// its documented default. Surfaced so callers can tell "explicitly
/// moderate" apart from "defaulted to moderate".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedDefault {
    WorkoutFrequency,
    Difficulty,
}

impl std::fmt::Display for AppliedDefault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AppliedDefault::WorkoutFrequency => "workoutFrequency",
            AppliedDefault::Difficulty => "difficulty",
        };
        write!(f, "{}", name)
    }
}
