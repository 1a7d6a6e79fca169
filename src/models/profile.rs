use serde::{Deserialize, Serialize};

use crate::models::NutritionTargets;

/// A stored body profile, as persisted by the app's profile store.
///
/// Every calculator input is optional at this level: the store may hold a
/// partially-completed profile (onboarding in progress, or a field cleared
/// by the user). Validation into a fully-typed record happens in the
/// calculator, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Raw gender string as entered/stored; parsed by the calculator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Raw workout frequency string ("0-2", "3-5", "6+").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_frequency: Option<String>,

    /// Raw difficulty string ("easy", "medium", "hard").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,

    /// Last computed targets, written back on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<NutritionTargets>,
}

/// Gender as used by the Mifflin-St Jeor offset term.
///
/// A closed enum: any stored string outside `male`/`female` fails parsing
/// and is surfaced as a validation error rather than silently falling into
/// either branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a stored gender string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Weekly workout frequency bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutFrequency {
    /// 0-2 sessions per week.
    Low,
    /// 3-5 sessions per week.
    Moderate,
    /// 6+ sessions per week.
    High,
}

impl WorkoutFrequency {
    /// Documented default when the profile has no usable frequency.
    pub const DEFAULT: WorkoutFrequency = WorkoutFrequency::Moderate;

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "0-2" => Some(WorkoutFrequency::Low),
            "3-5" => Some(WorkoutFrequency::Moderate),
            "6+" => Some(WorkoutFrequency::High),
            _ => None,
        }
    }

    /// TDEE activity multiplier for this bracket.
    pub fn multiplier(self) -> f64 {
        match self {
            WorkoutFrequency::Low => 1.375,
            WorkoutFrequency::Moderate => 1.55,
            WorkoutFrequency::High => 1.725,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutFrequency::Low => "0-2",
            WorkoutFrequency::Moderate => "3-5",
            WorkoutFrequency::High => "6+",
        }
    }
}

/// Fat-loss difficulty, i.e. how aggressive the daily deficit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Documented default when the profile has no usable difficulty.
    pub const DEFAULT: Difficulty = Difficulty::Medium;

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Daily kcal subtracted from TDEE.
    pub fn deficit_kcal(self) -> u32 {
        match self {
            Difficulty::Easy => 250,
            Difficulty::Medium => 500,
            Difficulty::Hard => 750,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A required profile field, named for validation error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    WeightKg,
    HeightCm,
    Age,
    Gender,
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProfileField::WeightKg => "weightKg",
            ProfileField::HeightCm => "heightCm",
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
        };
        write!(f, "{}", name)
    }
}
