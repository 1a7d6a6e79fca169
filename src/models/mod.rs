pub mod profile;
pub mod targets;

pub use profile::{Difficulty, Gender, Profile, ProfileField, WorkoutFrequency};
pub use targets::{AppliedDefault, MealBudget, MealType, NutritionTargets};
