pub mod constants;
pub mod formulas;
pub mod input;

pub use constants::*;
pub use formulas::{
    compute_bmr, compute_calorie_goal, compute_macro_targets, compute_nutrition_targets,
    compute_tdee, fallback_targets, meal_budgets, meal_calorie_budget, resolve_targets,
    MacroTargets, TargetReport,
};
pub use input::CalculatorInput;
