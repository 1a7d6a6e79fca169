pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_age, prompt_difficulty, prompt_gender, prompt_height_cm,
    prompt_weight_kg, prompt_workout_frequency, prompt_yes_no,
};
pub use render::{display_meal_budgets, display_profile, display_target_report};
