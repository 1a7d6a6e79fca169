use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, TargetError};
use crate::models::{Difficulty, Gender, Profile, WorkoutFrequency};

/// Prompt for body weight in kilograms.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Body weight in kg")
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| TargetError::InvalidInput("Invalid number".to_string()))?;

    if weight <= 0.0 {
        return Err(TargetError::InvalidInput(
            "Weight must be positive".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for height in centimeters.
pub fn prompt_height_cm() -> Result<f64> {
    let input: String = Input::new().with_prompt("Height in cm").interact_text()?;

    let height: f64 = input
        .trim()
        .parse()
        .map_err(|_| TargetError::InvalidInput("Invalid number".to_string()))?;

    if height <= 0.0 {
        return Err(TargetError::InvalidInput(
            "Height must be positive".to_string(),
        ));
    }

    Ok(height)
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("Age in years").interact_text()?;

    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| TargetError::InvalidInput("Invalid number".to_string()))?;

    if age == 0 {
        return Err(TargetError::InvalidInput(
            "Age must be positive".to_string(),
        ));
    }

    Ok(age)
}

/// Prompt for gender. Only the two values the BMR formula supports are
/// offered; there is no free-text entry to reject later.
pub fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Gender (used by the BMR formula)")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for weekly workout frequency.
pub fn prompt_workout_frequency() -> Result<WorkoutFrequency> {
    let options = [
        WorkoutFrequency::Low,
        WorkoutFrequency::Moderate,
        WorkoutFrequency::High,
    ];
    let labels = [
        "0-2 sessions/week (lightly active)",
        "3-5 sessions/week (moderately active)",
        "6+ sessions/week (very active)",
    ];

    let selection = Select::new()
        .with_prompt("Workout frequency")
        .items(&labels)
        .default(1) // moderate
        .interact()?;

    Ok(options[selection])
}

/// Prompt for fat-loss difficulty.
pub fn prompt_difficulty() -> Result<Difficulty> {
    let options = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    let labels = [
        "easy (-250 kcal/day)",
        "medium (-500 kcal/day)",
        "hard (-750 kcal/day)",
    ];

    let selection = Select::new()
        .with_prompt("Difficulty")
        .items(&labels)
        .default(1) // medium
        .interact()?;

    Ok(options[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a complete profile interactively.
pub fn collect_profile() -> Result<Profile> {
    let weight_kg = prompt_weight_kg()?;
    let height_cm = prompt_height_cm()?;
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let workout_frequency = prompt_workout_frequency()?;
    let difficulty = prompt_difficulty()?;

    Ok(Profile {
        weight_kg: Some(weight_kg),
        height_cm: Some(height_cm),
        age: Some(age),
        gender: Some(gender.label().to_string()),
        workout_frequency: Some(workout_frequency.label().to_string()),
        difficulty: Some(difficulty.label().to_string()),
        targets: None,
    })
}
