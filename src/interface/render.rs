use crate::calculator::TargetReport;
use crate::models::{MealBudget, Profile};

/// Display a computed target report, including how it was arrived at.
pub fn display_target_report(report: &TargetReport) {
    println!();
    println!("=== Daily Nutrition Targets ===");
    println!();

    if let Some(reason) = &report.fallback_reason {
        println!("  Profile incomplete: {}", reason);
        println!("  Showing the conservative 2000 kcal fallback.");
        println!("  Run 'setup' to complete your profile.");
        println!();
    } else {
        println!("  BMR:          {:>5} kcal", report.targets.bmr);
        println!("  TDEE:         {:>5} kcal", report.targets.tdee);
    }

    println!(
        "  Calorie goal: {:>5} kcal",
        report.targets.daily_calorie_target
    );
    println!();
    println!("  Protein: {:>4} g", report.targets.daily_protein_target_g);
    println!("  Carbs:   {:>4} g", report.targets.daily_carbs_target_g);
    println!("  Fat:     {:>4} g", report.targets.daily_fat_target_g);
    println!("  Fiber:   {:>4} g", report.targets.daily_fiber_target_g);
    println!("  Sodium:  {:>4} mg (ceiling)", report.targets.daily_sodium_target_mg);
    println!("  Sugar:   {:>4} g (ceiling)", report.targets.daily_sugar_target_g);

    if report.calorie_floor_applied {
        println!();
        println!("  Note: goal clamped to the 1200 kcal minimum for these inputs.");
    }

    if !report.applied_defaults.is_empty() {
        println!();
        for field in &report.applied_defaults {
            println!("  Note: {} missing from profile, default used.", field);
        }
    }

    println!();
}

/// Display per-meal calorie budgets.
pub fn display_meal_budgets(budgets: &[MealBudget], daily_calorie_target: u32) {
    println!();
    println!(
        "=== Meal Budgets ({} kcal/day) ===",
        daily_calorie_target
    );
    println!();

    for budget in budgets {
        println!(
            "  {:<9} {:>5} kcal  ({:.0}%)",
            budget.meal_type.label(),
            budget.calories,
            budget.meal_type.fraction() * 100.0
        );
    }

    println!();
}

/// Display the stored profile fields, marking absent ones.
pub fn display_profile(profile: &Profile) {
    println!();
    println!("=== Profile ===");
    println!();

    let show_f64 = |v: Option<f64>| match v {
        Some(x) => format!("{}", x),
        None => "(not set)".to_string(),
    };
    let show_str = |v: Option<&str>| v.unwrap_or("(not set)").to_string();

    println!("  Weight:    {} kg", show_f64(profile.weight_kg));
    println!("  Height:    {} cm", show_f64(profile.height_cm));
    println!(
        "  Age:       {}",
        profile
            .age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  Gender:    {}", show_str(profile.gender.as_deref()));
    println!(
        "  Workouts:  {}",
        show_str(profile.workout_frequency.as_deref())
    );
    println!("  Difficulty: {}", show_str(profile.difficulty.as_deref()));
    println!();
}
