use crate::calculator::constants::*;
use crate::calculator::input::CalculatorInput;
use crate::error::ProfileError;
use crate::models::{AppliedDefault, Difficulty, Gender, MealBudget, MealType, NutritionTargets};
use crate::models::{Profile, WorkoutFrequency};

/// Macro gram targets derived from a calorie goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub fiber_g: u32,
    pub sodium_mg: u32,
    pub sugar_g: u32,
}

/// Everything the caller needs to act on a target computation: the numbers
/// plus how they were arrived at (defaults applied, floor clamping, or the
/// validation failure that forced the fallback).
#[derive(Debug, Clone, PartialEq)]
pub struct TargetReport {
    pub targets: NutritionTargets,

    /// Optional profile fields resolved to their documented default.
    pub applied_defaults: Vec<AppliedDefault>,

    /// The calorie goal was clamped up to the 1200 kcal floor.
    pub calorie_floor_applied: bool,

    /// Set when the profile failed validation and `targets` holds the
    /// 2000 kcal fallback rather than a profile-derived result.
    pub fallback_reason: Option<ProfileError>,
}

impl TargetReport {
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Round non-negative kcal/grams to the nearest integer.
#[inline]
fn round_unit(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Basal metabolic rate via Mifflin-St Jeor, kcal/day.
///
/// base = 10*kg + 6.25*cm - 5*age, then +5 (male) or -161 (female).
/// Non-positive weight, height, or age returns 0; validated callers never
/// hit this branch, it only guards direct library use.
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> u32 {
    if weight_kg <= 0.0 || height_cm <= 0.0 || age == 0 {
        return 0;
    }

    let base = BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm
        - BMR_AGE_COEFF * age as f64;

    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };

    round_unit(base + offset)
}

/// Maintenance calories: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: u32, frequency: WorkoutFrequency) -> u32 {
    round_unit(bmr as f64 * frequency.multiplier())
}

/// Deficit-adjusted daily calorie goal.
///
/// Returns (goal, floor_applied). The goal never drops below
/// `MIN_CALORIE_GOAL`; the flag tells the caller the raw result did.
pub fn compute_calorie_goal(tdee: u32, difficulty: Difficulty) -> (u32, bool) {
    let raw = tdee.saturating_sub(difficulty.deficit_kcal());
    if raw < MIN_CALORIE_GOAL {
        (MIN_CALORIE_GOAL, true)
    } else {
        (raw, false)
    }
}

/// Macro gram targets for a calorie goal.
///
/// Fixed 40/35/25 calorie split at 4/4/9 kcal per gram; fiber scales with
/// intake; sodium and sugar are fixed ceilings.
pub fn compute_macro_targets(calorie_goal: u32) -> MacroTargets {
    let goal = calorie_goal as f64;

    MacroTargets {
        protein_g: round_unit(goal * PROTEIN_CAL_SHARE / KCAL_PER_G_PROTEIN),
        carbs_g: round_unit(goal * CARBS_CAL_SHARE / KCAL_PER_G_CARBS),
        fat_g: round_unit(goal * FAT_CAL_SHARE / KCAL_PER_G_FAT),
        fiber_g: round_unit(goal / 1000.0 * FIBER_G_PER_1000_KCAL),
        sodium_mg: SODIUM_CEILING_MG,
        sugar_g: SUGAR_CEILING_G,
    }
}

/// Full target computation for a validated input.
///
/// Strict pipeline: BMR -> TDEE -> calorie goal -> macros. Pure and
/// idempotent: identical input yields identical output.
///
/// Returns (targets, floor_applied).
pub fn compute_nutrition_targets(input: &CalculatorInput) -> (NutritionTargets, bool) {
    let bmr = compute_bmr(input.weight_kg, input.height_cm, input.age, input.gender);
    let tdee = compute_tdee(bmr, input.workout_frequency);
    let (goal, floor_applied) = compute_calorie_goal(tdee, input.difficulty);
    let macros = compute_macro_targets(goal);

    let targets = NutritionTargets {
        bmr,
        tdee,
        daily_calorie_target: goal,
        daily_protein_target_g: macros.protein_g,
        daily_carbs_target_g: macros.carbs_g,
        daily_fat_target_g: macros.fat_g,
        daily_fiber_target_g: macros.fiber_g,
        daily_sodium_target_mg: macros.sodium_mg,
        daily_sugar_target_g: macros.sugar_g,
    };

    (targets, floor_applied)
}

/// Calorie sub-budget for one meal slot.
pub fn meal_calorie_budget(daily_calorie_target: u32, meal_type: MealType) -> u32 {
    round_unit(daily_calorie_target as f64 * meal_type.fraction())
}

/// Budgets for all four meal slots, in day order.
pub fn meal_budgets(daily_calorie_target: u32) -> [MealBudget; 4] {
    MealType::ALL.map(|meal_type| MealBudget {
        meal_type,
        calories: meal_calorie_budget(daily_calorie_target, meal_type),
    })
}

/// Targets used when the profile cannot be validated: a conservative
/// 2000 kcal day with macros from the same split. BMR and TDEE are
/// reported as 0 since nothing body-derived was computed.
pub fn fallback_targets() -> NutritionTargets {
    let macros = compute_macro_targets(FALLBACK_CALORIE_TARGET);

    NutritionTargets {
        bmr: 0,
        tdee: 0,
        daily_calorie_target: FALLBACK_CALORIE_TARGET,
        daily_protein_target_g: macros.protein_g,
        daily_carbs_target_g: macros.carbs_g,
        daily_fat_target_g: macros.fat_g,
        daily_fiber_target_g: macros.fiber_g,
        daily_sodium_target_mg: macros.sodium_mg,
        daily_sugar_target_g: macros.sugar_g,
    }
}

/// Always-succeeding entry point over a raw stored profile.
///
/// Validates, computes, and never fails: an invalid profile produces the
/// fallback targets with the validation error attached so the caller can
/// decide whether to prompt for the missing fields.
pub fn resolve_targets(profile: &Profile, difficulty_override: Option<Difficulty>) -> TargetReport {
    match CalculatorInput::from_profile(profile, difficulty_override) {
        Ok(input) => {
            let (targets, calorie_floor_applied) = compute_nutrition_targets(&input);
            TargetReport {
                targets,
                applied_defaults: input.applied_defaults,
                calorie_floor_applied,
                fallback_reason: None,
            }
        }
        Err(err) => TargetReport {
            targets: fallback_targets(),
            applied_defaults: Vec::new(),
            calorie_floor_applied: false,
            fallback_reason: Some(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CalculatorInput {
        CalculatorInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            workout_frequency: WorkoutFrequency::Moderate,
            difficulty: Difficulty::Medium,
            applied_defaults: Vec::new(),
        }
    }

    #[test]
    fn test_bmr_reference_male() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75 -> 1649
        assert_eq!(compute_bmr(70.0, 175.0, 30, Gender::Male), 1649);
    }

    #[test]
    fn test_bmr_reference_female() {
        // Same body, female offset: 1643.75 - 161 = 1482.75 -> 1483
        assert_eq!(compute_bmr(70.0, 175.0, 30, Gender::Female), 1483);
    }

    #[test]
    fn test_bmr_gender_offset_is_166() {
        let male = compute_bmr(82.3, 168.0, 44, Gender::Male);
        let female = compute_bmr(82.3, 168.0, 44, Gender::Female);
        assert_eq!(male - female, 166);
    }

    #[test]
    fn test_bmr_guards_bad_inputs() {
        assert_eq!(compute_bmr(0.0, 175.0, 30, Gender::Male), 0);
        assert_eq!(compute_bmr(-70.0, 175.0, 30, Gender::Male), 0);
        assert_eq!(compute_bmr(70.0, 0.0, 30, Gender::Male), 0);
        assert_eq!(compute_bmr(70.0, 175.0, 0, Gender::Male), 0);
    }

    #[test]
    fn test_tdee_monotonic_in_activity() {
        let bmr = 1649;
        let low = compute_tdee(bmr, WorkoutFrequency::Low);
        let moderate = compute_tdee(bmr, WorkoutFrequency::Moderate);
        let high = compute_tdee(bmr, WorkoutFrequency::High);

        assert!(low < moderate);
        assert!(moderate < high);
        assert_eq!(moderate, 2556); // round(1649 * 1.55)
    }

    #[test]
    fn test_calorie_goal_ordering() {
        let tdee = 2556;
        let (easy, _) = compute_calorie_goal(tdee, Difficulty::Easy);
        let (medium, _) = compute_calorie_goal(tdee, Difficulty::Medium);
        let (hard, _) = compute_calorie_goal(tdee, Difficulty::Hard);

        assert!(hard < medium);
        assert!(medium < easy);
        assert_eq!(medium, 2056);
    }

    #[test]
    fn test_calorie_goal_floor() {
        // 1400 - 750 = 650, below the floor.
        let (goal, floored) = compute_calorie_goal(1400, Difficulty::Hard);
        assert_eq!(goal, MIN_CALORIE_GOAL);
        assert!(floored);

        // Deficit larger than TDEE must not underflow.
        let (goal, floored) = compute_calorie_goal(500, Difficulty::Hard);
        assert_eq!(goal, MIN_CALORIE_GOAL);
        assert!(floored);

        let (goal, floored) = compute_calorie_goal(2556, Difficulty::Medium);
        assert_eq!(goal, 2056);
        assert!(!floored);
    }

    #[test]
    fn test_macro_reference_values() {
        let macros = compute_macro_targets(2056);
        assert_eq!(macros.protein_g, 206); // round(2056*0.40/4)
        assert_eq!(macros.carbs_g, 180); // round(2056*0.35/4)
        assert_eq!(macros.fat_g, 57); // round(2056*0.25/9)
        assert_eq!(macros.fiber_g, 29); // round(2056/1000*14)
        assert_eq!(macros.sodium_mg, 2300);
        assert_eq!(macros.sugar_g, 50);
    }

    #[test]
    fn test_macro_calorie_reconstruction() {
        for goal in [1200, 1500, 2056, 2500, 3200] {
            let m = compute_macro_targets(goal);
            let rebuilt = m.protein_g * 4 + m.carbs_g * 4 + m.fat_g * 9;
            let diff = rebuilt.abs_diff(goal);
            assert!(diff <= 3, "goal {} rebuilt as {}", goal, rebuilt);
        }
    }

    #[test]
    fn test_full_pipeline_reference_scenario() {
        let (targets, floored) = compute_nutrition_targets(&sample_input());
        assert!(!floored);
        assert_eq!(targets.bmr, 1649);
        assert_eq!(targets.tdee, 2556);
        assert_eq!(targets.daily_calorie_target, 2056);
        assert_eq!(targets.daily_protein_target_g, 206);
        assert_eq!(targets.daily_carbs_target_g, 180);
        assert_eq!(targets.daily_fat_target_g, 57);
        assert_eq!(targets.daily_fiber_target_g, 29);
        assert_eq!(targets.daily_sodium_target_mg, 2300);
        assert_eq!(targets.daily_sugar_target_g, 50);
    }

    #[test]
    fn test_pipeline_idempotent() {
        let input = sample_input();
        assert_eq!(
            compute_nutrition_targets(&input),
            compute_nutrition_targets(&input)
        );
    }

    #[test]
    fn test_meal_budgets_cover_the_day() {
        for daily in [1200, 2000, 2056, 2873] {
            let total: u32 = meal_budgets(daily).iter().map(|b| b.calories).sum();
            let diff = total.abs_diff(daily);
            assert!(diff <= 2, "daily {} split into {}", daily, total);
        }
    }

    #[test]
    fn test_meal_budget_fractions() {
        assert_eq!(meal_calorie_budget(2000, MealType::Breakfast), 500);
        assert_eq!(meal_calorie_budget(2000, MealType::Lunch), 700);
        assert_eq!(meal_calorie_budget(2000, MealType::Dinner), 600);
        assert_eq!(meal_calorie_budget(2000, MealType::Snack), 200);
    }

    #[test]
    fn test_fallback_targets() {
        let targets = fallback_targets();
        assert_eq!(targets.daily_calorie_target, 2000);
        assert_eq!(targets.bmr, 0);
        assert_eq!(targets.tdee, 0);
        assert_eq!(targets.daily_protein_target_g, 200);
        assert_eq!(targets.daily_carbs_target_g, 175);
        assert_eq!(targets.daily_fat_target_g, 56);
        assert_eq!(targets.daily_fiber_target_g, 28);
    }

    #[test]
    fn test_resolve_targets_fallback_on_missing_weight() {
        let profile = Profile {
            height_cm: Some(175.0),
            age: Some(30),
            gender: Some("male".to_string()),
            ..Profile::default()
        };

        let report = resolve_targets(&profile, None);
        assert!(report.is_fallback());
        assert_eq!(report.targets.daily_calorie_target, 2000);
        assert!(matches!(
            report.fallback_reason,
            Some(ProfileError::MissingFields(ref fields))
                if fields == &[crate::models::ProfileField::WeightKg]
        ));
    }
}
