/// Mifflin-St Jeor coefficients: base = 10*kg + 6.25*cm - 5*age.
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Gender offsets added to the Mifflin-St Jeor base.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Macro calorie split of the daily target (protein/carbs/fat).
pub const PROTEIN_CAL_SHARE: f64 = 0.40;
pub const CARBS_CAL_SHARE: f64 = 0.35;
pub const FAT_CAL_SHARE: f64 = 0.25;

/// Calories per gram for each macro.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Fiber recommendation: 14 g per 1000 kcal of intake.
pub const FIBER_G_PER_1000_KCAL: f64 = 14.0;

/// Fixed daily ceilings, independent of the calorie target.
pub const SODIUM_CEILING_MG: u32 = 2300;
pub const SUGAR_CEILING_G: u32 = 50;

/// Floor applied to the deficit-adjusted calorie goal. Extreme inputs
/// (very low weight plus a hard deficit) would otherwise produce a target
/// below safe nutritional minimums.
pub const MIN_CALORIE_GOAL: u32 = 1200;

/// Daily calorie target used when the profile cannot be validated.
pub const FALLBACK_CALORIE_TARGET: u32 = 2000;
