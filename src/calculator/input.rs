use crate::error::ProfileError;
use crate::models::{AppliedDefault, Difficulty, Gender, Profile, ProfileField, WorkoutFrequency};

/// A fully-typed, validated calculator input.
///
/// Construction is the only place the raw stored profile is inspected;
/// past this point every formula operates on known-good values and cannot
/// produce NaN or garbage.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub workout_frequency: WorkoutFrequency,
    pub difficulty: Difficulty,

    /// Optional fields that were absent or unrecognized and resolved to
    /// their documented default.
    pub applied_defaults: Vec<AppliedDefault>,
}

impl CalculatorInput {
    /// Validate a stored profile into calculator input.
    ///
    /// Required fields (weight, height, age, gender) must be present and
    /// positive; every violation is collected so the error names all
    /// offending fields at once. A gender outside `male`/`female` is a
    /// distinct error: the formula has no branch for it and silently
    /// picking one would misstate the result by up to 166 kcal.
    ///
    /// `difficulty_override` takes precedence over the stored difficulty
    /// (e.g. a CLI flag) and counts as explicit, not defaulted.
    pub fn from_profile(
        profile: &Profile,
        difficulty_override: Option<Difficulty>,
    ) -> Result<Self, ProfileError> {
        let mut missing = Vec::new();

        let weight_kg = match profile.weight_kg {
            Some(w) if w > 0.0 => Some(w),
            _ => {
                missing.push(ProfileField::WeightKg);
                None
            }
        };

        let height_cm = match profile.height_cm {
            Some(h) if h > 0.0 => Some(h),
            _ => {
                missing.push(ProfileField::HeightCm);
                None
            }
        };

        let age = match profile.age {
            Some(a) if a > 0 => Some(a),
            _ => {
                missing.push(ProfileField::Age);
                None
            }
        };

        let gender_raw = match profile.gender.as_deref() {
            Some(g) if !g.trim().is_empty() => Some(g),
            _ => {
                missing.push(ProfileField::Gender);
                None
            }
        };

        if !missing.is_empty() {
            return Err(ProfileError::MissingFields(missing));
        }

        // All four are present past the check above.
        let gender_raw = gender_raw.unwrap();
        let gender = Gender::parse(gender_raw)
            .ok_or_else(|| ProfileError::UnsupportedGender(gender_raw.to_string()))?;

        let mut applied_defaults = Vec::new();

        let workout_frequency = match profile.workout_frequency.as_deref() {
            Some(s) => match WorkoutFrequency::parse(s) {
                Some(freq) => freq,
                None => {
                    applied_defaults.push(AppliedDefault::WorkoutFrequency);
                    WorkoutFrequency::DEFAULT
                }
            },
            None => {
                applied_defaults.push(AppliedDefault::WorkoutFrequency);
                WorkoutFrequency::DEFAULT
            }
        };

        let difficulty = match difficulty_override {
            Some(d) => d,
            None => match profile.difficulty.as_deref() {
                Some(s) => match Difficulty::parse(s) {
                    Some(d) => d,
                    None => {
                        applied_defaults.push(AppliedDefault::Difficulty);
                        Difficulty::DEFAULT
                    }
                },
                None => {
                    applied_defaults.push(AppliedDefault::Difficulty);
                    Difficulty::DEFAULT
                }
            },
        };

        Ok(CalculatorInput {
            weight_kg: weight_kg.unwrap(),
            height_cm: height_cm.unwrap(),
            age: age.unwrap(),
            gender,
            workout_frequency,
            difficulty,
            applied_defaults,
        })
    }
}
