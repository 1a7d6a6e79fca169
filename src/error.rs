use thiserror::Error;

use crate::models::ProfileField;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Validation failure while turning a stored profile into calculator input.
///
/// Clonable and comparable so it can ride along inside a `TargetReport`
/// after the fallback path has already produced usable numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("missing or invalid required fields: {}", format_fields(.0))]
    MissingFields(Vec<ProfileField>),

    #[error("unsupported gender value: {0:?} (expected \"male\" or \"female\")")]
    UnsupportedGender(String),
}

fn format_fields(fields: &[ProfileField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, TargetError>;
