pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{ProfileError, Result, TargetError};
pub use models::{NutritionTargets, Profile};
