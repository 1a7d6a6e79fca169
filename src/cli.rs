use clap::{Parser, Subcommand, ValueEnum};

use crate::models::{Difficulty, MealType};

/// MacroTarget — turns a body profile into calorie, macro, and per-meal budgets.
#[derive(Parser, Debug)]
#[command(name = "macro_target")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and display daily nutrition targets from the stored profile.
    Targets {
        /// Override the stored difficulty for this run.
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,
    },

    /// Enter or replace the body profile interactively.
    Setup,

    /// Show per-meal calorie budgets derived from the daily target.
    Budgets {
        /// Show a single meal slot instead of all four.
        #[arg(long, value_enum)]
        meal: Option<MealArg>,
    },

    /// Show the stored profile.
    Profile,
}

impl Default for Command {
    fn default() -> Self {
        Command::Targets { difficulty: None }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum MealArg {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl From<MealArg> for MealType {
    fn from(arg: MealArg) -> Self {
        match arg {
            MealArg::Breakfast => MealType::Breakfast,
            MealArg::Lunch => MealType::Lunch,
            MealArg::Dinner => MealType::Dinner,
            MealArg::Snack => MealType::Snack,
        }
    }
}
