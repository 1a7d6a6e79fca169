use clap::Parser;

use macro_target_rs::calculator::{meal_budgets, meal_calorie_budget, resolve_targets};
use macro_target_rs::cli::{Cli, Command};
use macro_target_rs::error::Result;
use macro_target_rs::interface::{
    collect_profile, display_meal_budgets, display_profile, display_target_report, prompt_yes_no,
};
use macro_target_rs::models::{MealBudget, Profile};
use macro_target_rs::state::{JsonProfileStore, ProfileStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Targets { difficulty } => cmd_targets(&cli.file, difficulty.map(Into::into)),
        Command::Setup => cmd_setup(&cli.file),
        Command::Budgets { meal } => cmd_budgets(&cli.file, meal.map(Into::into)),
        Command::Profile => cmd_profile(&cli.file),
    }
}

/// Load the profile, or an empty one (with a hint) when no file exists yet.
fn load_or_empty(store: &JsonProfileStore) -> Result<Profile> {
    match store.load()? {
        Some(profile) => Ok(profile),
        None => {
            eprintln!("Profile file not found: {}", store.path().display());
            eprintln!("Run 'setup' to create one.");
            Ok(Profile::default())
        }
    }
}

/// Compute and display daily targets, then offer to write them back.
fn cmd_targets(
    file_path: &str,
    difficulty: Option<macro_target_rs::models::Difficulty>,
) -> Result<()> {
    let store = JsonProfileStore::new(file_path);
    let mut profile = load_or_empty(&store)?;

    let report = resolve_targets(&profile, difficulty);
    display_target_report(&report);

    // Fallback numbers are not body-derived; never persist them.
    if !report.is_fallback() {
        let save = prompt_yes_no("Save computed targets to profile?", true)?;
        if save {
            profile.targets = Some(report.targets);
            store.save(&profile)?;
            println!("Targets saved.");
        }
    }

    Ok(())
}

/// Enter a fresh profile interactively and compute its targets.
fn cmd_setup(file_path: &str) -> Result<()> {
    let store = JsonProfileStore::new(file_path);

    let profile = collect_profile()?;
    store.save(&profile)?;
    println!("Profile saved to {}.", store.path().display());

    let report = resolve_targets(&profile, None);
    display_target_report(&report);

    if !report.is_fallback() {
        let save = prompt_yes_no("Save computed targets to profile?", true)?;
        if save {
            let mut profile = profile;
            profile.targets = Some(report.targets);
            store.save(&profile)?;
            println!("Targets saved.");
        }
    }

    Ok(())
}

/// Show per-meal calorie budgets for the current daily target.
fn cmd_budgets(file_path: &str, meal: Option<macro_target_rs::models::MealType>) -> Result<()> {
    let store = JsonProfileStore::new(file_path);
    let profile = load_or_empty(&store)?;

    let report = resolve_targets(&profile, None);
    let daily = report.targets.daily_calorie_target;

    if report.is_fallback() {
        println!("Profile incomplete; budgets below use the 2000 kcal fallback.");
    }

    let budgets: Vec<MealBudget> = match meal {
        Some(meal_type) => vec![MealBudget {
            meal_type,
            calories: meal_calorie_budget(daily, meal_type),
        }],
        None => meal_budgets(daily).to_vec(),
    };

    display_meal_budgets(&budgets, daily);
    Ok(())
}

/// Show the stored profile fields.
fn cmd_profile(file_path: &str) -> Result<()> {
    let store = JsonProfileStore::new(file_path);

    match store.load()? {
        Some(profile) => display_profile(&profile),
        None => {
            println!("Profile file not found: {}", store.path().display());
            println!("Run 'setup' to create one.");
        }
    }

    Ok(())
}
