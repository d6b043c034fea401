use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::PlanArgs;

/// Generate a multi-day study plan and track your progress through it
///
/// The planner asks a remote plan-generation service for a day-by-day plan
/// covering a topic, then lets you tick off tasks as you go. Plans live only
/// for the duration of the command; nothing is saved between runs.
#[derive(Parser)]
#[command(version, about, name = "studyplan")]
pub struct Args {
    /// Base URL of the plan-generation service. Overrides the config file
    /// and $STUDYPLAN_API_BASE
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/studyplan/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the plan service is reachable
    #[command(alias = "st")]
    Status,
    /// Generate a plan and print it
    #[command(alias = "g")]
    Generate(PlanArgs),
    /// Generate a plan, then track tasks interactively
    #[command(alias = "s")]
    Study(PlanArgs),
}
