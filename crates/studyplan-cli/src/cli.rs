//! Command handlers and argument wrappers.
//!
//! Argument structs carry clap derives and convert into core parameter types
//! with `From`, keeping clap out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```
//!
//! Validation of the converted values happens in the core.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Args;
use log::{debug, warn};
use studyplan_core::{
    LocalDateTime, Notification, PlanError, PlanRequest, Session, ToggleTask,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::renderer::TerminalRenderer;

/// Inputs for a plan generation request
#[derive(Args)]
pub struct PlanArgs {
    /// Subject you want to learn (e.g. "Python programming")
    pub topic: String,
    /// Hours you can study per day
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub hours: f64,
    /// Number of days the plan should cover
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    pub days: i64,
    /// What you want to achieve
    #[arg(long, default_value = "")]
    pub goal: String,
}

impl From<PlanArgs> for PlanRequest {
    fn from(val: PlanArgs) -> Self {
        PlanRequest {
            topic: val.topic,
            hours_per_day: val.hours,
            days: val.days,
            goal: val.goal,
        }
    }
}

/// A line typed during an interactive study session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyCommand {
    /// Flip a task; both numbers are 1-based as displayed
    Toggle { day: usize, task: usize },
    Show,
    Progress,
    Probe,
    Regenerate,
    Help,
    Quit,
}

impl FromStr for StudyCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let command = match command.as_str() {
            "toggle" | "t" => {
                let day = parse_position(words.next(), "day")?;
                let task = parse_position(words.next(), "task")?;
                StudyCommand::Toggle { day, task }
            }
            "show" | "s" => StudyCommand::Show,
            "progress" | "p" => StudyCommand::Progress,
            "probe" => StudyCommand::Probe,
            "regenerate" | "r" => StudyCommand::Regenerate,
            "help" | "h" | "?" => StudyCommand::Help,
            "quit" | "q" | "exit" => StudyCommand::Quit,
            "" => return Err("Empty command".to_string()),
            other => return Err(format!("Unknown command: {other}")),
        };
        if let Some(extra) = words.next() {
            return Err(format!("Unexpected argument: {extra}"));
        }
        Ok(command)
    }
}

fn parse_position(word: Option<&str>, name: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("Missing {name} number"))?;
    match word.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Invalid {name} number: {word}")),
    }
}

impl StudyCommand {
    /// Converts a toggle command into 0-based core parameters.
    fn toggle_params(day: usize, task: usize) -> ToggleTask {
        ToggleTask {
            day_index: day - 1,
            task_index: task - 1,
        }
    }
}

const STUDY_HELP: &str = "\
Commands:
  toggle <day> <task>  mark a task done or not done (numbers as shown)
  show                 print the plan
  progress             print progress per day
  probe                re-check the backend connection
  regenerate           request a fresh plan with the same inputs
  help                 show this help
  quit                 leave the session
";

/// Runs CLI commands against a session.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(session: Session, renderer: TerminalRenderer) -> Self {
        Self { session, renderer }
    }

    /// Prints the status recorded by the startup probe.
    pub async fn show_status(&self) {
        let status = self.session.connection_status().await;
        self.renderer
            .render(&format!("Backend status: {status}\n"));
    }

    /// Generates a plan and prints it.
    ///
    /// A failed startup probe does not stop the attempt; the request itself
    /// decides whether the service is usable.
    pub async fn generate(&self, request: &PlanRequest) -> Result<()> {
        self.show_status().await;
        if !self.session.connection_status().await.is_connected() {
            warn!("Backend did not answer the connection test, trying anyway");
        }
        self.renderer.render("Generating plan...\n");
        match self.session.generate(request).await {
            Ok(_) => {
                self.show_plan().await;
                Ok(())
            }
            Err(e) => Err(failure(&e)),
        }
    }

    /// Generates a plan, then reads study commands from stdin until `quit`
    /// or end of input.
    pub async fn study(&self, request: &PlanRequest) -> Result<()> {
        self.generate(request).await?;
        self.renderer.render("Type `help` for commands.\n");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<StudyCommand>() {
                Ok(command) => command,
                Err(e) => {
                    self.renderer.notify(&Notification::failure(e));
                    continue;
                }
            };
            debug!("Study command: {command:?}");
            if command == StudyCommand::Quit {
                break;
            }
            self.run_study_command(command, request).await?;
        }
        Ok(())
    }

    async fn run_study_command(&self, command: StudyCommand, request: &PlanRequest) -> Result<()> {
        match command {
            StudyCommand::Toggle { day, task } => {
                let params = StudyCommand::toggle_params(day, task);
                match self.session.toggle_task(&params).await {
                    Ok(done) => {
                        let state = if done { "done" } else { "not done" };
                        self.renderer.notify(&Notification::success(format!(
                            "Day {day}, task {task} marked {state}"
                        )));
                        self.render_day_progress(params.day_index).await?;
                    }
                    Err(e) => self.renderer.notify(&Notification::from(&e)),
                }
            }
            StudyCommand::Show => self.show_plan().await,
            StudyCommand::Progress => {
                let days = self.session.plan().await.len();
                for index in 0..days {
                    self.render_day_progress(index).await?;
                }
                let overall = self.session.plan_progress().await;
                self.renderer.render(&format!("Overall: {overall}\n"));
            }
            StudyCommand::Probe => {
                let status = self.session.check_connection().await;
                self.renderer
                    .render(&format!("Backend status: {status}\n"));
            }
            StudyCommand::Regenerate => match self.session.generate(request).await {
                Ok(_) => self.show_plan().await,
                Err(e) => self.renderer.notify(&Notification::from(&e)),
            },
            StudyCommand::Help => self.renderer.render(STUDY_HELP),
            StudyCommand::Quit => {}
        }
        Ok(())
    }

    async fn show_plan(&self) {
        let plan = self.session.plan().await;
        self.renderer.render(&plan.to_string());
        if let Some(generated_at) = self.session.generated_at().await {
            self.renderer
                .render(&format!("\nGenerated: {}\n", LocalDateTime(&generated_at)));
        }
    }

    async fn render_day_progress(&self, day_index: usize) -> Result<()> {
        let percent = self.session.progress(day_index).await.map_err(|e| failure(&e))?;
        let plan = self.session.plan().await;
        let day_number = plan.day(day_index).map_or(day_index as u32 + 1, |d| d.day_number);
        self.renderer
            .render(&format!("Day {day_number} progress: {}%\n", percent.round()));
        Ok(())
    }
}

/// Turns a core error into the single user-visible failure message.
fn failure(err: &PlanError) -> anyhow::Error {
    anyhow!(Notification::from(err).message)
}
