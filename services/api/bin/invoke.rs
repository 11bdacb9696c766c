//! Local console for the skill.
//!
//! Dispatches a single request without running the web server and prints the
//! response envelope the platform would receive.
//!
//! ```text
//! invoke launch
//! invoke intent GetCloudConceptIntent --slot ConceptName=EC2
//! invoke envelope ./request.json
//! ```

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use study_buddy_api::{adapter, models::RequestEnvelope};
use study_buddy_core::{
    Skill,
    random::{RandomSource, SeededRandom, ThreadRandom},
    request::NormalizedRequest,
    response::SkillResponse,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Send a single request to the study buddy skill")]
struct Cli {
    /// Seed for quiz question and study tip selection.
    #[arg(long, env = "SKILL_RANDOM_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the skill.
    Launch,
    /// Send an intent, e.g. `intent StudyTipIntent`.
    Intent {
        name: String,
        /// Slot value as NAME=VALUE. May be repeated.
        #[arg(long = "slot", value_parser = parse_slot)]
        slots: Vec<(String, String)>,
    },
    /// End the session.
    SessionEnded,
    /// Dispatch a full request envelope read from a JSON file.
    Envelope { path: PathBuf },
}

fn parse_slot(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{raw}'"))?;
    Ok((name.trim().to_string(), value.to_string()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let random: Arc<dyn RandomSource> = match cli.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };
    let skill = Skill::new(random).context("Failed to load study content")?;

    let response = match cli.command {
        Command::Launch => skill.dispatch(&NormalizedRequest::launch()),
        Command::SessionEnded => skill.dispatch(&NormalizedRequest::session_ended()),
        Command::Intent { name, slots } => {
            let request = slots
                .into_iter()
                .fold(NormalizedRequest::intent(name), |req, (slot, value)| {
                    req.with_slot(slot, value)
                });
            skill.dispatch(&request)
        }
        Command::Envelope { path } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let envelope: RequestEnvelope =
                serde_json::from_str(&raw).context("Failed to parse request envelope")?;
            match adapter::normalize(&envelope) {
                Some(request) => skill.dispatch(&request),
                None => SkillResponse::silent(),
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&adapter::render(&response))?);
    Ok(())
}
