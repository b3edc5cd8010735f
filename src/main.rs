//! butterfly-nav CLI - evaluate edge costs and generate instructions

use anyhow::{Context, Result};
use butterfly_nav::{AttributeSet, English, Mode, VehicleConstraints, Whitelist};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "butterfly-nav")]
#[command(about = "Per-mode edge costs and turn-by-turn instructions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a tag set for one mode
    Factor {
        /// Travel mode (car, pedestrian)
        #[arg(long)]
        mode: String,
        /// Tags as key=value pairs
        tags: Vec<String>,
    },
    /// Generate turn-by-turn instructions from a route JSON file
    Instructions {
        /// Travel mode (car, pedestrian)
        #[arg(long)]
        mode: String,
        /// Route file
        route: PathBuf,
    },
    /// Print the versioned profile tables
    Meta {
        /// Travel mode; omit for all modes
        #[arg(long)]
        mode: Option<String>,
    },
}

#[derive(Serialize)]
struct FactorReport {
    traversable: bool,
    seconds_per_meter: f32,
    direction: u8,
    constraints: Option<VehicleConstraints>,
    whitelist: Vec<&'static str>,
}

fn parse_mode(name: &str) -> Result<Mode> {
    Mode::from_name(name)
        .with_context(|| format!("unknown mode '{name}', expected one of: car, pedestrian"))
}

fn parse_tags(pairs: &[String]) -> Result<AttributeSet> {
    let mut tags = AttributeSet::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("tag '{pair}' must be in key=value form"))?;
        tags.insert(key, value);
    }
    Ok(tags)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Factor { mode, tags } => {
            let mode = parse_mode(&mode)?;
            let tags = parse_tags(&tags)?;
            let mut whitelist = Whitelist::new();
            let factor = mode.evaluate_cost(&tags, &mut whitelist);
            let report = FactorReport {
                traversable: factor.is_traversable(),
                seconds_per_meter: factor.seconds_per_meter,
                direction: factor.direction.code(),
                constraints: factor.constraints,
                whitelist: whitelist.sorted(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Instructions { mode, route } => {
            let mode = parse_mode(&mode)?;
            let data = std::fs::read_to_string(&route)
                .with_context(|| format!("Failed to read {}", route.display()))?;
            let route: butterfly_nav::Route =
                serde_json::from_str(&data).context("Failed to parse route JSON")?;
            let instructions = mode.generate_instructions(&route, &English)?;
            println!("{}", serde_json::to_string_pretty(&instructions)?);
        }
        Commands::Meta { mode } => {
            let metas: Vec<_> = match mode {
                Some(name) => vec![parse_mode(&name)?.meta()],
                None => Mode::all().iter().map(|mode| mode.meta()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&metas)?);
        }
    }
    Ok(())
}
