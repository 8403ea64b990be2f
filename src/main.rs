//! Fall Down headless runner
//!
//! Plays a session without a window and prints a JSON run summary.
//!
//! Usage:
//!   fall-down --seed 42 --frames 3600
//!   fall-down --seed 42 --record run.json
//!   fall-down --seed 42 --replay run.json --draw

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fall_down::runner::{InputSource, run};
use fall_down::{Autopilot, Settings, TickInput};

#[derive(Parser)]
#[command(name = "fall-down")]
#[command(about = "Run a Fall Down session headless and report the outcome")]
struct Args {
    /// Gap seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate (overrides the config file)
    #[arg(long)]
    frames: Option<u32>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Replay a JSON input tape instead of using the autopilot
    #[arg(long)]
    replay: Option<PathBuf>,
    /// Write the inputs used to a JSON tape
    #[arg(long)]
    record: Option<PathBuf>,
    /// Also print the final frame's draw list
    #[arg(long)]
    draw: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(frames) = args.frames {
        settings.max_frames = frames;
    }

    env_logger::Builder::new()
        .filter_level(settings.log_level_filter())
        .parse_default_env()
        .init();

    let seed = settings.resolve_seed();
    log::info!("Fall Down starting with seed {}", seed);

    let source = if let Some(path) = &args.replay {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading tape {}", path.display()))?;
        let tape: Vec<TickInput> = serde_json::from_str(&json)
            .with_context(|| format!("parsing tape {}", path.display()))?;
        log::info!("Replaying {} inputs from {}", tape.len(), path.display());
        InputSource::Tape(tape)
    } else if settings.autopilot {
        InputSource::Autopilot(Autopilot::new(settings.auto_restart))
    } else {
        InputSource::Idle
    };

    let artifact = run(seed, settings.max_frames, &source)?;

    if let Some(path) = &args.record {
        let json = serde_json::to_string(&artifact.inputs)?;
        fs::write(path, json).with_context(|| format!("writing tape {}", path.display()))?;
        log::info!("Recorded {} inputs to {}", artifact.inputs.len(), path.display());
    }

    println!("{}", serde_json::to_string_pretty(&artifact.summary)?);
    if args.draw {
        println!("{}", serde_json::to_string_pretty(&artifact.final_frame)?);
    }

    Ok(())
}
