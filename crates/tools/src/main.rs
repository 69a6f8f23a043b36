use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wumpus_core::{ReplayResult, replay_to_end};
use wumpus_tools::{LevelArg, load_config, load_journal, terminal_label};

/// Replays a recorded input journal headlessly and prints the final state.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Game configuration JSON; defaults to the classic 4x4 board
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override the agent level from the configuration
    #[arg(short, long, value_enum)]
    level: Option<LevelArg>,
    /// Decision cycles to run after the last recorded input
    #[arg(short, long, default_value_t = 1000)]
    max_ticks: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref(), args.level)?;
    let mut journal = load_journal(&args.journal)?;
    // An explicit flag wins over the level the session was recorded at.
    if let Some(level) = args.level {
        journal.agent_level = Some(level.into());
    }

    let result: ReplayResult = replay_to_end(&config, &journal, args.max_ticks)
        .with_context(|| format!("Replay failed: {}", args.journal.display()))?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    if let Some(level) = journal.agent_level {
        println!("Level: {level:?}");
    }
    println!("Inputs: {}", journal.inputs.len());
    println!("Final Tick: {}", result.final_tick);
    println!("Outcome: {}", terminal_label(result.terminal));
    println!("Score: {}", result.score);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
