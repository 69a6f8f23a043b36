use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::fs;
use std::path::PathBuf;
use wumpus_core::{AgentLevel, Direction, Game, InputJournal, Intent, replay_to_end};
use wumpus_tools::{LevelArg, load_config, terminal_label};

/// Drives the game with random intents, checks belief invariants along the way,
/// then replays the recorded journal and compares snapshot hashes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
    #[arg(short, long, value_enum)]
    level: Option<LevelArg>,
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the recorded journal here
    #[arg(long)]
    save: Option<PathBuf>,
}

const INTENTS: [Intent; 9] = [
    Intent::Move(Direction::Up),
    Intent::Move(Direction::Down),
    Intent::Move(Direction::Left),
    Intent::Move(Direction::Right),
    Intent::Shoot,
    Intent::Step,
    Intent::Step,
    Intent::ToggleAutoMode,
    Intent::Reset,
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref(), args.level)?;

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(args.seed, &config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut journal = InputJournal::new(args.seed);
    let mut rejected = 0u32;
    // Replay stops right after the last recorded input, so compare against that moment.
    let mut hash_after_last_input = game.snapshot_hash();

    for _ in 0..args.ticks {
        // Roughly one input every four ticks, like a player watching auto play.
        if rng.next_u64() % 4 == 0 {
            let intent = choose(&mut rng, &INTENTS);
            let tick_boundary = game.current_tick();
            let seq = game.next_input_seq();
            match game.apply_intent(intent) {
                Ok(()) => {
                    journal.append_intent(tick_boundary, intent, seq);
                    hash_after_last_input = game.snapshot_hash();
                }
                Err(_) => rejected += 1,
            }
        }
        game.tick();
        check_invariants(&game)?;
    }

    let result = replay_to_end(&config, &journal, 0).context("Replay of the fuzz journal failed")?;

    if let Some(path) = &args.save {
        let json = serde_json::to_string_pretty(&journal)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        println!("Journal written to {}", path.display());
    }

    if result.final_snapshot_hash != hash_after_last_input {
        bail!(
            "Replay diverged: live 0x{:016x}, replay 0x{:016x}",
            hash_after_last_input,
            result.final_snapshot_hash
        );
    }

    println!(
        "Fuzzing completed: {} inputs accepted, {} rejected, final state {} at tick {}.",
        journal.inputs.len(),
        rejected,
        terminal_label(game.terminal()),
        game.current_tick()
    );
    Ok(())
}

fn check_invariants(game: &Game) -> Result<()> {
    let agent = game.agent();
    let size = game.world().size();
    ensure!(size.in_bounds(agent.pos), "Invariant failed: agent left the grid at {}", agent.pos);
    ensure!(
        agent.wumpus_alive == game.world().wumpus_alive(),
        "Invariant failed: agent and world disagree about the wumpus"
    );

    if game.level() == AgentLevel::RandomWalk {
        return Ok(());
    }
    for (pos, cell) in game.beliefs().cells() {
        ensure!(
            !cell.visited || cell.safe.is_true(),
            "Invariant failed: visited cell {pos} is not known safe"
        );
        ensure!(
            !cell.safe.is_true() || cell.not_suspected(),
            "Invariant failed: {pos} is both safe and suspected"
        );
    }
    Ok(())
}
