use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wumpus_core::{
    AdvanceStopReason, AgentLevel, DeathCause, Game, GameConfig, StuckReason, Terminal,
    derive_next_seed,
};
use wumpus_tools::{LevelArg, load_config};

/// Plays many seeded rounds headlessly and compares agent levels.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 1)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    games: u32,
    #[arg(short, long, default_value_t = 500)]
    max_ticks: u32,
    /// Only evaluate this level instead of all three
    #[arg(short, long, value_enum)]
    level: Option<LevelArg>,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Default)]
struct Tally {
    won: u32,
    pit: u32,
    eaten: u32,
    stuck_retreat: u32,
    stuck_options: u32,
    unfinished: u32,
    total_score: i64,
    total_steps: u64,
}

impl Tally {
    fn record(&mut self, terminal: Terminal, score: i32, steps: u32) {
        match terminal {
            Terminal::Won => self.won += 1,
            Terminal::Lost(DeathCause::Pit) => self.pit += 1,
            Terminal::Lost(DeathCause::Wumpus) => self.eaten += 1,
            Terminal::Stuck(StuckReason::NoRetreatPath) => self.stuck_retreat += 1,
            Terminal::Stuck(StuckReason::NoOptions) => self.stuck_options += 1,
            Terminal::Playing => self.unfinished += 1,
        }
        self.total_score += i64::from(score);
        self.total_steps += u64::from(steps);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let base = load_config(args.config.as_deref(), None)?;
    let levels: Vec<AgentLevel> = match args.level {
        Some(level) => vec![level.into()],
        None => vec![AgentLevel::RandomWalk, AgentLevel::Elimination, AgentLevel::Deductive],
    };

    println!(
        "Evaluating {} games per level from seed {} (max {} ticks each)",
        args.games, args.seed, args.max_ticks
    );
    println!(
        "{:<12} {:>6} {:>6} {:>6} {:>8} {:>8} {:>6} {:>10} {:>10}",
        "level", "won", "pit", "eaten", "stuck_rt", "stuck_op", "open", "avg_score", "avg_steps"
    );

    for level in levels {
        let config = GameConfig { agent_level: level, ..base.clone() };
        let tally = run_level(&config, args.seed, args.games, args.max_ticks)?;
        let games = f64::from(args.games.max(1));
        println!(
            "{:<12} {:>6} {:>6} {:>6} {:>8} {:>8} {:>6} {:>10.1} {:>10.1}",
            format!("{level:?}"),
            tally.won,
            tally.pit,
            tally.eaten,
            tally.stuck_retreat,
            tally.stuck_options,
            tally.unfinished,
            tally.total_score as f64 / games,
            tally.total_steps as f64 / games,
        );
    }

    Ok(())
}

/// Every level sees the same sequence of worlds.
fn run_level(config: &GameConfig, seed: u64, games: u32, max_ticks: u32) -> Result<Tally> {
    let mut tally = Tally::default();
    let mut game_seed = seed;
    for _ in 0..games {
        let mut game = Game::new(game_seed, config)?;
        let result = game.advance(max_ticks);
        let terminal = match result.stop_reason {
            AdvanceStopReason::Finished(terminal) => terminal,
            AdvanceStopReason::BudgetExhausted => Terminal::Playing,
        };
        tally.record(terminal, game.agent().score, game.agent().steps);
        game_seed = derive_next_seed(game_seed);
    }
    Ok(tally)
}
