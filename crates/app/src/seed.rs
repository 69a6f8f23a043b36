//! Command-line launch options: world seed and agent level.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use wumpus_core::{AgentLevel, derive_next_seed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub level: Option<AgentLevel>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    derive_next_seed(
        (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter,
    )
}

/// Parses `--seed N`, `--seed=N`, `--level NAME` and `--level=NAME`.
/// Unknown arguments are ignored; `args[0]` is the program name.
pub fn parse_launch_options(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut seed = None;
    let mut level = None;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let (flag, inline) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (argument.as_str(), None),
        };
        if flag != "--seed" && flag != "--level" {
            continue;
        }
        let value = match inline {
            Some(value) => value,
            None => rest.next().cloned().ok_or_else(|| format!("missing value for {flag}"))?,
        };

        if flag == "--seed" {
            if seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            seed = Some(
                value.parse::<u64>().map_err(|_| format!("seed value '{value}' must be a number"))?,
            );
        } else {
            level = Some(parse_level(&value)?);
        }
    }

    Ok(LaunchOptions {
        seed: seed.map_or(SeedChoice::Generated(generated_seed), SeedChoice::Cli),
        level,
    })
}

fn parse_level(raw: &str) -> Result<AgentLevel, String> {
    match raw.to_ascii_lowercase().as_str() {
        "random" | "random-walk" => Ok(AgentLevel::RandomWalk),
        "elimination" => Ok(AgentLevel::Elimination),
        "deductive" => Ok(AgentLevel::Deductive),
        _ => Err(format!("unknown agent level '{raw}' (random, elimination, deductive)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let options = parse_launch_options(&as_args(&["wumpus"]), 9_876_543).expect("parse");
        assert_eq!(options, LaunchOptions { seed: SeedChoice::Generated(9_876_543), level: None });
    }

    #[test]
    fn parses_separate_and_inline_values() {
        let options =
            parse_launch_options(&as_args(&["wumpus", "--seed", "4242", "--level=elimination"]), 1)
                .expect("parse");
        assert_eq!(options.seed, SeedChoice::Cli(4_242));
        assert_eq!(options.level, Some(AgentLevel::Elimination));

        let options = parse_launch_options(&as_args(&["wumpus", "--seed=7", "--level", "random"]), 1)
            .expect("parse");
        assert_eq!(options.seed.value(), 7);
        assert_eq!(options.level, Some(AgentLevel::RandomWalk));
    }

    #[test]
    fn rejects_missing_duplicate_and_malformed_values() {
        let err = parse_launch_options(&as_args(&["wumpus", "--seed"]), 1).expect_err("missing");
        assert!(err.contains("missing"), "{err}");

        let err = parse_launch_options(&as_args(&["wumpus", "--seed=abc"]), 1).expect_err("nan");
        assert!(err.contains("number"), "{err}");

        let err = parse_launch_options(&as_args(&["wumpus", "--seed=1", "--seed", "2"]), 1)
            .expect_err("duplicate");
        assert!(err.contains("more than once"), "{err}");

        let err =
            parse_launch_options(&as_args(&["wumpus", "--level=genius"]), 1).expect_err("level");
        assert!(err.contains("unknown agent level"), "{err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        assert_ne!(generate_runtime_seed(), generate_runtime_seed());
    }
}
