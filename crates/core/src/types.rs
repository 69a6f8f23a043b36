use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

/// Start cell and extraction point.
pub const ORIGIN: Pos = Pos { row: 0, col: 0 };

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self { row: self.row + d_row, col: self.col + d_col }
    }

    pub fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor enumeration order used everywhere a direction list is walked.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` offset of one step. Movement and aiming both go through this table.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of a single orthogonal step from `from` to `to`, if they are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Direction> {
        Direction::ALL.into_iter().find(|direction| from.step(*direction) == to)
    }
}

/// Three-valued belief predicate. `Unknown` is never read as either extreme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriState {
    #[default]
    Unknown,
    True,
    False,
}

impl TriState {
    pub fn is_true(self) -> bool {
        matches!(self, TriState::True)
    }

    pub fn is_false(self) -> bool {
        matches!(self, TriState::False)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, TriState::Unknown)
    }

    /// Writes `value` only while the predicate is still `Unknown`.
    /// Returns whether the predicate changed.
    pub fn settle(&mut self, value: bool) -> bool {
        match self {
            TriState::Unknown => {
                *self = TriState::from(value);
                true
            }
            TriState::True | TriState::False => false,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value { TriState::True } else { TriState::False }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Percepts {
    pub glitter: bool,
    pub stench: bool,
    pub breeze: bool,
}

impl Percepts {
    pub const NONE: Percepts = Percepts { glitter: false, stench: false, breeze: false };

    pub fn is_empty(self) -> bool {
        !self.glitter && !self.stench && !self.breeze
    }
}

impl fmt::Display for Percepts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<&str> = [
            (self.glitter, "Glitter"),
            (self.stench, "Stench"),
            (self.breeze, "Breeze"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect();
        f.write_str(&names.join(", "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    Pit,
    Wumpus,
}

/// Which cells the planner may enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskMode {
    /// Only cells proven safe.
    Strict,
    /// Any cell not proven hazardous.
    Permissive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    Pit,
    Wumpus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StuckReason {
    /// Holding the gold with no admissible route back to the origin.
    NoRetreatPath,
    /// Nothing left to explore under either risk mode.
    NoOptions,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    #[default]
    Playing,
    Won,
    Lost(DeathCause),
    Stuck(StuckReason),
}

impl Terminal {
    pub fn is_playing(self) -> bool {
        matches!(self, Terminal::Playing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveReason {
    Manual,
    Retreat,
    ExploreSafe,
    CalculatedRisk,
    RandomWalk,
}

/// The single atomic action produced by one decision cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentAction {
    Shoot { target: Pos, direction: Direction },
    Move { to: Pos, direction: Direction, reason: MoveReason },
    PickUpGold,
    GiveUp(StuckReason),
}

/// Discrete inputs accepted from the embedding application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Shoot,
    Step,
    Reset,
    ToggleAutoMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    OutOfBounds,
    KnownUnsafe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    InvalidMove(InvalidMoveReason),
    NoWeapon,
    WumpusAlreadyDead,
    ShotOutOfBounds,
    NotPlaying,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove(InvalidMoveReason::OutOfBounds) => {
                f.write_str("move target is outside the grid")
            }
            GameError::InvalidMove(InvalidMoveReason::KnownUnsafe) => {
                f.write_str("move target is known to be unsafe")
            }
            GameError::NoWeapon => f.write_str("the arrow has already been used"),
            GameError::WumpusAlreadyDead => f.write_str("the wumpus is already dead"),
            GameError::ShotOutOfBounds => f.write_str("the agent is facing the grid edge"),
            GameError::NotPlaying => f.write_str("the round is over"),
        }
    }
}

impl Error for GameError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    WorldReset { seed: u64 },
    Observed { pos: Pos, percepts: Percepts },
    Deduced { pos: Pos, hazard: Hazard },
    Shot { target: Pos, hit: bool },
    Moved { from: Pos, to: Pos, reason: MoveReason },
    GoldPickedUp { pos: Pos },
    Died { pos: Pos, cause: DeathCause },
    Won { score: i32 },
    Stuck { reason: StuckReason },
    AutoModeChanged { enabled: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    Finished(Terminal),
    BudgetExhausted,
}

#[derive(Clone, Copy, Debug)]
pub struct AdvanceResult {
    pub simulated_ticks: u32,
    pub stop_reason: AdvanceStopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_between_matches_delta_table() {
        let center = Pos::new(1, 1);
        for direction in Direction::ALL {
            assert_eq!(Direction::between(center, center.step(direction)), Some(direction));
        }
        assert_eq!(Direction::between(center, Pos::new(2, 2)), None);
        assert_eq!(Direction::between(center, center), None);
    }

    #[test]
    fn settle_only_writes_unknown() {
        let mut value = TriState::Unknown;
        assert!(value.settle(false));
        assert_eq!(value, TriState::False);
        assert!(!value.settle(true));
        assert_eq!(value, TriState::False);
    }

    #[test]
    fn percepts_display_lists_present_signals() {
        assert_eq!(Percepts::NONE.to_string(), "None");
        let percepts = Percepts { glitter: true, stench: false, breeze: true };
        assert_eq!(percepts.to_string(), "Glitter, Breeze");
    }
}
