//! Simulation state types
//!
//! One owned aggregate holds everything; each entry point gets exclusive
//! access for the duration of its call. The sub-structures mark which
//! context writes which fields: the input context owns [`PlayerState`],
//! the tick context owns the rest.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Vertical direction, shared by the ball, the opponent paddle, and
/// player move commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VDir {
    Up,
    Down,
}

impl VDir {
    pub fn flipped(self) -> Self {
        match self {
            VDir::Up => VDir::Down,
            VDir::Down => VDir::Up,
        }
    }
}

/// Horizontal ball direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HDir {
    Left,
    Right,
}

/// Which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Normal play
    Active,
    /// Between points, counting down to the next serve
    Paused { countdown: u32 },
    /// A side reached the winning score; terminal
    Finished { winner: Side },
}

/// The player's paddle. Only moves on command, so it carries no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: i32,
    pub y: i32,
}

/// The AI paddle. Keeps a direction between ticks so the drift mode has
/// something to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentState {
    pub x: i32,
    pub y: i32,
    pub dir: VDir,
}

impl OpponentState {
    /// Move one pixel in the current direction, flipping at the field edges.
    pub fn advance(&mut self) {
        match self.dir {
            VDir::Up => {
                if self.y > Y_MIN {
                    self.y -= 1;
                } else {
                    self.dir = VDir::Down;
                }
            }
            VDir::Down => {
                if self.y < Y_MAX {
                    self.y += 1;
                } else {
                    self.dir = VDir::Up;
                }
            }
        }
    }
}

/// The ball. Horizontal position is whole pixels; vertical position keeps
/// sub-pixel precision because the bounce angle is a fractional step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub x: i32,
    pub y: f32,
    pub h_dir: HDir,
    pub v_dir: VDir,
    /// Per-tick vertical displacement magnitude; 0 when not bouncing
    pub y_step: f32,
}

impl BallState {
    fn serve() -> Self {
        Self {
            x: BALL_ORIGIN_X,
            y: BALL_ORIGIN_Y,
            h_dir: HDir::Left,
            v_dir: VDir::Up,
            y_step: 0.0,
        }
    }

    /// Put the ball back at the serve position after a point. Direction and
    /// step are handled by the scoring path, not here.
    pub fn reset_for_serve(&mut self) {
        self.x = BALL_ORIGIN_X;
        self.y = BALL_ORIGIN_Y;
    }
}

/// Score and phase for the running match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u8,
    pub opponent_score: u8,
    pub phase: MatchPhase,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            phase: MatchPhase::Active,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Lottery RNG for the opponent controller
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ball: BallState,
    pub player: PlayerState,
    pub opponent: OpponentState,
    pub match_state: MatchState,
}

impl GameState {
    /// Create the fixed initial layout: both paddles mid-field, ball at the
    /// serve origin moving left.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            ball: BallState::serve(),
            player: PlayerState {
                x: X_MIN,
                y: Y_MAX / 2,
            },
            opponent: OpponentState {
                x: X_MAX - 1,
                y: Y_MAX / 2,
                dir: VDir::Up,
            },
            match_state: MatchState::default(),
        }
    }
}
