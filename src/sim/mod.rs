//! Deterministic simulation module
//!
//! Everything that decides the match lives here, and none of it touches a
//! display or a clock: state advances only through [`tick`] and
//! [`apply_move`], randomness comes only from the seeded RNG inside
//! [`GameState`], so a seed fully determines a run.

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;
pub mod zone;

pub use collision::{CollisionEvent, resolve};
pub use input::apply_move;
pub use state::{
    BallState, GameState, HDir, MatchPhase, MatchState, OpponentState, PlayerState, Side, VDir,
};
pub use tick::{PauseCue, TickReport, tick};
pub use zone::{bounce_angle, bounce_direction, is_bounceable};
