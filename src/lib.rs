//! Pixel Pong - a two-paddle ball game core driven by a fixed-rate tick
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bounce zones, collisions, ball motion,
//!   opponent AI, match state)
//! - `render`: Draw-request composition against an abstract display sink
//! - `game`: The two entry points an external scheduler drives

pub mod game;
pub mod render;
pub mod sim;

pub use game::Pong;
pub use render::DrawTarget;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate
    pub const TICK_HZ: u32 = 50;

    /// Play-field bounds (whole pixels)
    pub const X_MIN: i32 = 0;
    pub const X_MAX: i32 = 120;
    pub const Y_MIN: i32 = 0;
    pub const Y_MAX: i32 = 88;

    /// Horizontal gap between a paddle column and its contact plane
    pub const WALL_OFFSET: i32 = 5;

    /// Vertical half-width of a paddle's contact band
    pub const BOUNCE_TOLERANCE: i32 = 7;
    /// Width carved off each end of the contact band for the shallow-angle zones
    pub const SHALLOW_ANGLE_OFFSET: i32 = 3;

    /// Ball serve position
    pub const BALL_ORIGIN_X: i32 = 60;
    pub const BALL_ORIGIN_Y: f32 = 44.0;

    /// Pixels the player paddle travels per move command
    pub const PLAYER_STEP: i32 = 4;

    /// First side to reach this score wins the match
    pub const WIN_SCORE: u8 = 10;

    /// Serve countdown: the cue drops from "3" to "2" to "1" at these
    /// counter values, and play resumes once the counter passes the last.
    pub const CUE_2_TICKS: u32 = 30;
    pub const CUE_1_TICKS: u32 = 60;
    pub const RESUME_TICKS: u32 = 100;

    /// Display intensity for field glyphs (ball, paddles, countdown cues)
    pub const FIELD_LEVEL: u8 = 11;
    /// Display intensity for the score readouts
    pub const SCORE_LEVEL: u8 = 15;
}
