//! Fixed timestep simulation tick
//!
//! Advances the match deterministically: collision resolution first, then
//! ball motion, then the opponent's lottery-scheduled move. The serve
//! countdown and the terminal state are handled here too.

use rand::Rng;

use super::collision::{CollisionEvent, resolve};
use super::state::{BallState, GameState, HDir, MatchPhase, VDir};
use crate::consts::*;

/// Countdown cue to present while the match is paused between points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseCue {
    Three,
    Two,
    One,
    /// Countdown elapsed; the serve marker goes back up
    Resume,
}

/// What one tick produced, for the caller to log and render.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    pub collision: Option<CollisionEvent>,
    pub cue: Option<PauseCue>,
    /// Whether entities advanced this tick (Active phase only)
    pub advanced: bool,
}

/// Advance the game by one fixed-rate tick.
pub fn tick(state: &mut GameState) -> TickReport {
    state.time_ticks += 1;

    match state.match_state.phase {
        MatchPhase::Active => {
            let collision = resolve(state);
            if state.match_state.phase != MatchPhase::Active {
                // The point just ended; the ball holds at the serve position
                // (or the wall, on a finishing point) until play resumes.
                return TickReport {
                    collision,
                    cue: None,
                    advanced: false,
                };
            }

            move_ball(&mut state.ball);
            move_opponent(state);
            TickReport {
                collision,
                cue: None,
                advanced: true,
            }
        }
        MatchPhase::Paused { countdown } => {
            let countdown = countdown + 1;
            if countdown > RESUME_TICKS {
                state.match_state.phase = MatchPhase::Active;
                TickReport {
                    cue: Some(PauseCue::Resume),
                    ..Default::default()
                }
            } else {
                state.match_state.phase = MatchPhase::Paused { countdown };
                let cue = if countdown < CUE_2_TICKS {
                    PauseCue::Three
                } else if countdown < CUE_1_TICKS {
                    PauseCue::Two
                } else {
                    PauseCue::One
                };
                TickReport {
                    cue: Some(cue),
                    ..Default::default()
                }
            }
        }
        MatchPhase::Finished { .. } => TickReport::default(),
    }
}

/// One step of ball motion: whole-pixel horizontal, sub-pixel vertical.
/// Just inside the top and bottom edges the vertical direction flips in
/// place of a move, which keeps y inside the field for any step magnitude.
fn move_ball(ball: &mut BallState) {
    match ball.h_dir {
        HDir::Left => ball.x -= 1,
        HDir::Right => ball.x += 1,
    }

    match ball.v_dir {
        VDir::Down => {
            if ball.y < (Y_MAX - 1) as f32 {
                ball.y += ball.y_step;
            } else {
                ball.v_dir = VDir::Up;
            }
        }
        VDir::Up => {
            if ball.y > (Y_MIN + 1) as f32 {
                ball.y -= ball.y_step;
            } else {
                ball.v_dir = VDir::Down;
            }
        }
    }
}

/// Lottery-scheduled opponent move, re-rolled every tick. The first vote
/// picks between tracking the ball (70%) and drifting; a drifting paddle
/// re-rolls and only rarely toggles direction, so it can wander off target
/// for stretches.
fn move_opponent(state: &mut GameState) {
    let mode_roll: u32 = state.rng.random_range(0..100);

    if mode_roll < 70 {
        // Track the ball with a 4-pixel deadband. The down arm wins when
        // both hold, which keeps the tracking slightly imprecise.
        if state.ball.y > (state.opponent.y - 4) as f32 {
            state.opponent.dir = VDir::Down;
        } else if state.ball.y < (state.opponent.y + 4) as f32 {
            state.opponent.dir = VDir::Up;
        }
    } else {
        let flip_roll: u32 = state.rng.random_range(0..100);
        if flip_roll > 95 {
            state.opponent.dir = state.opponent.dir.flipped();
        }
    }

    state.opponent.advance();
}
