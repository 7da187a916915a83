//! External entry points
//!
//! Two interrupt-style contexts drive the core: a fixed-rate tick and an
//! edge-triggered player move. Each call runs to completion with bounded
//! work against the one state aggregate, so a single-threaded scheduler
//! that never overlaps the two calls needs no locking.

use crate::render::{self, DrawTarget};
use crate::sim::{self, CollisionEvent, GameState, MatchPhase, VDir};

/// The simulation core wired to its display sink.
pub struct Pong<D: DrawTarget> {
    state: GameState,
    display: D,
}

impl<D: DrawTarget> Pong<D> {
    pub fn new(seed: u64, display: D) -> Self {
        log::info!("new match, seed {seed}");
        Self {
            state: GameState::new(seed),
            display,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Whether the match has reached its terminal state.
    pub fn finished(&self) -> bool {
        matches!(self.state.match_state.phase, MatchPhase::Finished { .. })
    }

    /// Tick context: advance the simulation one step and issue this frame's
    /// draw requests.
    pub fn on_tick(&mut self) {
        let report = sim::tick(&mut self.state);
        let scores = &self.state.match_state;

        match report.collision {
            Some(CollisionEvent::PaddleBounce { side, angle }) => {
                log::debug!("{side:?} paddle bounce, step {angle}");
            }
            Some(CollisionEvent::PointScored {
                scorer,
                winner,
                impact,
            }) => {
                log::info!(
                    "point for {scorer:?}, score {}-{}",
                    scores.player_score,
                    scores.opponent_score
                );
                render::erase_at(&mut self.display, impact.0, impact.1);
                if let Some(side) = winner {
                    log::info!("match over, {side:?} wins");
                    render::draw_winner(&mut self.display, side);
                }
            }
            None => {}
        }

        if report.advanced {
            render::draw_player(&mut self.display, &self.state);
            render::draw_opponent(&mut self.display, &self.state);
            render::draw_ball(&mut self.display, &self.state);
            render::draw_scores(&mut self.display, &self.state);
        }

        if let Some(cue) = report.cue {
            render::draw_pause_cue(&mut self.display, cue);
        }
    }

    /// Input context: move the player paddle and redraw just its column, so
    /// the control feels immediate instead of waiting for the next tick.
    pub fn on_input(&mut self, dir: VDir) {
        if sim::apply_move(&mut self.state.player, dir) {
            render::draw_player(&mut self.display, &self.state);
        }
    }
}
