//! Collision resolution
//!
//! Runs once per tick, before the ball moves, so contact is caught at the
//! paddle plane instead of after the ball has slipped past it. The four
//! cases form a priority chain; the first match wins. Top and bottom edge
//! bounces are not collisions, they live in ball motion.

use super::state::{GameState, HDir, MatchPhase, Side};
use super::zone::{bounce_angle, bounce_direction, is_bounceable};
use crate::consts::*;

/// What the resolver observed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionEvent {
    /// The ball came off a paddle
    PaddleBounce { side: Side, angle: f32 },
    /// The ball reached a wall. `winner` is set when the point ends the match.
    PointScored {
        scorer: Side,
        winner: Option<Side>,
        /// Where the ball glyph sat when it hit the wall, for erasing
        impact: (i32, i32),
    },
}

/// Resolve paddle and wall contact for the current ball position.
pub fn resolve(state: &mut GameState) -> Option<CollisionEvent> {
    let ball_y = state.ball.y as i32;

    // Player contact plane
    if state.ball.x == state.player.x + WALL_OFFSET
        && is_bounceable(state.player.y, ball_y)
        && state.ball.h_dir == HDir::Left
    {
        return Some(paddle_bounce(state, Side::Player, state.player.y, ball_y));
    }

    // Opponent contact plane
    if state.ball.x == state.opponent.x - WALL_OFFSET
        && is_bounceable(state.opponent.y, ball_y)
        && state.ball.h_dir == HDir::Right
    {
        return Some(paddle_bounce(state, Side::Opponent, state.opponent.y, ball_y));
    }

    // Walls: a miss on either side scores for the other
    if state.ball.x == X_MIN {
        return Some(score_point(state, Side::Opponent, HDir::Right));
    }
    if state.ball.x == X_MAX {
        return Some(score_point(state, Side::Player, HDir::Left));
    }

    None
}

/// Send the ball back off a paddle. The step comes from the fine zone split,
/// the direction from the coarse one; an exact-level hit leaves the current
/// vertical direction alone.
fn paddle_bounce(state: &mut GameState, side: Side, paddle_y: i32, ball_y: i32) -> CollisionEvent {
    state.ball.h_dir = match side {
        Side::Player => HDir::Right,
        Side::Opponent => HDir::Left,
    };
    state.ball.y_step = bounce_angle(paddle_y, ball_y);
    if let Some(dir) = bounce_direction(paddle_y, ball_y) {
        state.ball.v_dir = dir;
    }

    CollisionEvent::PaddleBounce {
        side,
        angle: state.ball.y_step,
    }
}

/// Wall hit: stop vertical drift, credit the point, then either finish the
/// match or pause for the serve countdown with the ball back at the origin.
fn score_point(state: &mut GameState, scorer: Side, serve_dir: HDir) -> CollisionEvent {
    let impact = (state.ball.x, state.ball.y as i32);
    state.ball.y_step = 0.0;

    let score = match scorer {
        Side::Player => &mut state.match_state.player_score,
        Side::Opponent => &mut state.match_state.opponent_score,
    };
    *score += 1;

    let winner = if *score >= WIN_SCORE {
        state.match_state.phase = MatchPhase::Finished { winner: scorer };
        Some(scorer)
    } else {
        state.match_state.phase = MatchPhase::Paused { countdown: 0 };
        state.ball.reset_for_serve();
        // Next serve travels toward the side that just took the point
        state.ball.h_dir = serve_dir;
        None
    };

    CollisionEvent::PointScored {
        scorer,
        winner,
        impact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::VDir;

    fn active_state() -> GameState {
        GameState::new(42)
    }

    #[test]
    fn test_player_contact_exact_level() {
        // Ball on the player plane, dead center: straight return
        let mut state = active_state();
        state.ball.x = state.player.x + WALL_OFFSET;
        state.ball.y = 44.0;
        state.ball.v_dir = VDir::Down;

        let event = resolve(&mut state);
        assert_eq!(
            event,
            Some(CollisionEvent::PaddleBounce {
                side: Side::Player,
                angle: 0.0
            })
        );
        assert_eq!(state.ball.h_dir, HDir::Right);
        assert_eq!(state.ball.y_step, 0.0);
        // Exact-level hit keeps the previous vertical direction
        assert_eq!(state.ball.v_dir, VDir::Down);
    }

    #[test]
    fn test_player_contact_outer_zone() {
        let mut state = active_state();
        state.ball.x = state.player.x + WALL_OFFSET;
        state.ball.y = 49.0; // 5 below center: steep zone, heading down
        state.ball.v_dir = VDir::Up;

        resolve(&mut state).expect("contact on the player plane");
        assert_eq!(state.ball.h_dir, HDir::Right);
        assert_eq!(state.ball.y_step, 0.75);
        assert_eq!(state.ball.v_dir, VDir::Down);
    }

    #[test]
    fn test_player_plane_ignored_when_moving_away() {
        let mut state = active_state();
        state.ball.x = state.player.x + WALL_OFFSET;
        state.ball.y = 44.0;
        state.ball.h_dir = HDir::Right;

        assert_eq!(resolve(&mut state), None);
    }

    #[test]
    fn test_player_plane_ignored_outside_band() {
        let mut state = active_state();
        state.ball.x = state.player.x + WALL_OFFSET;
        state.ball.y = 60.0; // well below the paddle

        assert_eq!(resolve(&mut state), None);
        assert_eq!(state.ball.h_dir, HDir::Left);
    }

    #[test]
    fn test_opponent_contact_mirrors_player() {
        let mut state = active_state();
        state.ball.x = state.opponent.x - WALL_OFFSET;
        state.ball.y = 41.5; // truncates to 41, shallow zone above center
        state.ball.h_dir = HDir::Right;

        let event = resolve(&mut state);
        assert_eq!(
            event,
            Some(CollisionEvent::PaddleBounce {
                side: Side::Opponent,
                angle: 0.2
            })
        );
        assert_eq!(state.ball.h_dir, HDir::Left);
        assert_eq!(state.ball.v_dir, VDir::Up);
    }

    #[test]
    fn test_left_wall_scores_for_opponent() {
        let mut state = active_state();
        state.ball.x = X_MIN;
        state.ball.y = 20.0;
        state.ball.y_step = 0.75;

        let event = resolve(&mut state);
        assert_eq!(
            event,
            Some(CollisionEvent::PointScored {
                scorer: Side::Opponent,
                winner: None,
                impact: (X_MIN, 20),
            })
        );
        assert_eq!(state.match_state.opponent_score, 1);
        assert_eq!(state.match_state.player_score, 0);
        assert_eq!(
            state.match_state.phase,
            MatchPhase::Paused { countdown: 0 }
        );
        // Serve state: origin position, no drift, heading at the scorer
        assert_eq!(state.ball.x, BALL_ORIGIN_X);
        assert_eq!(state.ball.y, BALL_ORIGIN_Y);
        assert_eq!(state.ball.y_step, 0.0);
        assert_eq!(state.ball.h_dir, HDir::Right);
    }

    #[test]
    fn test_right_wall_scores_for_player() {
        let mut state = active_state();
        state.ball.x = X_MAX;
        state.ball.h_dir = HDir::Right;

        let event = resolve(&mut state);
        assert!(matches!(
            event,
            Some(CollisionEvent::PointScored {
                scorer: Side::Player,
                winner: None,
                ..
            })
        ));
        assert_eq!(state.match_state.player_score, 1);
        assert_eq!(state.ball.h_dir, HDir::Left);
    }

    #[test]
    fn test_tenth_point_finishes_the_match() {
        let mut state = active_state();
        state.match_state.opponent_score = 9;
        state.ball.x = X_MIN;
        state.ball.y = 30.0;

        let event = resolve(&mut state);
        assert_eq!(
            event,
            Some(CollisionEvent::PointScored {
                scorer: Side::Opponent,
                winner: Some(Side::Opponent),
                impact: (X_MIN, 30),
            })
        );
        assert_eq!(state.match_state.opponent_score, 10);
        assert_eq!(
            state.match_state.phase,
            MatchPhase::Finished {
                winner: Side::Opponent
            }
        );
        // Terminal point: no serve reset
        assert_eq!(state.ball.x, X_MIN);
    }

    #[test]
    fn test_no_collision_midfield() {
        let mut state = active_state();
        assert_eq!(resolve(&mut state), None);
        assert_eq!(state.ball.x, BALL_ORIGIN_X);
    }
}
