//! Draw-request composition
//!
//! The core never reads the display; it only issues string draw requests
//! through [`DrawTarget`] and forgets about them. Each entity draw first
//! blanks the cells the glyph could have occupied on the previous frame,
//! so no stale pixel trails are left behind on a retained screen.

use crate::consts::*;
use crate::sim::{GameState, PauseCue, Side};

/// Write-only display sink. `level` is the glyph intensity (0-15).
///
/// The sink is an external collaborator (a display driver, a terminal, a
/// test recorder); it is never queried.
pub trait DrawTarget {
    fn draw(&mut self, text: &str, x: i32, y: i32, level: u8);
}

/// Ball glyph plus the diagonal blank ring that erases its previous cell.
pub fn draw_ball(target: &mut impl DrawTarget, state: &GameState) {
    let (x, y) = (state.ball.x, state.ball.y as i32);
    for i in 1..=2 {
        target.draw(" ", x - i, y - i, FIELD_LEVEL);
        target.draw(" ", x + i, y + i, FIELD_LEVEL);
    }
    target.draw("*", x, y, FIELD_LEVEL);
}

/// Player paddle column. The cleanup span is wide because a single move
/// command travels several pixels.
pub fn draw_player(target: &mut impl DrawTarget, state: &GameState) {
    draw_paddle(target, state.player.x, state.player.y, PLAYER_STEP + 2);
}

/// Opponent paddle column; one pixel per tick needs only a narrow cleanup.
pub fn draw_opponent(target: &mut impl DrawTarget, state: &GameState) {
    draw_paddle(target, state.opponent.x, state.opponent.y, 2);
}

fn draw_paddle(target: &mut impl DrawTarget, x: i32, y: i32, cleanup: i32) {
    for i in 1..=cleanup {
        target.draw(" ", x, y - i, FIELD_LEVEL);
        target.draw(" ", x, y + i, FIELD_LEVEL);
    }
    target.draw(" ", x, y, FIELD_LEVEL);
    target.draw("|", x, y, FIELD_LEVEL);
}

/// Score readouts in the top corners, player left, opponent right.
pub fn draw_scores(target: &mut impl DrawTarget, state: &GameState) {
    let player = state.match_state.player_score.to_string();
    let opponent = state.match_state.opponent_score.to_string();
    target.draw(&player, X_MIN + 10, 0, SCORE_LEVEL);
    target.draw(&opponent, X_MAX - 10, 0, SCORE_LEVEL);
}

/// Countdown digit (or the serve marker) at the ball origin.
pub fn draw_pause_cue(target: &mut impl DrawTarget, cue: PauseCue) {
    let glyph = match cue {
        PauseCue::Three => "3",
        PauseCue::Two => "2",
        PauseCue::One => "1",
        PauseCue::Resume => "*",
    };
    target.draw(glyph, BALL_ORIGIN_X, BALL_ORIGIN_Y as i32, FIELD_LEVEL);
}

/// End-of-match banner.
pub fn draw_winner(target: &mut impl DrawTarget, winner: Side) {
    let text = match winner {
        Side::Player => "You win!",
        Side::Opponent => "The CPU wins!",
    };
    target.draw(text, X_MAX / 5, Y_MAX / 2, FIELD_LEVEL);
}

/// Blank a single cell (the ball glyph left at a wall when a point ends).
pub fn erase_at(target: &mut impl DrawTarget, x: i32, y: i32) {
    target.draw(" ", x, y, FIELD_LEVEL);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, i32, i32, u8)>,
    }

    impl DrawTarget for Recorder {
        fn draw(&mut self, text: &str, x: i32, y: i32, level: u8) {
            self.calls.push((text.to_string(), x, y, level));
        }
    }

    #[test]
    fn test_ball_draw_cleans_then_draws() {
        let mut rec = Recorder::default();
        let state = GameState::new(0);
        draw_ball(&mut rec, &state);

        // Four blanks around the cell, glyph last
        assert_eq!(rec.calls.len(), 5);
        assert!(rec.calls[..4].iter().all(|c| c.0 == " "));
        assert_eq!(rec.calls[4], ("*".to_string(), 60, 44, FIELD_LEVEL));
    }

    #[test]
    fn test_player_cleanup_spans_move_step() {
        let mut rec = Recorder::default();
        let state = GameState::new(0);
        draw_player(&mut rec, &state);

        let blanks = rec.calls.iter().filter(|c| c.0 == " ").count();
        assert_eq!(blanks, 13); // 6 above, 6 below, 1 under the glyph
        let last = rec.calls.last().expect("draws something");
        assert_eq!(last, &("|".to_string(), 0, 44, FIELD_LEVEL));
        // Every request stays in the player's column
        assert!(rec.calls.iter().all(|c| c.1 == state.player.x));
    }

    #[test]
    fn test_scores_land_in_the_corners() {
        let mut rec = Recorder::default();
        let mut state = GameState::new(0);
        state.match_state.player_score = 3;
        state.match_state.opponent_score = 7;
        draw_scores(&mut rec, &state);

        assert_eq!(rec.calls[0], ("3".to_string(), 10, 0, SCORE_LEVEL));
        assert_eq!(rec.calls[1], ("7".to_string(), 110, 0, SCORE_LEVEL));
    }

    #[test]
    fn test_pause_cues_sit_at_the_origin() {
        let mut rec = Recorder::default();
        for (cue, glyph) in [
            (PauseCue::Three, "3"),
            (PauseCue::Two, "2"),
            (PauseCue::One, "1"),
            (PauseCue::Resume, "*"),
        ] {
            draw_pause_cue(&mut rec, cue);
            let last = rec.calls.last().expect("cue drawn");
            assert_eq!(last, &(glyph.to_string(), 60, 44, FIELD_LEVEL));
        }
    }
}
