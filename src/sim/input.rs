//! Player paddle input
//!
//! Move commands arrive out-of-band from ticks, one per decoded button
//! edge, and take effect immediately against the player's position.

use super::state::{PlayerState, VDir};
use crate::consts::{PLAYER_STEP, Y_MAX, Y_MIN};

/// Apply one move command. The step can overshoot the field edge, so the
/// new position is clamped. Returns true when the paddle actually moved,
/// so the caller can redraw the player column right away.
pub fn apply_move(player: &mut PlayerState, dir: VDir) -> bool {
    match dir {
        VDir::Up => {
            if player.y > Y_MIN {
                player.y = (player.y - PLAYER_STEP).max(Y_MIN);
                true
            } else {
                false
            }
        }
        VDir::Down => {
            if player.y < Y_MAX - 1 {
                player.y = (player.y + PLAYER_STEP).min(Y_MAX - 1);
                true
            } else {
                false
            }
        }
    }
}
