//! Bounce-zone classification
//!
//! Pure functions over a paddle's y and the ball's truncated y. The contact
//! band is partitioned two ways: a coarse 3-zone split picks the outgoing
//! direction, a finer 5-zone split picks the step magnitude. The two splits
//! use different boundaries, so callers must feed the same coordinate pair
//! to both and combine the results.
//!
//! The ball's sub-pixel y is truncated (`as i32`) before classification;
//! the band arithmetic is all on whole pixels.

use super::state::VDir;
use crate::consts::{BOUNCE_TOLERANCE, SHALLOW_ANGLE_OFFSET};

/// Whether the ball is vertically close enough to a paddle to register
/// contact when horizontally aligned.
pub fn is_bounceable(paddle_y: i32, ball_y: i32) -> bool {
    paddle_y + BOUNCE_TOLERANCE > ball_y && paddle_y - BOUNCE_TOLERANCE < ball_y
}

/// Outgoing vertical direction after a paddle hit.
///
/// `None` when the ball is exactly level with the paddle center: the ball
/// keeps whatever vertical direction it already had.
pub fn bounce_direction(paddle_y: i32, ball_y: i32) -> Option<VDir> {
    if paddle_y + BOUNCE_TOLERANCE > ball_y && paddle_y < ball_y {
        // below center
        Some(VDir::Down)
    } else if paddle_y == ball_y {
        None
    } else if paddle_y - BOUNCE_TOLERANCE < ball_y && paddle_y > ball_y {
        // above center
        Some(VDir::Up)
    } else {
        None
    }
}

/// Outgoing vertical step magnitude after a paddle hit.
///
/// Five regions: bottom, middle-bottom, middle, middle-top, top. The outer
/// regions send the ball out at the steepest step; the middle bands, within
/// `BOUNCE_TOLERANCE - SHALLOW_ANGLE_OFFSET` of center, keep it shallow.
pub fn bounce_angle(paddle_y: i32, ball_y: i32) -> f32 {
    if paddle_y + BOUNCE_TOLERANCE - SHALLOW_ANGLE_OFFSET > ball_y && paddle_y < ball_y {
        // middle-bottom
        0.2
    } else if paddle_y + BOUNCE_TOLERANCE > ball_y && paddle_y < ball_y {
        // bottom
        0.75
    } else if paddle_y == ball_y {
        // middle
        0.0
    } else if paddle_y - BOUNCE_TOLERANCE + SHALLOW_ANGLE_OFFSET < ball_y && paddle_y > ball_y {
        // middle-top
        0.2
    } else if paddle_y - BOUNCE_TOLERANCE < ball_y && paddle_y > ball_y {
        // top
        0.75
    } else {
        0.0
    }
}
