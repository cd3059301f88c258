//! Catch and miss predicates
//!
//! Axis-aligned checks in playfield coordinates (top-left origin, y down).

use super::state::{Playfield, Player, Star};
use crate::consts::MISS_MARGIN;

/// A star is caught when its bottom edge has reached the paddle's top edge
/// and the horizontal extents overlap.
pub fn star_caught(star: &Star, player: &Player) -> bool {
    star.pos.y + star.size >= player.pos.y
        && star.pos.x + star.size > player.pos.x
        && star.pos.x < player.pos.x + player.w
}

/// A star is missed once it has fallen past the bottom margin.
pub fn star_missed(star: &Star, playfield: &Playfield) -> bool {
    star.pos.y > playfield.height + MISS_MARGIN
}
