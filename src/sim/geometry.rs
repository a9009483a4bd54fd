//! Lane geometry and screen-bounds helpers
//!
//! Lanes are evenly spaced about the playfield midpoint; lane 2 sits exactly
//! on the center line.

use glam::Vec2;

use crate::consts::*;

/// Clamp a lane index to the valid range `[0, LANE_COUNT - 1]`
#[inline]
pub fn clamp_lane(lane: i32) -> i32 {
    lane.clamp(0, LANE_COUNT - 1)
}

/// X coordinate of a lane's center line
///
/// Out-of-range indices are clamped rather than rejected.
#[inline]
pub fn lane_position(lane: i32) -> f32 {
    let lane = clamp_lane(lane);
    GAME_WIDTH / 2.0 + (lane - CENTER_LANE) as f32 * LANE_WIDTH
}

/// Whether a position has scrolled far enough past the canvas to despawn
///
/// The margin keeps entities alive just outside the visible area so they never
/// pop out at the edges.
#[inline]
pub fn is_off_screen(pos: Vec2) -> bool {
    pos.y > GAME_HEIGHT + OFFSCREEN_MARGIN
        || pos.y < -OFFSCREEN_MARGIN
        || pos.x < -OFFSCREEN_MARGIN
        || pos.x > GAME_WIDTH + OFFSCREEN_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lane_positions_evenly_spaced() {
        assert_eq!(lane_position(0), 200.0);
        assert_eq!(lane_position(1), 300.0);
        assert_eq!(lane_position(2), 400.0);
        assert_eq!(lane_position(3), 500.0);
        assert_eq!(lane_position(4), 600.0);
    }

    #[test]
    fn test_lane_position_clamps_out_of_range() {
        assert_eq!(lane_position(-3), lane_position(0));
        assert_eq!(lane_position(99), lane_position(4));
    }

    #[test]
    fn test_off_screen_margins() {
        // Just inside the despawn margin on each side
        assert!(!is_off_screen(Vec2::new(400.0, GAME_HEIGHT + 99.0)));
        assert!(!is_off_screen(Vec2::new(400.0, -99.0)));
        assert!(!is_off_screen(Vec2::new(-99.0, 300.0)));
        assert!(!is_off_screen(Vec2::new(GAME_WIDTH + 99.0, 300.0)));

        // Just past it
        assert!(is_off_screen(Vec2::new(400.0, GAME_HEIGHT + 101.0)));
        assert!(is_off_screen(Vec2::new(400.0, -101.0)));
        assert!(is_off_screen(Vec2::new(-101.0, 300.0)));
        assert!(is_off_screen(Vec2::new(GAME_WIDTH + 101.0, 300.0)));
    }

    proptest! {
        #[test]
        fn prop_lane_position_in_bounds(lane in -100i32..100) {
            let x = lane_position(lane);
            prop_assert!(x >= 0.0 && x <= GAME_WIDTH);
        }

        #[test]
        fn prop_lane_position_monotonic(lane in 0i32..(LANE_COUNT - 1)) {
            prop_assert!(lane_position(lane) < lane_position(lane + 1));
        }
    }
}
