//! Axis-aligned collision test
//!
//! Every object, player included, hits with the same fixed 30x30 box centered
//! on its position. Overlap is open-interval, so boxes that merely touch at an
//! edge do not collide.

use glam::Vec2;

use crate::consts::HIT_HALF_EXTENT;

/// Check whether the collision boxes around two positions overlap
///
/// Symmetric: the argument order never matters.
pub fn check_collision(a: Vec2, b: Vec2) -> bool {
    let a_left = a.x - HIT_HALF_EXTENT;
    let a_right = a.x + HIT_HALF_EXTENT;
    let a_top = a.y - HIT_HALF_EXTENT;
    let a_bottom = a.y + HIT_HALF_EXTENT;

    let b_left = b.x - HIT_HALF_EXTENT;
    let b_right = b.x + HIT_HALF_EXTENT;
    let b_top = b.y - HIT_HALF_EXTENT;
    let b_bottom = b.y + HIT_HALF_EXTENT;

    a_left < b_right && a_right > b_left && a_top < b_bottom && a_bottom > b_top
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = Vec2::new(400.0, 500.0);
        let b = Vec2::new(410.0, 495.0);
        assert!(check_collision(a, b));
    }

    #[test]
    fn test_exact_touch_does_not_collide() {
        // Exactly 30px apart on one axis, centers aligned on the other:
        // the boxes share an edge but the open-interval test rejects it.
        let a = Vec2::new(400.0, 500.0);
        assert!(!check_collision(a, Vec2::new(430.0, 500.0)));
        assert!(!check_collision(a, Vec2::new(400.0, 470.0)));
    }

    #[test]
    fn test_near_touch_collides() {
        // 29px apart on both axes still overlaps by 1px
        let a = Vec2::new(400.0, 500.0);
        let b = Vec2::new(429.0, 471.0);
        assert!(check_collision(a, b));
    }

    #[test]
    fn test_distant_boxes_miss() {
        let a = Vec2::new(200.0, 500.0);
        let b = Vec2::new(300.0, 500.0);
        assert!(!check_collision(a, b));
    }

    proptest! {
        #[test]
        fn prop_collision_symmetric(
            ax in -200.0f32..1000.0, ay in -200.0f32..800.0,
            bx in -200.0f32..1000.0, by in -200.0f32..800.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(check_collision(a, b), check_collision(b, a));
        }

        #[test]
        fn prop_self_collision(x in -200.0f32..1000.0, y in -200.0f32..800.0) {
            let p = Vec2::new(x, y);
            prop_assert!(check_collision(p, p));
        }
    }
}
