//! Axis-aligned bounding-box collision detection
//!
//! Everything in Blockfall is an axis-aligned square, so collision is a
//! single rectangle-intersection test.

use glam::Vec2;

/// An axis-aligned rectangle (top-left corner + extents)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    /// Square rectangle helper
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos, size, size)
    }
}

/// Check whether two rectangles overlap.
///
/// Strict inequalities on all four half-plane tests: rectangles that share
/// only an edge or corner do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.pos.x + b.width
        && a.pos.x + a.width > b.pos.x
        && a.pos.y < b.pos.y + b.height
        && a.pos.y + a.height > b.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(x: f32, y: f32) -> Rect {
        Rect::square(Vec2::new(x, y), 40.0)
    }

    #[test]
    fn test_overlapping_rects_collide() {
        let a = sq(100.0, 100.0);
        let b = sq(120.0, 130.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_separated_rects_do_not_collide() {
        let a = sq(0.0, 0.0);
        let b = sq(200.0, 0.0);
        assert!(!overlaps(&a, &b));
        let c = sq(0.0, 200.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = sq(0.0, 0.0);
        // a's right edge exactly at b's left edge
        let b = sq(40.0, 0.0);
        assert!(!overlaps(&a, &b));
        // a's bottom edge exactly at c's top edge
        let c = sq(0.0, 40.0);
        assert!(!overlaps(&a, &c));
        // shared corner only
        let d = sq(40.0, 40.0);
        assert!(!overlaps(&a, &d));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = sq(100.0, 100.0);
        let b = sq(130.0, 110.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));

        let c = sq(300.0, 300.0);
        assert_eq!(overlaps(&a, &c), overlaps(&c, &a));
    }

    #[test]
    fn test_containment_collides() {
        let outer = Rect::new(Vec2::new(0.0, 0.0), 100.0, 100.0);
        let inner = Rect::new(Vec2::new(30.0, 30.0), 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }
}
