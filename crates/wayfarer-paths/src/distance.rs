use wayfarer_core::Point;

/// Chebyshev (L∞) distance between two points: the number of 8-way steps
/// separating them on an open grid.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
