use wayfarer_core::Point;

/// Minimal search interface: neighbour enumeration.
pub trait Pather {
    /// Append the successors of `p` into `buf`, in a stable order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to the adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}
