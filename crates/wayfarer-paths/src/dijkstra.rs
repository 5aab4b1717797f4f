use std::collections::{HashMap, HashSet};

use wayfarer_core::Point;

use crate::frontier::Frontier;
use crate::traits::WeightedPather;

/// Cheapest route found by [`shortest_path`]: the points from origin to goal
/// inclusive and their total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Found {
    pub(crate) points: Vec<Point>,
    pub(crate) cost: i32,
}

/// Single-source Dijkstra from `origin`, halting on the first popped point
/// accepted by `is_goal`.
///
/// The origin itself is tested first, so a goal origin yields a one-point
/// route. Returns `None` once the reachable set is exhausted.
pub(crate) fn shortest_path<P, G>(pather: &P, origin: Point, mut is_goal: G) -> Option<Found>
where
    P: WeightedPather,
    G: FnMut(Point) -> bool,
{
    let mut distance: HashMap<Point, i32> = HashMap::new();
    let mut predecessor: HashMap<Point, Point> = HashMap::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut frontier = Frontier::default();
    let mut nbuf = Vec::with_capacity(8);

    distance.insert(origin, 0);
    frontier.push(origin, 0);

    while !frontier.is_empty() {
        let (current, cost) = frontier.pop();
        visited.insert(current);
        if is_goal(current) {
            return Some(Found {
                points: unwind(&predecessor, origin, current),
                cost,
            });
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);
        for &next in &nbuf {
            if visited.contains(&next) {
                continue;
            }
            let tentative = cost.saturating_add(pather.cost(current, next));
            if distance.get(&next).is_some_and(|&d| tentative >= d) {
                continue;
            }
            distance.insert(next, tentative);
            predecessor.insert(next, current);
            frontier.push(next, tentative);
        }
    }
    None
}

fn unwind(predecessor: &HashMap<Point, Point>, origin: Point, goal: Point) -> Vec<Point> {
    let mut points = vec![goal];
    let mut p = goal;
    while p != origin {
        match predecessor.get(&p) {
            Some(&prev) => {
                points.push(prev);
                p = prev;
            }
            None => break,
        }
    }
    points.reverse();
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Pather;

    /// A line 0..len where each step costs its destination index.
    struct Line {
        len: i32,
    }

    impl Pather for Line {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for x in [p.x - 1, p.x + 1] {
                if (0..self.len).contains(&x) {
                    buf.push(Point::new(x, 0));
                }
            }
        }
    }

    impl WeightedPather for Line {
        fn cost(&self, _from: Point, to: Point) -> i32 {
            to.x + 1
        }
    }

    #[test]
    fn finds_goal_and_accumulates_cost() {
        let line = Line { len: 5 };
        let found = shortest_path(&line, Point::new(0, 0), |p| p.x == 3).unwrap();
        assert_eq!(found.points.len(), 4);
        assert_eq!(found.cost, 2 + 3 + 4);
    }

    #[test]
    fn origin_goal_is_a_single_point() {
        let line = Line { len: 5 };
        let found = shortest_path(&line, Point::new(2, 0), |p| p.x == 2).unwrap();
        assert_eq!(found.points, vec![Point::new(2, 0)]);
        assert_eq!(found.cost, 0);
    }

    #[test]
    fn exhausted_search_returns_none() {
        let line = Line { len: 5 };
        assert!(shortest_path(&line, Point::new(0, 0), |p| p.x == 9).is_none());
    }
}
