//! 4-connected, unit-cost expansion over a [`GridMap`].
//!
//! All three planners go through these impls, so they see the same
//! neighbours in the same order (left, right, up, down).

use gridnav_core::{GridMap, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for GridMap {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for GridMap {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for GridMap {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
