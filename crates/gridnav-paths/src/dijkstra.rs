use gridnav_core::Point;

use crate::path::Path;
use crate::space::SearchSpace;
use crate::traits::WeightedPather;

impl SearchSpace {
    /// Uniform-cost search: best-first ordered by accumulated cost alone.
    ///
    /// On a unit-cost grid it returns paths as short as BFS, but it explores
    /// by cost relaxation and may push a node several times.
    pub(crate) fn dijkstra_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Path> {
        self.best_first(pather, from, to, |_| 0)
    }
}
