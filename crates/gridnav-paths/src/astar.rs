use std::collections::BinaryHeap;

use gridnav_core::Point;

use crate::path::Path;
use crate::space::{NodeRef, SearchSpace};
use crate::traits::{AstarPather, WeightedPather};

impl SearchSpace {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if the
    /// frontier runs dry before the goal is popped.
    pub(crate) fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Path> {
        self.best_first(pather, from, to, |p| pather.estimate(p, to))
    }

    /// Best-first search shared by Dijkstra and A*.
    ///
    /// Entries are ordered by `g + estimate`. A node is pushed again every
    /// time its cost strictly improves and stale entries are not skipped
    /// when popped: every pop counts as an expansion.
    pub(crate) fn best_first<P: WeightedPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        estimate: impl Fn(Point) -> i32,
    ) -> Option<Path> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.nodes[start_idx].g = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: estimate(from),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            self.expanded += 1;

            let ci = current.idx;
            if ci == goal_idx {
                break 'search true;
            }

            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.nodes[ni];
                if tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.parent = ci;

                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + estimate(np),
                });
            }
        };

        self.nbuf = nbuf;
        found.then(|| self.reconstruct(goal_idx))
    }
}
