use std::collections::VecDeque;

use gridnav_core::Point;

use crate::path::Path;
use crate::space::{SearchSpace, UNREACHED};
use crate::traits::Pather;

impl SearchSpace {
    /// Shortest path by level order.
    ///
    /// The frontier is a FIFO queue and every cell is discovered at most
    /// once, so its predecessor is the node that reached it first. Each step
    /// has cost 1 regardless of the pather.
    pub(crate) fn bfs_path<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> Option<Path> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.nodes[start_idx].g = 0;
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(ci) = queue.pop_front() else {
                break false;
            };
            self.expanded += 1;
            if ci == goal_idx {
                break true;
            }

            let current_dist = self.nodes[ci].g;
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.g != UNREACHED {
                    continue;
                }
                n.g = current_dist + 1;
                n.parent = ci;
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        found.then(|| self.reconstruct(goal_idx))
    }
}
