use gridnav_core::{Point, Range};

use crate::path::Path;

/// Sentinel cost for nodes not reached by the current search.
pub(crate) const UNREACHED: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node for BFS/Dijkstra/A* searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHED,
            parent: usize::MAX,
        }
    }
}

/// Frontier entry for the priority-queue searches, ordered by `f` and then
/// by row-major index.
///
/// Equal priorities pop the lower index first (lower y, then lower x).
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, idx) first.
        other.f.cmp(&self.f).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Transient state of a single search call.
///
/// One `SearchSpace` is created per call and dropped when the call returns,
/// so no frontier, cost or predecessor data outlives a search.
pub(crate) struct SearchSpace {
    pub(crate) rng: Range,
    pub(crate) nodes: Vec<Node>,
    /// Nodes popped from the frontier so far.
    pub(crate) expanded: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchSpace {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            nodes: vec![Node::default(); rng.len()],
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.rng.index_of(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.rng.point_at(idx)
    }

    /// Walk predecessors from `goal_idx` back to the root and reverse.
    pub(crate) fn reconstruct(&self, goal_idx: usize) -> Path {
        let mut points = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            points.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        points.reverse();
        Path::new(points)
    }
}
