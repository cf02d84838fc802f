use std::fmt;
use std::str::FromStr;

use gridnav_core::{GridMap, NavError, Point, Result};

use crate::path::Path;
use crate::space::SearchSpace;

/// The single-pair search algorithm a [`PathPlanner`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PlannerKind {
    /// FIFO level-order search.
    BreadthFirst,
    /// Uniform-cost search ordered by accumulated cost.
    Dijkstra,
    /// Best-first search ordered by cost plus Manhattan distance to the goal.
    #[default]
    AStar,
}

impl PlannerKind {
    /// Every kind, in the order reports list them.
    pub const ALL: [PlannerKind; 3] = [Self::BreadthFirst, Self::Dijkstra, Self::AStar];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// A fresh planner of this kind over `grid`.
    pub fn planner(self, grid: &GridMap) -> PathPlanner<'_> {
        PathPlanner::new(grid, self)
    }
}

impl fmt::Display for PlannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown planner name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planner `{0}` (expected bfs, dijkstra or astar)")]
pub struct UnknownPlanner(pub String);

impl FromStr for PlannerKind {
    type Err = UnknownPlanner;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Self::BreadthFirst),
            "dijkstra" | "ucs" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(UnknownPlanner(s.to_string())),
        }
    }
}

/// Single-pair shortest-path planner over a borrowed [`GridMap`].
///
/// Every call to [`search`](Self::search) owns its own frontier and
/// predecessor table; only the expansion counter of the last call is kept.
#[derive(Debug, Clone)]
pub struct PathPlanner<'g> {
    grid: &'g GridMap,
    kind: PlannerKind,
    nodes_expanded: usize,
}

impl<'g> PathPlanner<'g> {
    pub fn new(grid: &'g GridMap, kind: PlannerKind) -> Self {
        Self {
            grid,
            kind,
            nodes_expanded: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> PlannerKind {
        self.kind
    }

    #[inline]
    pub fn grid(&self) -> &'g GridMap {
        self.grid
    }

    /// Nodes popped from the frontier during the last [`search`](Self::search).
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Shortest 4-connected path from `start` to `goal`, both included.
    ///
    /// Returns `Ok(None)` when the goal cannot be reached. Fails with
    /// [`NavError::InvalidEndpoint`] if either endpoint is outside the grid
    /// or an obstacle.
    pub fn search(&mut self, start: Point, goal: Point) -> Result<Option<Path>> {
        self.nodes_expanded = 0;
        for p in [start, goal] {
            if !self.grid.is_passable(p) {
                return Err(NavError::InvalidEndpoint(p));
            }
        }

        let mut space = SearchSpace::new(self.grid.bounds());
        let path = match self.kind {
            PlannerKind::BreadthFirst => space.bfs_path(self.grid, start, goal),
            PlannerKind::Dijkstra => space.dijkstra_path(self.grid, start, goal),
            PlannerKind::AStar => space.astar_path(self.grid, start, goal),
        };
        self.nodes_expanded = space.expanded;

        match &path {
            Some(p) => log::debug!(
                "{} {start} -> {goal}: {} edges, {} nodes expanded",
                self.kind,
                p.edges(),
                self.nodes_expanded
            ),
            None => log::debug!(
                "{} {start} -> {goal}: unreachable after {} nodes expanded",
                self.kind,
                self.nodes_expanded
            ),
        }
        Ok(path)
    }
}
