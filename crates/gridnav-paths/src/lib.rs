//! Single-pair shortest-path planners on 4-connected occupancy grids.
//!
//! Three interchangeable searches, selected by [`PlannerKind`]:
//!
//! - **Breadth-first**: FIFO level order, each cell discovered once
//! - **Dijkstra**: uniform-cost best-first search
//! - **A\***: best-first search guided by [`manhattan`] distance
//!
//! All of them run through [`PathPlanner::search`], which validates the
//! endpoints, owns its search state for the duration of the call, and
//! records how many frontier nodes were expanded.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`GridMap`](gridnav_core::GridMap) implements all three with unit step
//! cost and neighbours in left, right, up, down order.

mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod neighbors;
mod path;
mod planner;
mod space;
mod traits;

pub use distance::manhattan;
pub use path::Path;
pub use planner::{PathPlanner, PlannerKind, UnknownPlanner};
pub use traits::{AstarPather, Pather, WeightedPather};
