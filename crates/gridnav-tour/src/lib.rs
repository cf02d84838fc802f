//! Multi-target tours on occupancy grids.
//!
//! Composes the single-pair planners of `gridnav-paths` into a tour:
//!
//! 1. [`DistanceMatrix::compute`] runs a planner between every ordered pair
//!    of waypoints (depot first, then targets).
//! 2. [`RouteSequencer::sequence`] orders the waypoints greedily by nearest
//!    unvisited neighbour and sums the leg distances.
//! 3. [`PathStitcher::stitch`] re-plans each leg of that order and joins the
//!    legs into one [`Route`].
//!
//! [`MissionPlan::compute`] runs all three steps.
//!
//! With the `parallel` feature the matrix searches run on a rayon pool.

mod matrix;
mod mission;
mod sequence;
mod stitch;

pub use matrix::{DistanceMatrix, UNREACHABLE};
pub use mission::MissionPlan;
pub use sequence::{RouteSequencer, VisitOrder};
pub use stitch::{LegReport, PathStitcher, Route};
