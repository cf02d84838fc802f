//! Error taxonomy shared by every gridnav crate.
//!
//! An unreachable goal is never an error: planners report it as `Ok(None)`
//! and the distance matrix as an infinite entry.

use std::fmt;

use crate::geom::Point;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, NavError>;

/// Failures raised at the boundary of the offending call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavError {
    /// A coordinate lies outside the grid.
    #[error("point {0} lies outside the grid")]
    OutOfBounds(Point),
    /// A search was requested from or to a blocked or out-of-bounds cell.
    #[error("invalid search endpoint {0}: cell is an obstacle or outside the grid")]
    InvalidEndpoint(Point),
    /// The grid declaration is inconsistent.
    #[error("invalid grid layout: {0}")]
    InvalidLayout(LayoutIssue),
    /// A visit order refers to a waypoint that does not exist.
    #[error("visit order index {index} is out of range for {len} waypoints")]
    InvalidOrder { index: usize, len: usize },
    /// A hand-built distance matrix is not square or has a non-zero diagonal.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
}

/// The role a coordinate was declared with when building a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Obstacle,
    Start,
    Target,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Obstacle => "obstacle",
            Self::Start => "start",
            Self::Target => "target",
        })
    }
}

/// What exactly is wrong with a grid declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutIssue {
    #[error("grid dimensions {width}x{height} must both be positive")]
    EmptyGrid { width: i32, height: i32 },
    #[error("{role} {point} lies outside the grid")]
    OutOfBounds { role: Role, point: Point },
    #[error("{point} is declared both as {first} and as {second}")]
    Overlap {
        point: Point,
        first: Role,
        second: Role,
    },
}
