//! **gridnav-core**: foundational types for multi-target grid navigation.
//!
//! This crate provides the geometry primitives, the immutable occupancy
//! [`GridMap`] shared by every planner, and the [`NavError`] taxonomy used
//! across the *gridnav* workspace.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{LayoutIssue, NavError, Result, Role};
pub use geom::{Point, Range};
pub use grid::{CellState, GridLayout, GridMap};
