//! Immutable occupancy grid with a depot and a list of targets.
//!
//! [`GridMap`] stores one [`CellState`] per cell in row-major order. It is
//! built once, validated at construction, and then only read: planners and
//! the distance-matrix builder borrow it as `&GridMap`.

use std::collections::HashMap;

use crate::error::{LayoutIssue, NavError, Result, Role};
use crate::geom::{Point, Range};

/// Occupancy of a single cell.
///
/// `Start` and `Target` are informational: every non-`Obstacle` cell is
/// traversable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Obstacle,
    Start,
    Target,
}

impl CellState {
    /// Whether a planner may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}

/// Plain-data description of a grid, as read from a scenario file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub targets: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Point>,
}

/// A validated, read-only occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    bounds: Range,
    cells: Vec<CellState>,
    start: Point,
    targets: Vec<Point>,
    obstacle_count: usize,
}

impl GridMap {
    /// Build a grid of `width × height` cells.
    ///
    /// Fails with [`NavError::InvalidLayout`] if a dimension is not positive,
    /// a declared coordinate lies outside the grid, or one cell is declared
    /// with two roles (a target on an obstacle, the start on a target, the
    /// same target twice, ...). Repeated obstacle coordinates are merged.
    pub fn new(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Point>,
        start: Point,
        targets: impl IntoIterator<Item = Point>,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(NavError::InvalidLayout(LayoutIssue::EmptyGrid { width, height }));
        }
        let bounds = Range::with_size(width, height);
        let mut declared: HashMap<Point, Role> = HashMap::new();

        let mut claim = |p: Point, role: Role| -> Result<()> {
            if !bounds.contains(p) {
                return Err(NavError::InvalidLayout(LayoutIssue::OutOfBounds {
                    role,
                    point: p,
                }));
            }
            match declared.get(&p) {
                Some(Role::Obstacle) if role == Role::Obstacle => Ok(()),
                Some(&first) => Err(NavError::InvalidLayout(LayoutIssue::Overlap {
                    point: p,
                    first,
                    second: role,
                })),
                None => {
                    declared.insert(p, role);
                    Ok(())
                }
            }
        };

        let mut cells = vec![CellState::Free; bounds.len()];
        let mut obstacle_count = 0;
        for p in obstacles {
            claim(p, Role::Obstacle)?;
            if let Some(i) = bounds.index_of(p) {
                if cells[i] != CellState::Obstacle {
                    cells[i] = CellState::Obstacle;
                    obstacle_count += 1;
                }
            }
        }

        claim(start, Role::Start)?;
        let targets: Vec<Point> = targets.into_iter().collect();
        for &t in &targets {
            claim(t, Role::Target)?;
        }

        for &t in &targets {
            if let Some(i) = bounds.index_of(t) {
                cells[i] = CellState::Target;
            }
        }
        if let Some(i) = bounds.index_of(start) {
            cells[i] = CellState::Start;
        }

        Ok(Self {
            bounds,
            cells,
            start,
            targets,
            obstacle_count,
        })
    }

    /// Build a grid from a [`GridLayout`].
    pub fn from_layout(layout: &GridLayout) -> Result<Self> {
        Self::new(
            layout.width,
            layout.height,
            layout.obstacles.iter().copied(),
            layout.start,
            layout.targets.iter().copied(),
        )
    }

    /// The plain-data layout this grid was built from.
    pub fn layout(&self) -> GridLayout {
        GridLayout {
            width: self.width(),
            height: self.height(),
            start: self.start,
            targets: self.targets.clone(),
            obstacles: self.obstacles().collect(),
        }
    }

    /// Grid bounds, `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The depot cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Target cells in declaration order.
    #[inline]
    pub fn targets(&self) -> &[Point] {
        &self.targets
    }

    /// The depot followed by every target: index 0 is always the depot.
    pub fn waypoints(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.targets.iter().copied())
            .collect()
    }

    /// Number of distinct obstacle cells.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacle_count
    }

    /// Obstacle cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds
            .iter()
            .zip(self.cells.iter())
            .filter(|(_, c)| **c == CellState::Obstacle)
            .map(|(p, _)| p)
    }

    /// State of the cell at `p`.
    pub fn cell_state(&self, p: Point) -> Result<CellState> {
        self.bounds
            .index_of(p)
            .map(|i| self.cells[i])
            .ok_or(NavError::OutOfBounds(p))
    }

    /// Whether `p` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.bounds
            .index_of(p)
            .is_some_and(|i| self.cells[i].is_passable())
    }

    /// In-bounds, non-obstacle neighbours of `p` in the fixed expansion
    /// order of [`Point::neighbors_4`].
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.is_passable(n))
            .collect()
    }
}
