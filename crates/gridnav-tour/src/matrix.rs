//! All-pairs shortest-path lengths between waypoints.

use std::ops::Index;

use gridnav_core::{GridMap, NavError, Point, Result};
use gridnav_paths::{PathPlanner, PlannerKind};

/// Sentinel distance for a pair with no connecting path.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Square matrix of shortest-path edge counts between waypoints.
///
/// Entry `[i][j]` is the number of steps from point `i` to point `j`, or
/// [`UNREACHABLE`]. The diagonal is always zero.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "MatrixRepr", try_from = "MatrixRepr")
)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
    nodes_expanded: usize,
}

impl PartialEq for DistanceMatrix {
    /// Two matrices are equal when their entries are; search statistics are
    /// ignored.
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.data == other.data
    }
}

impl DistanceMatrix {
    /// Run `method` between every ordered pair of `points`.
    ///
    /// Every point is checked first and the build fails with
    /// [`NavError::InvalidEndpoint`] if one is blocked or out of bounds.
    /// Unreachable pairs are recorded as [`UNREACHABLE`]; the diagonal is
    /// never searched.
    pub fn compute(grid: &GridMap, points: &[Point], method: PlannerKind) -> Result<Self> {
        if let Some(&bad) = points.iter().find(|&&p| !grid.is_passable(p)) {
            return Err(NavError::InvalidEndpoint(bad));
        }

        let n = points.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
            .collect();

        let measured = measure_pairs(grid, points, &pairs, method);

        let mut data = vec![0.0; n * n];
        let mut nodes_expanded = 0;
        for (&(i, j), result) in pairs.iter().zip(measured) {
            let (dist, expanded) = result?;
            data[i * n + j] = dist;
            nodes_expanded += expanded;
        }

        let unreachable = data.iter().filter(|d| d.is_infinite()).count();
        log::debug!(
            "{method} distance matrix: {n}x{n}, {} searches, {unreachable} unreachable pairs, {nodes_expanded} nodes expanded",
            pairs.len()
        );

        Ok(Self {
            n,
            data,
            nodes_expanded,
        })
    }

    /// Build a matrix from explicit rows.
    ///
    /// Rows must form a square matrix with a zero diagonal and no negative or
    /// NaN entries; infinity marks an unreachable pair.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(NavError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if row[i] != 0.0 {
                return Err(NavError::InvalidMatrix(format!(
                    "diagonal entry {i} is {}, expected 0",
                    row[i]
                )));
            }
            if let Some(bad) = row.iter().find(|d| d.is_nan() || **d < 0.0) {
                return Err(NavError::InvalidMatrix(format!("row {i} contains {bad}")));
            }
            data.extend(row);
        }
        Ok(Self {
            n,
            data,
            nodes_expanded: 0,
        })
    }

    /// Number of waypoints (rows and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from point `i` to point `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`size`](Self::size).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of {0}x{0}", self.n);
        self.data[i * self.n + j]
    }

    /// Whether a path exists from `i` to `j`.
    #[inline]
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_finite()
    }

    /// Distances from point `i` to every point.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterator over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway.
        self.data.chunks(self.n.max(1))
    }

    /// Whether `[i][j] == [j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Frontier expansions summed over every search of the build.
    ///
    /// Zero for matrices built with [`from_rows`](Self::from_rows).
    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.row(i)[j]
    }
}

fn measure(grid: &GridMap, from: Point, to: Point, method: PlannerKind) -> Result<(f64, usize)> {
    let mut planner = PathPlanner::new(grid, method);
    let dist = planner
        .search(from, to)?
        .map_or(UNREACHABLE, |path| path.edges() as f64);
    Ok((dist, planner.nodes_expanded()))
}

#[cfg(not(feature = "parallel"))]
fn measure_pairs(
    grid: &GridMap,
    points: &[Point],
    pairs: &[(usize, usize)],
    method: PlannerKind,
) -> Vec<Result<(f64, usize)>> {
    pairs
        .iter()
        .map(|&(i, j)| measure(grid, points[i], points[j], method))
        .collect()
}

/// One rayon task per pair; results come back in `pairs` order.
#[cfg(feature = "parallel")]
fn measure_pairs(
    grid: &GridMap,
    points: &[Point],
    pairs: &[(usize, usize)],
    method: PlannerKind,
) -> Vec<Result<(f64, usize)>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|&(i, j)| measure(grid, points[i], points[j], method))
        .collect()
}

// ---------------------------------------------------------------------------
// serde representation: rows with `null` for unreachable pairs
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixRepr {
    rows: Vec<Vec<Option<f64>>>,
}

#[cfg(feature = "serde")]
impl From<DistanceMatrix> for MatrixRepr {
    fn from(m: DistanceMatrix) -> Self {
        let rows = m
            .rows()
            .take(m.n)
            .map(|row| row.iter().map(|d| d.is_finite().then_some(*d)).collect())
            .collect();
        Self { rows }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixRepr> for DistanceMatrix {
    type Error = NavError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        let rows = repr
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(|d| d.unwrap_or(UNREACHABLE)).collect())
            .collect();
        Self::from_rows(rows)
    }
}
