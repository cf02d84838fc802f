use std::collections::HashSet;

use gridnav_core::Point;

/// A start-to-goal sequence of cells, both endpoints included.
///
/// Paths produced by the planners are 4-adjacent and never revisit a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Point>);

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// The cells of the path in walking order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps, i.e. `len() - 1` for a non-empty path.
    #[inline]
    pub fn edges(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Whether every consecutive pair differs by one unit on one axis.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent_4(w[1]))
    }

    /// Whether no cell appears twice.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().all(|p| seen.insert(*p))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl AsRef<[Point]> for Path {
    fn as_ref(&self) -> &[Point] {
        &self.0
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
