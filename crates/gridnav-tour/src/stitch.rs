//! Re-planning each leg of a visit order and joining the legs into a route.

use gridnav_core::{GridMap, NavError, Point, Result};
use gridnav_paths::{PathPlanner, PlannerKind};

use crate::sequence::VisitOrder;

/// Outcome of planning one leg of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegReport {
    /// Waypoint index the leg starts from.
    pub from: usize,
    /// Waypoint index the leg leads to.
    pub to: usize,
    /// Steps in the leg, or `None` if no path exists.
    pub edges: Option<usize>,
    pub nodes_expanded: usize,
}

impl LegReport {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.edges.is_some()
    }
}

/// The cells walked along a visit order, plus a report per leg.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<Point>,
    legs: Vec<LegReport>,
}

impl Route {
    /// Cells of the route in walking order, junctions included once.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// One report per consecutive pair of the visit order.
    #[inline]
    pub fn legs(&self) -> &[LegReport] {
        &self.legs
    }

    /// Legs for which no path was found.
    pub fn failed_legs(&self) -> impl Iterator<Item = &LegReport> + '_ {
        self.legs.iter().filter(|l| !l.is_reachable())
    }

    /// Whether every leg was planned.
    pub fn is_complete(&self) -> bool {
        self.legs.iter().all(LegReport::is_reachable)
    }

    /// Total steps over the planned legs.
    pub fn edges(&self) -> usize {
        self.legs.iter().filter_map(|l| l.edges).sum()
    }

    /// Frontier expansions summed over all leg searches.
    pub fn nodes_expanded(&self) -> usize {
        self.legs.iter().map(|l| l.nodes_expanded).sum()
    }

    /// Whether every consecutive pair of cells is 4-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.points.windows(2).all(|w| w[0].is_adjacent_4(w[1]))
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Joins per-leg shortest paths along a [`VisitOrder`].
pub struct PathStitcher;

impl PathStitcher {
    /// Plan every leg of `order` with a fresh planner of `planner_kind` and
    /// concatenate the paths.
    ///
    /// Every leg after the first loses its leading cell, so junctions appear
    /// once. A leg without a path is logged and skipped; the next leg is
    /// still planned from its own waypoint and still loses its leading cell.
    ///
    /// Fails with [`NavError::InvalidOrder`] if `order` names an index
    /// outside `points`, and with [`NavError::InvalidEndpoint`] if a leg
    /// endpoint is blocked or outside the grid.
    pub fn stitch(
        grid: &GridMap,
        points: &[Point],
        order: &VisitOrder,
        planner_kind: PlannerKind,
    ) -> Result<Route> {
        if let Some(&index) = order.indices().iter().find(|&&i| i >= points.len()) {
            return Err(NavError::InvalidOrder {
                index,
                len: points.len(),
            });
        }

        let mut route = Route::default();
        for (leg, (from, to)) in order.legs().enumerate() {
            let (start, goal) = (points[from], points[to]);
            let mut planner = PathPlanner::new(grid, planner_kind);
            let found = planner.search(start, goal)?;

            let edges = match found {
                Some(path) => {
                    let edges = path.edges();
                    route
                        .points
                        .extend(path.into_points().into_iter().skip(usize::from(leg > 0)));
                    Some(edges)
                }
                None => {
                    log::warn!(
                        "{planner_kind}: no path from waypoint {from} {start} to waypoint {to} {goal}, leg skipped"
                    );
                    None
                }
            };
            route.legs.push(LegReport {
                from,
                to,
                edges,
                nodes_expanded: planner.nodes_expanded(),
            });
        }
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn open_grid() -> GridMap {
        GridMap::new(6, 6, [p(3, 3)], p(0, 0), [p(5, 0), p(5, 5), p(0, 5)]).unwrap()
    }

    #[test]
    fn joins_legs_without_duplicate_junctions() {
        let g = open_grid();
        let pts = g.waypoints();
        let order = VisitOrder::new(vec![0, 1, 2, 3]);
        for kind in PlannerKind::ALL {
            let route = PathStitcher::stitch(&g, &pts, &order, kind).unwrap();
            let leg_lens: usize = route.legs().iter().map(|l| l.edges.unwrap() + 1).sum();
            assert_eq!(route.len(), leg_lens - (order.len() - 2), "{kind}");
            assert_eq!(route.len(), route.edges() + 1);
            assert_eq!(route.edges(), 5 + 5 + 5);
            assert!(route.is_contiguous(), "{kind}");
            assert!(route.is_complete());
            assert_eq!(route.points().first(), Some(&p(0, 0)));
            assert_eq!(route.points().last(), Some(&p(0, 5)));
            for w in &pts {
                assert!(route.points().contains(w));
            }
        }
    }

    #[test]
    fn records_leg_reports() {
        let g = open_grid();
        let order = VisitOrder::new(vec![0, 3, 1]);
        let route = PathStitcher::stitch(&g, &g.waypoints(), &order, PlannerKind::AStar).unwrap();
        assert_eq!(route.legs().len(), 2);
        assert_eq!(route.legs()[0].from, 0);
        assert_eq!(route.legs()[0].to, 3);
        assert_eq!(route.legs()[0].edges, Some(5));
        assert_eq!(route.legs()[1].edges, Some(10));
        assert!(route.nodes_expanded() >= 2 * 6);
        assert_eq!(route.failed_legs().count(), 0);
    }

    #[test]
    fn skips_unreachable_legs() {
        // (4,0) is sealed off by (3,0) and (4,1).
        let g = GridMap::new(
            5,
            4,
            [p(3, 0), p(4, 1)],
            p(0, 0),
            [p(2, 0), p(4, 0), p(0, 3)],
        )
        .unwrap();
        let pts = g.waypoints();
        let order = VisitOrder::new(vec![0, 1, 2, 3]);
        let route = PathStitcher::stitch(&g, &pts, &order, PlannerKind::BreadthFirst).unwrap();

        let failed: Vec<_> = route.failed_legs().map(|l| (l.from, l.to)).collect();
        assert_eq!(failed, vec![(1, 2), (2, 3)]);
        assert!(!route.is_complete());
        // Only the first leg contributes cells.
        assert_eq!(route.points(), &[p(0, 0), p(1, 0), p(2, 0)]);
    }

    /// Wall at x=2 splits the grid into a left and a right half.
    fn split_grid(start: Point, targets: &[Point]) -> GridMap {
        GridMap::new(5, 3, [p(2, 0), p(2, 1), p(2, 2)], start, targets.iter().copied()).unwrap()
    }

    #[test]
    fn leg_after_a_middle_failure_still_drops_its_first_cell() {
        // Depot and A on the left, B and C on the right: A -> B fails.
        let g = split_grid(p(0, 0), &[p(0, 2), p(3, 0), p(4, 2)]);
        let pts = g.waypoints();
        let order = VisitOrder::new(vec![0, 1, 2, 3]);
        let route = PathStitcher::stitch(&g, &pts, &order, PlannerKind::Dijkstra).unwrap();

        let edges: Vec<_> = route.legs().iter().map(|l| l.edges).collect();
        assert_eq!(edges, vec![Some(2), None, Some(3)]);
        // 3 cells to A, then B -> C without B itself.
        assert_eq!(route.len(), 6);
        assert_eq!(route.points()[2], p(0, 2));
        assert!(!route.points().contains(&p(3, 0)));
        assert_eq!(route.points().last(), Some(&p(4, 2)));
    }

    #[test]
    fn leg_after_a_failed_first_leg_drops_its_first_cell() {
        // Depot on the left, A and B on the right: the first leg fails.
        let g = split_grid(p(0, 0), &[p(3, 0), p(4, 2)]);
        let order = VisitOrder::new(vec![0, 1, 2]);
        let route =
            PathStitcher::stitch(&g, &g.waypoints(), &order, PlannerKind::BreadthFirst).unwrap();

        assert!(!route.legs()[0].is_reachable());
        assert_eq!(route.legs()[1].edges, Some(3));
        assert_eq!(route.points(), &[p(4, 0), p(4, 1), p(4, 2)]);
    }

    #[test]
    fn rejects_out_of_range_order() {
        let g = open_grid();
        let err = PathStitcher::stitch(
            &g,
            &g.waypoints(),
            &VisitOrder::new(vec![0, 7]),
            PlannerKind::AStar,
        )
        .unwrap_err();
        assert_eq!(err, NavError::InvalidOrder { index: 7, len: 4 });
    }

    #[test]
    fn blocked_waypoint_is_invalid_endpoint() {
        let g = open_grid();
        let err = PathStitcher::stitch(
            &g,
            &[p(0, 0), p(3, 3)],
            &VisitOrder::new(vec![0, 1]),
            PlannerKind::AStar,
        )
        .unwrap_err();
        assert_eq!(err, NavError::InvalidEndpoint(p(3, 3)));
    }

    #[test]
    fn single_waypoint_order_has_no_legs() {
        let g = open_grid();
        let route =
            PathStitcher::stitch(&g, &g.waypoints(), &VisitOrder::new(vec![0]), PlannerKind::AStar)
                .unwrap();
        assert!(route.is_empty());
        assert!(route.legs().is_empty());
        assert!(route.is_complete());
    }
}
