//! The full pipeline: distance matrix, greedy order, stitched route.

use gridnav_core::{GridMap, Point, Result};
use gridnav_paths::PlannerKind;

use crate::matrix::DistanceMatrix;
use crate::sequence::{RouteSequencer, VisitOrder};
use crate::stitch::{PathStitcher, Route};

/// Everything computed for one grid with one planner kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionPlan {
    pub kind: PlannerKind,
    /// Depot followed by the targets; the indices used by `matrix`, `order`
    /// and the route's leg reports.
    pub waypoints: Vec<Point>,
    pub matrix: DistanceMatrix,
    pub order: VisitOrder,
    /// Sum of the matrix entries along `order`; infinite if a leg is
    /// unreachable.
    pub total_cost: f64,
    pub route: Route,
}

impl MissionPlan {
    /// Plan a tour over `grid.waypoints()` using `kind` for every search.
    pub fn compute(grid: &GridMap, kind: PlannerKind) -> Result<Self> {
        let waypoints = grid.waypoints();
        let matrix = DistanceMatrix::compute(grid, &waypoints, kind)?;
        let (order, total_cost) = RouteSequencer::sequence(&matrix);
        let route = PathStitcher::stitch(grid, &waypoints, &order, kind)?;

        log::info!(
            "{kind}: order {:?}, cost {total_cost}, route {} cells, {} failed legs, {} nodes expanded while stitching",
            order.indices(),
            route.len(),
            route.failed_legs().count(),
            route.nodes_expanded()
        );

        Ok(Self {
            kind,
            waypoints,
            matrix,
            order,
            total_cost,
            route,
        })
    }

    /// Whether every target is reachable along the chosen order.
    pub fn is_complete(&self) -> bool {
        self.total_cost.is_finite() && self.route.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_visits_every_target() {
        let g = GridMap::new(
            8,
            8,
            [Point::new(3, 2), Point::new(3, 3), Point::new(3, 4)],
            Point::new(0, 0),
            [Point::new(7, 7), Point::new(1, 6), Point::new(6, 1)],
        )
        .unwrap();
        let plan = MissionPlan::compute(&g, PlannerKind::AStar).unwrap();
        assert!(plan.is_complete());
        assert!(plan.order.is_tour_of(4));
        assert_eq!(plan.total_cost, plan.route.edges() as f64);
        assert_eq!(plan.route.len(), plan.route.edges() + 1);
        assert!(plan.route.is_contiguous());
        for t in g.targets() {
            assert!(plan.route.points().contains(t));
        }
    }
}
