use gridnav_core::{GridMap, Point};
use gridnav_paths::{PlannerKind, manhattan};
use gridnav_tour::{
    DistanceMatrix, MissionPlan, PathStitcher, RouteSequencer, UNREACHABLE, VisitOrder,
};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// The 15x15 layout the demo binary ships with.
fn warehouse() -> GridMap {
    let obstacles = [
        (3, 3),
        (3, 4),
        (3, 5),
        (3, 6),
        (3, 7),
        (8, 8),
        (8, 9),
        (8, 10),
        (7, 8),
        (6, 8),
        (10, 5),
        (11, 5),
        (12, 5),
        (5, 12),
        (5, 13),
        (4, 8),
        (4, 9),
        (4, 10),
        (9, 3),
        (9, 4),
    ]
    .map(Point::from);
    GridMap::new(
        15,
        15,
        obstacles,
        p(1, 1),
        [p(12, 12), p(2, 10), p(10, 2), p(6, 6)],
    )
    .unwrap()
}

#[test]
fn all_planners_produce_the_same_matrix() {
    let g = warehouse();
    let pts = g.waypoints();
    let matrices: Vec<DistanceMatrix> = PlannerKind::ALL
        .iter()
        .map(|&k| DistanceMatrix::compute(&g, &pts, k).unwrap())
        .collect();
    assert!(matrices.windows(2).all(|w| w[0] == w[1]));
    let m = &matrices[0];
    assert!(m.is_symmetric());
    for i in 0..m.size() {
        assert_eq!(m.get(i, i), 0.0);
        for j in 0..m.size() {
            assert!(m.get(i, j) >= manhattan(pts[i], pts[j]) as f64);
        }
    }
}

#[test]
fn warehouse_mission_is_complete_for_every_planner() {
    let g = warehouse();
    let plans: Vec<MissionPlan> = PlannerKind::ALL
        .iter()
        .map(|&k| MissionPlan::compute(&g, k).unwrap())
        .collect();
    for plan in &plans {
        assert!(plan.is_complete(), "{}", plan.kind);
        assert!(plan.order.is_tour_of(5));
        assert_eq!(plan.route.len(), plan.route.edges() + 1);
        assert_eq!(plan.total_cost, plan.route.edges() as f64);
        assert!(plan.route.is_contiguous());
        assert!(plan.route.points().iter().all(|&c| g.is_passable(c)));
    }
    // Same matrix, same greedy order, same cost.
    assert!(plans.windows(2).all(|w| w[0].order == w[1].order));
    assert!(plans.windows(2).all(|w| w[0].total_cost == w[1].total_cost));
}

#[test]
fn walled_off_target_makes_tour_infinite() {
    // B at (4,4) is sealed by (3,4) and (4,3).
    let g = GridMap::new(5, 5, [p(3, 4), p(4, 3)], p(0, 0), [p(2, 0), p(4, 4)]).unwrap();
    let plan = MissionPlan::compute(&g, PlannerKind::AStar).unwrap();

    assert_eq!(plan.matrix.get(0, 2), UNREACHABLE);
    assert_eq!(plan.matrix.get(1, 2), UNREACHABLE);
    assert_eq!(plan.matrix.get(0, 1), 2.0);
    assert_eq!(plan.order.indices(), &[0, 1, 2]);
    assert!(plan.total_cost.is_infinite());
    assert!(!plan.is_complete());

    assert_eq!(plan.route.points(), &[p(0, 0), p(1, 0), p(2, 0)]);
    let failed: Vec<_> = plan.route.failed_legs().map(|l| (l.from, l.to)).collect();
    assert_eq!(failed, vec![(1, 2)]);
}

#[test]
fn stitched_length_matches_leg_sum() {
    let g = warehouse();
    let pts = g.waypoints();
    let orders = [vec![0, 1, 2, 3, 4], vec![0, 4, 3, 2, 1], vec![0, 2, 4, 1, 3]];
    for kind in PlannerKind::ALL {
        let m = DistanceMatrix::compute(&g, &pts, kind).unwrap();
        for o in &orders {
            let order = VisitOrder::new(o.clone());
            let route = PathStitcher::stitch(&g, &pts, &order, kind).unwrap();
            let leg_cells: f64 = order.legs().map(|(i, j)| m.get(i, j) + 1.0).sum();
            let junctions = (order.len() - 2) as f64;
            assert_eq!(route.len() as f64, leg_cells - junctions, "{kind} {o:?}");
            assert_eq!(route.edges() as f64, order.cost(&m));
        }
    }
}

#[test]
fn greedy_order_is_a_permutation_from_the_depot() {
    let g = warehouse();
    let m = DistanceMatrix::compute(&g, &g.waypoints(), PlannerKind::BreadthFirst).unwrap();
    let (order, cost) = RouteSequencer::sequence(&m);
    assert!(order.is_tour_of(m.size()));
    assert_eq!(order.indices()[0], 0);
    assert_eq!(order.cost(&m), cost);
}

#[test]
fn depot_only_grid_plans_an_empty_route() {
    let g = GridMap::new(3, 3, [], p(1, 1), []).unwrap();
    let plan = MissionPlan::compute(&g, PlannerKind::Dijkstra).unwrap();
    assert_eq!(plan.matrix.size(), 1);
    assert_eq!(plan.order.indices(), &[0]);
    assert_eq!(plan.total_cost, 0.0);
    assert!(plan.route.is_empty());
    assert!(plan.is_complete());
}
