//! Side-by-side runs of the planner kinds on one grid.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use gridnav_core::{GridMap, Result};
use gridnav_paths::PlannerKind;
use gridnav_tour::MissionPlan;

/// One planner's mission plan and how long it took to compute.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub plan: MissionPlan,
    pub elapsed: Duration,
}

/// Plan the full mission once per kind, in the given order.
pub fn compare(grid: &GridMap, kinds: &[PlannerKind]) -> Result<Vec<Comparison>> {
    kinds
        .iter()
        .map(|&kind| {
            log::info!("running {kind}");
            let t0 = Instant::now();
            let plan = MissionPlan::compute(grid, kind)?;
            Ok(Comparison {
                plan,
                elapsed: t0.elapsed(),
            })
        })
        .collect()
}

/// Fixed-width table: planner, tour cost, nodes expanded while stitching,
/// wall time and visit order.
pub fn table(runs: &[Comparison]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(72);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<10} {:>8} {:>14} {:>10}  {}",
        "Planner", "Cost", "Nodes expanded", "Time (ms)", "Order"
    );
    let _ = writeln!(out, "{rule}");
    for run in runs {
        let plan = &run.plan;
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>14} {:>10.2}  {:?}",
            plan.kind.name(),
            plan.total_cost,
            plan.route.nodes_expanded(),
            run.elapsed.as_secs_f64() * 1000.0,
            plan.order.indices()
        );
    }
    let _ = write!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;
    use gridnav_core::Point;

    #[test]
    fn compares_every_kind_on_the_builtin_map() {
        let g = GridMap::from_layout(&scenario::builtin()).unwrap();
        let runs = compare(&g, &PlannerKind::ALL).unwrap();
        assert_eq!(runs.len(), 3);
        let kinds: Vec<_> = runs.iter().map(|r| r.plan.kind).collect();
        assert_eq!(kinds, PlannerKind::ALL.to_vec());
        assert!(runs.iter().all(|r| r.plan.is_complete()));
        assert!(runs.windows(2).all(|w| w[0].plan.total_cost == w[1].plan.total_cost));

        let text = table(&runs);
        assert!(text.contains("Nodes expanded"));
        for kind in PlannerKind::ALL {
            assert!(text.contains(kind.name()));
        }
        assert!(text.contains("[0, "));
    }

    #[test]
    fn unreachable_cost_prints_as_inf() {
        let g = GridMap::new(
            3,
            3,
            [Point::new(1, 2), Point::new(2, 1)],
            Point::new(0, 0),
            [Point::new(2, 2)],
        )
        .unwrap();
        let runs = compare(&g, &[PlannerKind::AStar]).unwrap();
        assert!(table(&runs).contains("inf"));
    }
}
