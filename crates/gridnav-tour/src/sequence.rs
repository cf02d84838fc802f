//! Greedy nearest-neighbour tour ordering.

use crate::matrix::DistanceMatrix;

/// The order in which waypoints are visited, as indices into the waypoint
/// list. Index 0 (the depot) comes first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VisitOrder(Vec<usize>);

impl VisitOrder {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consecutive `(from, to)` index pairs, one per leg.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether this is a permutation of `0..n` starting at 0.
    pub fn is_tour_of(&self, n: usize) -> bool {
        if self.0.len() != n || (n > 0 && self.0[0] != 0) {
            return false;
        }
        let mut seen = vec![false; n];
        self.0
            .iter()
            .all(|&i| i < n && !std::mem::replace(&mut seen[i], true))
    }

    /// Sum of the matrix entries along consecutive legs.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        self.legs().map(|(i, j)| matrix.get(i, j)).sum()
    }
}

impl AsRef<[usize]> for VisitOrder {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Greedy nearest-unvisited-neighbour sequencer.
///
/// This is a heuristic, not a TSP solver: it never backtracks and can be
/// arbitrarily worse than the optimal tour.
pub struct RouteSequencer;

impl RouteSequencer {
    /// Visit order starting at index 0, always moving to the closest
    /// unvisited waypoint, together with the summed leg distances.
    ///
    /// Ties go to the lowest index. Unreachable entries only lose against
    /// finite ones, so once every remaining waypoint is unreachable the next
    /// lowest index is taken and the total becomes infinite. The total is
    /// never clamped.
    pub fn sequence(matrix: &DistanceMatrix) -> (VisitOrder, f64) {
        let n = matrix.size();
        if n == 0 {
            return (VisitOrder::default(), 0.0);
        }

        let mut visited = vec![false; n];
        visited[0] = true;
        let mut order = Vec::with_capacity(n);
        order.push(0);
        let mut total_cost = 0.0;
        let mut current = 0;

        while order.len() < n {
            let mut best: Option<(usize, f64)> = None;
            for (j, &d) in matrix.row(current).iter().enumerate() {
                if visited[j] {
                    continue;
                }
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((j, d));
                }
            }
            let Some((next, d)) = best else {
                break;
            };
            visited[next] = true;
            order.push(next);
            total_cost += d;
            current = next;
        }

        if total_cost.is_infinite() {
            log::warn!("greedy tour {order:?} includes an unreachable leg");
        }
        (VisitOrder(order), total_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::UNREACHABLE;

    const INF: f64 = UNREACHABLE;

    fn m(rows: &[&[f64]]) -> DistanceMatrix {
        DistanceMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn picks_nearest_each_step() {
        let mat = m(&[
            &[0.0, 5.0, 2.0, 9.0],
            &[5.0, 0.0, 4.0, 1.0],
            &[2.0, 4.0, 0.0, 7.0],
            &[9.0, 1.0, 7.0, 0.0],
        ]);
        let (order, cost) = RouteSequencer::sequence(&mat);
        assert_eq!(order.indices(), &[0, 2, 1, 3]);
        assert_eq!(cost, 2.0 + 4.0 + 1.0);
        assert_eq!(order.cost(&mat), cost);
        assert!(order.is_tour_of(4));
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mat = m(&[
            &[0.0, 3.0, 3.0, 3.0],
            &[3.0, 0.0, 2.0, 2.0],
            &[3.0, 2.0, 0.0, 2.0],
            &[3.0, 2.0, 2.0, 0.0],
        ]);
        let (order, cost) = RouteSequencer::sequence(&mat);
        assert_eq!(order.indices(), &[0, 1, 2, 3]);
        assert_eq!(cost, 7.0);
    }

    #[test]
    fn greedy_is_not_optimal() {
        // Greedy goes 0 -> 1 -> 2 -> 3 for 1 + 1 + 100, while
        // 0 -> 3 -> 2 -> 1 costs 2 + 1 + 1.
        let mat = m(&[
            &[0.0, 1.0, 3.0, 2.0],
            &[1.0, 0.0, 1.0, 100.0],
            &[3.0, 1.0, 0.0, 100.0],
            &[2.0, 100.0, 1.0, 0.0],
        ]);
        let (order, cost) = RouteSequencer::sequence(&mat);
        assert_eq!(order.indices(), &[0, 1, 2, 3]);
        assert_eq!(cost, 102.0);
        let better = VisitOrder::new(vec![0, 3, 2, 1]);
        assert_eq!(better.cost(&mat), 4.0);
    }

    #[test]
    fn infinite_entries_lose_to_finite_and_propagate() {
        let mat = m(&[
            &[0.0, INF, 4.0],
            &[INF, 0.0, INF],
            &[4.0, INF, 0.0],
        ]);
        let (order, cost) = RouteSequencer::sequence(&mat);
        assert_eq!(order.indices(), &[0, 2, 1]);
        assert!(cost.is_infinite() && cost > 0.0);
    }

    #[test]
    fn all_unreachable_still_yields_a_permutation() {
        let mat = m(&[&[0.0, INF, INF], &[INF, 0.0, INF], &[INF, INF, 0.0]]);
        let (order, cost) = RouteSequencer::sequence(&mat);
        assert_eq!(order.indices(), &[0, 1, 2]);
        assert_eq!(cost, INF);
    }

    #[test]
    fn degenerate_sizes() {
        let (order, cost) = RouteSequencer::sequence(&m(&[&[0.0]]));
        assert_eq!(order.indices(), &[0]);
        assert_eq!(cost, 0.0);
        assert_eq!(order.legs().count(), 0);

        let (order, cost) = RouteSequencer::sequence(&DistanceMatrix::default());
        assert!(order.is_empty());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn tour_check_rejects_bad_orders() {
        assert!(!VisitOrder::new(vec![1, 0, 2]).is_tour_of(3));
        assert!(!VisitOrder::new(vec![0, 1, 1]).is_tour_of(3));
        assert!(!VisitOrder::new(vec![0, 1]).is_tour_of(3));
        assert!(!VisitOrder::new(vec![0, 1, 3]).is_tour_of(3));
        assert!(VisitOrder::new(vec![0, 2, 1]).is_tour_of(3));
    }
}
