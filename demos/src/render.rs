//! Plain-text map rendering.

use std::collections::HashSet;

use gridnav_core::{CellState, GridMap, Point};

pub const OBSTACLE: char = '#';
pub const FREE: char = '.';
pub const DEPOT: char = 'S';
pub const ROUTE: char = '*';

/// Label of the target at `index` in `GridMap::targets`: `1`..`9`, then
/// `A`..`Z`, then `+`.
pub fn target_label(index: usize) -> char {
    u32::try_from(index + 1)
        .ok()
        .and_then(|n| char::from_digit(n, 36))
        .map_or('+', |c| c.to_ascii_uppercase())
}

/// Bytes of a rendered `width x height` map: one glyph per cell plus a
/// newline per row.
fn text_len(width: i32, height: i32) -> usize {
    (width.max(0) as usize + 1) * height.max(0) as usize
}

/// One line per row, top row first. Waypoint labels win over route marks.
pub fn render(grid: &GridMap, route: &[Point]) -> String {
    let on_route: HashSet<Point> = route.iter().copied().collect();
    let mut out = String::with_capacity(text_len(grid.width(), grid.height()));
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let c = match grid.cell_state(p) {
                Ok(CellState::Obstacle) => OBSTACLE,
                Ok(CellState::Start) => DEPOT,
                Ok(CellState::Target) => grid
                    .targets()
                    .iter()
                    .position(|&t| t == p)
                    .map_or('?', target_label),
                _ if on_route.contains(&p) => ROUTE,
                _ => FREE,
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(target_label(0), '1');
        assert_eq!(target_label(8), '9');
        assert_eq!(target_label(9), 'A');
        assert_eq!(target_label(34), 'Z');
        assert_eq!(target_label(35), '+');
    }

    #[test]
    fn text_len_does_not_overflow_i32() {
        assert_eq!(text_len(4, 2), 10);
        assert_eq!(text_len(i32::MAX, 1), i32::MAX as usize + 1);
    }

    #[test]
    fn draws_cells_and_route() {
        let g = GridMap::new(
            4,
            2,
            [Point::new(1, 1)],
            Point::new(0, 0),
            [Point::new(3, 1)],
        )
        .unwrap();
        let route = [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)].map(Point::from);
        assert_eq!(render(&g, &route), "S***\n.#.1\n");
        assert_eq!(render(&g, &[]), "S...\n.#.1\n");
    }
}
