//! Where grids come from: the built-in warehouse map, a seeded random
//! generator, or a JSON file holding a [`GridLayout`].

use std::fs;
use std::path::Path;

use gridnav_core::{GridLayout, Point, Range};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("cannot read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a {width}x{height} grid has no room for a depot and {targets} targets")]
    TooCrowded {
        width: i32,
        height: i32,
        targets: usize,
    },
    #[error("obstacle ratio {0} is outside [0, 1)")]
    ObstacleRatio(f64),
}

const WAREHOUSE_OBSTACLES: [(i32, i32); 20] = [
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
];

/// The 15x15 map used when no scenario is given: a few U-shaped walls,
/// depot at (1,1) and four targets spread over the corners and centre.
pub fn builtin() -> GridLayout {
    GridLayout {
        width: 15,
        height: 15,
        start: Point::new(1, 1),
        targets: vec![
            Point::new(12, 12),
            Point::new(2, 10),
            Point::new(10, 2),
            Point::new(6, 6),
        ],
        obstacles: WAREHOUSE_OBSTACLES.map(Point::from).to_vec(),
    }
}

/// Parameters of [`random`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomConfig {
    pub width: i32,
    pub height: i32,
    pub targets: usize,
    /// Share of all cells turned into obstacles.
    pub obstacle_ratio: f64,
    pub seed: u64,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            targets: 4,
            obstacle_ratio: 0.2,
            seed: 0,
        }
    }
}

/// A random layout: depot and targets on distinct cells, then obstacles on
/// `obstacle_ratio` of all cells, taken from what is left.
///
/// The same config always yields the same layout. Targets may end up walled
/// off.
pub fn random(cfg: &RandomConfig) -> Result<GridLayout, ScenarioError> {
    if !(0.0..1.0).contains(&cfg.obstacle_ratio) {
        return Err(ScenarioError::ObstacleRatio(cfg.obstacle_ratio));
    }
    let crowded = ScenarioError::TooCrowded {
        width: cfg.width,
        height: cfg.height,
        targets: cfg.targets,
    };
    if cfg.width <= 0 || cfg.height <= 0 {
        return Err(crowded);
    }
    let bounds = Range::with_size(cfg.width, cfg.height);
    if bounds.len() < cfg.targets + 1 {
        return Err(crowded);
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut cells: Vec<Point> = bounds.iter().collect();
    cells.shuffle(&mut rng);

    let start = cells[0];
    let targets = cells[1..=cfg.targets].to_vec();
    let rest = &cells[cfg.targets + 1..];
    let n_obstacles = ((bounds.len() as f64 * cfg.obstacle_ratio) as usize).min(rest.len());
    let mut obstacles = rest[..n_obstacles].to_vec();
    obstacles.sort_by_key(|p| (p.y, p.x));

    log::debug!(
        "random scenario seed {}: {}x{}, {} targets, {} obstacles",
        cfg.seed,
        cfg.width,
        cfg.height,
        targets.len(),
        obstacles.len()
    );
    Ok(GridLayout {
        width: cfg.width,
        height: cfg.height,
        start,
        targets,
        obstacles,
    })
}

/// Read a JSON [`GridLayout`] from `path`.
pub fn load(path: &Path) -> Result<GridLayout, ScenarioError> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Parse a JSON [`GridLayout`]. Only the shape is checked here;
/// `GridMap::from_layout` validates bounds and overlaps.
pub fn parse(json: &str) -> Result<GridLayout, ScenarioError> {
    Ok(serde_json::from_str(json)?)
}
