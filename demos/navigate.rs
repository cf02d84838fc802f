//! Compare BFS, Dijkstra and A* on a multi-target delivery tour.
//!
//! Run: cargo run --bin gridnav -- --random 42 --planner astar

use std::path::PathBuf;

use clap::Parser;
use gridnav_core::GridMap;
use gridnav_demos::{render, report, scenario};
use gridnav_paths::{PlannerKind, UnknownPlanner};

/// Plan a depot-to-targets tour with each planner and compare the results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON scenario file (width, height, start, targets, obstacles)
    #[arg(short, long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a random scenario from this seed
    #[arg(short, long)]
    random: Option<u64>,

    /// Planner to run: bfs, dijkstra, astar or all
    #[arg(short, long, default_value = "all")]
    planner: String,

    /// Random scenario width
    #[arg(long, default_value_t = 15)]
    width: i32,

    /// Random scenario height
    #[arg(long, default_value_t = 15)]
    height: i32,

    /// Number of targets in a random scenario
    #[arg(long, default_value_t = 4)]
    targets: usize,

    /// Share of cells that are obstacles in a random scenario
    #[arg(long, default_value_t = 0.2)]
    obstacle_ratio: f64,

    /// Skip the ASCII maps
    #[arg(long)]
    no_render: bool,
}

impl Args {
    fn kinds(&self) -> Result<Vec<PlannerKind>, UnknownPlanner> {
        if self.planner.eq_ignore_ascii_case("all") {
            return Ok(PlannerKind::ALL.to_vec());
        }
        Ok(vec![self.planner.parse()?])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let kinds = args.kinds()?;

    let layout = match (&args.scenario, args.random) {
        (Some(path), _) => scenario::load(path)?,
        (None, Some(seed)) => scenario::random(&scenario::RandomConfig {
            width: args.width,
            height: args.height,
            targets: args.targets,
            obstacle_ratio: args.obstacle_ratio,
            seed,
        })?,
        (None, None) => scenario::builtin(),
    };
    let grid = GridMap::from_layout(&layout)?;
    log::info!(
        "{}x{} grid, {} obstacles, depot {}, {} targets",
        grid.width(),
        grid.height(),
        grid.obstacle_count(),
        grid.start(),
        grid.targets().len()
    );

    let runs = report::compare(&grid, &kinds)?;
    if !args.no_render {
        for run in &runs {
            println!("{} route:", run.plan.kind);
            println!("{}", render::render(&grid, run.plan.route.points()));
        }
    }
    println!("{}", report::table(&runs));
    Ok(())
}
