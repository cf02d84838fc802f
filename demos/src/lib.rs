//! Scenario loading, text rendering and planner comparison for the `gridnav`
//! binary.
//!
//! Run: cargo run --bin gridnav -- --planner all

pub mod render;
pub mod report;
pub mod scenario;
