//! Bushfire Simulation Core Library
//!
//! Grid-based bushfire spread simulation for Australian conditions:
//! McArthur fire danger indices, an empirical spread-rate model over a
//! 30 m terrain grid, a synchronous double-buffered cellular-automaton
//! timestep, and Monte Carlo ensemble risk aggregation.
//!
//! The library is consumed by a host numerical runtime; all grid surfaces
//! are exchanged as row-major `f64` vectors.

pub mod core_types;
pub mod error;
pub mod fire_danger;
pub mod grid;
pub mod physics;
pub mod simulation;

pub use core_types::{generate_weather_scenarios, TerrainCell, VegetationType, WeatherCondition};
pub use error::SimulationError;
pub use fire_danger::{
    danger_category, drought_factor, grassland_fdi, mcarthur_forest_fdi, FireDangerRating,
};
pub use grid::{synthetic_terrain, SyntheticTerrain, TerrainGrid, CELL_SIZE_M};
pub use simulation::BushfireSimulator;
