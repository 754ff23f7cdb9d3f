//! Terrain grid: cell storage, addressing, and synthetic terrain.

mod synthetic;
mod terrain_grid;

pub use synthetic::{synthetic_terrain, SyntheticTerrain};
pub use terrain_grid::{TerrainGrid, CELL_SIZE_M, HECTARE_M2};
