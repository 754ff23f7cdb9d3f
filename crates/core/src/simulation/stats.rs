//! Summary statistics over the authoritative grid.

use rayon::prelude::*;

use crate::core_types::TerrainCell;
use crate::grid::{TerrainGrid, CELL_SIZE_M, HECTARE_M2};

/// Total burned area in hectares: burned cells × 900 m² / 10 000.
#[must_use]
pub fn total_burned_area(grid: &TerrainGrid) -> f64 {
    let burned = grid
        .cells()
        .par_iter()
        .filter(|c| c.is_burned())
        .count();
    burned as f64 * (CELL_SIZE_M * CELL_SIZE_M / HECTARE_M2)
}

/// Maximum burn intensity across all cells.
#[must_use]
pub fn max_intensity(grid: &TerrainGrid) -> f64 {
    grid.cells()
        .par_iter()
        .map(|c| c.burn_intensity)
        .reduce(|| 0.0, f64::max)
}

/// `(active, perimeter)` counts: ignited cells, and ignited cells with at
/// least one non-ignited Moore neighbour.
#[must_use]
pub fn perimeter_count(grid: &TerrainGrid) -> (usize, usize) {
    let width = grid.width();
    grid.cells()
        .par_iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_ignited)
        .map(|(idx, _): (usize, &TerrainCell)| {
            let (x, y) = (idx % width, idx / width);
            let on_perimeter = grid
                .neighbours(x, y)
                .any(|(nx, ny)| !grid.cell(nx, ny).is_ignited);
            (1usize, usize::from(on_perimeter))
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
}
