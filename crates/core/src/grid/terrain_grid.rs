//! Rectangular cell grid with Moore-neighbourhood addressing.
//!
//! Cells are stored row-major (`index = y * width + x`). The grid is the
//! single owner of cell state: it is populated once from external terrain
//! arrays and mutated only by the timestep engine.

use serde::{Deserialize, Serialize};

use crate::core_types::{TerrainCell, VegetationType};
use crate::error::SimulationError;

/// Edge length of one grid cell (m). Matches 1-arcsecond DEM resolution.
pub const CELL_SIZE_M: f64 = 30.0;

/// Square metres per hectare.
pub const HECTARE_M2: f64 = 10_000.0;

/// Moore-neighbourhood offsets, west-to-east, north-to-south.
const NEIGHBOUR_DELTAS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major rectangular grid of [`TerrainCell`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<TerrainCell>,
}

impl TerrainGrid {
    /// Create a grid of default cells.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        TerrainGrid {
            width,
            height,
            cells: vec![TerrainCell::default(); width * height],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major index of `(x, y)`.
    #[inline]
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Borrow the cell at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> &TerrainCell {
        &self.cells[self.index(x, y)]
    }

    /// Borrow the full cell slice in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[TerrainCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [TerrainCell] {
        &mut self.cells
    }

    pub(crate) fn replace_cells(&mut self, cells: Vec<TerrainCell>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    /// Populate the grid from row-major terrain arrays.
    ///
    /// All three slices must have length `width * height`; otherwise the call
    /// fails with [`SimulationError::SizeMismatch`] and the grid is left
    /// untouched. Burn state is reset on every cell, and slope is derived
    /// from the final elevations as
    /// `atan(max |Δelev| over 8-neighbours / 30 m)` in degrees.
    pub fn initialize_from(
        &mut self,
        elevations: &[f64],
        fuel_loads: &[f64],
        vegetation_types: &[VegetationType],
    ) -> Result<(), SimulationError> {
        let expected = self.width * self.height;
        for actual in [elevations.len(), fuel_loads.len(), vegetation_types.len()] {
            if actual != expected {
                return Err(SimulationError::SizeMismatch { expected, actual });
            }
        }

        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.elevation = elevations[i];
            cell.fuel_load = fuel_loads[i];
            cell.vegetation_type = vegetation_types[i];
            cell.fuel_remaining = 1.0;
            cell.is_ignited = false;
            cell.burn_intensity = 0.0;
        }

        // Second pass: slope needs every neighbour's final elevation.
        for y in 0..self.height {
            for x in 0..self.width {
                let here = elevations[self.index(x, y)];
                let max_diff = self
                    .neighbours(x, y)
                    .map(|(nx, ny)| (here - elevations[self.index(nx, ny)]).abs())
                    .fold(0.0_f64, f64::max);
                self.cells[y * self.width + x].slope =
                    (max_diff / CELL_SIZE_M).atan().to_degrees();
            }
        }

        Ok(())
    }

    /// Set the cell at `(x, y)` burning. Out-of-range coordinates are
    /// silently ignored; re-igniting a burning cell is a no-op.
    pub fn ignite(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx].is_ignited = true;
        }
    }

    /// In-bounds Moore neighbours of `(x, y)`, at most eight.
    pub fn neighbours(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (width, height) = (self.width as i64, self.height as i64);
        NEIGHBOUR_DELTAS.iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            (nx >= 0 && ny >= 0 && nx < width && ny < height)
                .then(|| (nx as usize, ny as usize))
        })
    }
}
