//! Deterministic distance-decayed risk surface.
//!
//! Bypasses the stochastic timestep entirely: risk is the product of the
//! weather's fire danger, an exponential distance decay from each candidate
//! ignition point, and the cell's fuel and vegetation weighting, accumulated
//! by element-wise maximum across ignition points.

use rayon::prelude::*;

use crate::core_types::WeatherCondition;
use crate::fire_danger;
use crate::grid::TerrainGrid;

/// Effective range of the distance decay, in cells.
const DECAY_RANGE_CELLS: f64 = 50.0;

/// Compute the risk surface for `weather` and a set of ignition points.
///
/// Returns row-major `width * height` values. With no ignition points the
/// surface is all zeros. The result satisfies
/// `risk(w, [a, b]) == max(risk(w, [a]), risk(w, [b]))` element-wise.
#[must_use]
pub fn risk_surface(
    grid: &TerrainGrid,
    weather: &WeatherCondition,
    ignition_points: &[(usize, usize)],
) -> Vec<f64> {
    let base_risk = fire_danger::mcarthur_forest_fdi(
        weather.temperature,
        weather.humidity,
        weather.wind_speed,
        fire_danger::drought_factor(weather.rainfall),
    ) / 100.0;

    let width = grid.width();
    (0..grid.len())
        .into_par_iter()
        .map(|idx| {
            let (x, y) = (idx % width, idx / width);
            let cell = grid.cell(x, y);
            let fuel_factor = cell.fuel_load / 20.0;
            let vegetation_factor = cell.vegetation_type.risk_weight();

            ignition_points
                .iter()
                .map(|&(sx, sy)| {
                    let dx = x as f64 - sx as f64;
                    let dy = y as f64 - sy as f64;
                    let distance = (dx * dx + dy * dy).sqrt();
                    let decay = (-distance / DECAY_RANGE_CELLS).exp();
                    base_risk * decay * fuel_factor * vegetation_factor
                })
                .fold(0.0_f64, f64::max)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::VegetationType;
    use approx::assert_relative_eq;

    fn uniform_grid(size: usize) -> TerrainGrid {
        let mut grid = TerrainGrid::new(size, size);
        let n = size * size;
        grid.initialize_from(
            &vec![100.0; n],
            &vec![10.0; n],
            &vec![VegetationType::Moderate; n],
        )
        .unwrap();
        grid
    }

    fn hot_weather() -> WeatherCondition {
        WeatherCondition {
            temperature: 40.0,
            humidity: 20.0,
            wind_speed: 40.0,
            wind_direction: 0.0,
            rainfall: 0.0,
            fuel_moisture: 5.0,
        }
    }

    #[test]
    fn seed_cell_is_argmax_and_matches_closed_form() {
        let grid = uniform_grid(10);
        let weather = hot_weather();
        let surface = risk_surface(&grid, &weather, &[(5, 5)]);

        let fdi = fire_danger::mcarthur_forest_fdi(40.0, 20.0, 40.0, 10.0);
        // At the seed: distance 0, fuel 10/20, vegetation 0.6.
        assert_relative_eq!(surface[5 * 10 + 5], fdi / 100.0 * 0.5 * 0.6, epsilon = 1e-12);

        let max = surface.iter().cloned().fold(f64::MIN, f64::max);
        assert_relative_eq!(surface[5 * 10 + 5], max);
    }

    #[test]
    fn risk_is_non_increasing_along_rays() {
        let grid = uniform_grid(10);
        let surface = risk_surface(&grid, &hot_weather(), &[(5, 5)]);
        // Walk east and north-west from the seed.
        for x in 5..9 {
            assert!(surface[5 * 10 + x] >= surface[5 * 10 + x + 1]);
        }
        for step in 0..4 {
            let near = (5 - step) * 10 + (5 - step);
            let far = (5 - step - 1) * 10 + (5 - step - 1);
            assert!(surface[near] >= surface[far]);
        }
    }

    #[test]
    fn multi_seed_surface_is_elementwise_max() {
        let grid = uniform_grid(12);
        let weather = hot_weather();
        let a = risk_surface(&grid, &weather, &[(2, 2)]);
        let b = risk_surface(&grid, &weather, &[(9, 9)]);
        let both = risk_surface(&grid, &weather, &[(2, 2), (9, 9)]);
        for i in 0..both.len() {
            assert_relative_eq!(both[i], a[i].max(b[i]), epsilon = 1e-15);
        }
    }

    #[test]
    fn no_seeds_means_no_risk() {
        let grid = uniform_grid(4);
        let surface = risk_surface(&grid, &hot_weather(), &[]);
        assert!(surface.iter().all(|&r| r == 0.0));
    }
}
