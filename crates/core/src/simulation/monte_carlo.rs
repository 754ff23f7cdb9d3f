//! Monte Carlo ensemble risk analysis.
//!
//! Each trial runs on a deep clone of the grid with a PRNG seeded by the
//! trial index, so any single trial can be replayed in isolation. Trials
//! pick a uniformly random (scenario, ignition) pair, run 100 short
//! timesteps, and classify cells burned at fuel_remaining < 0.9. Per-trial
//! burn masks are reduced as integer counts; addition over counts is
//! associative, so the aggregate surface is identical under any reduction
//! order and any thread count.

use rand::Rng;
use rayon::prelude::*;
use tracing::info;

use crate::core_types::WeatherCondition;
use crate::error::SimulationError;
use crate::grid::TerrainGrid;
use crate::simulation::BushfireSimulator;

/// Timesteps per trial.
const TRIAL_STEPS: usize = 100;

/// Timestep length per trial step (minutes).
const TRIAL_DT: f64 = 0.1;

/// Run the ensemble and return the per-cell burn-probability surface.
///
/// # Errors
/// [`SimulationError::InvalidWeather`] when any scenario fails its bounds
/// check; scenarios are validated up front so trial workers cannot fail.
pub fn run(
    grid: &TerrainGrid,
    scenarios: &[WeatherCondition],
    ignitions: &[(usize, usize)],
    num_trials: usize,
) -> Result<Vec<f64>, SimulationError> {
    if scenarios.iter().any(|w| !w.is_valid()) {
        return Err(SimulationError::InvalidWeather);
    }

    let cells = grid.len();
    if num_trials == 0 || scenarios.is_empty() || ignitions.is_empty() {
        return Ok(vec![0.0; cells]);
    }

    info!(num_trials, scenarios = scenarios.len(), "running Monte Carlo ensemble");

    let counts = (0..num_trials)
        .into_par_iter()
        .map(|trial| {
            let mut sim = BushfireSimulator::trial_from_grid(grid, trial as u64);

            let (weather, (ix, iy)) = {
                let rng = sim.trial_rng();
                let scenario = scenarios[rng.gen_range(0..scenarios.len())];
                let ignition = ignitions[rng.gen_range(0..ignitions.len())];
                (scenario, ignition)
            };

            sim.ignite(ix, iy);
            for _ in 0..TRIAL_STEPS {
                sim.step_validated(&weather, TRIAL_DT);
            }

            sim.burned_areas()
        })
        .fold(
            || vec![0u32; cells],
            |mut acc, burned| {
                for (count, b) in acc.iter_mut().zip(&burned) {
                    *count += u32::from(*b);
                }
                acc
            },
        )
        .reduce(
            || vec![0u32; cells],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(&b) {
                    *x += y;
                }
                a
            },
        );

    let scale = 1.0 / num_trials as f64;
    Ok(counts.into_iter().map(|c| f64::from(c) * scale).collect())
}
