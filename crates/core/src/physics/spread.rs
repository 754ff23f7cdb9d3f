//! Empirical spread-rate model.
//!
//! All functions here are pure; the timestep engine composes them per
//! source→target cell pair. Rates are in m/min, consistent with the
//! McArthur-style empirical models the index formulas come from.

use crate::core_types::{TerrainCell, WeatherCondition};
use crate::grid::CELL_SIZE_M;

/// Base spread rate before any multiplier (m/min).
const BASE_SPREAD_RATE: f64 = 0.1;

/// Base fuel consumption per unit dt (fraction of fuel bed).
const BASE_CONSUMPTION: f64 = 0.02;

/// Exponential damping of spread with fuel moisture content (%).
#[must_use]
pub fn moisture_damping(fuel_moisture: f64) -> f64 {
    (-0.05 * fuel_moisture).exp()
}

/// Wind contribution to spread along a source→target bearing.
///
/// `direction_diff` is the bearing minus the wind direction, in degrees.
/// Targets upwind of the wind vector contribute zero, never a negative.
#[must_use]
pub fn wind_effect(weather: &WeatherCondition, direction_diff: f64) -> f64 {
    let wind_factor = weather.wind_speed / 10.0;
    let alignment = direction_diff.to_radians().cos();
    wind_factor * alignment.max(0.0)
}

/// Slope contribution between two adjacent cells.
///
/// Upslope spread is amplified, downslope damped. The `tan(atan(...))`
/// chain is the model's defined form; the coefficient 2.0 doubles spread
/// per unit rise over the 30 m cell span.
#[must_use]
pub fn slope_effect(from: &TerrainCell, to: &TerrainCell) -> f64 {
    let elevation_diff = to.elevation - from.elevation;
    (elevation_diff / CELL_SIZE_M).atan().tan() * 2.0
}

/// Head fire spread rate into `cell` (m/min).
///
/// Combines the vegetation multiplier, fuel moisture damping, wind and
/// slope amplification, and the remaining fuel fraction of the target bed.
#[must_use]
pub fn spread_rate(
    cell: &TerrainCell,
    weather: &WeatherCondition,
    wind_effect: f64,
    slope_effect: f64,
) -> f64 {
    BASE_SPREAD_RATE
        * cell.vegetation_type.fuel_multiplier()
        * moisture_damping(weather.fuel_moisture)
        * (1.0 + wind_effect)
        * (1.0 + slope_effect)
        * cell.fuel_remaining
}

/// Fuel consumption rate for a burning cell, per unit dt.
///
/// Heavier beds burn a larger absolute fraction per step, normalised
/// against a typical 20 t/ha load.
#[must_use]
pub fn fuel_consumption_rate(cell: &TerrainCell) -> f64 {
    BASE_CONSUMPTION * (1.0 + cell.fuel_load / 20.0)
}

/// Burn intensity of a cell given its load and remaining fuel fraction.
#[must_use]
pub fn burn_intensity(fuel_load: f64, fuel_remaining: f64) -> f64 {
    fuel_load * (1.0 - fuel_remaining) * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::VegetationType;
    use approx::assert_relative_eq;

    fn cell_at(elevation: f64) -> TerrainCell {
        TerrainCell {
            elevation,
            ..TerrainCell::default()
        }
    }

    #[test]
    fn wind_aligned_bearing_amplifies() {
        let weather = WeatherCondition {
            wind_speed: 30.0,
            ..WeatherCondition::default()
        };
        assert_relative_eq!(wind_effect(&weather, 0.0), 3.0);
        // 60° off-axis halves the cosine.
        assert_relative_eq!(wind_effect(&weather, 60.0), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn upwind_target_contributes_zero() {
        let weather = WeatherCondition {
            wind_speed: 40.0,
            ..WeatherCondition::default()
        };
        assert_eq!(wind_effect(&weather, 180.0), 0.0);
        assert_eq!(wind_effect(&weather, 135.0), 0.0);
    }

    #[test]
    fn calm_air_has_no_wind_effect() {
        let weather = WeatherCondition {
            wind_speed: 0.0,
            ..WeatherCondition::default()
        };
        assert_eq!(wind_effect(&weather, 0.0), 0.0);
    }

    #[test]
    fn slope_effect_sign_follows_elevation() {
        let low = cell_at(100.0);
        let high = cell_at(115.0);
        // 15 m rise over 30 m: tan(atan(0.5)) * 2 = 1.0
        assert_relative_eq!(slope_effect(&low, &high), 1.0, epsilon = 1e-12);
        assert_relative_eq!(slope_effect(&high, &low), -1.0, epsilon = 1e-12);
        assert_relative_eq!(slope_effect(&low, &low), 0.0);
    }

    #[test]
    fn spread_rate_composes_factors() {
        let weather = WeatherCondition {
            fuel_moisture: 0.0,
            ..WeatherCondition::default()
        };
        let mut cell = TerrainCell::default();
        cell.vegetation_type = VegetationType::Extreme;

        // No moisture, no wind, no slope: rate = 0.1 * 4.0 * 1 * 1 * 1
        assert_relative_eq!(spread_rate(&cell, &weather, 0.0, 0.0), 0.4);

        // Half-consumed fuel halves the rate.
        cell.fuel_remaining = 0.5;
        assert_relative_eq!(spread_rate(&cell, &weather, 0.0, 0.0), 0.2);
    }

    #[test]
    fn moisture_damps_exponentially() {
        assert_relative_eq!(moisture_damping(0.0), 1.0);
        assert!(moisture_damping(10.0) < moisture_damping(5.0));
        assert_relative_eq!(moisture_damping(20.0), (-1.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn consumption_scales_with_load() {
        let light = TerrainCell {
            fuel_load: 10.0,
            ..TerrainCell::default()
        };
        let heavy = TerrainCell {
            fuel_load: 30.0,
            ..TerrainCell::default()
        };
        assert_relative_eq!(fuel_consumption_rate(&light), 0.03);
        assert_relative_eq!(fuel_consumption_rate(&heavy), 0.05);
    }

    #[test]
    fn intensity_bounded_by_load() {
        assert_relative_eq!(burn_intensity(10.0, 1.0), 0.0);
        assert_relative_eq!(burn_intensity(10.0, 0.0), 1.0);
        assert!(burn_intensity(10.0, 0.4) <= 10.0 * 0.1);
    }
}
