//! Weather records and scenario generation.
//!
//! A `WeatherCondition` is validated once at the engine boundary and treated
//! as immutable for the duration of a call. Scenario generation reproduces
//! the statistical shape of Australian fire-season weather: hot days are
//! drier, and fuel moisture tracks the adjusted humidity.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A single weather observation driving fire behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (km/h)
    pub wind_speed: f64,
    /// Wind direction (degrees, 0 = North, clockwise)
    pub wind_direction: f64,
    /// Rainfall over the last 24 h (mm)
    pub rainfall: f64,
    /// Fuel moisture content (%)
    pub fuel_moisture: f64,
}

impl Default for WeatherCondition {
    fn default() -> Self {
        WeatherCondition {
            temperature: 20.0,
            humidity: 50.0,
            wind_speed: 10.0,
            wind_direction: 0.0,
            rainfall: 0.0,
            fuel_moisture: 10.0,
        }
    }
}

impl WeatherCondition {
    /// Check the record against physical bounds.
    ///
    /// Temperature −50..=60 °C, humidity 0..=100 %, wind speed 0..=200 km/h.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-50.0..=60.0).contains(&self.temperature)
            && (0.0..=100.0).contains(&self.humidity)
            && (0.0..=200.0).contains(&self.wind_speed)
    }
}

/// Generate `count` fire-season weather scenarios from a seed.
///
/// Draws per scenario, in order: temperature U(15, 45) °C, humidity
/// U(20, 80) %, wind speed U(5, 50) km/h, wind direction U(0, 360)°,
/// rainfall U(0, 20) mm. Humidity is then scaled by `(50 − T)/50` and
/// floored at 10 %; fuel moisture is 30 % of the unfloored adjusted
/// humidity, floored at 5 %.
///
/// Every scenario produced here passes [`WeatherCondition::is_valid`].
#[must_use]
pub fn generate_weather_scenarios(count: usize, seed: u64) -> Vec<WeatherCondition> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut scenarios = Vec::with_capacity(count);

    for _ in 0..count {
        let temperature = rng.gen_range(15.0..45.0);
        let humidity = rng.gen_range(20.0..80.0);
        let wind_speed = rng.gen_range(5.0..50.0);
        let wind_direction = rng.gen_range(0.0..360.0);
        let rainfall = rng.gen_range(0.0..20.0);

        // Hot days are drier: scale humidity down with temperature.
        let adjusted_humidity: f64 = humidity * (50.0 - temperature) / 50.0;
        let fuel_moisture = (adjusted_humidity * 0.3).max(5.0);

        scenarios.push(WeatherCondition {
            temperature,
            humidity: adjusted_humidity.max(10.0),
            wind_speed,
            wind_direction,
            rainfall,
            fuel_moisture,
        });
    }

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weather_is_valid() {
        assert!(WeatherCondition::default().is_valid());
    }

    #[test]
    fn bounds_are_enforced() {
        let too_hot = WeatherCondition {
            temperature: 61.0,
            ..WeatherCondition::default()
        };
        assert!(!too_hot.is_valid());

        let impossible_humidity = WeatherCondition {
            humidity: 101.0,
            ..WeatherCondition::default()
        };
        assert!(!impossible_humidity.is_valid());

        let hurricane = WeatherCondition {
            wind_speed: 250.0,
            ..WeatherCondition::default()
        };
        assert!(!hurricane.is_valid());
    }

    #[test]
    fn generated_scenarios_are_valid_and_reproducible() {
        let a = generate_weather_scenarios(50, 42);
        let b = generate_weather_scenarios(50, 42);
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);

        for scenario in &a {
            assert!(scenario.is_valid());
            assert!(scenario.humidity >= 10.0);
            assert!(scenario.fuel_moisture >= 5.0);
            assert!((15.0..45.0).contains(&scenario.temperature));
            assert!((5.0..50.0).contains(&scenario.wind_speed));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_weather_scenarios(10, 1);
        let b = generate_weather_scenarios(10, 2);
        assert_ne!(a, b);
    }
}
