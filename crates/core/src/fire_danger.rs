//! McArthur fire danger indices and rating thresholds.
//!
//! # References
//! - McArthur, A.G. (1967). "Fire behaviour in eucalypt forests."
//!   Commonwealth of Australia Forestry and Timber Bureau Leaflet 107.
//! - Noble, I.R., Gill, A.M., Bary, G.A.V. (1980). "McArthur's fire-danger
//!   meters expressed as equations." Australian Journal of Ecology, 5, 201-203.

use serde::{Deserialize, Serialize};

/// Ordinal fire danger rating bands used on Australian roadside signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FireDangerRating {
    Low,
    Moderate,
    High,
    VeryHigh,
    Severe,
    Extreme,
    Catastrophic,
}

impl FireDangerRating {
    /// Map a forest fire danger index onto its rating band.
    ///
    /// Thresholds: 5, 12, 25, 50, 75, 100.
    #[must_use]
    pub fn from_fdi(fdi: f64) -> Self {
        if fdi < 5.0 {
            FireDangerRating::Low
        } else if fdi < 12.0 {
            FireDangerRating::Moderate
        } else if fdi < 25.0 {
            FireDangerRating::High
        } else if fdi < 50.0 {
            FireDangerRating::VeryHigh
        } else if fdi < 75.0 {
            FireDangerRating::Severe
        } else if fdi < 100.0 {
            FireDangerRating::Extreme
        } else {
            FireDangerRating::Catastrophic
        }
    }
}

/// McArthur Forest Fire Danger Index (Mk5 meter, equation form).
///
/// `FDI = 2·exp(−0.45 + 0.987·ln(D) − 0.0345·H + 0.0338·T + 0.0234·V)`
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
/// * `wind_speed` - Wind speed (km/h)
/// * `drought_factor` - Drought factor (1-10)
#[must_use]
pub fn mcarthur_forest_fdi(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    drought_factor: f64,
) -> f64 {
    2.0 * (-0.45 + 0.987 * drought_factor.ln() - 0.0345 * humidity
        + 0.0338 * temperature
        + 0.0234 * wind_speed)
        .exp()
}

/// McArthur Grassland Fire Danger Index (Mk4 meter, equation form).
///
/// `GFDI = 3.35·L·exp(−0.0231·m)·(0.054 + 0.209·V)·exp(0.0338·T − 0.0345·H)`
///
/// # Arguments
/// * `temperature` - Air temperature (°C)
/// * `humidity` - Relative humidity (%)
/// * `wind_speed` - Wind speed (km/h)
/// * `fuel_load` - Grass fuel load (t/ha)
/// * `fuel_moisture` - Dead fuel moisture content (%)
#[must_use]
pub fn grassland_fdi(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    fuel_load: f64,
    fuel_moisture: f64,
) -> f64 {
    3.35 * fuel_load
        * (-0.0231 * fuel_moisture).exp()
        * (0.054 + 0.209 * wind_speed)
        * (0.0338 * temperature - 0.0345 * humidity).exp()
}

/// Drought factor approximation from 24 h rainfall: `max(1, 10 − rain/10)`.
#[must_use]
pub fn drought_factor(rainfall_mm: f64) -> f64 {
    (10.0 - rainfall_mm / 10.0).max(1.0)
}

/// Human-readable rating category for a forest FDI value.
#[must_use]
pub fn danger_category(fdi: f64) -> &'static str {
    match FireDangerRating::from_fdi(fdi) {
        FireDangerRating::Low => "Low",
        FireDangerRating::Moderate => "Moderate",
        FireDangerRating::High => "High",
        FireDangerRating::VeryHigh => "Very High",
        FireDangerRating::Severe => "Severe",
        FireDangerRating::Extreme => "Extreme",
        FireDangerRating::Catastrophic => "Catastrophic",
    }
}
