//! Terrain cell state: the per-cell fuel, topography, and burn bookkeeping.

use serde::{Deserialize, Serialize};

/// Vegetation density classes for Australian bushland.
///
/// The class drives both the fire spread multiplier and the static risk
/// weighting. Extreme corresponds to heavy eucalypt forest with deep litter
/// beds; Sparse to open grassland with patchy cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VegetationType {
    Sparse,
    Moderate,
    Dense,
    Extreme,
}

impl VegetationType {
    /// Spread-rate multiplier for this vegetation class.
    #[must_use]
    pub fn fuel_multiplier(self) -> f64 {
        match self {
            VegetationType::Sparse => 0.5,
            VegetationType::Moderate => 1.0,
            VegetationType::Dense => 2.0,
            VegetationType::Extreme => 4.0,
        }
    }

    /// Static risk weighting used by the deterministic risk surface.
    #[must_use]
    pub fn risk_weight(self) -> f64 {
        match self {
            VegetationType::Sparse => 0.3,
            VegetationType::Moderate => 0.6,
            VegetationType::Dense => 0.9,
            VegetationType::Extreme => 1.0,
        }
    }
}

/// One 30 m × 30 m square of terrain with independent fuel and burn state.
///
/// Invariants maintained by the timestep engine:
/// - `fuel_remaining` stays in `[0, 1]`
/// - `fuel_remaining < 0.01` implies `is_ignited == false` and
///   `burn_intensity == 0.0`
/// - `burn_intensity <= fuel_load * 0.1`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainCell {
    /// Elevation above sea level (m)
    pub elevation: f64,
    /// Terrain slope (degrees), derived from neighbouring elevations
    pub slope: f64,
    /// Aspect (degrees, 0 = North, clockwise)
    pub aspect: f64,
    /// Vegetation density class
    pub vegetation_type: VegetationType,
    /// Fuel load (tonnes per hectare)
    pub fuel_load: f64,
    /// Whether the cell is currently burning
    pub is_ignited: bool,
    /// Current burn intensity (dimensionless, >= 0)
    pub burn_intensity: f64,
    /// Fraction of fuel not yet consumed (0-1)
    pub fuel_remaining: f64,
}

impl Default for TerrainCell {
    fn default() -> Self {
        TerrainCell {
            elevation: 0.0,
            slope: 0.0,
            aspect: 0.0,
            vegetation_type: VegetationType::Moderate,
            fuel_load: 10.0,
            is_ignited: false,
            burn_intensity: 0.0,
            fuel_remaining: 1.0,
        }
    }
}

impl TerrainCell {
    /// A cell counts as burned once more than 10% of its fuel is consumed.
    #[must_use]
    pub fn is_burned(&self) -> bool {
        self.fuel_remaining < 0.9
    }
}
