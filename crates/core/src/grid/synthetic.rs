//! Seeded synthetic terrain for demos and tests.
//!
//! Generates a Blue-Mountains-like profile: ridges and valleys around an
//! 800 m mean elevation, fuel loads modulated by a moisture band, and
//! vegetation skewing denser above the 1000 m line.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

use crate::core_types::VegetationType;

/// Row-major terrain arrays ready for
/// [`TerrainGrid::initialize_from`](crate::grid::TerrainGrid::initialize_from).
#[derive(Debug, Clone)]
pub struct SyntheticTerrain {
    pub elevations: Vec<f64>,
    pub fuel_loads: Vec<f64>,
    pub vegetation_types: Vec<VegetationType>,
}

/// Generate `width × height` synthetic terrain from a seed.
///
/// Deterministic per seed: the same `(width, height, seed)` triple always
/// produces identical arrays.
#[must_use]
pub fn synthetic_terrain(width: usize, height: usize, seed: u64) -> SyntheticTerrain {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let elevation_dist = Normal::new(800.0, 300.0).expect("valid normal parameters");
    // Vegetation class weights: Sparse, Moderate, Dense, Extreme.
    let veg_dist = WeightedIndex::new([30, 40, 25, 5]).expect("non-empty weights");

    let total = width * height;
    let mut elevations = Vec::with_capacity(total);
    let mut fuel_loads = Vec::with_capacity(total);
    let mut vegetation_types = Vec::with_capacity(total);

    for y in 0..height {
        for x in 0..width {
            // Ridge lines overlaid on the base distribution, floored at the
            // valley floor elevation.
            let base = elevation_dist.sample(&mut rng);
            let ridge = 100.0 * (x as f64 * 0.02).sin() * (y as f64 * 0.03).cos();
            let elevation = (base + ridge).max(200.0);
            elevations.push(elevation);

            let moisture_band = 1.0 + 0.3 * (y as f64 * 0.05).sin();
            fuel_loads.push(rng.gen_range(5.0..25.0) * moisture_band);

            let class = veg_dist.sample(&mut rng);
            // High country carries heavier fuels.
            let class = if elevation > 1000.0 {
                (class + 1).min(3)
            } else {
                class
            };
            vegetation_types.push(match class {
                0 => VegetationType::Sparse,
                1 => VegetationType::Moderate,
                2 => VegetationType::Dense,
                _ => VegetationType::Extreme,
            });
        }
    }

    SyntheticTerrain {
        elevations,
        fuel_loads,
        vegetation_types,
    }
}
