//! Error types for the simulation surface.
//!
//! Every fallible operation validates its inputs before touching any state;
//! past the guard, operations do not fail. Out-of-range ignition coordinates
//! are not an error; they are silently ignored at the grid boundary.

use thiserror::Error;

/// Errors surfaced by the bushfire simulation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Input arrays whose length disagrees with the grid dimensions.
    /// The grid is left untouched.
    #[error("terrain data length {actual} does not match grid size {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Weather record outside physical bounds (temperature −50..=60 °C,
    /// humidity 0..=100 %, wind speed 0..=200 km/h).
    #[error("weather conditions outside valid bounds")]
    InvalidWeather,
}
