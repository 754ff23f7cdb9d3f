//! Fire spread physics: pure scalar formulas over cell and weather state.

mod spread;

pub use spread::{
    burn_intensity, fuel_consumption_rate, moisture_damping, slope_effect, spread_rate,
    wind_effect,
};
