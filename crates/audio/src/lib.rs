//! Wildlife Audio Identification Core Library
//!
//! Feature extraction and species classification for Australian bush
//! recordings: Hann-windowed spectral analysis, scalar spectral features,
//! band energies, an overlapping-frame spectrogram, and a small fixed
//! classifier over the feature vector. A synthetic call generator supports
//! demos and tests.

pub mod classifier;
pub mod error;
pub mod features;
pub mod species;
pub mod spectrogram;
pub mod synth;

pub use classifier::WildlifeClassifier;
pub use error::AudioError;
pub use features::{FeatureExtractor, FEATURE_COUNT, FFT_SIZE, FREQ_BINS, HOP_SIZE, SAMPLE_RATE};
pub use species::{Species, SpeciesProfile};
pub use spectrogram::Spectrogram;
pub use synth::CallSynthesizer;
