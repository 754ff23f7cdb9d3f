//! Spectral feature extraction for wildlife call identification.
//!
//! One analysis window is 1024 samples at 44.1 kHz (~23 ms), Hann-weighted
//! and transformed with a direct DFT over the non-negative bins. The eight
//! scalar features, in fixed order: spectral centroid, spectral bandwidth,
//! spectral rolloff, zero-crossing rate, and magnitude energies in four
//! frequency bands chosen for bird call discrimination.

use std::f64::consts::PI;

use crate::error::AudioError;

/// Sample rate the pipeline is calibrated for (Hz).
pub const SAMPLE_RATE: f64 = 44_100.0;

/// Analysis window length in samples.
pub const FFT_SIZE: usize = 1024;

/// Hop between successive spectrogram frames, in samples.
pub const HOP_SIZE: usize = 512;

/// Number of non-negative frequency bins per spectrum.
pub const FREQ_BINS: usize = FFT_SIZE / 2 + 1;

/// Length of the extracted feature vector.
pub const FEATURE_COUNT: usize = 8;

/// Band edges for the four energy features (Hz, half-open intervals).
const ENERGY_BANDS: [(f64, f64); 4] = [
    (0.0, 1_000.0),
    (1_000.0, 4_000.0),
    (4_000.0, 8_000.0),
    (8_000.0, 22_050.0),
];

/// Rolloff threshold: fraction of cumulative spectral magnitude.
const ROLLOFF_THRESHOLD: f64 = 0.85;

/// Spectral feature extractor with a precomputed Hann window.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    window: Vec<f64>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    /// Build an extractor, precomputing the Hann window
    /// `w[n] = 0.5·(1 − cos(2πn/(N−1)))`.
    #[must_use]
    pub fn new() -> Self {
        let window = (0..FFT_SIZE)
            .map(|n| 0.5 * (1.0 - (2.0 * PI * n as f64 / (FFT_SIZE - 1) as f64).cos()))
            .collect();
        FeatureExtractor { window }
    }

    /// Magnitude spectrum of the first window of `samples`.
    ///
    /// # Errors
    /// [`AudioError::SegmentTooShort`] when fewer than [`FFT_SIZE`] samples
    /// are supplied.
    pub fn magnitude_spectrum(&self, samples: &[f64]) -> Result<Vec<f64>, AudioError> {
        if samples.len() < FFT_SIZE {
            return Err(AudioError::SegmentTooShort {
                actual: samples.len(),
                required: FFT_SIZE,
            });
        }

        let windowed: Vec<f64> = samples[..FFT_SIZE]
            .iter()
            .zip(&self.window)
            .map(|(&s, &w)| s * w)
            .collect();

        // Direct transform over the non-negative bins only.
        let mut magnitudes = Vec::with_capacity(FREQ_BINS);
        for k in 0..FREQ_BINS {
            let step = -2.0 * PI * k as f64 / FFT_SIZE as f64;
            let (mut re, mut im) = (0.0, 0.0);
            for (n, &x) in windowed.iter().enumerate() {
                let angle = step * n as f64;
                re += x * angle.cos();
                im += x * angle.sin();
            }
            magnitudes.push(re.hypot(im));
        }
        Ok(magnitudes)
    }

    /// Extract the eight-feature vector from an audio segment.
    ///
    /// The spectrum covers the first analysis window; the zero-crossing
    /// rate covers the full segment.
    ///
    /// # Errors
    /// [`AudioError::SegmentTooShort`] when the segment is shorter than one
    /// window. No partial feature vector is produced.
    pub fn extract_features(&self, samples: &[f64]) -> Result<[f64; FEATURE_COUNT], AudioError> {
        let magnitudes = self.magnitude_spectrum(samples)?;

        let mut features = [0.0; FEATURE_COUNT];
        features[0] = spectral_centroid(&magnitudes);
        features[1] = spectral_bandwidth(&magnitudes, features[0]);
        features[2] = spectral_rolloff(&magnitudes);
        features[3] = zero_crossing_rate(samples);
        for (i, &(low, high)) in ENERGY_BANDS.iter().enumerate() {
            features[4 + i] = band_energy(&magnitudes, low, high);
        }
        Ok(features)
    }
}

/// Centre frequency of bin `k` (Hz).
fn bin_frequency(k: usize, bins: usize) -> f64 {
    k as f64 * SAMPLE_RATE / (2.0 * (bins - 1) as f64)
}

/// Magnitude-weighted mean frequency; zero for an empty spectrum.
fn spectral_centroid(magnitudes: &[f64]) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (k, &m) in magnitudes.iter().enumerate() {
        weighted += bin_frequency(k, magnitudes.len()) * m;
        total += m;
    }
    if total > 0.0 {
        weighted / total
    } else {
        0.0
    }
}

/// RMS deviation of frequency around the centroid, magnitude-weighted.
fn spectral_bandwidth(magnitudes: &[f64], centroid: f64) -> f64 {
    let mut weighted = 0.0;
    let mut total = 0.0;
    for (k, &m) in magnitudes.iter().enumerate() {
        let deviation = bin_frequency(k, magnitudes.len()) - centroid;
        weighted += deviation * deviation * m;
        total += m;
    }
    if total > 0.0 {
        (weighted / total).sqrt()
    } else {
        0.0
    }
}

/// Frequency below which 85% of cumulative spectral magnitude lies.
/// Falls back to the Nyquist frequency for silent input or when the
/// threshold is never reached.
fn spectral_rolloff(magnitudes: &[f64]) -> f64 {
    let total: f64 = magnitudes.iter().sum();
    if total > 0.0 {
        let target = total * ROLLOFF_THRESHOLD;
        let mut cumulative = 0.0;
        for (k, &m) in magnitudes.iter().enumerate() {
            cumulative += m;
            if cumulative >= target {
                return bin_frequency(k, magnitudes.len());
            }
        }
    }
    SAMPLE_RATE / 2.0
}

/// Sign changes per sample over the full time-domain segment.
fn zero_crossing_rate(samples: &[f64]) -> f64 {
    let crossings = samples
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();
    crossings as f64 / samples.len() as f64
}

/// Sum of magnitudes over bins whose centre frequency lies in `[low, high)`.
fn band_energy(magnitudes: &[f64], low: f64, high: f64) -> f64 {
    let bins = magnitudes.len();
    let start = ((low * 2.0 * bins as f64 / SAMPLE_RATE) as usize).min(bins - 1);
    let end = ((high * 2.0 * bins as f64 / SAMPLE_RATE) as usize).min(bins);
    magnitudes[start..end].iter().sum()
}
