//! Overlapping-frame magnitude spectrogram.

use crate::features::{FeatureExtractor, FFT_SIZE, FREQ_BINS, HOP_SIZE};

/// Row-major `(frames × bins)` magnitude matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    frames: usize,
    bins: usize,
    data: Vec<f64>,
}

impl Spectrogram {
    /// Number of analysis frames.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Frequency bins per frame.
    #[must_use]
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Magnitudes of one frame.
    #[must_use]
    pub fn row(&self, frame: usize) -> &[f64] {
        &self.data[frame * self.bins..(frame + 1) * self.bins]
    }

    /// The full matrix, row-major.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

impl FeatureExtractor {
    /// Compute the magnitude spectrogram of `samples` with a hop of
    /// [`HOP_SIZE`] samples between frames.
    ///
    /// Input shorter than one window produces an empty zero-frame matrix.
    /// A frame whose spectrum cannot be computed is zero-filled rather
    /// than failing the call.
    #[must_use]
    pub fn spectrogram(&self, samples: &[f64]) -> Spectrogram {
        let frames = if samples.len() >= FFT_SIZE {
            (samples.len() - FFT_SIZE) / HOP_SIZE + 1
        } else {
            0
        };

        let mut data = vec![0.0; frames * FREQ_BINS];
        for frame in 0..frames {
            let start = frame * HOP_SIZE;
            let segment = &samples[start..start + FFT_SIZE];
            if let Ok(magnitudes) = self.magnitude_spectrum(segment) {
                data[frame * FREQ_BINS..(frame + 1) * FREQ_BINS].copy_from_slice(&magnitudes);
            }
        }

        Spectrogram {
            frames,
            bins: FREQ_BINS,
            data,
        }
    }
}
