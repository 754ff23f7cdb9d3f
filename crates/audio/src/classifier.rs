//! Species classification over the eight-feature vector.
//!
//! A small fixed network: 8 inputs → 16 tanh hidden units → 12 softmax
//! outputs, one per candidate species class. Weights are drawn once at
//! construction from a seeded N(0, 0.1) stream and never updated; the
//! classifier is deterministic for a given seed.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::features::FEATURE_COUNT;
use crate::species::Species;

const HIDDEN_UNITS: usize = 16;
const OUTPUT_CLASSES: usize = 12;

/// Minimum softmax confidence before a prediction is reported.
const CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Fixed-weight wildlife call classifier.
#[derive(Debug, Clone)]
pub struct WildlifeClassifier {
    /// Input→hidden weights, `[input * HIDDEN_UNITS + hidden]`
    hidden_weights: Vec<f64>,
    /// Hidden→output weights, `[hidden * OUTPUT_CLASSES + output]`
    output_weights: Vec<f64>,
}

impl WildlifeClassifier {
    /// Initialise the network from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dist = Normal::new(0.0, 0.1).expect("valid normal parameters");

        let hidden_weights = (0..FEATURE_COUNT * HIDDEN_UNITS)
            .map(|_| dist.sample(&mut rng))
            .collect();
        let output_weights = (0..HIDDEN_UNITS * OUTPUT_CLASSES)
            .map(|_| dist.sample(&mut rng))
            .collect();

        debug!(seed, "initialised classifier weights");
        WildlifeClassifier {
            hidden_weights,
            output_weights,
        }
    }

    /// Classify a feature vector.
    ///
    /// Returns [`Species::Unknown`] for inputs that are not exactly eight
    /// features long or whose best class falls below the confidence
    /// threshold.
    #[must_use]
    pub fn classify(&self, features: &[f64]) -> Species {
        if features.len() != FEATURE_COUNT {
            return Species::Unknown;
        }

        let hidden = self.hidden_layer(features);
        let output = self.output_layer(&hidden);

        let (best_class, confidence) = output
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, &p)| (i, p))
            .unwrap_or((0, 0.0));

        if confidence < CONFIDENCE_THRESHOLD {
            return Species::Unknown;
        }
        Species::from_class_index(best_class)
    }

    /// Classify a batch of feature vectors.
    #[must_use]
    pub fn classify_batch(&self, batch: &[Vec<f64>]) -> Vec<Species> {
        batch.iter().map(|features| self.classify(features)).collect()
    }

    fn hidden_layer(&self, features: &[f64]) -> [f64; HIDDEN_UNITS] {
        let mut hidden = [0.0; HIDDEN_UNITS];
        for (h, unit) in hidden.iter_mut().enumerate() {
            for (i, &feature) in features.iter().enumerate() {
                *unit += feature * self.hidden_weights[i * HIDDEN_UNITS + h];
            }
            *unit = unit.tanh();
        }
        hidden
    }

    fn output_layer(&self, hidden: &[f64; HIDDEN_UNITS]) -> [f64; OUTPUT_CLASSES] {
        let mut output = [0.0; OUTPUT_CLASSES];
        for (o, out) in output.iter_mut().enumerate() {
            for (h, &activation) in hidden.iter().enumerate() {
                *out += activation * self.output_weights[h * OUTPUT_CLASSES + o];
            }
        }

        // Softmax, shifted by the max for numerical stability.
        let max = output.iter().cloned().fold(f64::MIN, f64::max);
        let mut sum = 0.0;
        for x in &mut output {
            *x = (*x - max).exp();
            sum += *x;
        }
        for x in &mut output {
            *x /= sum;
        }
        output
    }
}
