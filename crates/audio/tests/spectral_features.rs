//! End-to-end validation of the spectral pipeline.

use std::f64::consts::PI;

use bushears_core::{
    CallSynthesizer, FeatureExtractor, Species, WildlifeClassifier, SAMPLE_RATE,
};

fn sine(frequency: f64, samples: usize) -> Vec<f64> {
    (0..samples)
        .map(|i| (2.0 * PI * frequency * i as f64 / SAMPLE_RATE).sin())
        .collect()
}

#[test]
fn one_kilohertz_tone_centroid_and_band_energy() {
    let extractor = FeatureExtractor::new();
    let features = extractor.extract_features(&sine(1_000.0, 4096)).unwrap();

    // Centroid lands on the tone within one bin width (44100/1024 ≈ 43 Hz).
    let centroid = features[0];
    assert!(
        (centroid - 1_000.0).abs() <= 44.0,
        "centroid {centroid} too far from 1 kHz"
    );

    // A narrowband tone: small bandwidth, rolloff right at the tone.
    assert!(features[1] < 300.0, "bandwidth {} too wide", features[1]);
    assert!(
        (900.0..1_300.0).contains(&features[2]),
        "rolloff {} off the tone",
        features[2]
    );

    // Two sign changes per cycle.
    let expected_zcr = 2.0 * 1_000.0 / SAMPLE_RATE;
    assert!((features[3] - expected_zcr).abs() < 0.01);

    // The 1-4 kHz band holds the peak bin and dominates the others.
    let bands = &features[4..];
    assert!(bands[1] > bands[0]);
    assert!(bands[1] > bands[2]);
    assert!(bands[1] > bands[3]);
}

#[test]
fn zero_signal_spectrogram_shape_and_content() {
    let extractor = FeatureExtractor::new();
    let sg = extractor.spectrogram(&vec![0.0; 4096]);
    assert_eq!(sg.frames(), 7);
    assert_eq!(sg.bins(), 513);
    assert!(sg.data().iter().all(|&m| m == 0.0));
}

#[test]
fn high_frequency_tone_lands_in_the_top_band() {
    let extractor = FeatureExtractor::new();
    let features = extractor.extract_features(&sine(10_000.0, 2048)).unwrap();
    let bands = &features[4..];
    assert!(bands[3] > bands[0] + bands[1] + bands[2]);
    assert!(features[0] > 8_000.0);
}

#[test]
fn synthesised_call_flows_through_the_whole_pipeline() {
    let synth = CallSynthesizer::new(42);
    let extractor = FeatureExtractor::new();
    let classifier = WildlifeClassifier::new(42);

    let call = synth.bird_call(Species::Kookaburra, 2.0);
    let features = extractor.extract_features(&call).unwrap();

    // The kookaburra call centres near 1.1 kHz; the extracted centroid must
    // sit inside the species' frequency range.
    assert!(features[0] > 200.0 && features[0] < 2_000.0);

    // Classification is total: any feature vector maps to some species,
    // possibly Unknown, without panicking.
    let _species = classifier.classify(&features);

    // The spectrogram frames the call onset at hop resolution.
    let onset = &call[..4096];
    let sg = extractor.spectrogram(onset);
    assert_eq!(sg.frames(), (onset.len() - 1024) / 512 + 1);
}

#[test]
fn feature_extraction_is_pure() {
    let extractor = FeatureExtractor::new();
    let audio = CallSynthesizer::new(3).bird_call(Species::Magpie, 1.0);
    let a = extractor.extract_features(&audio).unwrap();
    let b = extractor.extract_features(&audio).unwrap();
    assert_eq!(a, b);
}
