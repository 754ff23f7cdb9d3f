use bushears_core::{CallSynthesizer, FeatureExtractor, Species, WildlifeClassifier};
use bushfire_core::{
    danger_category, drought_factor, generate_weather_scenarios, mcarthur_forest_fdi,
    synthetic_terrain, BushfireSimulator, WeatherCondition,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Bushfire Simulation Demo ===\n");

    // Build a 100x100 synthetic Blue Mountains terrain.
    const SIZE: usize = 100;
    let terrain = synthetic_terrain(SIZE, SIZE, 42);
    let mut sim = BushfireSimulator::new(SIZE, SIZE, 42);
    sim.initialize_from_data(
        &terrain.elevations,
        &terrain.fuel_loads,
        &terrain.vegetation_types,
    )
    .expect("terrain arrays match grid dimensions");
    println!("Created {SIZE}x{SIZE} grid ({} cells)", SIZE * SIZE);

    // Severe fire weather.
    let weather = WeatherCondition {
        temperature: 42.0,
        humidity: 15.0,
        wind_speed: 45.0,
        wind_direction: 90.0,
        rainfall: 0.0,
        fuel_moisture: 6.0,
    };
    let fdi = mcarthur_forest_fdi(
        weather.temperature,
        weather.humidity,
        weather.wind_speed,
        drought_factor(weather.rainfall),
    );
    println!(
        "Weather: {:.1}°C, {:.0}% RH, {:.0} km/h wind -> FDI {fdi:.1} ({})\n",
        weather.temperature,
        weather.humidity,
        weather.wind_speed,
        danger_category(fdi)
    );

    // Ignite the centre and run for an hour of simulated time.
    sim.ignite(SIZE / 2, SIZE / 2);
    for step in 1..=600 {
        sim.step(&weather, 0.1).expect("weather validated above");
        if step % 150 == 0 {
            let (active, perimeter) = sim.perimeter_count();
            println!(
                "step {step:4}: burned {:.2} ha, {active} active fires ({perimeter} on perimeter), peak intensity {:.3}",
                sim.total_burned_area(),
                sim.max_intensity()
            );
        }
    }

    // Deterministic risk surface around two candidate ignition points.
    let risk = sim.risk_surface(&weather, &[(10, 10), (80, 60)]);
    let peak_risk = risk.iter().cloned().fold(0.0_f64, f64::max);
    println!("\nRisk surface peak: {peak_risk:.4}");

    // Monte Carlo ensemble over generated weather scenarios.
    let scenarios = generate_weather_scenarios(20, 7);
    let ignitions = [(10usize, 10usize), (50, 50), (90, 90)];
    let surface = sim
        .monte_carlo(&scenarios, &ignitions, 200)
        .expect("generated scenarios are valid");
    let high_risk_cells = surface.iter().filter(|&&p| p > 0.5).count();
    println!("Monte Carlo (200 trials): {high_risk_cells} cells burn in >50% of trials");

    println!("\n=== Wildlife Audio Demo ===\n");

    let synth = CallSynthesizer::new(7);
    let extractor = FeatureExtractor::new();
    let classifier = WildlifeClassifier::new(7);

    let call = synth.bird_call(Species::Kookaburra, 2.0);
    let features = extractor
        .extract_features(&call)
        .expect("call longer than one window");
    println!("Kookaburra call features:");
    println!("  centroid  {:8.1} Hz", features[0]);
    println!("  bandwidth {:8.1} Hz", features[1]);
    println!("  rolloff   {:8.1} Hz", features[2]);
    println!("  zcr       {:8.4}", features[3]);
    println!(
        "  band energies: {:.2} / {:.2} / {:.2} / {:.2}",
        features[4], features[5], features[6], features[7]
    );

    let detected = classifier.classify(&features);
    println!("Classifier output: {detected:?}");

    let spectrogram = extractor.spectrogram(&call[..8192.min(call.len())]);
    println!(
        "Spectrogram: {} frames x {} bins",
        spectrogram.frames(),
        spectrogram.bins()
    );
}
