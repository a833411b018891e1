//! Smoke run: resolve configuration, report backend status, and exercise
//! every generation operation on sample predictions.

use tracing_subscriber::EnvFilter;

use neuroscribe::narrative::diagnostic;
use neuroscribe::{
    identify_region, NarrativeConfig, NarrativeGenerator, Prediction, PredictionResult,
    TumorClassifier,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(neuroscribe::config::default_log_filter())),
        )
        .init();

    tracing::info!("Neuroscribe starting v{}", neuroscribe::config::APP_VERSION);

    let config = NarrativeConfig::from_env();
    let status = diagnostic::probe(&config, false);
    println!("Backend: {}", status.summary);

    let generator = NarrativeGenerator::from_config(&config);
    println!("Generation mode: {}\n", generator.mode().as_str());

    let mut classifier = TumorClassifier::new();

    let detections = [
        PredictionResult::new(Prediction::Tumor, 0.943),
        PredictionResult::new(Prediction::NoTumor, 0.873),
    ];

    for detection in detections {
        let classification = classifier.classify(detection.confidence, detection.prediction);
        let result = match (classification.tumor_type, classification.confidence) {
            (Some(tumor_type), type_confidence) => {
                detection.with_tumor_type(tumor_type, type_confidence)
            }
            (None, _) => detection,
        };

        println!("=== {} ({:.1}%) ===", result.prediction.detection_label(), result.confidence_pct());

        println!("\n--- Analysis ---\n{}", generator.generate_analysis(&result));

        let region = identify_region(0.5, 0.8);
        println!(
            "\n--- Region ---\n{}",
            generator.explain_region(&region, 0.72, result.prediction, result.confidence)
        );

        println!("\n--- Differential ---");
        for entry in
            generator.generate_differential(result.prediction, result.confidence, result.tumor_type)
        {
            println!("  {:>3}% {} ({})", entry.likelihood, entry.diagnosis, entry.key_feature);
        }

        let risk = generator.generate_risk_assessment(
            result.prediction,
            result.confidence,
            result.tumor_type,
        );
        println!(
            "\n--- Risk ---\n  severity {}/10, {} - {}\n",
            risk.severity_score, risk.urgency_level, risk.timeline
        );
    }
}
