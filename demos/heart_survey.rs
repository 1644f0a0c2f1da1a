//! End-to-end heart disease risk assessment demo.
//!
//! Stands in for the two out-of-scope collaborators around the pipeline: the
//! input collector (answers come from a JSON file or the form defaults) and
//! the result presenter (the label becomes a headline plus advisory text).
//!
//! Writes a demonstration artifact bundle with hand-specified logistic
//! weights, loads it back through the startup path, and scores the answers.
//!
//! Run with: cargo run --example heart_survey [answers.json]
//! Set RUST_LOG=debug to watch the artifact loading.

use heartrisk_rs::model::{ClassifierParams, LogisticParams};
use heartrisk_rs::scaling::StandardScalerParams;
use heartrisk_rs::{load_pipeline, ArtifactBundle, ColumnManifest, RawAnswers, RiskLabel};
use std::error::Error;

/// Columns the demonstration model is "trained" against, with Sex_Female,
/// ChestPainType_ATA, RestingECG_Normal, ExerciseAngina_N and ST_Slope_Up as
/// the dropped baseline categories.
const DEMO_COLUMNS: [&str; 15] = [
    "Age",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "MaxHR",
    "Oldpeak",
    "Sex_Male",
    "ChestPainType_ASY",
    "ChestPainType_NAP",
    "ChestPainType_TA",
    "RestingECG_LVH",
    "RestingECG_ST",
    "ExerciseAngina_Y",
    "ST_Slope_Down",
    "ST_Slope_Flat",
];

/// Hand-specified demonstration artifacts.
///
/// Scaler statistics approximate the training cohort; the logistic weights
/// encode the textbook directions (ST depression, exercise angina, a flat or
/// descending ST slope and asymptomatic chest pain push toward high risk,
/// a high achieved heart rate pulls away from it).
fn demo_bundle() -> ArtifactBundle {
    let manifest = ColumnManifest::from_names(
        DEMO_COLUMNS.iter().map(|s| s.to_string()).collect(),
    )
    .expect("demo columns follow the survey schema");

    let mean = vec![
        53.5, 132.4, 198.8, 0.23, 136.8, 0.89, // numeric cohort means
        0.79, 0.54, 0.22, 0.05, 0.20, 0.19, 0.40, 0.07, 0.50,
    ];
    let scale = vec![
        9.4, 18.5, 109.4, 0.42, 25.5, 1.07, // numeric cohort deviations
        0.41, 0.50, 0.41, 0.22, 0.40, 0.39, 0.49, 0.25, 0.50,
    ];

    let weights = vec![
        0.35, 0.15, 0.10, 0.30, -0.45, 0.55, // Age..Oldpeak
        0.40, 0.80, -0.10, 0.05, 0.10, 0.15, 0.70, 0.50, 0.95,
    ];

    ArtifactBundle {
        manifest,
        scaler: StandardScalerParams {
            mean,
            scale,
            n_features: DEMO_COLUMNS.len(),
        },
        classifier: ClassifierParams::Logistic(LogisticParams {
            weights,
            bias: -0.8,
        }),
    }
}

fn read_answers() -> Result<RawAnswers, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            let answers: RawAnswers = serde_json::from_str(&text)?;
            println!("Answers loaded from {}", path);
            Ok(answers)
        }
        None => {
            println!("No answers file given; using the form defaults.");
            Ok(RawAnswers::default())
        }
    }
}

fn present(label: RiskLabel) {
    println!();
    println!("=== Result: {} ===", label);
    match label {
        RiskLabel::HighRisk => {
            println!("Heart disease risk detected.");
            println!("  - Contact your doctor within 24-48 hours");
            println!("  - Schedule heart tests (ECG, echocardiogram)");
            println!("  - Monitor blood pressure daily");
            println!("  - Move to a heart-healthy diet; quit smoking if applicable");
        }
        RiskLabel::LowRisk => {
            println!("Heart health looks good.");
            println!("  - Keep up regular exercise (150 min/week)");
            println!("  - Balanced diet with fruits and vegetables");
            println!("  - Annual checkups for prevention");
        }
    }
    println!();
    println!(
        "This assessment is for educational purposes only and is not a \
         substitute for professional medical advice."
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Export the demonstration artifacts, then load them back through the
    // same startup path a real deployment would use.
    let model_dir = std::env::temp_dir().join("heartrisk-demo-models");
    std::fs::create_dir_all(&model_dir)?;
    demo_bundle().save(&model_dir)?;
    println!("Demo artifacts written to {}", model_dir.display());

    let pipeline = load_pipeline(&model_dir)?;
    println!(
        "Pipeline ready: {} feature columns.",
        pipeline.manifest().len()
    );

    let answers = read_answers()?;

    // Out-of-domain answers are the collector's job to reject, so reject
    // them here, before the pipeline sees anything.
    answers.validate()?;

    let label = pipeline.assess(&answers)?;
    present(label);

    Ok(())
}
