//! Survey answer types.
//!
//! One typed field per health-survey question. Categorical fields are closed
//! enums whose serialized spelling equals the training-time vocabulary, so a
//! JSON answers file round-trips against the dataset the model was fit on and
//! composite one-hot names (`Sex_Male`, `ST_Slope_Up`, ...) can be synthesized
//! from [`label`](Sex::label) without a lookup table.
//!
//! Range validation lives here as [`RawAnswers::validate`] for the input
//! collector's use; the pipeline itself trusts its input (out-of-domain
//! rejection happens before answers reach the encoder).

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Biological sex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Column-name prefix used for one-hot composites.
    pub const FIELD: &'static str = "Sex";
    /// Every value, in training-vocabulary order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    /// Training-time label, as it appears in composite column names.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Chest pain type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChestPainType {
    /// Atypical angina.
    #[serde(rename = "ATA")]
    Ata,
    /// Non-anginal pain.
    #[serde(rename = "NAP")]
    Nap,
    /// Typical angina.
    #[serde(rename = "TA")]
    Ta,
    /// Asymptomatic.
    #[serde(rename = "ASY")]
    Asy,
}

impl ChestPainType {
    pub const FIELD: &'static str = "ChestPainType";
    pub const ALL: [ChestPainType; 4] = [
        ChestPainType::Ata,
        ChestPainType::Nap,
        ChestPainType::Ta,
        ChestPainType::Asy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChestPainType::Ata => "ATA",
            ChestPainType::Nap => "NAP",
            ChestPainType::Ta => "TA",
            ChestPainType::Asy => "ASY",
        }
    }
}

/// Resting electrocardiogram result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    Normal,
    /// ST-T wave abnormality.
    #[serde(rename = "ST")]
    St,
    /// Left ventricular hypertrophy.
    #[serde(rename = "LVH")]
    Lvh,
}

impl RestingEcg {
    pub const FIELD: &'static str = "RestingECG";
    pub const ALL: [RestingEcg; 3] = [RestingEcg::Normal, RestingEcg::St, RestingEcg::Lvh];

    pub fn label(&self) -> &'static str {
        match self {
            RestingEcg::Normal => "Normal",
            RestingEcg::St => "ST",
            RestingEcg::Lvh => "LVH",
        }
    }
}

/// Exercise-induced angina.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseAngina {
    #[serde(rename = "N")]
    No,
    #[serde(rename = "Y")]
    Yes,
}

impl ExerciseAngina {
    pub const FIELD: &'static str = "ExerciseAngina";
    pub const ALL: [ExerciseAngina; 2] = [ExerciseAngina::No, ExerciseAngina::Yes];

    pub fn label(&self) -> &'static str {
        match self {
            ExerciseAngina::No => "N",
            ExerciseAngina::Yes => "Y",
        }
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    Up,
    Flat,
    Down,
}

impl StSlope {
    pub const FIELD: &'static str = "ST_Slope";
    pub const ALL: [StSlope; 3] = [StSlope::Up, StSlope::Flat, StSlope::Down];

    pub fn label(&self) -> &'static str {
        match self {
            StSlope::Up => "Up",
            StSlope::Flat => "Flat",
            StSlope::Down => "Down",
        }
    }
}

/// One complete survey response.
///
/// Constructed fresh per request by the input collector, consumed once by the
/// encoder, then discarded. All fields mandatory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawAnswers {
    /// Age in years, 18-100.
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "ChestPainType")]
    pub chest_pain: ChestPainType,
    /// Resting blood pressure in mmHg, 80-200.
    #[serde(rename = "RestingBP")]
    pub resting_bp: u32,
    /// Total cholesterol in mg/dL, 100-600.
    #[serde(rename = "Cholesterol")]
    pub cholesterol: u32,
    /// Fasting blood sugar indicator: 1 if > 120 mg/dL, else 0.
    #[serde(rename = "FastingBS")]
    pub fasting_bs: u8,
    #[serde(rename = "RestingECG")]
    pub resting_ecg: RestingEcg,
    /// Maximum heart rate achieved, 60-220 bpm.
    #[serde(rename = "MaxHR")]
    pub max_hr: u32,
    #[serde(rename = "ExerciseAngina")]
    pub exercise_angina: ExerciseAngina,
    /// ST depression induced by exercise relative to rest, 0.0-6.0.
    #[serde(rename = "Oldpeak")]
    pub oldpeak: f64,
    #[serde(rename = "ST_Slope")]
    pub st_slope: StSlope,
}

impl RawAnswers {
    /// Check every numeric field against its stated domain.
    ///
    /// Returns the first violation. This is the input collector's tool; the
    /// encoder and scorer never call it and never clamp.
    pub fn validate(&self) -> Result<(), DomainError> {
        range_check("Age", self.age as f64, 18.0, 100.0)?;
        range_check("RestingBP", self.resting_bp as f64, 80.0, 200.0)?;
        range_check("Cholesterol", self.cholesterol as f64, 100.0, 600.0)?;
        range_check("FastingBS", self.fasting_bs as f64, 0.0, 1.0)?;
        range_check("MaxHR", self.max_hr as f64, 60.0, 220.0)?;
        if !self.oldpeak.is_finite() {
            return Err(DomainError {
                field: "Oldpeak",
                value: self.oldpeak,
                min: 0.0,
                max: 6.0,
            });
        }
        range_check("Oldpeak", self.oldpeak, 0.0, 6.0)?;
        Ok(())
    }
}

fn range_check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), DomainError> {
    if value < min || value > max {
        return Err(DomainError {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// The survey form's initial values.
impl Default for RawAnswers {
    fn default() -> Self {
        Self {
            age: 40,
            sex: Sex::Male,
            chest_pain: ChestPainType::Ata,
            resting_bp: 120,
            cholesterol: 200,
            fasting_bs: 0,
            resting_ecg: RestingEcg::Normal,
            max_hr: 150,
            exercise_angina: ExerciseAngina::No,
            oldpeak: 1.0,
            st_slope: StSlope::Up,
        }
    }
}
