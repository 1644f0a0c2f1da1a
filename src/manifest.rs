//! Column manifest: the ordered feature names a model was trained against.
//!
//! The manifest defines both the width and the order of every feature vector
//! this crate produces. Ordering is load-bearing: the downstream scaler is
//! positional, not name-keyed, so the manifest is loaded once at startup,
//! validated against the known survey schema, and never mutated afterwards.
//!
//! The artifact format is a JSON array of strings:
//! ```json
//! ["Age", "RestingBP", "Cholesterol", "FastingBS", "MaxHR", "Oldpeak",
//!  "Sex_Male", "ChestPainType_ATA", ...]
//! ```

use crate::error::StartupError;
use crate::survey::{ChestPainType, ExerciseAngina, RestingEcg, Sex, StSlope};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Canonical names of the six numeric survey fields, as the training set
/// spelled them.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "Age",
    "RestingBP",
    "Cholesterol",
    "FastingBS",
    "MaxHR",
    "Oldpeak",
];

/// Ordered sequence of training-time column names.
///
/// Invariant (enforced on every construction path): each name is either one
/// of [`NUMERIC_COLUMNS`] or a `<Field>_<Label>` composite over the closed
/// categorical vocabularies in [`crate::survey`], and no name repeats. A
/// manifest from a differently-labeled training set fails startup instead of
/// silently losing signals at encode time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnManifest {
    names: Vec<String>,
}

impl ColumnManifest {
    /// Build a manifest from an ordered list of names, validating the column
    /// schema invariant.
    pub fn from_names(names: Vec<String>) -> Result<Self, StartupError> {
        if names.is_empty() {
            return Err(StartupError::InvalidManifest(
                "manifest contains no columns".to_string(),
            ));
        }

        let known = known_columns();
        for (i, name) in names.iter().enumerate() {
            if !known.iter().any(|k| k == name) {
                return Err(StartupError::InvalidManifest(format!(
                    "unknown column name '{}'",
                    name
                )));
            }
            if names[..i].contains(name) {
                return Err(StartupError::InvalidManifest(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    /// Load and validate a manifest from a JSON artifact.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StartupError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StartupError::MissingArtifact {
                    name: "column manifest",
                    path: path.display().to_string(),
                }
            } else {
                StartupError::Io {
                    name: "column manifest",
                    detail: e.to_string(),
                }
            }
        })?;
        let names: Vec<String> =
            serde_json::from_str(&text).map_err(|e| StartupError::Corrupt {
                name: "column manifest",
                detail: e.to_string(),
            })?;
        let manifest = Self::from_names(names)?;
        debug!("column manifest: {:?}", manifest.names);
        Ok(manifest)
    }

    /// Write the manifest as a JSON artifact.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let text = serde_json::to_string_pretty(&self.names).map_err(std::io::Error::other)?;
        std::fs::write(path, text)
    }

    /// Number of columns, i.e. the feature vector width.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in manifest order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a column name, if the manifest contains it.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Every column name the survey schema can produce.
fn known_columns() -> Vec<String> {
    let mut names: Vec<String> = NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect();
    names.extend(
        Sex::ALL
            .iter()
            .map(|v| format!("{}_{}", Sex::FIELD, v.label())),
    );
    names.extend(
        ChestPainType::ALL
            .iter()
            .map(|v| format!("{}_{}", ChestPainType::FIELD, v.label())),
    );
    names.extend(
        RestingEcg::ALL
            .iter()
            .map(|v| format!("{}_{}", RestingEcg::FIELD, v.label())),
    );
    names.extend(
        ExerciseAngina::ALL
            .iter()
            .map(|v| format!("{}_{}", ExerciseAngina::FIELD, v.label())),
    );
    names.extend(
        StSlope::ALL
            .iter()
            .map(|v| format!("{}_{}", StSlope::FIELD, v.label())),
    );
    names
}

#[cfg(test)]
pub(crate) fn test_manifest() -> ColumnManifest {
    ColumnManifest::from_names(
        [
            "Age",
            "RestingBP",
            "Cholesterol",
            "FastingBS",
            "MaxHR",
            "Oldpeak",
            "Sex_Male",
            "ChestPainType_ATA",
            "RestingECG_Normal",
            "ExerciseAngina_N",
            "ST_Slope_Up",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
    .unwrap()
}
