//! One-shot startup loading of the three external artifacts.
//!
//! The classifier, the scaling transform, and the column manifest are
//! versioned, opaque artifacts produced at training time. They are loaded
//! exactly once, before any request is served; if any of the three is
//! missing or corrupt the process fails to start. There is no degraded mode.
//!
//! Expected directory layout:
//! ```text
//! <dir>/columns.json   column manifest (JSON string array)
//! <dir>/scaler.bin     StandardScalerParams (bincode)
//! <dir>/model.bin      ClassifierParams (bincode)
//! ```

use crate::error::StartupError;
use crate::manifest::ColumnManifest;
use crate::model::ClassifierParams;
use crate::pipeline::RiskPipeline;
use crate::scaling::{FittedStandardScaler, StandardScalerParams};
use log::info;
use std::path::Path;

/// File name of the column manifest artifact.
pub const MANIFEST_FILE: &str = "columns.json";
/// File name of the scaler artifact.
pub const SCALER_FILE: &str = "scaler.bin";
/// File name of the classifier artifact.
pub const MODEL_FILE: &str = "model.bin";

/// The three training-time artifacts, as loaded from disk.
///
/// Mostly an intermediate step on the way to
/// [`into_pipeline`](Self::into_pipeline); kept public so exporters and
/// tests can write bundles with [`save`](Self::save).
pub struct ArtifactBundle {
    pub manifest: ColumnManifest,
    pub scaler: StandardScalerParams,
    pub classifier: ClassifierParams,
}

impl ArtifactBundle {
    /// Load all three artifacts from a directory.
    ///
    /// Fails on the first missing, unreadable, or corrupt artifact.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, StartupError> {
        let dir = dir.as_ref();

        let manifest = ColumnManifest::load_from_file(dir.join(MANIFEST_FILE))?;
        info!("loaded column manifest: {} columns", manifest.len());

        let scaler = FittedStandardScaler::load_from_file(dir.join(SCALER_FILE))?;
        let classifier = ClassifierParams::load_from_file(dir.join(MODEL_FILE))?;

        Ok(Self {
            manifest,
            scaler: scaler.extract_params(),
            classifier,
        })
    }

    /// Write all three artifacts into a directory.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<()> {
        let dir = dir.as_ref();
        self.manifest.save_to_file(dir.join(MANIFEST_FILE))?;
        FittedStandardScaler::from_params(self.scaler.clone())
            .map_err(|e| std::io::Error::other(e.to_string()))?
            .save_to_file(dir.join(SCALER_FILE))?;
        self.classifier.save_to_file(dir.join(MODEL_FILE))
    }

    /// Assemble the serving pipeline, validating every artifact and the
    /// cross-artifact width agreement.
    pub fn into_pipeline(self) -> Result<RiskPipeline, StartupError> {
        let scaler = FittedStandardScaler::from_params(self.scaler)?;
        let classifier = self.classifier.into_classifier()?;
        RiskPipeline::new(self.manifest, Box::new(scaler), classifier)
    }
}

/// Load the artifacts from `dir` and assemble the pipeline in one step.
pub fn load_pipeline<P: AsRef<Path>>(dir: P) -> Result<RiskPipeline, StartupError> {
    ArtifactBundle::load(dir)?.into_pipeline()
}
