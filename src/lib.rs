//! # heartrisk-rs
//!
//! Survey-to-risk inference pipeline for a pre-trained heart disease
//! classifier. Raw health-survey answers are deterministically encoded into
//! the numeric feature vector the model was trained against, standardized
//! with the pre-fit scaler, and classified into a binary risk label.
//!
//! There is no learning here: the classifier, the scaling transform, and the
//! column manifest are externally supplied artifacts, loaded once at process
//! start and treated as opaque. What this crate owns is the one piece of real
//! logic between a filled-in form and a displayed result: column-aligned
//! one-hot encoding, the positional scaling/classification contract, and the
//! decision mapping.
//!
//! ## Core Design Principles
//!
//! - **Manifest-driven encoding**: the ordered column manifest is an explicit
//!   input, never ambient state; the one-hot expansion and the zero-fill for
//!   absent columns are table-driven from it.
//! - **Artifacts as injected dependencies**: the scaler and classifier sit
//!   behind two narrow traits ([`FeatureScaler`], [`BinaryClassifier`]), so
//!   tests substitute fakes without touching persistence.
//! - **Stateless per request**: every assessment is an independent pass over
//!   read-only artifacts; a single [`RiskPipeline`] serves concurrent
//!   requests without locking.
//! - **Fail at startup, not mid-request**: artifact loading and every shape
//!   cross-check happen before the first request; a served pipeline cannot
//!   disagree with itself on vector width.
//!
//! ## Quick Start
//!
//! ```ignore
//! use heartrisk_rs::{load_pipeline, RawAnswers};
//!
//! // Load columns.json, scaler.bin, model.bin; any missing artifact is a
//! // StartupError and nothing is served.
//! let pipeline = load_pipeline("models/")?;
//!
//! let answers = RawAnswers::default();
//! let label = pipeline.assess(&answers)?;
//! println!("{}", label); // HIGH RISK or LOW RISK
//! ```
//!
//! ## Module Structure
//!
//! - `survey` — typed survey answers and categorical vocabularies
//! - `manifest` — ordered training-time column names, schema-validated
//! - `encoding` — manifest-aligned feature vector assembly
//! - `traits` — the scaler/classifier seams
//! - `scaling` — pre-fit standard scaling transform
//! - `model` — logistic and decision-forest classifier artifacts
//! - `pipeline` — encode → scale → classify → label
//! - `artifact` — one-shot startup loading of the three artifacts
//! - `serialization` — byte-level persistence for parameter structs

pub mod artifact;
pub mod encoding;
pub mod error;
pub mod manifest;
pub mod model;
pub mod pipeline;
pub mod scaling;
pub mod serialization;
pub mod survey;
pub mod traits;

pub use artifact::{load_pipeline, ArtifactBundle};
pub use encoding::{encode, FeatureVector};
pub use error::{DomainError, PredictError, StartupError};
pub use manifest::ColumnManifest;
pub use pipeline::{RiskLabel, RiskPipeline};
pub use survey::RawAnswers;
pub use traits::{BinaryClassifier, FeatureScaler};
