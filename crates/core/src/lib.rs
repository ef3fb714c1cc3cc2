//! # TheraBot Core
//!
//! Core business logic for the TheraBot prescription service.
//!
//! This crate contains the pure domain operations:
//! - the immutable disease knowledge base and name normalisation
//! - the single-page prescription composer (layout, text measurement, PDF output)
//! - the `PrescriptionService` that ties the two together
//!
//! **No API concerns**: HTTP servers, request parsing and CORS belong in `api-rest` and
//! `api-shared`.

pub mod compose;
pub mod config;
pub mod constants;
pub mod disease;
mod error;
pub mod knowledge;
pub mod prescription;

pub use compose::{DocumentComposer, RenderRequest};
pub use config::CoreConfig;
pub use constants::DEFAULT_ASSETS_DIR;
pub use disease::{display_label, normalise};
pub use error::{TherabotError, TherabotResult};
pub use knowledge::{DiseaseFacts, DiseaseRecord, KnowledgeBase};
pub use prescription::{Prescription, PrescriptionService};
