//! Prescription service: disease name in, PDF out.
//!
//! Shared by the REST API and the CLI. The knowledge base and decorations are loaded once and
//! then only read, so one service value can serve any number of concurrent requests.

use crate::compose::{DecorationAssets, DocumentComposer, RenderRequest};
use crate::config::CoreConfig;
use crate::constants::{PRESCRIPTION_CONTENT_TYPE, PRESCRIPTION_FILENAME};
use crate::disease::normalise;
use crate::knowledge::KnowledgeBase;
use crate::TherabotResult;
use std::sync::Arc;

/// A rendered prescription ready to hand to a client.
#[derive(Clone, Debug)]
pub struct Prescription {
    /// Normalised identifier of the disease the document was rendered for.
    pub disease: String,
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct PrescriptionService {
    knowledge: Arc<KnowledgeBase>,
    composer: DocumentComposer,
}

impl PrescriptionService {
    pub fn new(knowledge: KnowledgeBase, composer: DocumentComposer) -> Self {
        Self {
            knowledge: Arc::new(knowledge),
            composer,
        }
    }

    /// Build the service from startup configuration.
    ///
    /// Loads the configured knowledge file (or the built-in table) and whatever decoration
    /// images are present in the assets directory.
    ///
    /// # Errors
    /// Propagates knowledge-base load errors; these are fatal at startup.
    pub fn from_config(cfg: &CoreConfig) -> TherabotResult<Self> {
        let knowledge = match cfg.knowledge_file() {
            Some(path) => {
                tracing::info!("loading knowledge base from {}", path.display());
                KnowledgeBase::from_path(path)?
            }
            None => KnowledgeBase::builtin()?,
        };
        tracing::info!("knowledge base ready: {} diseases", knowledge.len());

        let composer = DocumentComposer::new(DecorationAssets::load(cfg.assets_dir()));
        Ok(Self::new(knowledge, composer))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn composer(&self) -> &DocumentComposer {
        &self.composer
    }

    /// Resolve a free-text disease name into a render request.
    ///
    /// # Errors
    /// - `InvalidInput` for blank names.
    /// - `NotFoundRecommendation` when the disease is unknown.
    pub fn request_for(&self, raw_name: &str) -> TherabotResult<RenderRequest> {
        let disease = normalise(raw_name)?;
        let facts = self.knowledge.lookup(&disease)?;
        Ok(RenderRequest {
            disease,
            recommendation: facts.recommendation.clone(),
            treatment: facts.treatment.clone(),
        })
    }

    /// Look up `raw_name` and render its prescription.
    pub fn prescribe(&self, raw_name: &str) -> TherabotResult<Prescription> {
        let request = self.request_for(raw_name)?;
        let bytes = self.composer.render(&request)?;
        Ok(Prescription {
            disease: request.disease,
            filename: PRESCRIPTION_FILENAME,
            content_type: PRESCRIPTION_CONTENT_TYPE,
            bytes,
        })
    }
}
