//! Prescription document composer.
//!
//! Rendering is a single linear pass: the layout is computed and validated first, then the
//! whole PDF is serialised into memory. Callers only ever see complete documents.

mod assets;
mod layout;
mod metrics;
mod pdf;
mod wrap;

pub use assets::DecorationAssets;
pub use layout::{
    Block, BlockRole, Colour, Decoration, DocumentLayout, ImageSlot, RuleBlock, TextBlock,
};
pub(crate) use layout::check_fits;
pub use metrics::Face;
pub use wrap::{measure_height, wrap, WrappedText};

use crate::TherabotResult;
use std::sync::Arc;

/// Everything needed to render one prescription.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// Normalised disease identifier, e.g. `gastric_ulcer`.
    pub disease: String,
    pub recommendation: String,
    pub treatment: String,
}

/// Renders prescriptions. Cheap to clone; decoration images are shared.
#[derive(Clone, Debug)]
pub struct DocumentComposer {
    assets: Arc<DecorationAssets>,
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self::new(DecorationAssets::none())
    }
}

impl DocumentComposer {
    pub fn new(assets: DecorationAssets) -> Self {
        Self {
            assets: Arc::new(assets),
        }
    }

    /// Compute the page layout without producing any output.
    pub fn layout(&self, request: &RenderRequest) -> TherabotResult<DocumentLayout> {
        layout::layout(
            &request.disease,
            &request.recommendation,
            &request.treatment,
            &self.assets.available(),
        )
    }

    /// Render `request` to PDF bytes.
    ///
    /// # Errors
    /// Returns `Rendering` if the text cannot be laid out or the PDF cannot be serialised. No
    /// partial output is returned.
    pub fn render(&self, request: &RenderRequest) -> TherabotResult<Vec<u8>> {
        let page = self.layout(request)?;
        let bytes = pdf::write("Prescription", &page, &self.assets)?;
        tracing::debug!(
            "rendered prescription for {} ({} bytes)",
            request.disease,
            bytes.len()
        );
        Ok(bytes)
    }
}
