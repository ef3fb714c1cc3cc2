//! Decoration images.
//!
//! Logo and signature files are optional. They are decoded once at startup; anything missing
//! or unreadable is logged and left out of every document.

use super::layout::Decoration;
use crate::constants::{LOGO_FILENAME, SIGNATURE_FILENAME};
use printpdf::image_crate::{self, DynamicImage};
use std::path::Path;

/// Decoded decoration images shared by all renders.
#[derive(Clone, Debug, Default)]
pub struct DecorationAssets {
    logo: Option<DynamicImage>,
    signature: Option<DynamicImage>,
}

impl DecorationAssets {
    /// No decorations.
    pub fn none() -> Self {
        Self::default()
    }

    /// Load `logo-no-bg.png` and `signature.png` from `dir`, skipping whatever is unusable.
    pub fn load(dir: &Path) -> Self {
        Self {
            logo: load_image(&dir.join(LOGO_FILENAME)),
            signature: load_image(&dir.join(SIGNATURE_FILENAME)),
        }
    }

    pub fn with_images(logo: Option<DynamicImage>, signature: Option<DynamicImage>) -> Self {
        Self { logo, signature }
    }

    pub fn get(&self, decoration: Decoration) -> Option<&DynamicImage> {
        match decoration {
            Decoration::Logo => self.logo.as_ref(),
            Decoration::Signature => self.signature.as_ref(),
        }
    }

    /// Decorations that have a decoded image.
    pub fn available(&self) -> Vec<Decoration> {
        [Decoration::Logo, Decoration::Signature]
            .into_iter()
            .filter(|decoration| self.get(*decoration).is_some())
            .collect()
    }
}

fn load_image(path: &Path) -> Option<DynamicImage> {
    if !path.is_file() {
        tracing::info!("decoration not found, skipping: {}", path.display());
        return None;
    }

    match image_crate::open(path) {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!("failed to decode decoration {}: {}", path.display(), e);
            None
        }
    }
}
