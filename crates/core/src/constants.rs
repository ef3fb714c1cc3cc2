//! Constants used throughout the TheraBot core crate.
//!
//! This module contains the key format, asset filenames and the fixed document template
//! values so that every front end produces the same prescription.

/// Character that joins the words of a normalised disease identifier.
pub const KEY_SEPARATOR: char = '_';

/// Default directory holding the optional decoration images.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Filename of the logo drawn in the top-right corner.
pub const LOGO_FILENAME: &str = "logo-no-bg.png";

/// Filename of the signature drawn in the bottom-right corner.
pub const SIGNATURE_FILENAME: &str = "signature.png";

/// Attachment filename offered to clients downloading a prescription.
pub const PRESCRIPTION_FILENAME: &str = "Prescription.pdf";

/// MIME type of rendered prescriptions.
pub const PRESCRIPTION_CONTENT_TYPE: &str = "application/pdf";

/// Brand text printed as the document title.
pub const BRAND_TITLE: &str = "TheraBot";

/// Subtitle printed under the brand.
pub const BRAND_SUBTITLE: &str = "Diagnosis ChatBot";

/// US Letter width in PDF points.
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// US Letter height in PDF points.
pub const PAGE_HEIGHT_PT: f32 = 792.0;
