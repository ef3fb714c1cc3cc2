//! Prescription page layout.
//!
//! Coordinates are PDF points measured from the top-left corner of a US Letter page. Every
//! block sits at a fixed anchor except the recommendation section, which starts below the
//! measured height of the wrapped treatment text.

use super::metrics::Face;
use super::wrap::{measure_height, wrap, WrappedText};
use crate::constants::{BRAND_SUBTITLE, BRAND_TITLE, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::disease::display_label;
use crate::{TherabotError, TherabotResult};

const BRAND_PURPLE: Colour = Colour::from_hex(0x6240E8);
const MUTED_GREY: Colour = Colour::from_hex(0x646464);
const BLACK: Colour = Colour::from_hex(0x000000);

const HEADING_X: f32 = 30.0;
const BODY_X: f32 = 50.0;
const HEADING_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 16.0;

/// Horizontal space removed from the page width to get the body column width.
const CONTENT_MARGINS: f32 = 60.0;
/// Gap between the end of the treatment body and the recommendation heading.
const SECTION_GAP: f32 = 10.0;
/// Offset from a section heading to its body.
const HEADING_TO_BODY: f32 = 30.0;

const TREATMENT_BODY_Y: f32 = 300.0;

/// An sRGB colour with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
}

/// What a text block holds, used to find blocks after layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockRole {
    Title,
    Subtitle,
    DiseaseHeading,
    DiseaseLabel,
    TreatmentHeading,
    TreatmentBody,
    RecommendationHeading,
    RecommendationBody,
}

/// Optional images drawn when their asset files are available.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoration {
    Logo,
    Signature,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub role: BlockRole,
    pub x: f32,
    /// Top of the first line.
    pub y: f32,
    pub face: Face,
    pub size: f32,
    pub colour: Colour,
    pub lines: Vec<String>,
    pub line_height: f32,
}

impl TextBlock {
    fn single_line(role: BlockRole, text: &str, x: f32, y: f32, size: f32, colour: Colour) -> Self {
        let face = match role {
            BlockRole::Title
            | BlockRole::DiseaseHeading
            | BlockRole::TreatmentHeading
            | BlockRole::RecommendationHeading => Face::Bold,
            _ => Face::Regular,
        };
        Self {
            role,
            x,
            y,
            face,
            size,
            colour,
            lines: vec![text.to_string()],
            line_height: face.line_height(size),
        }
    }

    fn wrapped(role: BlockRole, wrapped: WrappedText, x: f32, y: f32, colour: Colour) -> Self {
        Self {
            role,
            x,
            y,
            face: Face::Regular,
            size: BODY_SIZE,
            colour,
            lines: wrapped.lines,
            line_height: wrapped.line_height,
        }
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// The block's lines joined back with single spaces.
    pub fn text(&self) -> String {
        self.lines.join(" ")
    }
}

/// A horizontal stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleBlock {
    pub x_start: f32,
    pub x_end: f32,
    pub y: f32,
    pub thickness: f32,
    pub colour: Colour,
}

/// Box an image is scaled to fit, anchored at its top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSlot {
    pub decoration: Decoration,
    pub x: f32,
    pub y: f32,
    pub max_width: f32,
    pub max_height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Text(TextBlock),
    Rule(RuleBlock),
    Image(ImageSlot),
}

/// Positioned blocks of one prescription page, in drawing order.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub blocks: Vec<Block>,
}

impl DocumentLayout {
    /// Width available to wrapped body text.
    pub fn content_width(&self) -> f32 {
        self.page_width - CONTENT_MARGINS
    }

    pub fn text(&self, role: BlockRole) -> Option<&TextBlock> {
        self.blocks.iter().find_map(|block| match block {
            Block::Text(text) if text.role == role => Some(text),
            _ => None,
        })
    }

    pub fn divider(&self) -> Option<&RuleBlock> {
        self.blocks.iter().find_map(|block| match block {
            Block::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn image(&self, decoration: Decoration) -> Option<&ImageSlot> {
        self.blocks.iter().find_map(|block| match block {
            Block::Image(slot) if slot.decoration == decoration => Some(slot),
            _ => None,
        })
    }
}

/// Lay out a prescription for `disease` (an identifier) with its two texts.
///
/// `decorations` lists the images that are available to draw.
///
/// # Errors
/// Returns `Rendering` if any text contains control characters other than line breaks and
/// tabs, which the PDF text operators cannot carry, or if the recommendation would run past
/// the bottom of the single page.
pub fn layout(
    disease: &str,
    recommendation: &str,
    treatment: &str,
    decorations: &[Decoration],
) -> TherabotResult<DocumentLayout> {
    check_printable("disease", disease)?;
    check_printable("recommendation", recommendation)?;
    check_printable("treatment", treatment)?;

    let width = PAGE_WIDTH_PT;
    let height = PAGE_HEIGHT_PT;
    let content_width = width - CONTENT_MARGINS;
    let mut blocks = Vec::with_capacity(12);

    if decorations.contains(&Decoration::Logo) {
        blocks.push(Block::Image(ImageSlot {
            decoration: Decoration::Logo,
            x: width - 130.0,
            y: 30.0,
            max_width: 100.0,
            max_height: 100.0,
        }));
    }

    blocks.push(Block::Text(TextBlock::single_line(
        BlockRole::Title,
        BRAND_TITLE,
        HEADING_X,
        50.0,
        40.0,
        BRAND_PURPLE,
    )));
    blocks.push(Block::Text(TextBlock::single_line(
        BlockRole::Subtitle,
        BRAND_SUBTITLE,
        HEADING_X,
        90.0,
        20.0,
        MUTED_GREY,
    )));
    blocks.push(Block::Rule(RuleBlock {
        x_start: 20.0,
        x_end: width - 20.0,
        y: 160.0,
        thickness: 3.0,
        colour: BRAND_PURPLE,
    }));

    blocks.push(Block::Text(TextBlock::single_line(
        BlockRole::DiseaseHeading,
        "Disease:",
        HEADING_X,
        200.0,
        HEADING_SIZE,
        BLACK,
    )));
    blocks.push(Block::Text(TextBlock::single_line(
        BlockRole::DiseaseLabel,
        &display_label(disease),
        BODY_X,
        230.0,
        BODY_SIZE,
        MUTED_GREY,
    )));

    blocks.push(Block::Text(TextBlock::single_line(
        BlockRole::TreatmentHeading,
        "Treatment:",
        HEADING_X,
        270.0,
        HEADING_SIZE,
        BLACK,
    )));
    let treatment_body = wrap(treatment, content_width, Face::Regular, BODY_SIZE);
    let recommendation_y = TREATMENT_BODY_Y + treatment_body.height() + SECTION_GAP;
    blocks.push(Block::Text(TextBlock::wrapped(
        BlockRole::TreatmentBody,
        treatment_body,
        BODY_X,
        TREATMENT_BODY_Y,
        MUTED_GREY,
    )));

    blocks.push(Block::Text(TextBlock::single_line(
        BlockRole::RecommendationHeading,
        "Recommendation:",
        HEADING_X,
        recommendation_y,
        HEADING_SIZE,
        BLACK,
    )));
    let recommendation_body = wrap(recommendation, content_width, Face::Regular, BODY_SIZE);
    ensure_on_page(
        disease,
        recommendation_y + HEADING_TO_BODY + recommendation_body.height(),
    )?;
    blocks.push(Block::Text(TextBlock::wrapped(
        BlockRole::RecommendationBody,
        recommendation_body,
        BODY_X,
        recommendation_y + HEADING_TO_BODY,
        MUTED_GREY,
    )));

    if decorations.contains(&Decoration::Signature) {
        blocks.push(Block::Image(ImageSlot {
            decoration: Decoration::Signature,
            x: width - 130.0,
            y: height - 80.0,
            max_width: 100.0,
            max_height: 50.0,
        }));
    }

    Ok(DocumentLayout {
        page_width: width,
        page_height: height,
        blocks,
    })
}

/// Check that the treatment and recommendation bodies of a record end on the page.
pub(crate) fn check_fits(disease: &str, recommendation: &str, treatment: &str) -> TherabotResult<()> {
    let width = PAGE_WIDTH_PT - CONTENT_MARGINS;
    let bottom = TREATMENT_BODY_Y
        + measure_height(treatment, width, Face::Regular, BODY_SIZE)
        + SECTION_GAP
        + HEADING_TO_BODY
        + measure_height(recommendation, width, Face::Regular, BODY_SIZE);
    ensure_on_page(disease, bottom)
}

fn ensure_on_page(disease: &str, bottom: f32) -> TherabotResult<()> {
    if bottom > PAGE_HEIGHT_PT {
        return Err(TherabotError::Rendering(format!(
            "text for {disease} runs to {bottom:.1}pt, past the {PAGE_HEIGHT_PT}pt page"
        )));
    }
    Ok(())
}

fn check_printable(field: &str, text: &str) -> TherabotResult<()> {
    match text
        .chars()
        .find(|ch| ch.is_control() && !matches!(*ch, '\n' | '\r' | '\t'))
    {
        Some(ch) => Err(TherabotError::Rendering(format!(
            "{field} contains unsupported control character U+{:04X}",
            u32::from(ch)
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREATMENT: &str = "Treatment depends on the cause. If due to H. pylori infection, \
        antibiotics such as amoxicillin and clarithromycin are used along with PPIs. Antacids \
        and H2 blockers can help reduce acid production.";
    const RECOMMENDATION: &str = "Avoid the use of NSAIDs like ibuprofen and aspirin.";

    #[test]
    fn places_fixed_header_blocks() {
        let page = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();

        let title = page.text(BlockRole::Title).unwrap();
        assert_eq!(title.lines, vec!["TheraBot"]);
        assert_eq!((title.x, title.y, title.size), (30.0, 50.0, 40.0));
        assert_eq!(title.colour, Colour { r: 0x62, g: 0x40, b: 0xE8 });

        let subtitle = page.text(BlockRole::Subtitle).unwrap();
        assert_eq!(subtitle.lines, vec!["Diagnosis ChatBot"]);
        assert_eq!(subtitle.y, 90.0);

        let divider = page.divider().unwrap();
        assert_eq!(divider.y, 160.0);
        assert_eq!(divider.x_start, 20.0);
        assert_eq!(divider.x_end, 592.0);
    }

    #[test]
    fn prints_capitalised_disease_label() {
        let page = layout("gastric_ulcer", RECOMMENDATION, TREATMENT, &[]).unwrap();
        let label = page.text(BlockRole::DiseaseLabel).unwrap();
        assert_eq!(label.lines, vec!["Gastric Ulcer"]);
        assert_eq!((label.x, label.y), (50.0, 230.0));
    }

    #[test]
    fn recommendation_follows_measured_treatment_height() {
        let page = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();
        let treatment = page.text(BlockRole::TreatmentBody).unwrap();
        let heading = page.text(BlockRole::RecommendationHeading).unwrap();
        let body = page.text(BlockRole::RecommendationBody).unwrap();

        assert_eq!(treatment.y, 300.0);
        assert!(treatment.lines.len() > 1);
        let expected = 300.0 + treatment.height() + 10.0;
        assert!((heading.y - expected).abs() < 1e-3);
        assert!((body.y - (expected + 30.0)).abs() < 1e-3);
        assert_eq!(body.text(), RECOMMENDATION);
    }

    #[test]
    fn longer_treatment_pushes_recommendation_down() {
        let short = layout("gastritis", RECOMMENDATION, "Rest.", &[]).unwrap();
        let long = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();
        let short_y = short.text(BlockRole::RecommendationHeading).unwrap().y;
        let long_y = long.text(BlockRole::RecommendationHeading).unwrap().y;
        assert!(long_y > short_y);
    }

    #[test]
    fn body_lines_fit_the_content_width() {
        let page = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();
        let width = page.content_width();
        assert_eq!(width, 552.0);
        for line in &page.text(BlockRole::TreatmentBody).unwrap().lines {
            assert!(Face::Regular.text_width(line, 16.0) <= width);
        }
    }

    #[test]
    fn decorations_only_when_available() {
        let bare = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();
        assert!(bare.image(Decoration::Logo).is_none());
        assert!(bare.image(Decoration::Signature).is_none());

        let decorated = layout(
            "gastritis",
            RECOMMENDATION,
            TREATMENT,
            &[Decoration::Logo, Decoration::Signature],
        )
        .unwrap();
        let logo = decorated.image(Decoration::Logo).unwrap();
        assert_eq!((logo.x, logo.y), (482.0, 30.0));
        let signature = decorated.image(Decoration::Signature).unwrap();
        assert_eq!((signature.x, signature.y), (482.0, 712.0));
        assert_eq!((signature.max_width, signature.max_height), (100.0, 50.0));
    }

    #[test]
    fn rejects_control_characters() {
        let err = layout("gastritis", "rest\u{0}", TREATMENT, &[]).unwrap_err();
        assert!(matches!(err, TherabotError::Rendering(ref msg) if msg.contains("recommendation")));
    }

    #[test]
    fn rejects_text_that_overflows_the_page() {
        let treatment = "word ".repeat(2000);
        let err = layout("gastritis", RECOMMENDATION, &treatment, &[]).unwrap_err();
        assert!(matches!(err, TherabotError::Rendering(ref msg) if msg.contains("page")));

        let recommendation = "line\n".repeat(40);
        assert!(layout("gastritis", &recommendation, "Rest.", &[]).is_err());
    }

    #[test]
    fn fit_check_agrees_with_layout() {
        assert!(check_fits("gastritis", RECOMMENDATION, TREATMENT).is_ok());
        assert!(check_fits("gastritis", RECOMMENDATION, &"word ".repeat(2000)).is_err());
    }

    #[test]
    fn recommendation_ends_on_the_page() {
        let page = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();
        let body = page.text(BlockRole::RecommendationBody).unwrap();
        assert!(body.y + body.height() <= page.page_height);
    }

    #[test]
    fn headings_are_bold_and_bodies_regular() {
        let page = layout("gastritis", RECOMMENDATION, TREATMENT, &[]).unwrap();
        for role in [
            BlockRole::Title,
            BlockRole::DiseaseHeading,
            BlockRole::TreatmentHeading,
            BlockRole::RecommendationHeading,
        ] {
            assert_eq!(page.text(role).unwrap().face, Face::Bold, "{role:?}");
        }
        for role in [
            BlockRole::Subtitle,
            BlockRole::DiseaseLabel,
            BlockRole::TreatmentBody,
            BlockRole::RecommendationBody,
        ] {
            assert_eq!(page.text(role).unwrap().face, Face::Regular, "{role:?}");
        }
    }

    #[test]
    fn keeps_line_breaks_in_bodies() {
        let page = layout("gastritis", "Rest.\nDrink water.", TREATMENT, &[]).unwrap();
        assert_eq!(
            page.text(BlockRole::RecommendationBody).unwrap().lines,
            vec!["Rest.", "Drink water."]
        );
    }
}
