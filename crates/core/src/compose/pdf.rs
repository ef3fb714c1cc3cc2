//! PDF output via `printpdf`.
//!
//! Layout coordinates are top-left based points; `printpdf` places content in millimetres from
//! the bottom-left corner, with text positioned by its baseline.

use super::assets::DecorationAssets;
use super::layout::{Block, Colour, DocumentLayout, ImageSlot, RuleBlock, TextBlock};
use super::metrics::Face;
use crate::{TherabotError, TherabotResult};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb,
};
use std::io::BufWriter;

const MM_PER_PT: f32 = 25.4 / 72.0;

fn mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}

fn colour(c: Colour) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(c.r) / 255.0,
        f32::from(c.g) / 255.0,
        f32::from(c.b) / 255.0,
        None,
    ))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn face(&self, face: Face) -> &IndirectFontRef {
        match face {
            Face::Regular => &self.regular,
            Face::Bold => &self.bold,
        }
    }
}

/// Serialise `layout` into a complete PDF held in memory.
pub(crate) fn write(
    title: &str,
    layout: &DocumentLayout,
    assets: &DecorationAssets,
) -> TherabotResult<Vec<u8>> {
    let (doc, page1, layer1) = PdfDocument::new(
        title,
        mm(layout.page_width),
        mm(layout.page_height),
        "Layer 1",
    );
    let layer = doc.get_page(page1).get_layer(layer1);
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| TherabotError::Rendering(format!("PDF font error: {e}")))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| TherabotError::Rendering(format!("PDF font error: {e}")))?,
    };

    for block in &layout.blocks {
        match block {
            Block::Text(text) => draw_text(&layer, &fonts, layout.page_height, text),
            Block::Rule(rule) => draw_rule(&layer, layout.page_height, rule),
            Block::Image(slot) => draw_image(&layer, layout.page_height, slot, assets),
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| TherabotError::Rendering(format!("PDF save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| TherabotError::Rendering(format!("PDF buffer error: {e}")))
}

fn draw_text(layer: &PdfLayerReference, fonts: &Fonts, page_height: f32, block: &TextBlock) {
    layer.set_fill_color(colour(block.colour));
    let font = fonts.face(block.face);
    let ascent = block.face.ascent(block.size);

    for (i, line) in block.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let baseline = block.y + i as f32 * block.line_height + ascent;
        layer.use_text(
            line.as_str(),
            block.size,
            mm(block.x),
            mm(page_height - baseline),
            font,
        );
    }
}

fn draw_rule(layer: &PdfLayerReference, page_height: f32, rule: &RuleBlock) {
    let y = mm(page_height - rule.y);
    layer.set_outline_color(colour(rule.colour));
    layer.set_outline_thickness(rule.thickness);
    layer.add_line(Line {
        points: vec![
            (Point::new(mm(rule.x_start), y), false),
            (Point::new(mm(rule.x_end), y), false),
        ],
        is_closed: false,
    });
}

fn draw_image(
    layer: &PdfLayerReference,
    page_height: f32,
    slot: &ImageSlot,
    assets: &DecorationAssets,
) {
    let Some(source) = assets.get(slot.decoration) else {
        return;
    };
    let (width_px, height_px) = (source.width() as f32, source.height() as f32);
    if width_px == 0.0 || height_px == 0.0 {
        tracing::warn!("skipping empty {:?} image", slot.decoration);
        return;
    }

    // At 72 dpi one pixel is one point, so the scale is the fit ratio.
    let scale = (slot.max_width / width_px).min(slot.max_height / height_px);
    let bottom = slot.y + height_px * scale;

    Image::from_dynamic_image(source).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(mm(slot.x)),
            translate_y: Some(mm(page_height - bottom)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
            ..Default::default()
        },
    );
}
