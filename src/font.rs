//! Font loading and single-line text measurement

use std::fmt;
use std::path::PathBuf;

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// Where the overlay font comes from.
#[derive(Debug, Clone)]
pub enum FontSource {
    /// A TrueType/OpenType file on disk
    Path(PathBuf),
    /// Font data already in memory
    Bytes(Vec<u8>),
}

impl From<PathBuf> for FontSource {
    fn from(p: PathBuf) -> Self {
        FontSource::Path(p)
    }
}

impl From<&str> for FontSource {
    fn from(p: &str) -> Self {
        FontSource::Path(PathBuf::from(p))
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Path(p) => write!(f, "{}", p.display()),
            FontSource::Bytes(b) => write!(f, "<{} bytes in memory>", b.len()),
        }
    }
}

/// Ink bounds of a string laid out on one line.
///
/// `offset_x`/`offset_y` locate the top-left of the ink relative to the pen
/// origin, which sits on the ascender line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub width: u32,
    pub height: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Load and parse a font. Any I/O or parse failure is a `FontLoad` error.
pub fn load_font(source: &FontSource) -> Result<FontVec> {
    let data = match source {
        FontSource::Path(path) => std::fs::read(path).map_err(|e| Error::FontLoad {
            source_name: source.to_string(),
            reason: e.to_string(),
        })?,
        FontSource::Bytes(bytes) => bytes.clone(),
    };

    let font = FontVec::try_from_vec(data).map_err(|e| Error::FontLoad {
        source_name: source.to_string(),
        reason: e.to_string(),
    })?;
    debug!("loaded font {} ({} glyphs)", source, font.glyph_count());
    Ok(font)
}

/// Measure the rendered ink box of `text` at `px` pixels.
///
/// Glyphs are advanced and kerned exactly as `imageproc::drawing::draw_text_mut`
/// places them, so the measured box matches what gets drawn.
pub fn measure_text(font: &impl Font, px: f32, text: &str) -> TextMetrics {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);

    let mut caret = 0f32;
    let mut last: Option<GlyphId> = None;
    let mut bounds: Option<(f32, f32, f32, f32)> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            if let Some(last) = last {
                caret += scaled.kern(id, last);
            }
            last = Some(id);
            let bb = outlined.px_bounds();
            bounds = Some(match bounds {
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                Some((x0, y0, x1, y1)) => (
                    x0.min(bb.min.x),
                    y0.min(bb.min.y),
                    x1.max(bb.max.x),
                    y1.max(bb.max.y),
                ),
            });
        }
    }

    match bounds {
        // whitespace only: nothing is inked
        None => TextMetrics::default(),
        Some((x0, y0, x1, y1)) => TextMetrics {
            width: (x1 - x0).round().max(0.0) as u32,
            height: (y1 - y0).round().max(0.0) as u32,
            offset_x: x0.round() as i32,
            offset_y: y0.round() as i32,
        },
    }
}
