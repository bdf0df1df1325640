//! The overlay composer: timestamp in, composed RGBA canvas out

use ab_glyph::Font;
use log::debug;

use crate::error::{Error, Result};
use crate::font::{load_font, measure_text, FontSource};
use crate::rendering::layout::{layout_overlay, OverlayLayout};
use crate::rendering::paint::overlay_commands;
use crate::rendering::raster::{blank_canvas, execute, Canvas};
use crate::OverlayStyle;

/// Compose `timestamp` onto a transparent `width x height` canvas using the
/// default style (14px text, 4px padding, white box with a purple border).
///
/// # Errors
///
/// - `Error::InvalidDimensions` when either dimension is zero
/// - `Error::FontLoad` when the font cannot be read or parsed
pub fn compose(width: u32, height: u32, font: &FontSource, timestamp: &str) -> Result<Canvas> {
    compose_with_style(width, height, font, timestamp, &OverlayStyle::default())
}

/// [`compose`] with an explicit style.
pub fn compose_with_style(
    width: u32,
    height: u32,
    font: &FontSource,
    timestamp: &str,
    style: &OverlayStyle,
) -> Result<Canvas> {
    let (canvas, _) = compose_detailed(width, height, font, timestamp, style)?;
    Ok(canvas)
}

/// Compose and also return the computed layout.
pub fn compose_detailed(
    width: u32,
    height: u32,
    font: &FontSource,
    timestamp: &str,
    style: &OverlayStyle,
) -> Result<(Canvas, OverlayLayout)> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let font = load_font(font)?;
    Ok(compose_with_font(width, height, &font, timestamp, style))
}

/// Infallible core once dimensions are validated and the font is parsed.
pub fn compose_with_font(
    width: u32,
    height: u32,
    font: &impl Font,
    timestamp: &str,
    style: &OverlayStyle,
) -> (Canvas, OverlayLayout) {
    let mut canvas = blank_canvas(width, height);

    let metrics = measure_text(font, style.font_size, timestamp);
    let layout = layout_overlay(width, &metrics, style);
    debug!(
        "overlay box ({}, {})-({}, {}) for {}x{} text",
        layout.rect.x0,
        layout.rect.y0,
        layout.rect.x1,
        layout.rect.y1,
        metrics.width,
        metrics.height
    );
    if !layout.rect.fits_within(width, height) {
        debug!("overlay box exceeds {}x{} canvas; drawing is clipped", width, height);
    }

    let commands = overlay_commands(&layout, style, timestamp);
    execute(&mut canvas, font, &commands);
    (canvas, layout)
}
