//! Rasterizer: runs paint commands against an RGBA canvas and encodes PNG

use ab_glyph::{Font, PxScale};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use super::paint::PaintCommand;
use crate::error::{Error, Result};
use crate::rendering::Screenshot;

/// In-memory pixel buffer the overlay is composed on.
pub type Canvas = RgbaImage;

/// A `width x height` canvas with every pixel fully transparent.
pub fn blank_canvas(width: u32, height: u32) -> Canvas {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Apply `commands` in order. Anything falling outside the canvas is clipped.
pub fn execute(canvas: &mut Canvas, font: &impl Font, commands: &[PaintCommand]) {
    for cmd in commands {
        match cmd {
            PaintCommand::RoundedRect {
                x0,
                y0,
                x1,
                y1,
                radius,
                fill,
                outline,
                outline_width,
            } => paint_box(
                canvas,
                (*x0, *y0, *x1, *y1),
                *radius as i32,
                Rgba(*fill),
                Rgba(*outline),
                *outline_width as i32,
            ),
            PaintCommand::Text { x, y, px, rgba, text } => {
                draw_text_mut(canvas, Rgba(*rgba), *x, *y, PxScale::from(*px), font, text);
            }
        }
    }
}

/// Outline of width `bw` drawn as the outer shape in `outline`, with the
/// interior repainted in `fill` inset by `bw`.
fn paint_box(
    canvas: &mut Canvas,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    radius: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    bw: i32,
) {
    if bw <= 0 {
        fill_rounded_rect(canvas, (x0, y0, x1, y1), radius, fill);
        return;
    }
    fill_rounded_rect(canvas, (x0, y0, x1, y1), radius, outline);
    fill_rounded_rect(canvas, (x0 + bw, y0 + bw, x1 - bw, y1 - bw), (radius - bw).max(0), fill);
}

/// Fill the inclusive pixel range `(x0,y0)..=(x1,y1)` with quarter-circle corners.
fn fill_rounded_rect(
    canvas: &mut Canvas,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    radius: i32,
    color: Rgba<u8>,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let w = x1 - x0 + 1;
    let h = y1 - y0 + 1;
    let r = radius.min((w - 1) / 2).min((h - 1) / 2).max(0);

    let horizontal = Rect::at(x0, y0 + r).of_size(w as u32, (h - 2 * r) as u32);
    let vertical = Rect::at(x0 + r, y0).of_size((w - 2 * r) as u32, h as u32);
    draw_filled_rect_mut(canvas, horizontal, color);
    draw_filled_rect_mut(canvas, vertical, color);
    if r > 0 {
        for center in [(x0 + r, y0 + r), (x1 - r, y0 + r), (x0 + r, y1 - r), (x1 - r, y1 - r)] {
            draw_filled_circle_mut(canvas, center, r, color);
        }
    }
}

/// Encode the canvas as an RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Screenshot> {
    let mut png_data = Vec::new();
    PngEncoder::new(&mut png_data).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )
    .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(Screenshot {
        width: canvas.width(),
        height: canvas.height(),
        png_data,
    })
}
