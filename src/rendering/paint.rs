//! Paint commands for the overlay, in draw order

use super::layout::OverlayLayout;
use crate::OverlayStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Filled rectangle with rounded corners over the inclusive pixel
    /// range `(x0,y0)..=(x1,y1)`, stroked inward by `outline_width`.
    RoundedRect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        radius: u32,
        fill: [u8; 4],
        outline: [u8; 4],
        outline_width: u32,
    },
    /// Single line of text; `(x, y)` is the pen origin on the ascender line.
    Text {
        x: i32,
        y: i32,
        px: f32,
        rgba: [u8; 4],
        text: String,
    },
}

/// Box first, then the text on top of it.
pub fn overlay_commands(
    layout: &OverlayLayout,
    style: &OverlayStyle,
    text: &str,
) -> Vec<PaintCommand> {
    let r = layout.rect;
    vec![
        PaintCommand::RoundedRect {
            x0: r.x0,
            y0: r.y0,
            x1: r.x1,
            y1: r.y1,
            radius: style.corner_radius,
            fill: style.fill,
            outline: style.ink,
            outline_width: style.border_width,
        },
        PaintCommand::Text {
            // shift the pen so the ink box starts at the laid-out origin
            x: layout.text_x - layout.metrics.offset_x,
            y: layout.text_y - layout.metrics.offset_y,
            px: style.font_size,
            rgba: style.ink,
            text: text.to_string(),
        },
    ]
}
