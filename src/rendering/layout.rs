//! Box geometry for the clock overlay

use serde::Serialize;

use crate::font::TextMetrics;
use crate::OverlayStyle;

/// Corners of the overlay box in canvas pixels.
///
/// Signed, since a string wider than the canvas pushes `x0` past the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxGeometry {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoxGeometry {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// True when every painted pixel lands on the canvas.
    ///
    /// The box covers the inclusive range `x0..=x1`, so `x1 == width` already
    /// loses its right column to clipping.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x0 >= 0
            && self.y0 >= 0
            && i64::from(self.x1) < i64::from(width)
            && i64::from(self.y1) < i64::from(height)
    }
}

/// Everything the painter needs: where the box goes and where the ink starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlayLayout {
    pub rect: BoxGeometry,
    pub text_x: i32,
    pub text_y: i32,
    pub metrics: TextMetrics,
}

/// Size the box around the measured text and pin it to the top-right corner.
///
/// - `box = text + 2*padding` on both axes
/// - right and top edges sit `margin` pixels in from the canvas edge
/// - text is left-aligned at `padding` and vertically centered
///
/// No clamping: an over-wide string yields a negative `x0`.
pub fn layout_overlay(
    canvas_width: u32,
    metrics: &TextMetrics,
    style: &OverlayStyle,
) -> OverlayLayout {
    let padding = style.padding as i32;
    let margin = style.margin as i32;
    let canvas_width = i32::try_from(canvas_width).unwrap_or(i32::MAX);

    let box_width = metrics.width as i32 + 2 * padding;
    let box_height = metrics.height as i32 + 2 * padding;

    let x0 = canvas_width - box_width - margin;
    let y0 = margin;
    let rect = BoxGeometry {
        x0,
        y0,
        x1: x0 + box_width,
        y1: y0 + box_height,
    };

    OverlayLayout {
        rect,
        text_x: x0 + padding,
        text_y: y0 + (box_height - metrics.height as i32) / 2,
        metrics: *metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: u32, height: u32) -> TextMetrics {
        TextMetrics { width, height, offset_x: 0, offset_y: 3 }
    }

    #[test]
    fn box_is_pinned_top_right_with_margin() {
        let l = layout_overlay(384, &metrics(133, 11), &OverlayStyle::default());
        assert_eq!(l.rect, BoxGeometry { x0: 237, y0: 6, x1: 378, y1: 25 });
        assert_eq!(l.rect.width(), 141);
        assert_eq!(l.rect.height(), 19);
        assert_eq!(384 - l.rect.x1, 6);
        assert!(l.rect.fits_within(384, 256));
    }

    #[test]
    fn text_origin_is_padded_and_centered() {
        let style = OverlayStyle::default();
        let l = layout_overlay(384, &metrics(133, 11), &style);
        assert_eq!(l.text_x, l.rect.x0 + 4);
        assert_eq!(l.text_y, 10);
        // ink stays inside the box
        assert!(l.text_x + 133 <= l.rect.x1);
        assert!(l.text_y + 11 <= l.rect.y1);
    }

    #[test]
    fn odd_slack_rounds_down() {
        let style = OverlayStyle { padding: 3, ..OverlayStyle::default() };
        let l = layout_overlay(200, &metrics(50, 10), &style);
        // box height 16, slack 6 -> 3
        assert_eq!(l.text_y, l.rect.y0 + 3);
    }

    #[test]
    fn narrow_canvas_overflows_left_edge() {
        let l = layout_overlay(100, &metrics(133, 11), &OverlayStyle::default());
        assert_eq!(l.rect.x0, -47);
        assert!(!l.rect.fits_within(100, 50));
    }

    #[test]
    fn box_touching_the_edge_does_not_fit() {
        let style = OverlayStyle { margin: 0, ..OverlayStyle::default() };
        let l = layout_overlay(200, &metrics(50, 10), &style);
        assert_eq!(l.rect.x1, 200);
        assert!(!l.rect.fits_within(200, 100));
        assert!(l.rect.fits_within(201, 100));
        // bottom row sits on y1 as well
        assert_eq!(l.rect.y1, 18);
        assert!(!l.rect.fits_within(201, 18));
        assert!(l.rect.fits_within(201, 19));
    }

    #[test]
    fn box_dimensions_do_not_depend_on_canvas_size() {
        let m = metrics(140, 13);
        let style = OverlayStyle::default();
        for w in [160u32, 384, 1024] {
            let l = layout_overlay(w, &m, &style);
            assert_eq!(l.rect.width(), 148);
            assert_eq!(l.rect.height(), 21);
            assert!(l.rect.fits_within(w, 64));
        }
    }
}
