//! Clockstamp
//!
//! Renders the current date/time as a small boxed overlay in the top-right
//! corner of a transparent canvas and writes it out as a PNG.
//!
//! # Example
//!
//! ```no_run
//! use clockstamp::{ClockConfig, SystemClock};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClockConfig {
//!     width: 384,
//!     height: 256,
//!     ..Default::default()
//! };
//!
//! let report = clockstamp::run(&config, &SystemClock)?;
//! println!("Wrote {} at {}", report.output, report.timestamp);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use serde::Serialize;

pub mod clock;
pub mod error;
pub mod font;
pub mod overlay;
pub mod rendering;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use font::{FontSource, TextMetrics};
pub use overlay::{compose, compose_with_style};
pub use rendering::layout::BoxGeometry;
pub use rendering::Screenshot;

/// Box and text styling for the overlay.
///
/// Defaults: 14px font, 4px padding, 5px corner radius, 1px border, 6px margin
/// from the top-right corner, opaque white fill, opaque purple border and text.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Space between the text ink and the box edge
    pub padding: u32,
    pub corner_radius: u32,
    pub border_width: u32,
    /// Distance from the canvas' top and right edges to the box
    pub margin: u32,
    /// Box fill (RGBA)
    pub fill: [u8; 4],
    /// Border and text color (RGBA)
    pub ink: [u8; 4],
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            padding: 4,
            corner_radius: 5,
            border_width: 1,
            margin: 6,
            fill: [255, 255, 255, 255],
            ink: [128, 0, 128, 255],
        }
    }
}

/// Configuration for a single render
///
/// # Examples
///
/// ```
/// let cfg = clockstamp::ClockConfig::default();
/// assert_eq!((cfg.width, cfg.height), (384, 256));
/// assert_eq!(cfg.output_path.to_str(), Some("transparent_clock.png"));
/// ```
#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// TrueType/OpenType font file
    pub font_path: PathBuf,
    /// Where the PNG is written
    pub output_path: PathBuf,
    pub style: OverlayStyle,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            width: 384,
            height: 256,
            font_path: PathBuf::from("Hack-Regular.ttf"),
            output_path: PathBuf::from("transparent_clock.png"),
            style: OverlayStyle::default(),
        }
    }
}

impl ClockConfig {
    /// Reject a zero-sized canvas.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// What a render produced, for logging and `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub timestamp: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    #[serde(rename = "box")]
    pub rect: BoxGeometry,
    pub text: TextMetrics,
    /// Hex SHA-256 of the encoded PNG
    pub sha256: String,
}

/// Render the clock for `clock.now()` into an encoded PNG without touching disk.
pub fn render_clock_png(config: &ClockConfig, clock: &dyn Clock) -> Result<Screenshot> {
    render(config, clock).map(|(shot, _)| shot)
}

/// Render and write `config.output_path`.
pub fn run(config: &ClockConfig, clock: &dyn Clock) -> Result<RenderReport> {
    let (shot, report) = render(config, clock)?;
    shot.write_to(&config.output_path)?;
    Ok(report)
}

fn render(config: &ClockConfig, clock: &dyn Clock) -> Result<(Screenshot, RenderReport)> {
    config.validate()?;
    let timestamp = crate::clock::format_timestamp(&clock.now());
    let font = FontSource::Path(config.font_path.clone());

    let (canvas, layout) =
        overlay::compose_detailed(config.width, config.height, &font, &timestamp, &config.style)?;
    let shot = rendering::raster::encode_png(&canvas)?;

    let report = RenderReport {
        timestamp,
        output: config.output_path.display().to_string(),
        width: config.width,
        height: config.height,
        rect: layout.rect,
        text: layout.metrics,
        sha256: shot.sha256_hex(),
    };
    Ok((shot, report))
}
