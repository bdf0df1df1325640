//! Rendering pipeline: layout -> paint commands -> raster -> PNG

pub mod layout;
pub mod paint;
pub mod raster;

use std::path::Path;

use log::info;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use raster::Canvas;

/// An encoded PNG together with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Write the PNG bytes to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.png_data).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            "wrote {}x{} PNG ({} bytes) to {}",
            self.width,
            self.height,
            self.png_data.len(),
            path.display()
        );
        Ok(())
    }

    /// Hex SHA-256 of the encoded bytes.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }

    /// Decode back to an RGBA canvas.
    pub fn decode(&self) -> Result<Canvas> {
        let img = image::load_from_memory_with_format(&self.png_data, image::ImageFormat::Png)
            .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(img.to_rgba8())
    }
}
