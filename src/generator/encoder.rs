use crate::error::{ArtivoraError, Result};
use base64::{engine::general_purpose, Engine};
use image::ImageFormat;
use std::io::Cursor;

pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Decodes `bytes` as any supported raster format and returns it as a PNG data URI.
pub fn encode_data_uri(bytes: &[u8]) -> Result<String> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| ArtivoraError::Decode(format!("cannot identify image data: {}", e)))?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ArtivoraError::Decode(format!("cannot encode PNG: {}", e)))?;

    log::debug!(
        "Re-encoded {}x{} image to {} PNG bytes",
        image.width(),
        image.height(),
        png.len()
    );

    Ok(format!(
        "{}{}",
        DATA_URI_PREFIX,
        general_purpose::STANDARD.encode(&png)
    ))
}
