//! Deterministic PNG writer.
//!
//! Compression and filter are fixed so identical canvases encode to
//! byte-identical files.

use std::io::Write;
use std::path::Path;

use ::png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::canvas::Canvas;
use crate::error::ChartResult;

/// Encode a canvas as 8-bit RGBA into any writer.
pub fn write_rgba_to_writer<W: Write>(canvas: &Canvas, writer: W) -> ChartResult<()> {
    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    // The encoder writes no timestamp chunk.
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.to_rgba8())?;

    Ok(())
}

/// Encode a canvas and return the bytes with their BLAKE3 hash.
pub fn encode_with_hash(canvas: &Canvas) -> ChartResult<(Vec<u8>, String)> {
    let mut data = Vec::new();
    write_rgba_to_writer(canvas, &mut data)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// BLAKE3 hex digest of encoded PNG bytes.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Writes already-encoded PNG bytes to `path`.
pub fn write_png_file(data: &[u8], path: &Path) -> ChartResult<()> {
    std::fs::write(path, data)?;
    Ok(())
}
