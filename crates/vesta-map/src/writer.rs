//! Writing images and heightmaps to disk.
//!
//! Image files are stored top row first, so the map's last row (the highest
//! z / latitude / height) becomes the top of the picture. Raw heightmaps are
//! dumped in map order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::info;

use crate::error::MapError;
use crate::map::{DataMap, Image};

/// Pixel bytes in file order, `channels` bytes per pixel.
fn flipped_pixels(image: &Image, channels: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.data().len() * channels);
    for y in (0..image.height()).rev() {
        for color in image.row(y) {
            let rgba: [u8; 4] = (*color).into();
            bytes.extend_from_slice(&rgba[..channels]);
        }
    }
    bytes
}

fn dimensions(image: &Image) -> Result<(u32, u32), MapError> {
    let invalid = || MapError::InvalidSize {
        width: image.width(),
        height: image.height(),
    };
    if image.is_empty() {
        return Err(MapError::EmptyMap);
    }
    let width = u32::try_from(image.width()).map_err(|_| invalid())?;
    let height = u32::try_from(image.height()).map_err(|_| invalid())?;
    Ok((width, height))
}

/// Write `image` as a 24-bit BMP; alpha is dropped.
pub fn write_bmp(image: &Image, path: &Path) -> Result<(), MapError> {
    let (width, height) = dimensions(image)?;
    let pixels = flipped_pixels(image, 3);

    let mut writer = BufWriter::new(File::create(path)?);
    BmpEncoder::new(&mut writer).write_image(&pixels, width, height, ExtendedColorType::Rgb8)?;
    writer.flush()?;

    info!("Wrote {width}x{height} BMP to {}", path.display());
    Ok(())
}

/// Write `image` as an 8-bit RGBA PNG.
pub fn write_png(image: &Image, path: &Path) -> Result<(), MapError> {
    let (width, height) = dimensions(image)?;
    let pixels = flipped_pixels(image, 4);

    let mut writer = BufWriter::new(File::create(path)?);
    PngEncoder::new(&mut writer).write_image(&pixels, width, height, ExtendedColorType::Rgba8)?;
    writer.flush()?;

    info!("Wrote {width}x{height} PNG to {}", path.display());
    Ok(())
}

/// Heightmap cells that can be dumped as little-endian raw samples.
pub trait RawSample: Copy + Default {
    /// Bytes per sample.
    const SIZE: usize;

    fn write_le(self, out: &mut Vec<u8>);
}

impl RawSample for u8 {
    const SIZE: usize = 1;

    fn write_le(self, out: &mut Vec<u8>) {
        out.push(self);
    }
}

impl RawSample for u16 {
    const SIZE: usize = 2;

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl RawSample for f32 {
    const SIZE: usize = 4;

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

/// Dump a heightmap as headerless little-endian samples, row 0 first.
pub fn write_raw_heightmap<T: RawSample>(
    heightmap: &DataMap<T>,
    path: &Path,
) -> Result<(), MapError> {
    if heightmap.is_empty() {
        return Err(MapError::EmptyMap);
    }

    let mut bytes = Vec::with_capacity(heightmap.data().len() * T::SIZE);
    for &sample in heightmap.data() {
        sample.write_le(&mut bytes);
    }
    std::fs::write(path, &bytes)?;

    info!(
        "Wrote {}x{} {}-bit raw heightmap to {}",
        heightmap.width(),
        heightmap.height(),
        T::SIZE * 8,
        path.display()
    );
    Ok(())
}
