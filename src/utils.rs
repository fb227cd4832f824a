use crate::error::IconError;
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageError, ImageFormat};
use std::fs;
use std::path::Path;

/// Output file name for a square icon of `size` pixels
#[inline]
pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(path: &Path) -> Result<(), IconError> {
    fs::create_dir_all(path).map_err(|e| IconError::create_dir(path, e))
}

/// Decode the source image.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. The underlying file is closed once the reader is consumed,
/// whether or not decoding succeeds.
pub fn open_source(path: &Path) -> Result<DynamicImage, IconError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| IconError::decode(path, ImageError::IoError(e)))?;
    reader.decode().map_err(|e| IconError::decode(path, e))
}

/// Lanczos3 resample to exactly `size` x `size`; aspect ratio is not kept
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, FilterType::Lanczos3)
}

pub fn save_png(img: &DynamicImage, path: &Path, size: u32) -> Result<(), IconError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::write(path, size, e))
}
