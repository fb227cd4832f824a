// src/icons.rs
use crate::config::IconConfig;
use crate::error::IconError;
use crate::utils::*;
use std::path::{Path, PathBuf};

/// Write `icon16.png`, `icon32.png`, `icon48.png` and `icon128.png` into `output_dir`
pub fn generate_icons(
    input_image_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<(), IconError> {
    let config = IconConfig::new(input_image_path.as_ref(), output_dir.as_ref());
    generate_icons_with(&config).map(|_| ())
}

/// Resize the source once per configured size and save each copy as PNG.
///
/// Returns the written paths in size order. Any failure aborts the
/// remaining sizes; icons already written are left in place.
pub fn generate_icons_with(config: &IconConfig) -> Result<Vec<PathBuf>, IconError> {
    config.validate()?;
    tracing::debug!(
        "Generating {} icons from {}",
        config.sizes.len(),
        config.input.display()
    );

    ensure_output_dir(&config.output_dir)?;

    let source = open_source(&config.input)?;
    tracing::debug!(
        "Decoded {} ({}x{}, {:?})",
        config.input.display(),
        source.width(),
        source.height(),
        source.color()
    );

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.output_dir.join(icon_file_name(size));
        let resized = resize_square(&source, size);
        save_png(&resized, &path, size)?;
        tracing::debug!("Wrote {}", path.display());
        written.push(path);
    }

    println!(
        "Icons generated and saved in {}",
        config.output_dir.display()
    );
    Ok(written)
}
