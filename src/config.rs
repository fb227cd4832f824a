// src/config.rs
use crate::error::IconError;
use std::path::PathBuf;

/// Edge lengths of the generated icons, in output order
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const DEFAULT_INPUT: &str = "icon_base.png";
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Where to read the source image, where to write icons, and which sizes to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl IconConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        IconConfig {
            input: input.into(),
            output_dir: output_dir.into(),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }

    pub fn with_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    pub fn validate(&self) -> Result<(), IconError> {
        if self.sizes.is_empty() {
            return Err(IconError::NoSizes);
        }
        if let Some(&size) = self.sizes.iter().find(|&&s| s == 0) {
            return Err(IconError::InvalidSize(size));
        }
        Ok(())
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig::new(DEFAULT_INPUT, DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = IconConfig::default();
        assert_eq!(config.input, PathBuf::from("icon_base.png"));
        assert_eq!(config.output_dir, PathBuf::from("icons"));
        assert_eq!(config.sizes, vec![16, 32, 48, 128]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let empty = IconConfig::default().with_sizes(Vec::new());
        assert!(matches!(empty.validate(), Err(IconError::NoSizes)));

        let zero = IconConfig::default().with_sizes([16, 0, 48]);
        assert!(matches!(zero.validate(), Err(IconError::InvalidSize(0))));
    }
}
