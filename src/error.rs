// src/error.rs
use std::path::PathBuf;

/// Errors raised while generating icons
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// Source image missing, unreadable or not decodable
    #[error("failed to decode source image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing one icon failed
    #[error("failed to write {size}x{size} icon to {path}: {source}")]
    Write {
        path: PathBuf,
        size: u32,
        #[source]
        source: image::ImageError,
    },

    #[error("icon size must be greater than zero, got {0}")]
    InvalidSize(u32),

    #[error("no icon sizes configured")]
    NoSizes,
}

impl IconError {
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, size: u32, source: image::ImageError) -> Self {
        Self::Write {
            path: path.into(),
            size,
            source,
        }
    }

    /// The source path could not be turned into an image
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Directory creation or file write failed
    pub fn is_output_error(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_classification() {
        let decode = IconError::decode(
            "missing.png",
            image::ImageError::IoError(io::Error::new(io::ErrorKind::NotFound, "gone")),
        );
        assert!(decode.is_input_error());
        assert!(!decode.is_output_error());

        let dir = IconError::create_dir(
            "icons",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(dir.is_output_error());
        assert!(!dir.is_input_error());

        assert!(!IconError::NoSizes.is_input_error());
        assert!(!IconError::InvalidSize(0).is_output_error());
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = IconError::create_dir(
            "out/icons",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/icons"), "{}", msg);
        assert!(msg.contains("denied"), "{}", msg);

        assert_eq!(
            IconError::InvalidSize(0).to_string(),
            "icon size must be greater than zero, got 0"
        );
    }
}
