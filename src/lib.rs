//! Resize one source image into a fixed set of square PNG icons.

pub mod config;
pub mod error;
pub mod icons;
pub mod utils;

pub use config::{IconConfig, DEFAULT_SIZES};
pub use error::IconError;
pub use icons::{generate_icons, generate_icons_with};
