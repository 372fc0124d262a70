#![deny(missing_docs)]
//! RGB pixel grid types shared by the pixgrid transforms

/// rgb pixel grid representation.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ChannelDtype, Image, ImageSize, Pixel};
