/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the number of channel values of a size overflows `usize`.
    #[error("Image size ({0}, {1}) is too large to be allocated")]
    SizeOverflow(usize, usize),

    /// Error when a row does not hold the same number of pixels as the first row.
    #[error("Row {0} has {1} pixels but the image width is {2}")]
    RaggedRow(usize, usize, usize),

    /// Error when the color depth is zero.
    #[error("Color depth must be positive")]
    InvalidDepth,

    /// Error when a channel value exceeds the color depth.
    #[error("Channel value {0} exceeds the color depth {1}")]
    ChannelOutOfRange(u64, u64),

    /// Error when the pixel coordinates are out of bounds.
    #[error("Pixel coordinates ({0}, {1}) are out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when a threshold lies outside its accepted range.
    #[error("Threshold {0} is out of range, expected a value in (0, {1})")]
    InvalidThreshold(f64, f64),

    /// Error when a distance threshold is negative or not finite.
    #[error("Distance threshold {0} must be a finite non-negative value")]
    InvalidDistanceThreshold(f64),

    /// Error when a value cannot be cast between channel types.
    #[error("Failed to cast image data")]
    CastError,
}
