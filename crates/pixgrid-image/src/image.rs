use num_traits::{PrimInt, Unsigned};

use crate::error::ImageError;

/// Number of channels of every pixel in the grid (red, green, blue).
pub const CHANNELS: usize = 3;

/// An RGB pixel as an ordered `[red, green, blue]` triple.
pub type Pixel<T> = [T; CHANNELS];

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixgrid_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of channel values held by an RGB image of this size.
    ///
    /// Returns `None` if the count does not fit in `usize`.
    pub fn num_values(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|n| n.checked_mul(CHANNELS))
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Trait for the integer types a color channel can be stored in.
///
/// Send and Sync is required for the rayon based transforms.
pub trait ChannelDtype:
    PrimInt + Unsigned + Default + Send + Sync + std::fmt::Debug + std::fmt::Display + 'static
{
    /// Widen the channel value losslessly to `u64`.
    fn to_wide(self) -> u64;
}

macro_rules! impl_channel_dtype {
    ($($t:ty),*) => {
        $(
            impl ChannelDtype for $t {
                #[inline]
                fn to_wide(self) -> u64 {
                    u64::from(self)
                }
            }
        )*
    };
}

impl_channel_dtype!(u8, u16, u32);

/// Represents an RGB image as a rectangular grid of pixels.
///
/// The pixels are stored row-major and interleaved in a single buffer with
/// shape (H, W, 3), together with the color depth: the maximum value any
/// channel may take. Every constructor checks that the buffer matches the
/// size and that all channel values lie in `[0, depth]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T: ChannelDtype> {
    size: ImageSize,
    depth: T,
    data: Vec<T>,
}

impl<T: ChannelDtype> Image<T> {
    /// Create a new image from interleaved pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `depth` - The maximum value of a channel.
    /// * `data` - The pixel data of the image with shape (H, W, 3).
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, the depth
    /// is zero or a channel value exceeds the depth, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixgrid_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    255,
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.depth(), 255);
    /// ```
    pub fn new(size: ImageSize, depth: T, data: Vec<T>) -> Result<Self, ImageError> {
        let num_values = size
            .num_values()
            .ok_or(ImageError::SizeOverflow(size.width, size.height))?;

        if data.len() != num_values {
            return Err(ImageError::InvalidChannelShape(data.len(), num_values));
        }

        if depth.is_zero() {
            return Err(ImageError::InvalidDepth);
        }

        if let Some(&value) = data.iter().find(|&&v| v > depth) {
            return Err(ImageError::ChannelOutOfRange(
                value.to_wide(),
                depth.to_wide(),
            ));
        }

        Ok(Self { size, depth, data })
    }

    /// Create a new image filled with a single pixel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixgrid_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::from_size_val(
    ///   ImageSize { width: 4, height: 2 },
    ///   255,
    ///   [10, 20, 30],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get_pixel(3, 1).unwrap(), [10, 20, 30]);
    /// ```
    pub fn from_size_val(
        size: ImageSize,
        depth: T,
        pixel: Pixel<T>,
    ) -> Result<Self, ImageError> {
        let num_values = size
            .num_values()
            .ok_or(ImageError::SizeOverflow(size.width, size.height))?;
        let data = pixel.iter().copied().cycle().take(num_values).collect();
        Image::new(size, depth, data)
    }

    /// Create a new image from a sequence of rows of pixels.
    ///
    /// The width is taken from the first row; every other row must have the
    /// same number of pixels. An empty sequence yields a 0x0 image.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixgrid_image::Image;
    ///
    /// let image = Image::<u8>::from_rows(
    ///     255,
    ///     vec![
    ///         vec![[0, 0, 0], [1, 1, 1]],
    ///         vec![[2, 2, 2], [3, 3, 3]],
    ///     ],
    /// ).unwrap();
    ///
    /// assert_eq!(image.width(), 2);
    /// assert_eq!(image.height(), 2);
    /// ```
    pub fn from_rows(depth: T, rows: Vec<Vec<Pixel<T>>>) -> Result<Self, ImageError> {
        let width = rows.first().map_or(0, |row| row.len());
        let height = rows.len();
        let size = ImageSize { width, height };
        let num_values = size
            .num_values()
            .ok_or(ImageError::SizeOverflow(width, height))?;

        let mut data = Vec::with_capacity(num_values);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ImageError::RaggedRow(i, row.len(), width));
            }
            data.extend(row.iter().flatten());
        }

        Image::new(size, depth, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the color depth, the maximum value of a channel.
    pub fn depth(&self) -> T {
        self.depth
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the interleaved pixel data of the image.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the image and return its interleaved pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the pixel at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The column of the pixel.
    /// * `y` - The row of the pixel.
    ///
    /// # Errors
    ///
    /// If the coordinates are outside the image, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel<T>, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let idx = (y * self.width() + x) * CHANNELS;
        Ok([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Iterate over the rows of the image as interleaved channel slices.
    ///
    /// Always yields `height` rows; a zero-width image yields empty rows.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        let stride = self.width() * CHANNELS;
        (0..self.height()).map(move |y| &self.data[y * stride..(y + 1) * stride])
    }

    /// Convert the image back into a sequence of rows of pixels.
    pub fn to_rows(&self) -> Vec<Vec<Pixel<T>>> {
        self.rows_iter()
            .map(|row| {
                row.chunks_exact(CHANNELS)
                    .map(|px| [px[0], px[1], px[2]])
                    .collect()
            })
            .collect()
    }

    /// Cast the pixel data and the depth of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a value does not fit in the target type, an error is returned.
    pub fn cast<U: ChannelDtype>(&self) -> Result<Image<U>, ImageError> {
        let depth = U::from(self.depth).ok_or(ImageError::CastError)?;
        let data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, depth, data)
    }
}
