use crate::parallel;
use pixgrid_image::{ChannelDtype, Image, ImageError};

/// Define the RGB weights for the grayscale conversion, in thousandths.
const RW: u64 = 299;
const GW: u64 = 587;
const BW: u64 = 114;
const WEIGHT_SCALE: u64 = 1000;

/// Luminance of a single RGB pixel, truncated toward zero.
#[inline]
fn luma<T: ChannelDtype>(pixel: &[T]) -> T {
    let r = pixel[0].to_wide();
    let g = pixel[1].to_wide();
    let b = pixel[2].to_wide();
    let shade = (RW * r + GW * g + BW * b) / WEIGHT_SCALE;
    // the shade never exceeds the largest channel, so the cast back cannot fail
    T::from(shade).unwrap_or_else(T::max_value)
}

/// Convert an RGB image to grayscale using the formula:
///
/// Y = floor(0.299 * R + 0.587 * G + 0.114 * B)
///
/// The weighted sum is evaluated exactly in integer arithmetic, so the result is
/// the true floor of the real-valued sum and converting a gray image again
/// leaves it unchanged. The output keeps three channels, each set to Y.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// A new image with the same size and depth as the input.
///
/// # Example
///
/// ```
/// use pixgrid_image::{Image, ImageSize};
/// use pixgrid_imgproc::color::grayscale;
///
/// let image = Image::<u8>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     255,
///     [25, 75, 250],
/// )
/// .unwrap();
///
/// let gray = grayscale(&image).unwrap();
/// assert_eq!(gray.size(), image.size());
/// assert_eq!(gray.get_pixel(0, 0).unwrap(), [80, 80, 80]);
/// ```
pub fn grayscale<T: ChannelDtype>(src: &Image<T>) -> Result<Image<T>, ImageError> {
    let mut dst = vec![T::zero(); src.as_slice().len()];

    // parallelize the grayscale conversion by rows
    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel.fill(luma(src_pixel));
    });

    log::debug!("grayscale: {}", src.size());

    Image::new(src.size(), src.depth(), dst)
}
