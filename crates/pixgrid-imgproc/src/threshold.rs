use pixgrid_image::{ChannelDtype, Image, ImageError};

use crate::parallel;

/// Apply a binary threshold to every channel of an image.
///
/// Each channel is compared on its own: values strictly greater than the
/// threshold become the image depth, every other value becomes zero. A single
/// pixel can therefore end up with different values in its three channels.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `threshold` - The cutoff value, must satisfy `0 < threshold < depth`.
///
/// # Returns
///
/// A new image with the same size and depth as the input.
///
/// # Errors
///
/// If the threshold lies outside `(0, depth)`, an error is returned.
///
/// # Examples
///
/// ```
/// use pixgrid_image::{Image, ImageSize};
/// use pixgrid_imgproc::threshold::threshold_binary;
///
/// let image = Image::<u8>::from_size_val(
///     ImageSize { width: 2, height: 3 },
///     255,
///     [80, 120, 160],
/// )
/// .unwrap();
///
/// let thresholded = threshold_binary(&image, 100).unwrap();
/// assert_eq!(thresholded.size(), image.size());
/// assert_eq!(thresholded.get_pixel(1, 2).unwrap(), [0, 255, 255]);
/// ```
pub fn threshold_binary<T: ChannelDtype>(
    src: &Image<T>,
    threshold: T,
) -> Result<Image<T>, ImageError> {
    let max_value = src.depth();

    if threshold.is_zero() || threshold >= max_value {
        return Err(ImageError::InvalidThreshold(
            threshold.to_wide() as f64,
            max_value.to_wide() as f64,
        ));
    }

    let mut dst = vec![T::zero(); src.as_slice().len()];

    // run the thresholding operation in parallel
    parallel::par_iter_rows_val(src, &mut dst, |src_val, dst_val| {
        *dst_val = if *src_val > threshold {
            max_value
        } else {
            T::zero()
        };
    });

    log::debug!("threshold_binary: {} threshold={}", src.size(), threshold);

    Image::new(src.size(), max_value, dst)
}
