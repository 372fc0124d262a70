use pixgrid_image::{image::CHANNELS, ChannelDtype, Image, ImageError, ImageSize};

use crate::parallel;

/// Rotate the input image 90 degrees clockwise.
///
/// The output has the width and height of the input swapped. Output row `y`
/// is input column `y` read from the bottom row to the top row, so the
/// bottom-left input pixel becomes the top-left output pixel:
///
/// dst(x, y) = src(y, H - 1 - x)
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, 3).
///
/// # Returns
///
/// The rotated image with shape (W, H, 3).
///
/// # Example
///
/// ```
/// use pixgrid_image::Image;
/// use pixgrid_imgproc::rotate::rotate_right90;
///
/// let image = Image::<u8>::from_rows(
///     255,
///     vec![
///         vec![[1, 1, 1], [2, 2, 2], [3, 3, 3]],
///         vec![[4, 4, 4], [5, 5, 5], [6, 6, 6]],
///     ],
/// )
/// .unwrap();
///
/// let rotated = rotate_right90(&image).unwrap();
///
/// assert_eq!(
///     rotated.to_rows(),
///     vec![
///         vec![[4, 4, 4], [1, 1, 1]],
///         vec![[5, 5, 5], [2, 2, 2]],
///         vec![[6, 6, 6], [3, 3, 3]],
///     ]
/// );
/// ```
pub fn rotate_right90<T: ChannelDtype>(src: &Image<T>) -> Result<Image<T>, ImageError> {
    let rows = src.rows();
    let dst = remap_transposed(src, |x, y| (y, rows - 1 - x))?;
    log::debug!("rotate_right90: {} -> {}", src.size(), dst.size());
    Ok(dst)
}

/// Rotate the input image 90 degrees counter-clockwise.
///
/// This is the inverse of [`rotate_right90`]: the top-right input pixel becomes
/// the top-left output pixel.
///
/// dst(x, y) = src(W - 1 - y, x)
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, 3).
///
/// # Returns
///
/// The rotated image with shape (W, H, 3).
pub fn rotate_left90<T: ChannelDtype>(src: &Image<T>) -> Result<Image<T>, ImageError> {
    let cols = src.cols();
    let dst = remap_transposed(src, |x, y| (cols - 1 - y, x))?;
    log::debug!("rotate_left90: {} -> {}", src.size(), dst.size());
    Ok(dst)
}

/// Build an image with swapped dimensions whose pixel `(x, y)` is read from
/// the source pixel returned by `map(x, y)`.
fn remap_transposed<T: ChannelDtype>(
    src: &Image<T>,
    map: impl Fn(usize, usize) -> (usize, usize) + Send + Sync,
) -> Result<Image<T>, ImageError> {
    let dst_size = ImageSize {
        width: src.height(),
        height: src.width(),
    };

    let src_stride = src.cols() * CHANNELS;
    let src_data = src.as_slice();
    let num_values = dst_size
        .num_values()
        .ok_or(ImageError::SizeOverflow(dst_size.width, dst_size.height))?;
    let mut dst = vec![T::zero(); num_values];

    parallel::par_fill_rows(&mut dst, dst_size.width * CHANNELS, |y, dst_row| {
        dst_row
            .chunks_exact_mut(CHANNELS)
            .enumerate()
            .for_each(|(x, dst_pixel)| {
                let (sx, sy) = map(x, y);
                let idx = sy * src_stride + sx * CHANNELS;
                dst_pixel.copy_from_slice(&src_data[idx..idx + CHANNELS]);
            });
    });

    Image::new(dst_size, src.depth(), dst)
}
