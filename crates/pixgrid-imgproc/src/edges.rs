use pixgrid_image::{image::CHANNELS, ChannelDtype, Image, ImageError, ImageSize};

use crate::parallel;

/// Channel value used for the white pixels of an edge map.
pub const EDGE_WHITE: u8 = 255;

/// Compute the Euclidean distance between two RGB pixels.
///
/// # Arguments
///
/// * `a` - The first pixel, at least three channel values.
/// * `b` - The second pixel, at least three channel values.
///
/// # Example
///
/// ```
/// use pixgrid_imgproc::edges::rgb_distance;
///
/// assert_eq!(rgb_distance(&[0u8, 0, 0], &[3u8, 4, 0]), 5.0);
/// ```
#[inline]
pub fn rgb_distance<T: ChannelDtype>(a: &[T], b: &[T]) -> f64 {
    a.iter()
        .zip(b.iter())
        .take(CHANNELS)
        .map(|(&x, &y)| {
            let d = x.to_wide().abs_diff(y.to_wide()) as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Largest possible RGB distance between two pixels of the given depth,
/// `depth * sqrt(3)`.
///
/// # Example
///
/// ```
/// use pixgrid_imgproc::edges::{max_rgb_distance, rgb_distance};
///
/// assert_eq!(max_rgb_distance(255u8), rgb_distance(&[0u8, 0, 0], &[255u8, 255, 255]));
/// ```
#[inline]
pub fn max_rgb_distance<T: ChannelDtype>(depth: T) -> f64 {
    let d = depth.to_wide() as f64;
    (CHANNELS as f64 * d * d).sqrt()
}

/// Detect edges by comparing every pixel with its right and lower neighbours.
///
/// A pixel is an edge when the RGB distance to its right neighbour or to its
/// lower neighbour is strictly greater than the threshold. Edges are painted
/// black and everything else white. The last column and the last row have no
/// such neighbours and are left out, so the output has size
/// `(width - 1, height - 1)`; inputs one pixel wide or tall give an output
/// with a zero dimension.
///
/// The output always has a depth of 255, with white being `(255, 255, 255)`.
///
/// No two pixels are further apart than [`max_rgb_distance`] of the depth
/// (about 441.7 for depth 255), so a threshold at or above it yields an
/// all-white output.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `threshold` - The distance above which a neighbour difference is an edge.
///
/// # Errors
///
/// If the threshold is negative or not finite, an error is returned.
///
/// # Example
///
/// ```
/// use pixgrid_image::Image;
/// use pixgrid_imgproc::edges::edge_detect;
///
/// let image = Image::<u8>::from_rows(
///     255,
///     vec![
///         vec![[0, 0, 0], [0, 0, 0], [255, 255, 255]],
///         vec![[0, 0, 0], [0, 0, 0], [255, 255, 255]],
///     ],
/// )
/// .unwrap();
///
/// let edges = edge_detect(&image, 100.0).unwrap();
///
/// assert_eq!(edges.width(), 2);
/// assert_eq!(edges.height(), 1);
/// assert_eq!(edges.to_rows(), vec![vec![[255, 255, 255], [0, 0, 0]]]);
/// ```
pub fn edge_detect<T: ChannelDtype>(
    src: &Image<T>,
    threshold: f64,
) -> Result<Image<T>, ImageError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ImageError::InvalidDistanceThreshold(threshold));
    }

    if threshold >= max_rgb_distance(src.depth()) {
        log::debug!(
            "edge_detect: threshold {} reaches the largest distance for depth {}, no edges",
            threshold,
            src.depth()
        );
    }

    let white = T::from(EDGE_WHITE).ok_or(ImageError::CastError)?;

    let dst_size = ImageSize {
        width: src.width().saturating_sub(1),
        height: src.height().saturating_sub(1),
    };

    let src_stride = src.cols() * CHANNELS;
    let src_data = src.as_slice();
    let num_values = dst_size
        .num_values()
        .ok_or(ImageError::SizeOverflow(dst_size.width, dst_size.height))?;
    let mut dst = vec![T::zero(); num_values];

    parallel::par_fill_rows(&mut dst, dst_size.width * CHANNELS, |y, dst_row| {
        let row = &src_data[y * src_stride..(y + 1) * src_stride];
        let below = &src_data[(y + 1) * src_stride..(y + 2) * src_stride];

        dst_row
            .chunks_exact_mut(CHANNELS)
            .enumerate()
            .for_each(|(x, dst_pixel)| {
                let idx = x * CHANNELS;
                let pixel = &row[idx..idx + CHANNELS];
                let right = &row[idx + CHANNELS..idx + 2 * CHANNELS];
                let lower = &below[idx..idx + CHANNELS];

                let is_edge = rgb_distance(pixel, right) > threshold
                    || rgb_distance(pixel, lower) > threshold;

                dst_pixel.fill(if is_edge { T::zero() } else { white });
            });
    });

    log::debug!("edge_detect: {} -> {} threshold={}", src.size(), dst_size, threshold);

    Image::new(dst_size, white, dst)
}
