use pixgrid_image::{image::CHANNELS, ChannelDtype, Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

/// Flip the input image horizontally.
///
/// The pixel order of every row is reversed while the row order stays the same.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, 3).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use pixgrid_image::Image;
/// use pixgrid_imgproc::flip::horizontal_flip;
///
/// let image = Image::<u8>::from_rows(
///     255,
///     vec![vec![[1, 1, 1], [2, 2, 2], [3, 3, 3]]],
/// )
/// .unwrap();
///
/// let flipped = horizontal_flip(&image).unwrap();
///
/// assert_eq!(flipped.to_rows(), vec![vec![[3, 3, 3], [2, 2, 2], [1, 1, 1]]]);
/// ```
pub fn horizontal_flip<T: ChannelDtype>(src: &Image<T>) -> Result<Image<T>, ImageError> {
    let mut dst = src.as_slice().to_vec();
    let cols = src.cols();

    if cols > 0 {
        dst.par_chunks_exact_mut(cols * CHANNELS).for_each(|row| {
            let mut i = 0;
            let mut j = cols - 1;
            while i < j {
                for c in 0..CHANNELS {
                    row.swap(i * CHANNELS + c, j * CHANNELS + c);
                }
                i += 1;
                j -= 1;
            }
        });
    }

    log::debug!("horizontal_flip: {}", src.size());

    Image::new(src.size(), src.depth(), dst)
}

/// Flip the input image vertically.
///
/// The row order is reversed while the pixels within a row keep their order.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, 3).
///
/// # Returns
///
/// The flipped image.
pub fn vertical_flip<T: ChannelDtype>(src: &Image<T>) -> Result<Image<T>, ImageError> {
    let stride = src.cols() * CHANNELS;
    let mut dst = vec![T::zero(); src.as_slice().len()];

    if stride > 0 {
        dst.par_chunks_exact_mut(stride)
            .zip_eq(src.as_slice().par_chunks_exact(stride).rev())
            .for_each(|(dst_row, src_row)| dst_row.copy_from_slice(src_row));
    }

    log::debug!("vertical_flip: {}", src.size());

    Image::new(src.size(), src.depth(), dst)
}

#[cfg(test)]
mod tests {
    use pixgrid_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_hflip() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            255,
            vec![
                0, 1, 2, 3, 4, 5,
                6, 7, 8, 9, 10, 11,
                12, 13, 14, 15, 16, 17,
            ],
        )?;
        #[rustfmt::skip]
        let data_expected = vec![
            3u8, 4, 5, 0, 1, 2,
            9, 10, 11, 6, 7, 8,
            15, 16, 17, 12, 13, 14,
        ];
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        assert_eq!(super::horizontal_flip(&flipped)?, image);
        Ok(())
    }

    #[test]
    fn test_hflip_odd_width() -> Result<(), ImageError> {
        let image = Image::<u8>::from_rows(255, vec![vec![[1, 1, 1], [2, 2, 2], [3, 3, 3]]])?;
        let flipped = super::horizontal_flip(&image)?;
        assert_eq!(flipped.get_pixel(1, 0)?, [2, 2, 2]);
        assert_eq!(flipped.get_pixel(0, 0)?, [3, 3, 3]);
        Ok(())
    }

    #[test]
    fn test_vflip() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<u8>::new(
            ImageSize {
                width: 1,
                height: 3,
            },
            255,
            vec![
                0, 1, 2,
                3, 4, 5,
                6, 7, 8,
            ],
        )?;
        let data_expected = vec![6u8, 7, 8, 3, 4, 5, 0, 1, 2];
        let flipped = super::vertical_flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_flip_empty() -> Result<(), ImageError> {
        let image = Image::<u8>::new(
            ImageSize {
                width: 0,
                height: 2,
            },
            255,
            vec![],
        )?;
        assert_eq!(super::horizontal_flip(&image)?.size(), image.size());
        assert_eq!(super::vertical_flip(&image)?.size(), image.size());
        Ok(())
    }
}
