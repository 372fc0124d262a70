use rayon::prelude::*;

use pixgrid_image::{image::CHANNELS, ChannelDtype, Image};

/// Apply a function to each pixel in the image in parallel.
///
/// `dst` must hold as many channel values as `src`.
pub fn par_iter_rows<T, U>(src: &Image<T>, dst: &mut [U], f: impl Fn(&[T], &mut [U]) + Send + Sync)
where
    T: ChannelDtype,
    U: Send,
{
    let stride = src.cols() * CHANNELS;
    if stride == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(stride)
        .zip(dst.par_chunks_exact_mut(stride))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(CHANNELS)
                .zip(dst_chunk.chunks_exact_mut(CHANNELS))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each channel value in the image in parallel.
///
/// `dst` must hold as many channel values as `src`.
pub fn par_iter_rows_val<T, U>(src: &Image<T>, dst: &mut [U], f: impl Fn(&T, &mut U) + Send + Sync)
where
    T: ChannelDtype,
    U: Send,
{
    let stride = src.cols() * CHANNELS;
    if stride == 0 {
        return;
    }

    src.as_slice()
        .par_chunks_exact(stride)
        .zip(dst.par_chunks_exact_mut(stride))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_val, dst_val)| {
                    f(src_val, dst_val);
                });
        });
}

/// Fill the rows of an output buffer in parallel.
///
/// The closure receives the row index and the mutable row of `stride` values.
pub fn par_fill_rows<U>(dst: &mut [U], stride: usize, f: impl Fn(usize, &mut [U]) + Send + Sync)
where
    U: Send,
{
    if stride == 0 {
        return;
    }

    dst.par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}
