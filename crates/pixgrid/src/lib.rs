#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixgrid_image as image;

#[doc(inline)]
pub use pixgrid_imgproc as imgproc;
