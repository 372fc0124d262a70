#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// edge detection module.
pub mod edges;

/// image flipping module.
pub mod flip;

/// module containing parallelization utilities.
pub mod parallel;

/// image rotation module.
pub mod rotate;

/// operations to threshold images.
pub mod threshold;

/// selection of a transform by name or configuration.
pub mod transform;
