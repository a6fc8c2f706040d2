//! Foreground detection: binary masks and region extraction.
//!
//! The tracker does not care how foreground pixels are found; it consumes
//! the [`ForegroundDetector`] output contract. [`FrameDifference`] is the
//! shipped strategy; [`extract_regions`] turns any binary mask into
//! candidate bounding regions.

mod difference;
mod foreground;
mod regions;

pub use difference::{DifferenceConfig, FrameDifference};
pub use foreground::{DetectError, ForegroundDetector, ForegroundMask};
pub use regions::extract_regions;
