//! Pixel filters applied between acquisition and output
//!
//! The background filter is the heart of the crate; bounding box, crop,
//! resize and sampling are separate composable steps.

pub mod background;
pub mod bbox;
pub mod resize;
pub mod sample;
pub mod types;

pub use background::{remove_background, remove_background_in_place};
pub use bbox::{bounding_box, crop, crop_to_content};
pub use resize::resize;
pub use sample::{sample_view, swatch, SWATCH_HEIGHT};
pub use types::{FilterConfig, Resampling, DEFAULT_OPACITY, DEFAULT_THRESHOLD};
