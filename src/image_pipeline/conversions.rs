//! Pipeline conversions module
//!
//! This module contains the orchestration of acquisition, filtering and output.

mod background_removal;
pub mod timing;


pub use background_removal::BackgroundRemovalPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
