//! Pipeline configuration types

use std::str::FromStr;

use crate::image_pipeline::filter::{FilterConfig, Resampling};

/// Upscale applied before display when nothing else is configured
pub const DEFAULT_RESIZE_FACTOR: u32 = 2;

/// Encoded output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG, keeps the alpha channel and is what viewers expect
    Png,
    /// 8-bit RGBA TIFF
    Tiff,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "tif" | "tiff" => Ok(Self::Tiff),
            other => Err(format!("unknown output format '{}' (expected png or tiff)", other)),
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced (default)
    DeflateBalanced,
}

impl FromStr for TiffCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "lzw" => Ok(Self::Lzw),
            "deflate-fast" => Ok(Self::DeflateFast),
            "deflate" | "deflate-balanced" => Ok(Self::DeflateBalanced),
            "deflate-best" => Ok(Self::DeflateBest),
            other => Err(format!("unknown TIFF compression '{}'", other)),
        }
    }
}

/// Configuration for the background removal pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Threshold and opacity of the background filter
    pub filter: FilterConfig,
    /// Crop the result to its visible content
    pub crop: bool,
    /// Integer upscale applied after filtering, 1 disables it
    pub resize_factor: u32,
    /// Resampling used by the upscale
    pub resampling: Resampling,
    /// Whether to reject images with a zero dimension before filtering
    pub validate_dimensions: bool,
    /// Encoded output format
    pub format: OutputFormat,
    /// Compression method, TIFF output only
    pub compression: TiffCompression,
    /// TIFF predictor tag value: 1 for none, 2 for horizontal differencing
    pub predictor: Option<u16>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            crop: false,
            resize_factor: DEFAULT_RESIZE_FACTOR,
            resampling: Resampling::Nearest,
            validate_dimensions: true,
            format: OutputFormat::Png,
            compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    threshold: Option<u8>,
    opacity: Option<u8>,
    crop: Option<bool>,
    resize_factor: Option<u32>,
    resampling: Option<Resampling>,
    validate_dimensions: Option<bool>,
    format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl PipelineConfigBuilder {
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn opacity(mut self, opacity: u8) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn crop(mut self, enable: bool) -> Self {
        self.crop = Some(enable);
        self
    }

    pub fn resize_factor(mut self, factor: u32) -> Self {
        self.resize_factor = Some(factor);
        self
    }

    pub fn resampling(mut self, resampling: Resampling) -> Self {
        self.resampling = Some(resampling);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            filter: FilterConfig {
                threshold: self.threshold.unwrap_or(default.filter.threshold),
                opacity: self.opacity.unwrap_or(default.filter.opacity),
            },
            crop: self.crop.unwrap_or(default.crop),
            resize_factor: self.resize_factor.unwrap_or(default.resize_factor),
            resampling: self.resampling.unwrap_or(default.resampling),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            format: self.format.unwrap_or(default.format),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
