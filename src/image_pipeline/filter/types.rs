//! Filter configuration types

/// Pixels whose spread is below this are treated as background.
pub const DEFAULT_THRESHOLD: u8 = 3;

/// Alpha given to every foreground pixel.
pub const DEFAULT_OPACITY: u8 = 255;

/// Parameters of the background transparency filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    /// Minimum `max(r,g,b) - min(r,g,b)` for a pixel to count as foreground
    pub threshold: u8,
    /// Alpha written to foreground pixels, replacing the source alpha
    pub opacity: u8,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl FilterConfig {
    pub fn new(threshold: u8, opacity: u8) -> Self {
        Self { threshold, opacity }
    }
}

/// Resampling used when upscaling the filtered image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resampling {
    /// Pixel duplication; keeps every output pixel either transparent or at
    /// the configured opacity
    #[default]
    Nearest,
    /// Lanczos3; smoother edges but blends alpha and color across the
    /// background boundary
    Lanczos,
}

impl std::str::FromStr for Resampling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "lanczos" | "lanczos3" => Ok(Self::Lanczos),
            other => Err(format!("unknown resampling '{}' (expected nearest or lanczos)", other)),
        }
    }
}
