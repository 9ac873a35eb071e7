//! Viewer state that does not depend on a windowing toolkit
//!
//! The overlay window itself is out of scope; what lives here is the state it
//! drives: the opacity steps cycled by the space key, the viewer toggles, and
//! the initial window size derived from the primary monitor.

use std::collections::VecDeque;
use std::time::Duration;

/// Window opacities in the order the space key steps through them.
pub const OPACITY_STEPS: [f32; 6] = [0.5, 0.75, 0.85, 1.0, 0.15, 0.25];

/// How long the image stays hidden after a flash click.
pub const FLASH_DURATION: Duration = Duration::from_millis(2000);

/// Ring of window opacities
#[derive(Debug, Clone)]
pub struct OpacityCycle {
    steps: VecDeque<f32>,
}

impl Default for OpacityCycle {
    fn default() -> Self {
        Self { steps: VecDeque::from(OPACITY_STEPS) }
    }
}

impl OpacityCycle {
    pub fn current(&self) -> f32 {
        self.steps.front().copied().unwrap_or(1.0)
    }

    /// Moves to the next opacity and returns it.
    pub fn advance(&mut self) -> f32 {
        self.steps.rotate_left(1.min(self.steps.len()));
        self.current()
    }
}

/// Toggles shared by every viewer variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerOptions {
    /// Keep the image aspect ratio when the window is resized
    pub keep_aspect: bool,
    /// Show the color panel sampling the pixel under the cursor
    pub color_panel: bool,
    /// Crop the image to its visible content
    pub crop: bool,
    /// Left click hides the image for `flash_duration`
    pub flash_on_click: bool,
    pub flash_duration: Duration,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            keep_aspect: false,
            color_panel: false,
            crop: false,
            flash_on_click: false,
            flash_duration: FLASH_DURATION,
        }
    }
}

impl ViewerOptions {
    /// Right click flips flash mode.
    pub fn toggle_flash(&mut self) -> bool {
        self.flash_on_click = !self.flash_on_click;
        self.flash_on_click
    }
}

/// Geometry of one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Half the size of the monitor whose left edge sits at x = 0.
///
/// The last such monitor wins when several qualify.
pub fn initial_window_size(monitors: &[Monitor]) -> Option<(u32, u32)> {
    monitors
        .iter()
        .rev()
        .find(|m| m.x == 0)
        .map(|m| (m.width / 2, m.height / 2))
}
