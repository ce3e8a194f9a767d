use super::constants::{DPR_MAX, PARALLAX_MOBILE, PARALLAX_STRENGTH};
use glam::Vec2;

/// Snapshot of the platform signals the animation core reacts to.
#[derive(Clone, Copy, Debug)]
pub struct Environment {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
    pub touch: bool,
    /// Viewport size in CSS pixels.
    pub viewport: Vec2,
    pub device_pixel_ratio: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            coarse_pointer: false,
            touch: false,
            viewport: Vec2::new(1280.0, 800.0),
            device_pixel_ratio: 1.0,
        }
    }
}

impl Environment {
    pub fn allows_parallax(&self) -> bool {
        !(self.coarse_pointer || self.touch) && !self.reduced_motion
    }

    pub fn parallax_multiplier(&self) -> f32 {
        if self.allows_parallax() {
            PARALLAX_STRENGTH
        } else {
            PARALLAX_MOBILE
        }
    }
}

/// Device pixel ratio clamped to `[1, DPR_MAX]`; junk values count as 1.
#[inline]
pub fn clamp_device_ratio(dpr: f32) -> f32 {
    if !dpr.is_finite() || dpr <= 0.0 {
        return 1.0;
    }
    dpr.clamp(1.0, DPR_MAX)
}
