use super::constants::{CARD_TRAVEL_PX, HERO_FOLLOW, HERO_TRAVEL_PX};
use glam::Vec2;

/// The hero background element; offset is added to its `-50%` centring.
pub trait HeroView {
    fn set_offset(&mut self, offset_px: Vec2);
}

/// Smoothed follow of the pointer for the hero background figure.
pub struct HeroParallax {
    view: Box<dyn HeroView>,
    current: Vec2,
}

impl HeroParallax {
    pub fn new(view: Box<dyn HeroView>) -> Self {
        Self {
            view,
            current: Vec2::ZERO,
        }
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// `target` is the pointer position in `[-1, 1]²`. Quiet mode keeps
    /// following but leaves the element where it is.
    pub fn step(&mut self, target: Vec2, quiet: bool) {
        self.current += (target - self.current) * HERO_FOLLOW;
        if !quiet {
            self.view.set_offset(self.current * HERO_TRAVEL_PX);
        }
    }

    /// Pixel shift for the `index`-th card; cards drift in three depth bands.
    pub fn card_offset(&self, index: usize) -> Vec2 {
        let depth = 0.5 + (index % 3) as f32 * 0.2;
        self.current * CARD_TRAVEL_PX * depth
    }
}
