use glam::Vec2;

/// Normalized cursor position over the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            active: false,
        }
    }
}

impl PointerState {
    /// Position mapped to `[-1, 1]` on both axes, viewport centre at zero.
    #[inline]
    pub fn centered(&self) -> Vec2 {
        Vec2::new((self.x - 0.5) * 2.0, (self.y - 0.5) * 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    enabled: bool,
}

impl PointerTracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: PointerState::default(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Pointer move or down at client coordinates `client` (CSS px).
    pub fn on_move(&mut self, client: Vec2, viewport: Vec2) {
        if !self.enabled {
            return;
        }
        let w = viewport.x.max(1.0);
        let h = viewport.y.max(1.0);
        self.state.x = (client.x / w).clamp(0.0, 1.0);
        self.state.y = (client.y / h).clamp(0.0, 1.0);
        self.state.active = true;
    }

    pub fn on_blur(&mut self) {
        self.state.active = false;
    }
}
