use super::cards::{CardAnimator, CardFrame};
use super::env::Environment;
use super::hero::HeroParallax;
use super::particles::{ParticleField, SurfaceSize};
use super::pointer::PointerTracker;
use super::prefs::{PreferenceStore, Preferences, Theme};
use super::scheduler::FrameClient;
use glam::Vec2;

/// Everything the page animates, owned in one place.
///
/// Preference changes go through here so the renderer sees a new quiet
/// flag before the next frame is drawn.
pub struct AppContext {
    env: Environment,
    prefs: PreferenceStore,
    pointer: PointerTracker,
    cards: CardAnimator,
    field: Option<ParticleField>,
    hero: Option<HeroParallax>,
}

impl AppContext {
    pub fn new(env: Environment, prefs: PreferenceStore, cards: CardAnimator) -> Self {
        let pointer = PointerTracker::new(env.allows_parallax());
        Self {
            env,
            prefs,
            pointer,
            cards,
            field: None,
            hero: None,
        }
    }

    pub fn with_field(mut self, field: ParticleField) -> Self {
        let mut field = field.with_quiet(self.prefs.quiet());
        field.resize(self.env.viewport, self.env.device_pixel_ratio);
        self.field = Some(field);
        self
    }

    pub fn with_hero(mut self, hero: HeroParallax) -> Self {
        if !self.env.reduced_motion {
            self.hero = Some(hero);
        }
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn prefs(&self) -> Preferences {
        self.prefs.prefs()
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn cards(&self) -> &CardAnimator {
        &self.cards
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn hero(&self) -> Option<&HeroParallax> {
        self.hero.as_ref()
    }

    pub fn pointer_moved(&mut self, client: Vec2) {
        self.pointer.on_move(client, self.env.viewport);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.on_blur();
    }

    pub fn set_quiet(&mut self, quiet: bool) -> bool {
        let quiet = self.prefs.set_quiet(quiet);
        self.apply_quiet(quiet);
        quiet
    }

    pub fn toggle_quiet(&mut self) -> bool {
        let quiet = self.prefs.toggle_quiet();
        self.apply_quiet(quiet);
        quiet
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.toggle_theme()
    }

    fn apply_quiet(&mut self, quiet: bool) {
        log::debug!("[app] quiet={}", quiet);
        if let Some(f) = self.field.as_mut() {
            f.set_quiet(quiet);
        }
    }

    pub fn resize(&mut self, viewport: Vec2, device_ratio: f32) -> Option<SurfaceSize> {
        self.env.viewport = viewport;
        self.env.device_pixel_ratio = device_ratio;
        self.field.as_mut().map(|f| f.resize(viewport, device_ratio))
    }
}

impl FrameClient for AppContext {
    fn frame(&mut self, now: f64, dt: f64) {
        let quiet = self.prefs.quiet();
        if self.env.reduced_motion {
            self.cards.rest();
        } else {
            self.cards.update(&CardFrame {
                now,
                quiet,
                pointer: self.pointer.state(),
                viewport: self.env.viewport,
                parallax: self.env.parallax_multiplier(),
            });
        }
        if let Some(h) = self.hero.as_mut() {
            if self.pointer.enabled() {
                h.step(self.pointer.state().centered(), quiet);
                if !quiet {
                    self.cards.shift(|i| h.card_offset(i));
                }
            }
        }
        if let Some(f) = self.field.as_mut() {
            f.tick(now, dt);
        }
    }
}
