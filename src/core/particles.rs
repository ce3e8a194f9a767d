//! Background particle network drawn on a single full-viewport surface.
//!
//! A few dozen points drift across the screen; every pair closer than the
//! link distance is joined by a fading gradient line. A soft vignette sits
//! underneath and, once in a while, a short "glitch" of horizontal bars is
//! painted on top.

use super::constants::*;
use super::env::clamp_device_ratio;
use super::math::RandomSource;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

pub const CYAN: Rgba = Rgba::new(30, 240, 255, 1.0);
pub const MAGENTA: Rgba = Rgba::new(255, 43, 214, 1.0);
pub const LIME: Rgba = Rgba::new(155, 255, 60, 1.0);
pub const DOT: Rgba = Rgba::new(233, 238, 248, 0.10);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner: Vec2,
    pub inner_radius: f32,
    pub outer: Vec2,
    pub outer_radius: f32,
    pub stops: [ColorStop; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Lighter,
    Screen,
}

impl Blend {
    pub fn as_str(self) -> &'static str {
        match self {
            Blend::Lighter => "lighter",
            Blend::Screen => "screen",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    /// `1 - distance / link_distance`, in `(0, 1]`.
    pub strength: f32,
    pub width: f32,
}

impl Link {
    pub fn stops(&self) -> [ColorStop; 3] {
        let t = self.strength;
        [
            ColorStop {
                offset: 0.0,
                color: CYAN.with_alpha(0.16 * t),
            },
            ColorStop {
                offset: 0.5,
                color: LIME.with_alpha(0.10 * t),
            },
            ColorStop {
                offset: 1.0,
                color: MAGENTA.with_alpha(0.14 * t),
            },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchBar {
    pub y: f32,
    pub height: f32,
    pub color: Rgba,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
    pub dpr: f32,
}

impl SurfaceSize {
    pub fn from_viewport(viewport: Vec2, device_ratio: f32) -> Self {
        let dpr = clamp_device_ratio(device_ratio);
        Self {
            width: (viewport.x.max(0.0) * dpr).floor() as u32,
            height: (viewport.y.max(0.0) * dpr).floor() as u32,
            dpr,
        }
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.height as f32
    }
}

/// Drawing surface the field renders into.
pub trait Painter {
    fn resize(&mut self, size: SurfaceSize);
    fn clear(&mut self, size: SurfaceSize);
    fn vignette(&mut self, gradient: &RadialGradient, alpha: f32, size: SurfaceSize);
    fn begin_layer(&mut self, blend: Blend, alpha: f32);
    fn end_layer(&mut self);
    fn link(&mut self, link: &Link);
    fn dot(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn bar(&mut self, bar: &GlitchBar, width: f32);
}

/// Quiet-dependent rendering parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxParams {
    pub particles: usize,
    pub link_dist: f32,
    pub speed: f32,
    pub alpha: f32,
    pub glitch_chance_per_sec: f64,
}

impl FxParams {
    pub fn for_mode(quiet: bool) -> Self {
        if quiet {
            Self {
                particles: PARTICLES_QUIET,
                link_dist: LINK_DIST_QUIET,
                speed: PARTICLE_SPEED_QUIET,
                alpha: FX_ALPHA_QUIET,
                glitch_chance_per_sec: GLITCH_CHANCE_PER_SEC_QUIET,
            }
        } else {
            Self {
                particles: PARTICLES,
                link_dist: LINK_DIST,
                speed: PARTICLE_SPEED,
                alpha: FX_ALPHA,
                glitch_chance_per_sec: GLITCH_CHANCE_PER_SEC,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

pub struct ParticleField {
    painter: Box<dyn Painter>,
    rng: Box<dyn RandomSource>,
    size: SurfaceSize,
    particles: Vec<Particle>,
    quiet: bool,
    reduced_motion: bool,
    glitch_until: f64,
    last_glitch_try_sec: f64,
}

impl ParticleField {
    pub fn new(
        painter: Box<dyn Painter>,
        rng: Box<dyn RandomSource>,
        reduced_motion: bool,
    ) -> Self {
        Self {
            painter,
            rng,
            size: SurfaceSize::default(),
            particles: Vec::new(),
            quiet: false,
            reduced_motion,
            glitch_until: 0.0,
            last_glitch_try_sec: 0.0,
        }
    }

    /// Starting mode, applied before the first `resize` seeds the pool.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn params(&self) -> FxParams {
        FxParams::for_mode(self.quiet)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace the pool wholesale (used to stage exact layouts).
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn glitch_active(&self, now: f64) -> bool {
        now < self.glitch_until
    }

    pub fn resize(&mut self, viewport: Vec2, device_ratio: f32) -> SurfaceSize {
        self.size = SurfaceSize::from_viewport(viewport, device_ratio);
        self.painter.resize(self.size);
        self.seed_particles();
        log::debug!(
            "[fx] resize {}x{} dpr={} particles={}",
            self.size.width,
            self.size.height,
            self.size.dpr,
            self.particles.len()
        );
        self.size
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
        self.seed_particles();
    }

    fn seed_particles(&mut self) {
        let count = if self.reduced_motion {
            0
        } else {
            self.params().particles
        };
        let (w, h) = (self.size.w(), self.size.h());
        let rng = self.rng.as_mut();
        self.particles = (0..count)
            .map(|_| {
                let x = rng.next_unit() as f32 * w;
                let y = rng.next_unit() as f32 * h;
                let vx = (rng.next_unit() as f32 - 0.5) * (w / VELOCITY_SPAN_DIVISOR);
                let vy = (rng.next_unit() as f32 - 0.5) * (h / VELOCITY_SPAN_DIVISOR);
                let size = rng.range(PARTICLE_SIZE_RANGE[0], PARTICLE_SIZE_RANGE[1]) as f32;
                Particle {
                    pos: Vec2::new(x, y),
                    vel: Vec2::new(vx, vy),
                    size,
                }
            })
            .collect();
    }

    pub fn tick(&mut self, now: f64, dt: f64) {
        self.painter.clear(self.size);
        if self.reduced_motion {
            return;
        }
        let params = self.params();
        let dpr = self.size.dpr;

        self.painter
            .vignette(&vignette_gradient(self.size), VIGNETTE_ALPHA, self.size);
        self.maybe_arm_glitch(now, params.glitch_chance_per_sec);
        self.advance(now, dt, params.speed);

        self.painter
            .begin_layer(Blend::Lighter, params.alpha * LINK_LAYER_ALPHA_SCALE);
        for link in links(&self.particles, params.link_dist * dpr, dpr) {
            self.painter.link(&link);
        }
        for p in &self.particles {
            self.painter.dot(p.pos, p.size * dpr, DOT);
        }
        self.painter.end_layer();

        if self.glitch_active(now) && !self.quiet {
            let bars = glitch_bars(self.rng.as_mut(), self.size);
            self.painter.begin_layer(Blend::Screen, bars[0].alpha);
            for bar in &bars {
                self.painter.bar(bar, self.size.w());
            }
            self.painter.end_layer();
        }
    }

    fn maybe_arm_glitch(&mut self, now: f64, chance_per_sec: f64) {
        let sec = now / 1000.0;
        if sec - self.last_glitch_try_sec <= GLITCH_TRY_EVERY_SEC {
            return;
        }
        self.last_glitch_try_sec = sec;
        if self.rng.next_unit() < chance_per_sec * GLITCH_CHANCE_SCALE {
            self.glitch_until = now + self.rng.range(GLITCH_WINDOW_MS[0], GLITCH_WINDOW_MS[1]);
        }
    }

    fn advance(&mut self, now: f64, dt: f64, speed: f32) {
        let dpr = self.size.dpr;
        let step = dt as f32 * speed;
        let (w, h) = (self.size.w(), self.size.h());
        for p in &mut self.particles {
            p.pos += p.vel * step;
            let s = p.size as f64;
            p.pos.x += (now * BIAS_FREQ_X + s).sin() as f32 * BIAS_AMPLITUDE * dpr;
            p.pos.y += (now * BIAS_FREQ_Y + s).cos() as f32 * BIAS_AMPLITUDE * dpr;
            p.pos.x = wrap(p.pos.x, w);
            p.pos.y = wrap(p.pos.y, h);
        }
    }
}

/// Toroidal wrap with a `WRAP_MARGIN` band outside `[0, extent]`.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}

/// Every unordered pair closer than `link_dist` (device px).
pub fn links(particles: &[Particle], link_dist: f32, dpr: f32) -> Vec<Link> {
    let mut out = Vec::new();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let dist = a.pos.distance(b.pos);
            if dist < link_dist {
                let t = 1.0 - dist / link_dist;
                out.push(Link {
                    from: a.pos,
                    to: b.pos,
                    strength: t,
                    width: (0.8 + t * 1.2) * dpr,
                });
            }
        }
    }
    out
}

pub fn vignette_gradient(size: SurfaceSize) -> RadialGradient {
    let (w, h) = (size.w(), size.h());
    RadialGradient {
        inner: Vec2::new(w * 0.5, h * 0.35),
        inner_radius: 0.0,
        outer: Vec2::new(w * 0.5, h * 0.55),
        outer_radius: w.max(h) * 0.65,
        stops: [
            ColorStop {
                offset: 0.0,
                color: CYAN.with_alpha(0.05),
            },
            ColorStop {
                offset: 0.5,
                color: MAGENTA.with_alpha(0.03),
            },
            ColorStop {
                offset: 1.0,
                color: Rgba::new(0, 0, 0, 0.0),
            },
        ],
    }
}

pub fn glitch_bars(rng: &mut dyn RandomSource, size: SurfaceSize) -> SmallVec<[GlitchBar; 3]> {
    let dpr = size.dpr as f64;
    let bar_h = rng.range(GLITCH_BAR_PX[0], GLITCH_BAR_PX[1]) * dpr;
    let y = rng.range(0.0, (size.h() as f64 - bar_h).max(0.0)) as f32;
    let bar_h = bar_h as f32;
    let mut bars = SmallVec::new();
    bars.push(GlitchBar {
        y,
        height: bar_h,
        color: CYAN.with_alpha(0.35),
        alpha: 0.16,
    });
    bars.push(GlitchBar {
        y: y + bar_h * 0.35,
        height: bar_h * 0.22,
        color: MAGENTA.with_alpha(0.30),
        alpha: 0.12,
    });
    bars.push(GlitchBar {
        y: y + bar_h * 0.62,
        height: bar_h * 0.18,
        color: LIME.with_alpha(0.25),
        alpha: 0.10,
    });
    bars
}
