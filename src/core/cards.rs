//! Impossible-object cards: limited tilt, slow drift, rare axis remaps and
//! periodic pose swaps.
//!
//! Free 3D rotation breaks the illusion, so each card only ever tilts within
//! a small cone and fakes larger rotations by cross-fading between
//! pre-drawn poses.

use super::constants::*;
use super::math::{clamp, lerp, RandomSource};
use super::pointer::PointerState;
use glam::{Vec2, Vec3};
use std::f64::consts::TAU;

const ROTATION_MAX: Vec3 = Vec3::new(MAX_TILT_DEG, MAX_TILT_DEG, MAX_ROLL_DEG);
const ROTATION_MIN: Vec3 = Vec3::new(-MAX_TILT_DEG, -MAX_TILT_DEG, -MAX_ROLL_DEG);

/// Screen-space bounding box in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_center(center: Vec2, half_size: Vec2) -> Self {
        Self {
            left: center.x - half_size.x,
            top: center.y - half_size.y,
            width: half_size.x * 2.0,
            height: half_size.y * 2.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// The element a card animates.
pub trait CardView {
    fn pose_count(&self) -> usize;
    /// Turn pose `index` on and every other pose off.
    fn show_pose(&mut self, index: usize);
    fn bounds(&self) -> Option<Rect>;
    /// Rotation in degrees as `(rx, ry, rz)`.
    fn set_rotation(&mut self, rotation: Vec3);
    /// Screen-space shift in CSS pixels that follows the hero parallax.
    fn set_offset(&mut self, _offset_px: Vec2) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisMode {
    #[default]
    Identity,
    Swapped,
    Flipped,
}

impl AxisMode {
    pub fn from_index(i: i32) -> Self {
        match i.rem_euclid(AXIS_MODE_COUNT as i32) {
            0 => AxisMode::Identity,
            1 => AxisMode::Swapped,
            _ => AxisMode::Flipped,
        }
    }

    pub fn index(self) -> i32 {
        match self {
            AxisMode::Identity => 0,
            AxisMode::Swapped => 1,
            AxisMode::Flipped => 2,
        }
    }

    /// Remap raw drift `(rx, ry, rz)`; never grows a tilt axis.
    pub fn apply(self, drift: Vec3) -> Vec3 {
        match self {
            AxisMode::Identity => drift,
            AxisMode::Swapped => Vec3::new(drift.y, -drift.x, -drift.z),
            AxisMode::Flipped => Vec3::new(-drift.x, drift.y * 0.75, drift.z * 1.15),
        }
    }
}

/// Per-frame inputs shared by all cards.
#[derive(Clone, Copy, Debug)]
pub struct CardFrame {
    pub now: f64,
    pub quiet: bool,
    pub pointer: PointerState,
    pub viewport: Vec2,
    pub parallax: f32,
}

pub struct Card {
    view: Box<dyn CardView>,
    pose_index: usize,
    rotation: Vec3,
    target: Vec3,
    axis_mode: AxisMode,
    phase: f64,
    drift_k: f32,
    next_swap_at: f64,
    next_axis_at: f64,
}

impl Card {
    /// `quiet` stretches the first swap and axis deadlines the same way
    /// later ones are stretched.
    pub fn new(
        mut view: Box<dyn CardView>,
        now: f64,
        quiet: bool,
        rng: &mut dyn RandomSource,
    ) -> Self {
        if view.pose_count() > 0 {
            view.show_pose(0);
        }
        let axis_mode = AxisMode::from_index(rng.int(0, AXIS_MODE_COUNT as i32 - 1));
        let next_swap_at = now + rng.range(POSE_SWAP_MS[0], POSE_SWAP_MS[1]) * swap_mul(quiet);
        let next_axis_at = now + rng.range(AXIS_SHIFT_MS[0], AXIS_SHIFT_MS[1]) * axis_mul(quiet);
        let phase = rng.range(0.0, TAU);
        let drift_k = rng.range(DRIFT_RATE_RANGE[0], DRIFT_RATE_RANGE[1]) as f32;
        Self {
            view,
            pose_index: 0,
            rotation: Vec3::ZERO,
            target: Vec3::ZERO,
            axis_mode,
            phase,
            drift_k,
            next_swap_at,
            next_axis_at,
        }
    }

    pub fn pose_index(&self) -> usize {
        self.pose_index
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn axis_mode(&self) -> AxisMode {
        self.axis_mode
    }

    pub fn next_swap_at(&self) -> f64 {
        self.next_swap_at
    }

    pub fn next_axis_at(&self) -> f64 {
        self.next_axis_at
    }

    fn maybe_shift_axis(&mut self, f: &CardFrame, rng: &mut dyn RandomSource) {
        if f.now < self.next_axis_at {
            return;
        }
        let step = 1 + rng.int(0, 1);
        self.axis_mode = AxisMode::from_index(self.axis_mode.index() + step);
        self.next_axis_at =
            f.now + rng.range(AXIS_SHIFT_MS[0], AXIS_SHIFT_MS[1]) * axis_mul(f.quiet);
    }

    fn maybe_swap_pose(&mut self, f: &CardFrame, rng: &mut dyn RandomSource) {
        let count = self.view.pose_count();
        if count < 2 || f.now < self.next_swap_at {
            return;
        }
        self.pose_index = (self.pose_index + 1) % count;
        self.view.show_pose(self.pose_index);
        self.next_swap_at =
            f.now + rng.range(POSE_SWAP_MS[0], POSE_SWAP_MS[1]) * swap_mul(f.quiet);
    }

    fn drift(&self, f: &CardFrame) -> Vec3 {
        let t = f.now * DRIFT_SPEED_PER_MS;
        let p = self.phase;
        let d = DRIFT_DEG * self.drift_k * if f.quiet { DRIFT_QUIET_SCALE } else { 1.0 };
        Vec3::new(
            (t + p).sin() as f32 * d,
            (t * 0.92 + p * 1.2).cos() as f32 * d,
            (t * 0.62 + p * 0.7).sin() as f32 * d * DRIFT_ROLL_SHARE,
        )
    }

    fn parallax(&self, f: &CardFrame) -> Vec2 {
        if f.parallax <= 0.0 || !f.pointer.active || f.quiet {
            return Vec2::ZERO;
        }
        let Some(rect) = self.view.bounds() else {
            return Vec2::ZERO;
        };
        pointer_tilt(rect, f.pointer, f.viewport, f.parallax)
    }

    pub fn update(&mut self, f: &CardFrame, rng: &mut dyn RandomSource) {
        self.maybe_shift_axis(f, rng);
        self.maybe_swap_pose(f, rng);

        let base = self.axis_mode.apply(self.drift(f));
        let p = self.parallax(f);

        self.target = Vec3::new(
            clamp(base.x - p.y, -MAX_TILT_DEG, MAX_TILT_DEG),
            clamp(base.y + p.x, -MAX_TILT_DEG, MAX_TILT_DEG),
            clamp(base.z, -MAX_ROLL_DEG, MAX_ROLL_DEG),
        );

        let s = if f.quiet { CARD_SMOOTH_QUIET } else { CARD_SMOOTH };
        self.rotation = Vec3::new(
            lerp(self.rotation.x, self.target.x, s),
            lerp(self.rotation.y, self.target.y, s),
            lerp(self.rotation.z, self.target.z, s),
        )
        .clamp(ROTATION_MIN, ROTATION_MAX);
        self.view.set_rotation(self.rotation);
    }

    /// Reduced-motion state: flat, first pose.
    pub fn rest(&mut self) {
        self.rotation = Vec3::ZERO;
        self.target = Vec3::ZERO;
        self.pose_index = 0;
        self.view.set_rotation(Vec3::ZERO);
        if self.view.pose_count() > 0 {
            self.view.show_pose(0);
        }
    }
}

/// Tilt contribution `(px, py)` from the pointer relative to a card.
///
/// The pointer offset from the card centre is normalised by 90% of the
/// card's half-size, clamped to `[-1, 1]` and scaled to at most
/// `PARALLAX_TILT_SHARE` of the tilt cap.
pub fn pointer_tilt(rect: Rect, pointer: PointerState, viewport: Vec2, strength: f32) -> Vec2 {
    let c = rect.center();
    let half = rect.half_size() * PARALLAX_RECT_SCALE;
    let px = pointer.x * viewport.x;
    let py = pointer.y * viewport.y;
    let nx = if half.x > 0.0 {
        clamp((px - c.x) / half.x, -1.0, 1.0)
    } else {
        0.0
    };
    let ny = if half.y > 0.0 {
        clamp((py - c.y) / half.y, -1.0, 1.0)
    } else {
        0.0
    };
    let gain = MAX_TILT_DEG * PARALLAX_TILT_SHARE * strength;
    Vec2::new(nx * gain, ny * gain)
}

fn swap_mul(quiet: bool) -> f64 {
    if quiet {
        POSE_SWAP_QUIET_MUL
    } else {
        1.0
    }
}

fn axis_mul(quiet: bool) -> f64 {
    if quiet {
        AXIS_SHIFT_QUIET_MUL
    } else {
        1.0
    }
}

pub struct CardAnimator {
    cards: Vec<Card>,
    rng: Box<dyn RandomSource>,
}

impl CardAnimator {
    pub fn new(
        views: Vec<Box<dyn CardView>>,
        now: f64,
        quiet: bool,
        mut rng: Box<dyn RandomSource>,
    ) -> Self {
        let cards = views
            .into_iter()
            .map(|v| Card::new(v, now, quiet, rng.as_mut()))
            .collect();
        Self { cards, rng }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn update(&mut self, frame: &CardFrame) {
        for c in &mut self.cards {
            c.update(frame, self.rng.as_mut());
        }
    }

    pub fn rest(&mut self) {
        for c in &mut self.cards {
            c.rest();
        }
    }

    /// Apply a per-card pixel shift, `offset(i)` for the `i`-th card.
    pub fn shift(&mut self, offset: impl Fn(usize) -> Vec2) {
        for (i, c) in self.cards.iter_mut().enumerate() {
            c.view.set_offset(offset(i));
        }
    }
}
