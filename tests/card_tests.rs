// Host-side tests for the card animator.
// The browser glue is wasm-only; the animation core is plain Rust and is
// driven here through fake card views.

use glam::{Vec2, Vec3};
use impossible_fx::core::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ViewLog {
    shown: Vec<usize>,
    rotations: Vec<Vec3>,
}

struct FakeCard {
    poses: usize,
    rect: Option<Rect>,
    log: Rc<RefCell<ViewLog>>,
}

impl CardView for FakeCard {
    fn pose_count(&self) -> usize {
        self.poses
    }
    fn show_pose(&mut self, index: usize) {
        self.log.borrow_mut().shown.push(index);
    }
    fn bounds(&self) -> Option<Rect> {
        self.rect
    }
    fn set_rotation(&mut self, rotation: Vec3) {
        self.log.borrow_mut().rotations.push(rotation);
    }
}

fn fake(poses: usize, rect: Option<Rect>) -> (Box<dyn CardView>, Rc<RefCell<ViewLog>>) {
    let log = Rc::new(RefCell::new(ViewLog::default()));
    (
        Box::new(FakeCard {
            poses,
            rect,
            log: log.clone(),
        }),
        log,
    )
}

fn frame(now: f64, quiet: bool) -> CardFrame {
    CardFrame {
        now,
        quiet,
        pointer: PointerState::default(),
        viewport: Vec2::new(1000.0, 800.0),
        parallax: 1.0,
    }
}

fn centered_rect() -> Rect {
    Rect::from_center(Vec2::new(500.0, 400.0), Vec2::new(100.0, 60.0))
}

#[test]
fn rotation_stays_within_caps_under_any_input() {
    let mut views = Vec::new();
    for i in 0..12 {
        let (v, _) = fake(i % 4, Some(centered_rect()));
        views.push(v);
    }
    let mut animator = CardAnimator::new(views, 0.0, false, Box::new(SeededRandom::new(7)));
    let corners = [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0), (0.5, 0.5)];
    for step in 0..6000 {
        let now = step as f64 * 16.0;
        let (x, y) = corners[(step / 200) % corners.len()];
        let f = CardFrame {
            now,
            quiet: (step / 900) % 2 == 1,
            pointer: PointerState {
                x,
                y,
                active: step % 3 != 0,
            },
            viewport: Vec2::new(1000.0, 800.0),
            parallax: 1.0,
        };
        animator.update(&f);
        for c in animator.cards() {
            let r = c.rotation();
            assert!(r.x.abs() <= MAX_TILT_DEG, "rx out of range: {}", r.x);
            assert!(r.y.abs() <= MAX_TILT_DEG, "ry out of range: {}", r.y);
            assert!(r.z.abs() <= MAX_ROLL_DEG, "rz out of range: {}", r.z);
            let t = c.target();
            assert!(t.x.abs() <= MAX_TILT_DEG && t.y.abs() <= MAX_TILT_DEG);
            assert!(t.z.abs() <= MAX_ROLL_DEG);
        }
    }
}

#[test]
fn cards_with_fewer_than_two_poses_never_swap() {
    let (none, none_log) = fake(0, None);
    let (one, one_log) = fake(1, None);
    let mut animator =
        CardAnimator::new(vec![none, one], 0.0, false, Box::new(SeededRandom::new(3)));
    for step in 0..2000 {
        animator.update(&frame(step as f64 * 50.0, false));
        for c in animator.cards() {
            assert_eq!(c.pose_index(), 0);
        }
    }
    assert!(none_log.borrow().shown.is_empty());
    assert!(one_log.borrow().shown.iter().all(|&i| i == 0));
}

#[test]
fn pose_swaps_once_deadline_passes_and_wraps() {
    let (view, log) = fake(3, None);
    // All draws at the bottom of their ranges: swap every 2400 ms.
    let mut animator =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));
    assert_eq!(log.borrow().shown, vec![0]);

    animator.update(&frame(2399.0, false));
    assert_eq!(animator.cards()[0].pose_index(), 0);

    animator.update(&frame(2400.0, false));
    assert_eq!(animator.cards()[0].pose_index(), 1);
    assert_eq!(animator.cards()[0].next_swap_at(), 4800.0);

    animator.update(&frame(4800.0, false));
    animator.update(&frame(6000.0, false));
    animator.update(&frame(7200.0, false));
    assert_eq!(animator.cards()[0].pose_index(), 0);
    assert_eq!(log.borrow().shown, vec![0, 1, 2, 0]);
}

#[test]
fn quiet_mode_slows_pose_swaps() {
    let (view, _) = fake(2, None);
    let mut animator =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));
    animator.update(&frame(2400.0, true));
    let expected = 2400.0 + POSE_SWAP_MS[0] * POSE_SWAP_QUIET_MUL;
    assert!((animator.cards()[0].next_swap_at() - expected).abs() < 1e-9);
}

#[test]
fn quiet_at_startup_stretches_first_deadlines() {
    let (view, _) = fake(2, None);
    let animator =
        CardAnimator::new(vec![view], 0.0, true, Box::new(ScriptedRandom::constant(0.0)));
    let c = &animator.cards()[0];
    assert!((c.next_swap_at() - POSE_SWAP_MS[0] * POSE_SWAP_QUIET_MUL).abs() < 1e-9);
    assert!((c.next_axis_at() - AXIS_SHIFT_MS[0] * AXIS_SHIFT_QUIET_MUL).abs() < 1e-9);

    let (view, _) = fake(2, None);
    let mut animator =
        CardAnimator::new(vec![view], 100.0, true, Box::new(ScriptedRandom::constant(0.0)));
    animator.update(&frame(100.0 + POSE_SWAP_MS[0], true));
    assert_eq!(animator.cards()[0].pose_index(), 0);
}

#[test]
fn axis_mode_steps_by_one_at_low_draw() {
    let (view, _) = fake(0, None);
    let mut animator =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));
    assert_eq!(animator.cards()[0].axis_mode(), AxisMode::Identity);
    assert_eq!(animator.cards()[0].next_axis_at(), AXIS_SHIFT_MS[0]);

    animator.update(&frame(AXIS_SHIFT_MS[0] - 1.0, false));
    assert_eq!(animator.cards()[0].axis_mode(), AxisMode::Identity);

    animator.update(&frame(AXIS_SHIFT_MS[0], false));
    assert_eq!(animator.cards()[0].axis_mode(), AxisMode::Swapped);
}

#[test]
fn axis_mode_can_skip_a_mode() {
    let (view, _) = fake(0, None);
    let mut animator =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.99)));
    // rand_int(0, 2) at 0.99 picks the last mode
    assert_eq!(animator.cards()[0].axis_mode(), AxisMode::Flipped);
    let due = animator.cards()[0].next_axis_at();
    animator.update(&frame(due, false));
    // step of 2: Flipped -> Swapped, skipping Identity
    assert_eq!(animator.cards()[0].axis_mode(), AxisMode::Swapped);
}

#[test]
fn axis_remaps_drift_components() {
    let d = Vec3::new(2.0, 4.0, 1.0);
    assert_eq!(AxisMode::Identity.apply(d), d);
    assert_eq!(AxisMode::Swapped.apply(d), Vec3::new(4.0, -2.0, -1.0));
    let f = AxisMode::Flipped.apply(d);
    assert_eq!(f.x, -2.0);
    assert!((f.y - 3.0).abs() < 1e-6);
    assert!((f.z - 1.15).abs() < 1e-6);
}

#[test]
fn pointer_tilt_matches_worked_example() {
    let pointer = PointerState {
        x: 0.6,
        y: 0.5,
        active: true,
    };
    let tilt = pointer_tilt(centered_rect(), pointer, Vec2::new(1000.0, 800.0), 1.0);
    // (600 - 500) / (100 * 0.9) = 1.11 -> clamped to 1
    assert!((tilt.x - MAX_TILT_DEG * 0.75).abs() < 1e-5);
    assert!(tilt.y.abs() < 1e-5);
}

#[test]
fn pointer_tilt_scales_with_strength() {
    let pointer = PointerState {
        x: 0.0,
        y: 0.0,
        active: true,
    };
    let tilt = pointer_tilt(centered_rect(), pointer, Vec2::new(1000.0, 800.0), 0.5);
    assert!((tilt.x + 7.5).abs() < 1e-5);
    assert!((tilt.y + 7.5).abs() < 1e-5);
}

#[test]
fn first_tick_smooths_toward_drift_plus_parallax() {
    // Constant 0.0 draws: phase 0, drift multiplier 0.85, identity axis.
    let d = DRIFT_DEG * 0.85;
    let (view, log) = fake(2, Some(centered_rect()));
    let mut animator =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));

    let mut f = frame(0.0, false);
    f.pointer = PointerState {
        x: 0.6,
        y: 0.5,
        active: true,
    };
    animator.update(&f);
    let c = &animator.cards()[0];
    assert!(c.target().x.abs() < 1e-5);
    // d + 15 exceeds the cap
    assert_eq!(c.target().y, MAX_TILT_DEG);
    assert!(c.target().z.abs() < 1e-5);
    assert!((c.rotation().y - MAX_TILT_DEG * CARD_SMOOTH).abs() < 1e-4);
    assert_eq!(log.borrow().rotations.len(), 1);

    // Quiet drops the pointer and shrinks the drift.
    let (view, _) = fake(2, Some(centered_rect()));
    let mut quiet =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));
    f.quiet = true;
    quiet.update(&f);
    let c = &quiet.cards()[0];
    assert!((c.target().y - d * DRIFT_QUIET_SCALE).abs() < 1e-4);
    assert!((c.rotation().y - c.target().y * CARD_SMOOTH_QUIET).abs() < 1e-4);
}

#[test]
fn inactive_pointer_or_zero_multiplier_gives_no_parallax() {
    let d = DRIFT_DEG * 0.85;
    for (active, parallax) in [(false, 1.0), (true, 0.0)] {
        let (view, _) = fake(0, Some(centered_rect()));
        let mut animator =
            CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));
        let mut f = frame(0.0, false);
        f.pointer = PointerState {
            x: 1.0,
            y: 1.0,
            active,
        };
        f.parallax = parallax;
        animator.update(&f);
        assert!((animator.cards()[0].target().y - d).abs() < 1e-4);
    }
}

#[test]
fn missing_bounds_skip_parallax() {
    let d = DRIFT_DEG * 0.85;
    let (view, _) = fake(0, None);
    let mut animator =
        CardAnimator::new(vec![view], 0.0, false, Box::new(ScriptedRandom::constant(0.0)));
    let mut f = frame(0.0, false);
    f.pointer.active = true;
    f.pointer.x = 1.0;
    animator.update(&f);
    assert!((animator.cards()[0].target().y - d).abs() < 1e-4);
}

#[test]
fn rest_zeroes_rotation_and_resets_pose() {
    let (view, log) = fake(3, Some(centered_rect()));
    let mut animator = CardAnimator::new(vec![view], 0.0, false, Box::new(SeededRandom::new(11)));
    for step in 0..800 {
        animator.update(&frame(step as f64 * 16.0, false));
    }
    animator.rest();
    let c = &animator.cards()[0];
    assert_eq!(c.rotation(), Vec3::ZERO);
    assert_eq!(c.pose_index(), 0);
    let log = log.borrow();
    assert_eq!(log.rotations.last(), Some(&Vec3::ZERO));
    assert_eq!(log.shown.last(), Some(&0));
}
