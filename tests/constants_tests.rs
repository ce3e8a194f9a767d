// Host-side tests for tuning constants and their relationships.

use impossible_fx::core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(POSE_SWAP_MS[0] < POSE_SWAP_MS[1]);
    assert!(AXIS_SHIFT_MS[0] < AXIS_SHIFT_MS[1]);
    assert!(DRIFT_RATE_RANGE[0] < DRIFT_RATE_RANGE[1]);
    assert!(PARTICLE_SIZE_RANGE[0] < PARTICLE_SIZE_RANGE[1]);
    assert!(GLITCH_WINDOW_MS[0] < GLITCH_WINDOW_MS[1]);
    assert!(GLITCH_BAR_PX[0] < GLITCH_BAR_PX[1]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn quiet_mode_is_calmer_everywhere() {
    assert!(PARTICLES_QUIET < PARTICLES);
    assert!(LINK_DIST_QUIET < LINK_DIST);
    assert!(PARTICLE_SPEED_QUIET < PARTICLE_SPEED);
    assert!(FX_ALPHA_QUIET < FX_ALPHA);
    assert!(GLITCH_CHANCE_PER_SEC_QUIET < GLITCH_CHANCE_PER_SEC);
    assert!(CARD_SMOOTH_QUIET < CARD_SMOOTH);
    assert!(DRIFT_QUIET_SCALE < 1.0);
    assert!(POSE_SWAP_QUIET_MUL > 1.0 && AXIS_SHIFT_QUIET_MUL > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drift_alone_stays_inside_the_caps() {
    // Worst-case drift after the largest axis remap gain (1.15 on roll).
    let d = DRIFT_DEG * DRIFT_RATE_RANGE[1] as f32;
    assert!(d < MAX_TILT_DEG);
    assert!(d * DRIFT_ROLL_SHARE * 1.15 < MAX_ROLL_DEG);
    assert!(PARALLAX_TILT_SHARE > 0.0 && PARALLAX_TILT_SHARE < 1.0);
}

#[test]
fn fx_params_switch_with_mode() {
    let loud = FxParams::for_mode(false);
    let quiet = FxParams::for_mode(true);
    assert_eq!(loud.particles, 46);
    assert_eq!(quiet.particles, 16);
    assert_eq!(loud.link_dist, 135.0);
    assert_eq!(quiet.link_dist, 95.0);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(CYAN.with_alpha(0.35).css(), "rgba(30,240,255,0.35)");
    assert_eq!(DOT.css(), "rgba(233,238,248,0.1)");
    assert_eq!(Blend::Lighter.as_str(), "lighter");
    assert_eq!(Blend::Screen.as_str(), "screen");
}

#[test]
fn body_state_classes_are_distinct() {
    assert_eq!(QUIET_BODY_CLASS, "quiet");
    assert_eq!(PAGE_HIDDEN_CLASS, "page-hidden");
    assert_ne!(QUIET_BODY_CLASS, PAGE_HIDDEN_CLASS);
}
