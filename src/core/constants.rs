// Shared tuning constants for the card animator, particle field and scheduler.
//
// Times are milliseconds unless the name says otherwise; angles are degrees;
// distances are CSS pixels before device-pixel scaling.

// Card tilt limits (keep the impossible-object illusion intact)
pub const MAX_TILT_DEG: f32 = 20.0;
pub const MAX_ROLL_DEG: f32 = 10.0;

// Drift
pub const DRIFT_DEG: f32 = 6.0;
pub const DRIFT_SPEED_PER_MS: f64 = 0.00055;
pub const DRIFT_QUIET_SCALE: f32 = 0.55;
pub const DRIFT_ROLL_SHARE: f32 = 0.35;
pub const DRIFT_RATE_RANGE: [f64; 2] = [0.85, 1.2];

// Pose swapping and axis remapping
pub const POSE_SWAP_MS: [f64; 2] = [2400.0, 4200.0];
pub const POSE_SWAP_QUIET_MUL: f64 = 2.25;
pub const AXIS_SHIFT_MS: [f64; 2] = [6500.0, 12000.0];
pub const AXIS_SHIFT_QUIET_MUL: f64 = 1.35;
pub const AXIS_MODE_COUNT: u8 = 3;

// Pointer parallax
pub const PARALLAX_STRENGTH: f32 = 1.0;
pub const PARALLAX_MOBILE: f32 = 0.0; // coarse pointer / touch
pub const PARALLAX_TILT_SHARE: f32 = 0.75; // share of MAX_TILT_DEG reachable from the pointer
pub const PARALLAX_RECT_SCALE: f32 = 0.9;

// Rotation smoothing (lerp factor per frame)
pub const CARD_SMOOTH: f32 = 0.14;
pub const CARD_SMOOTH_QUIET: f32 = 0.10;

// Hero figure follow
pub const HERO_FOLLOW: f32 = 0.05;
pub const HERO_TRAVEL_PX: f32 = 30.0;
pub const CARD_TRAVEL_PX: f32 = 5.0;

// Particle field
pub const DPR_MAX: f32 = 2.0;
pub const PARTICLES: usize = 46;
pub const PARTICLES_QUIET: usize = 16;
pub const LINK_DIST: f32 = 135.0;
pub const LINK_DIST_QUIET: f32 = 95.0;
pub const PARTICLE_SPEED: f32 = 0.20;
pub const PARTICLE_SPEED_QUIET: f32 = 0.12;
pub const FX_ALPHA: f32 = 0.75;
pub const FX_ALPHA_QUIET: f32 = 0.45;
pub const PARTICLE_SIZE_RANGE: [f64; 2] = [0.6, 1.6];
pub const VELOCITY_SPAN_DIVISOR: f32 = 900.0;
pub const WRAP_MARGIN: f32 = 40.0;
pub const BIAS_FREQ_X: f64 = 0.00025;
pub const BIAS_FREQ_Y: f64 = 0.00023;
pub const BIAS_AMPLITUDE: f32 = 0.08;
pub const VIGNETTE_ALPHA: f32 = 0.20;
pub const LINK_LAYER_ALPHA_SCALE: f32 = 0.55;

// Glitch bars
pub const GLITCH_CHANCE_PER_SEC: f64 = 0.28;
pub const GLITCH_CHANCE_PER_SEC_QUIET: f64 = 0.10;
pub const GLITCH_TRY_EVERY_SEC: f64 = 0.45;
pub const GLITCH_CHANCE_SCALE: f64 = 0.45;
pub const GLITCH_WINDOW_MS: [f64; 2] = [90.0, 180.0];
pub const GLITCH_BAR_PX: [f64; 2] = [18.0, 52.0];

// Scheduler
pub const MAX_FRAME_DT_MS: f64 = 48.0;
pub const STATIC_FRAME_DT_MS: f64 = 16.0;

// Persisted preference keys
pub const STORAGE_KEY_QUIET: &str = "pvp_quiet";
pub const STORAGE_KEY_THEME: &str = "pvp_theme";

// Classes set on <body> for page stylesheets
pub const QUIET_BODY_CLASS: &str = "quiet";
pub const PAGE_HIDDEN_CLASS: &str = "page-hidden";
