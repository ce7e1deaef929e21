// Tuning constants for depth navigation and the ambient effects that read it.
//
// Values are empirical and kept as-is; the easing constant assumes ~60 Hz.

// Depth axis
pub const MAX_DEPTH: f64 = 12_000.0;
pub const OVERSCROLL: f64 = 500.0; // continuous mode may run past the last panel
pub const EASE: f64 = 0.08; // fraction of the remaining gap closed per frame

// Input mapping
pub const WHEEL_SPEED: f64 = 5.0;
pub const KEY_STEP: f64 = 400.0;
pub const TOUCH_FACTOR: f64 = 3.0;
pub const HINT_DISMISS_DEPTH: f64 = 100.0;
pub const SETTLE_MS: u32 = 800; // paginated transition lock
pub const TOUCH_SWIPE_MIN_PX: f64 = 40.0;

// Panel zones, in depth units relative to the camera (dist = panel - current)
pub const HIDE_BEHIND: f64 = -800.0;
pub const HIDE_AHEAD: f64 = 1_200.0;
pub const INTERACT_BEHIND: f64 = -200.0;
pub const INTERACT_AHEAD: f64 = 500.0;
pub const FADE_SPAN: f64 = 1_000.0; // opacity reaches 0 at this distance
pub const BLUR_DIVISOR: f64 = 100.0;
pub const BLUR_MAX: f64 = 10.0;
pub const VISIBLE_MIN_OPACITY: f64 = 0.01;

// Warp factor published to the starfield
pub const WARP_GAIN: f64 = 0.1;

// Starfield
pub const STAR_COUNT: usize = 300;
pub const STAR_FAR_Z: f64 = 2_000.0;
pub const STAR_BASE_SPEED: f64 = 2.0;
pub const STAR_BASS_SPEED: f64 = 0.05;
pub const STAR_FOCAL: f64 = 200.0;
pub const STAR_MAX_SIZE: f64 = 3.0;
pub const STAR_STREAK_WARP: f64 = 2.0; // |warp| above this draws streaks
pub const STAR_STREAK_STRETCH: f64 = 1.05;
pub const BASS_GREEN_LEVEL: u8 = 100;
pub const BASS_PURPLE_LEVEL: u8 = 150;

// Loudness
pub const BASS_BINS: usize = 10;
pub const ANALYSER_FFT_SIZE: u32 = 256;

// Counters
pub const COUNTER_ANCHOR: f64 = 5_500.0;
pub const COUNTER_RADIUS: f64 = 800.0;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

// Pointer parallax
pub const PARALLAX_DIVISOR: f64 = 100.0;
