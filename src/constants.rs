// DOM hooks the front-end expects in the page markup.

// Scene
pub const WORLD_ID: &str = "world";
pub const STAGE_SELECTOR: &str = ".stage";
pub const STAGE_DEPTH_ATTR: &str = "data-z";
pub const NAV_MODE_ATTR: &str = "data-nav"; // on <body>: "paged" selects paginated mode
pub const MAX_DEPTH_ATTR: &str = "data-max-depth"; // on <body>: optional override

// HUD
pub const DEPTH_READOUT_ID: &str = "z-val";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const START_HINT_SELECTOR: &str = ".start-hint";

// Start overlay and audio
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-btn";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MUSIC_ID: &str = "bg-music";
pub const VOLUME_SLIDER_ID: &str = "vol-slider";
pub const VOLUME_ICON_ID: &str = "vol-icon";
pub const INITIAL_VOLUME: f64 = 0.5;

// Effects
pub const WARP_CANVAS_ID: &str = "warp-canvas";
pub const COUNTER_SELECTOR: &str = ".counter";
pub const COUNTER_TARGET_ATTR: &str = "data-target";

// Frames slower than this are logged
pub const SLOW_FRAME_MS: f64 = 50.0;
