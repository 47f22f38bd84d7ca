use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewport band used by the safety page scroll-spy: the top 20% and the
/// bottom 60% are discounted, so a section only counts once its top enters
/// the band in between.
pub const SPY_ROOT_MARGIN: &str = "-20% 0px -60% 0px";
pub const SPY_THRESHOLD: f64 = 0.2;

pub const HERO_INTERVAL_MS: u32 = 6000;

// Header switches to its opaque style past this many pixels.
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

pub const TILT_MAX_DEGREES: f64 = 3.0;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;
pub const TILT_SCALE: f64 = 1.02;

pub const LOGO_URL: &str = "https://cdn1.webspaceai.in/eef565e3-c66a-41ac-9aed-23821bf1e2a8.png";
pub const BRAND: &str = "WEBSPACEAI";
