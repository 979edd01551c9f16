use log::Level;

pub const TAGLINES: [&str; 4] = [
    "premium cars & bikes",
    "exclusive offers this week",
    "find your next ride today",
    "free test drives on demand",
];
pub const TAGLINE_INTERVAL_MS: u32 = 4_000;

pub const TOAST_DISPLAY_MS: u32 = 4_000;
// Removal normally waits for `transitionend`; this catches browsers that never send one.
pub const TOAST_REMOVE_FALLBACK_MS: u32 = 600;

pub const COUNTER_DURATION_MS: f64 = 1_500.0;
pub const COUNTER_FRAME_MS: u32 = 16;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const REVEAL_THRESHOLD: f64 = 0.3;

pub const CONTACT_CLOSE_DELAY_MS: u32 = 1_200;

pub const PREMIUM_SECTION_SELECTOR: &str = ".premium";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
