//! Application constants and user-facing copy

pub const APP_NAME: &str = "Enhance Panel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "enhance-panel.log";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const GOOGLE_SEARCH_LABEL: &str = "Enable google search";
pub const GOOGLE_SEARCH_TOOLTIP: &str = "Enabling this option allows your character to access the latest information and online events, but it may increase response latency.";

pub const QUIVR_SECOND_BRAIN_LABEL: &str = "Enable Quivr Second Brain";
// Placeholder copy, not yet written upstream
pub const QUIVR_SECOND_BRAIN_TOOLTIP: &str = "need content";

/// Accessibility label announced for the switches. Both rows share it.
pub const SWITCH_ACCESSIBILITY_LABEL: &str = "google search";
