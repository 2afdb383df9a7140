//! Application constants and default values

/// Application tick interval driving timers (debounce, toasts, spinners)
pub const TICK_INTERVAL_MS: u64 = 100;

/// Debounce window for search inputs
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default toast lifetime
pub const TOAST_DEFAULT_MS: u64 = 3000;
/// Warning toasts stay a little longer
pub const TOAST_WARNING_MS: u64 = 4000;
/// Error toasts stay the longest
pub const TOAST_ERROR_MS: u64 = 5000;

/// Maximum number of toasts rendered at once
pub const TOAST_MAX_VISIBLE: usize = 5;

/// Sidebar width bounds (columns)
pub const SIDEBAR_MIN_WIDTH: u16 = 16;
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 24;
pub const SIDEBAR_MAX_WIDTH: u16 = 40;

/// Pagination shows every page up to this count, then windows with ellipses
pub const PAGINATION_FULL_THRESHOLD: usize = 7;

/// In-memory log ring capacity
pub const LOG_RING_CAPACITY: usize = 500;

/// Message printed after generating a default config file
pub const CONFIG_GENERATED: &str = "Configuration file generated";
