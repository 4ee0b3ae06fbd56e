//! Constants for the interactive console
//!
//! Timing values, layout sizes and default inputs live here so the
//! components and the event loop agree on them.

// Timing constants
/// Lifetime of a notification before it clears itself
pub const NOTIFICATION_LIFETIME_MS: u64 = 4000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Prompt shown after the first Ctrl+C
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// UI Layout constants
pub const NOTIFICATION_BAR_HEIGHT: u16 = 1;
pub const STATS_BAR_HEIGHT: u16 = 3;
pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const FILTER_PANEL_HEIGHT: u16 = 3;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

/// Characters of message text shown in the list when no highlight exists
pub const CONTENT_PREVIEW_CHARS: usize = 300;

// Dialog dimensions
pub const HELP_DIALOG_MAX_WIDTH: u16 = 72;
pub const SETTINGS_PANEL_WIDTH: u16 = 44;
pub const SETTINGS_PANEL_HEIGHT: u16 = 10;
pub const DIALOG_MARGIN: u16 = 4;

/// Source the service imports when the user triggers an import
pub const DEFAULT_IMPORT_SOURCE: &str = "Facebook posts by DonaldTrump.csv";
