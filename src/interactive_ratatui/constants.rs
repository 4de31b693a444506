//! Constants for the interactive TUI module
//!
//! Timing values, layout sizes and user-facing strings shared by the
//! run loop, the state reducer and the components.

// Timing constants
/// Quiet period before typed text becomes the active filter
pub const QUERY_DEBOUNCE_MS: u64 = 500;

/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the navigation bar
pub const NAVBAR_HEIGHT: u16 = 1;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the active filter / result count row
pub const FILTER_BAR_HEIGHT: u16 = 1;

/// Height of the key hint row at the bottom
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows moved by PageUp/PageDown in the result list
pub const SCROLL_PAGE_SIZE: usize = 10;

/// Maximum width for the language picker popup
pub const PICKER_MAX_WIDTH: u16 = 36;

/// Minimum margin around popups
pub const POPUP_MARGIN: u16 = 2;

/// Lines of issue body shown under each title
pub const BODY_PREVIEW_LINES: usize = 2;

// Strings
pub const TYPING_INDICATOR: &str = "[typing...]";
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";
pub const NO_ISSUES_FOUND: &str = "No issues found.";
pub const LOADING_ISSUES: &str = "Fetching good first issues...";
pub const LOADING_MORE: &str = "Loading more issues...";
pub const SCROLL_FOR_MORE: &str = "Scroll down to load more";
pub const LIST_ITEM_ERROR: &str = "Error loading data";
pub const RELOAD_LABEL: &str = "Reload";
pub const ALL_LANGUAGES: &str = "All languages";
