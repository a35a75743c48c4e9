//! Centralized constants used across the application.
//!
//! This module contains magic numbers and well-known strings that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Maximum number of widgets offered in the context menu per pick
pub const MAX_MENU_CANDIDATES: usize = 8;

/// Initial capacity of the entity-to-depth cache
pub const DEPTH_CACHE_CAPACITY: usize = 2048;

/// Reserved root names that mark where reference scans start.
/// The first entity whose name exactly equals one of these is the scan root.
pub const ANCHOR_ENVIRONMENT_ROOT: &str = "Canvas (Environment)";
pub const ANCHOR_RUNTIME_ROOT: &str = "CanvasParent";

/// Default name fragments that exclude a widget from the menu
/// (matched case-insensitively as substrings)
pub const DEFAULT_BLOCKED_NAME_FRAGMENTS: &[&str] = &["canvas"];

/// Context menu labels
pub const MENU_LABEL_LOCATE: &str = "Locate GameObject";
pub const MENU_LABEL_FIND_REFERENCES: &str = "Find References";
pub const MENU_LABEL_NODE: &str = "Node";

/// How long a ping flash stays visible (seconds)
pub const PING_FLASH_SECONDS: f32 = 0.9;

/// Half-size used when pinging an entity that has no widget rectangle
pub const PING_FALLBACK_HALF_SIZE: f32 = 24.0;

/// Camera zoom limits
pub const ZOOM_MIN: f32 = 0.1;
pub const ZOOM_MAX: f32 = 10.0;
