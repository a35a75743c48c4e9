//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the viewport rendering
//! and the egui surfaces. Modify values here to change the color scheme.

use bevy::prelude::Color;

// ============================================================================
// Selection Colors
// ============================================================================

/// Light blue for selection rectangles and indicators
pub const SELECTION_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);

// ============================================================================
// Ping Flash Colors
// ============================================================================

/// Warm yellow for the ping flash outline (alpha is faded over the flash)
pub const PING_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

// ============================================================================
// Sandbox Widget Colors
// ============================================================================

/// Dark slate fill for container panels
pub const PANEL_FILL: Color = Color::srgba(0.16, 0.18, 0.24, 0.95);

/// Mid grey-blue fill for grouping widgets
pub const GROUP_FILL: Color = Color::srgba(0.22, 0.26, 0.34, 0.95);

/// Accent blue fill for interactive widgets
pub const CONTROL_FILL: Color = Color::srgba(0.26, 0.42, 0.62, 0.95);

/// Muted green fill for text-like widgets
pub const LABEL_FILL: Color = Color::srgba(0.30, 0.45, 0.32, 0.95);

/// Faint overlay fill for widgets that the locator ignores
pub const OVERLAY_FILL: Color = Color::srgba(0.5, 0.5, 0.5, 0.15);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Grey for scene group headers in the context menu
    pub const SCENE_LABEL: egui::Color32 = egui::Color32::GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;
}
