//! Common SystemParam bundles to reduce parameter counts in editor systems.
//!
//! Systems that react to pointer input tend to need the same cluster of
//! queries (camera, transform, primary window). Rather than repeating them,
//! we bundle those queries into SystemParam structs with convenience methods.
//!
//! ## Available Bundles
//!
//! - [`CameraParams`]: camera and window access for cursor conversions
//!
//! ## Helper Functions
//!
//! - [`is_cursor_over_ui`]: Check if cursor is over egui UI (for input gating)

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use super::EditorCamera;

/// Bundled camera and window queries for cursor conversions
#[derive(SystemParam)]
pub struct CameraParams<'w, 's> {
    pub window: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    pub camera: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<EditorCamera>>,
}

impl CameraParams<'_, '_> {
    /// Get the cursor position in window coordinates (logical points,
    /// origin top-left), if the cursor is inside the window
    pub fn cursor_position(&self) -> Option<Vec2> {
        self.window.single().ok()?.cursor_position()
    }

    /// Get the world position of the cursor, if available
    pub fn cursor_world_pos(&self) -> Option<Vec2> {
        let window = self.window.single().ok()?;
        let (camera, transform) = self.camera.single().ok()?;
        let cursor_pos = window.cursor_position()?;
        camera.viewport_to_world_2d(transform, cursor_pos).ok()
    }

    /// Pixel-density scale factor and viewport height in physical pixels,
    /// as needed for point-to-pixel conversions
    pub fn window_metrics(&self) -> Option<(f32, f32)> {
        let window = self.window.single().ok()?;
        Some((window.scale_factor(), window.physical_height() as f32))
    }
}

/// Check if the cursor is over egui UI
pub fn is_cursor_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}
