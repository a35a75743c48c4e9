//! Pointer-to-widget hit testing.

use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::scene::WidgetRect;

/// A widget rectangle resolved into world space.
#[derive(Debug, Clone, Copy)]
pub struct WidgetWorldRect {
    pub center: Vec2,
    pub half_size: Vec2,
    pub rotation: f32,
}

/// Resolves a widget's rectangle against its global transform.
pub fn widget_world_rect(transform: &GlobalTransform, rect: &WidgetRect) -> WidgetWorldRect {
    let (scale, rotation, translation) = transform.to_scale_rotation_translation();
    WidgetWorldRect {
        center: translation.truncate(),
        half_size: rect.half_size * scale.truncate().abs(),
        rotation: rotation.to_euler(EulerRot::ZYX).0,
    }
}

/// Whether `point` falls inside the rectangle, honoring its rotation.
pub fn point_in_rect(point: Vec2, rect: &WidgetWorldRect) -> bool {
    let local = point - rect.center;
    let (sin, cos) = rect.rotation.sin_cos();
    let unrotated = Vec2::new(local.x * cos + local.y * sin, -local.x * sin + local.y * cos);
    unrotated.x.abs() <= rect.half_size.x && unrotated.y.abs() <= rect.half_size.y
}

/// Converts a cursor position in logical window points (origin top-left,
/// y down) to physical pixels with the origin at the bottom-left.
pub fn pointer_to_screen_px(pointer: Vec2, scale_factor: f32, physical_height: f32) -> Vec2 {
    Vec2::new(
        pointer.x * scale_factor,
        physical_height - pointer.y * scale_factor,
    )
}
