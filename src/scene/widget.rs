use bevy::prelude::*;

/// Rectangular on-screen element. The rectangle is centered on the entity's
/// global translation; rotation and scale come from the transform.
#[derive(Component, Debug, Clone, Copy)]
pub struct WidgetRect {
    pub half_size: Vec2,
}

impl WidgetRect {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_size: Vec2::new(width, height) / 2.0,
        }
    }
}

/// Marker for the currently selected entity
#[derive(Component)]
pub struct Selected;
