//! Viewport navigation: a 2D camera with middle-drag panning, scroll
//! zoom and a Home-key reset.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::{ZOOM_MAX, ZOOM_MIN};

/// Scroll-wheel sensitivity per unit reported by the backend.
const ZOOM_STEP_LINE: f32 = 0.1;
const ZOOM_STEP_PIXEL: f32 = 0.001;

/// Marker for the single viewport camera.
#[derive(Component)]
pub struct EditorCamera;

/// Requested zoom level, applied to the projection when it changes.
#[derive(Component)]
pub struct CameraZoom {
    pub scale: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        EditorCamera,
        CameraZoom::default(),
        Transform::from_translation(Vec3::new(0.0, 0.0, 1000.0)),
    ));
}

/// Middle-button drag pans the viewport. Motion is scaled by the zoom
/// level so a drag covers the same on-screen distance at any zoom.
pub fn camera_pan(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut Transform, &CameraZoom), With<EditorCamera>>,
) {
    if !mouse_button.pressed(MouseButton::Middle) {
        // Drop buffered motion so releasing the button never causes a jump.
        mouse_motion.clear();
        return;
    }

    let Ok((mut transform, zoom)) = camera_query.single_mut() else {
        return;
    };

    let dragged: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    transform.translation.x -= dragged.x * zoom.scale;
    transform.translation.y += dragged.y * zoom.scale;
}

pub fn camera_zoom(
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut CameraZoom, With<EditorCamera>>,
) {
    let Ok(mut zoom) = camera_query.single_mut() else {
        return;
    };

    for event in scroll_events.read() {
        let step = match event.unit {
            MouseScrollUnit::Line => event.y * ZOOM_STEP_LINE,
            MouseScrollUnit::Pixel => event.y * ZOOM_STEP_PIXEL,
        };

        zoom.scale = (zoom.scale - step).clamp(ZOOM_MIN, ZOOM_MAX);
    }
}

pub fn apply_camera_zoom(
    mut camera_query: Query<
        (&CameraZoom, &mut Projection),
        (With<EditorCamera>, Changed<CameraZoom>),
    >,
) {
    for (zoom, mut projection) in camera_query.iter_mut() {
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = zoom.scale;
        }
    }
}

/// Home key recenters the view and resets zoom.
pub fn reset_view(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut camera_query: Query<(&mut Transform, &mut CameraZoom), With<EditorCamera>>,
) {
    if !keyboard.just_pressed(KeyCode::Home) {
        return;
    }

    let Ok((mut transform, mut zoom)) = camera_query.single_mut() else {
        return;
    };

    transform.translation.x = 0.0;
    transform.translation.y = 0.0;
    zoom.scale = 1.0;
}
