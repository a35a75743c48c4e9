mod camera;
pub mod params;

pub use camera::EditorCamera;

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, camera::spawn_camera).add_systems(
            Update,
            (
                camera::camera_pan,
                camera::camera_zoom,
                camera::apply_camera_zoom,
                camera::reset_view,
            ),
        );
    }
}
