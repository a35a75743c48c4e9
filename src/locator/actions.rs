//! Locate action, selection outlines and ping flashes.

use bevy::gizmos::config::{GizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;

use super::hit_testing::widget_world_rect;
use crate::constants::{PING_FALLBACK_HALF_SIZE, PING_FLASH_SECONDS};
use crate::scene::{Selected, WidgetRect};
use crate::theme;

/// Select one widget, replacing the current selection.
#[derive(Message, Debug, Clone, Copy)]
pub struct LocateRequest {
    pub target: Entity,
}

/// Short highlight drawn over an entity that was just located or matched
/// by a reference scan.
#[derive(Component, Debug)]
pub struct PingFlash {
    pub remaining: f32,
}

impl Default for PingFlash {
    fn default() -> Self {
        Self {
            remaining: PING_FLASH_SECONDS,
        }
    }
}

/// Custom gizmo group for locator overlays
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct LocatorGizmoGroup;

pub fn configure_locator_gizmos(mut config_store: ResMut<GizmoConfigStore>) {
    let (config, _) = config_store.config_mut::<LocatorGizmoGroup>();
    config.line.width = 2.0;
}

pub fn handle_locate_requests(
    mut requests: MessageReader<LocateRequest>,
    selected: Query<Entity, With<Selected>>,
    names: Query<&Name>,
    mut commands: Commands,
) {
    for request in requests.read() {
        for previous in selected.iter() {
            commands.entity(previous).remove::<Selected>();
        }
        let Ok(mut target) = commands.get_entity(request.target) else {
            warn!("Locate target {:?} no longer exists", request.target);
            continue;
        };
        target.insert((Selected, PingFlash::default()));
        let name = names
            .get(request.target)
            .map(Name::as_str)
            .unwrap_or("<unnamed>");
        info!("Located {} ({:?})", name, request.target);
    }
}

pub fn tick_ping_flashes(
    time: Res<Time>,
    mut flashes: Query<(Entity, &mut PingFlash)>,
    mut commands: Commands,
) {
    for (entity, mut flash) in flashes.iter_mut() {
        flash.remaining -= time.delta_secs();
        if flash.remaining <= 0.0 {
            commands.entity(entity).remove::<PingFlash>();
        }
    }
}

/// Draw an outline around every selected entity.
pub fn draw_selection_outlines(
    mut gizmos: Gizmos<LocatorGizmoGroup>,
    selected: Query<(&GlobalTransform, Option<&WidgetRect>), With<Selected>>,
) {
    for (transform, rect) in selected.iter() {
        let (center, size, angle) = outline_shape(transform, rect);
        gizmos.rect_2d(
            Isometry2d::new(center, Rot2::radians(angle)),
            size,
            theme::SELECTION_COLOR,
        );
    }
}

/// Draw ping flashes as rectangles that expand and fade out.
pub fn draw_ping_flashes(
    mut gizmos: Gizmos<LocatorGizmoGroup>,
    flashes: Query<(&GlobalTransform, &PingFlash, Option<&WidgetRect>)>,
) {
    for (transform, flash, rect) in flashes.iter() {
        let progress = 1.0 - (flash.remaining / PING_FLASH_SECONDS).clamp(0.0, 1.0);
        let (center, size, angle) = outline_shape(transform, rect);
        gizmos.rect_2d(
            Isometry2d::new(center, Rot2::radians(angle)),
            size * (1.0 + progress * 0.25),
            theme::PING_COLOR.with_alpha(1.0 - progress),
        );
    }
}

/// Outline placement for an entity, falling back to a fixed square for
/// entities that carry no widget rectangle.
fn outline_shape(transform: &GlobalTransform, rect: Option<&WidgetRect>) -> (Vec2, Vec2, f32) {
    match rect {
        Some(rect) => {
            let world_rect = widget_world_rect(transform, rect);
            (
                world_rect.center,
                world_rect.half_size * 2.0,
                world_rect.rotation,
            )
        }
        None => (
            transform.translation().truncate(),
            Vec2::splat(PING_FALLBACK_HALF_SIZE * 2.0),
            0.0,
        ),
    }
}
