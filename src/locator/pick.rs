//! Right-click capture and menu construction.
//!
//! Split in two: `request_pick` owns the input and egui context and only
//! emits a message, while `build_locator_menu` does the hit testing with
//! full read access to widget entities. The two run chained.

use bevy::ecs::world::EntityRef;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use super::candidates::{
    is_active_in_hierarchy, passes_name_filter, rank_candidates, scene_label_of, Candidate,
};
use super::depth::DepthCache;
use super::hit_testing::{point_in_rect, pointer_to_screen_px, widget_world_rect};
use super::menu::{build_menu_groups, LocatorMenu};
use super::registry::BehaviorRegistry;
use crate::config::AppConfig;
use crate::editor::params::{is_cursor_over_ui, CameraParams};
use crate::scene::WidgetRect;

/// A consumed right-click release, in all three coordinate spaces.
#[derive(Message, Debug, Clone, Copy)]
pub struct PickRequest {
    /// Cursor in logical window points, origin top-left.
    pub pointer: Vec2,
    /// Cursor in physical pixels, origin bottom-left.
    pub screen_px: Vec2,
    /// Cursor projected into world space.
    pub world: Vec2,
}

/// Turns a right-click release over the viewport into a [`PickRequest`].
pub fn request_pick(
    mut buttons: ResMut<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    camera: CameraParams,
    menu: Res<LocatorMenu>,
    mut picks: MessageWriter<PickRequest>,
) {
    if !buttons.just_released(MouseButton::Right) {
        return;
    }
    // An open menu owns the pointer until it closes
    if menu.open {
        return;
    }
    if is_cursor_over_ui(&mut contexts) {
        return;
    }
    let Some(pointer) = camera.cursor_position() else {
        return;
    };
    let Some(world) = camera.cursor_world_pos() else {
        return;
    };
    let Some((scale_factor, physical_height)) = camera.window_metrics() else {
        return;
    };

    // Consume the release so no other handler reacts to it this frame
    buttons.clear_just_released(MouseButton::Right);

    let screen_px = pointer_to_screen_px(pointer, scale_factor, physical_height);
    debug!("Right-click pick at {pointer:?} (world {world:?})");
    picks.write(PickRequest {
        pointer,
        screen_px,
        world,
    });
}

/// Hit-tests widgets against the pick, filters and ranks them, and opens
/// the menu when anything qualifies.
#[allow(clippy::too_many_arguments)]
pub fn build_locator_menu(
    mut picks: MessageReader<PickRequest>,
    widgets: Query<EntityRef, With<WidgetRect>>,
    parents: Query<&ChildOf>,
    visibilities: Query<&Visibility>,
    names: Query<&Name>,
    registry: Res<BehaviorRegistry>,
    config: Res<AppConfig>,
    mut depth_cache: ResMut<DepthCache>,
    mut menu: ResMut<LocatorMenu>,
) {
    let Some(pick) = picks.read().last().copied() else {
        return;
    };

    let parent_of = |entity: Entity| parents.get(entity).ok().map(ChildOf::parent);
    let visibility_of = |entity: Entity| visibilities.get(entity).ok().copied();
    let name_of = |entity: Entity| names.get(entity).ok().map(|name| name.as_str().to_string());

    let mut candidates = Vec::new();
    for widget in widgets.iter() {
        let entity = widget.id();
        let (Some(transform), Some(rect)) =
            (widget.get::<GlobalTransform>(), widget.get::<WidgetRect>())
        else {
            continue;
        };
        if !is_active_in_hierarchy(entity, &visibility_of, &parent_of) {
            continue;
        }
        let depth = depth_cache.depth_of(entity, &parent_of);
        if depth == 0 {
            continue;
        }
        let behaviors = registry.behaviors_on(widget);
        if behaviors.is_empty() {
            continue;
        }
        let Some(name) = name_of(entity) else {
            continue;
        };
        if !passes_name_filter(&name, &config.data.blocked_name_fragments) {
            continue;
        }
        if !point_in_rect(pick.world, &widget_world_rect(transform, rect)) {
            continue;
        }
        let scene_label = scene_label_of(entity, &name_of, &parent_of);
        candidates.push(Candidate {
            entity,
            name,
            depth,
            scene_label,
            behaviors,
        });
    }

    if candidates.is_empty() {
        debug!("No widgets under cursor, menu stays closed");
        menu.close();
        return;
    }

    rank_candidates(&mut candidates);
    info!(
        "Opening locator menu with {} candidates at {:?} (screen {:?} px)",
        candidates.len(),
        pick.pointer,
        pick.screen_px
    );
    menu.open_at(pick.pointer, build_menu_groups(candidates));
}
