//! Right-click widget locator: context menu, locate action and reference
//! scans.
//!
//! Per frame: hierarchy changes invalidate the depth cache, a right-click
//! release becomes a pick request, the pick builds the menu, and menu
//! actions fan out as messages picked up by the locate and scan handlers
//! on the following frame.

mod actions;
mod candidates;
mod depth;
mod hit_testing;
mod menu;
mod menu_ui;
mod pick;
mod registry;
mod scan;


pub use actions::{LocateRequest, PingFlash};
pub use depth::DepthCache;
pub use menu::LocatorMenu;
pub use pick::PickRequest;
pub use registry::{
    BehaviorInfo, BehaviorRef, BehaviorRegistration, BehaviorRegistry, WidgetRef, WidgetRefSource,
};
pub use scan::{ScanBehaviorRefsRequest, ScanWidgetRefsRequest};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct LocatorPlugin;

impl Plugin for LocatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BehaviorRegistry>()
            .init_resource::<DepthCache>()
            .init_resource::<LocatorMenu>()
            .init_gizmo_group::<actions::LocatorGizmoGroup>()
            .add_message::<PickRequest>()
            .add_message::<LocateRequest>()
            .add_message::<ScanWidgetRefsRequest>()
            .add_message::<ScanBehaviorRefsRequest>()
            .add_systems(Startup, actions::configure_locator_gizmos)
            .add_systems(
                Update,
                (
                    depth::invalidate_depth_cache,
                    pick::request_pick,
                    pick::build_locator_menu,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    actions::handle_locate_requests.run_if(on_message::<LocateRequest>),
                    scan::handle_widget_scan_requests.run_if(on_message::<ScanWidgetRefsRequest>),
                    scan::handle_behavior_scan_requests
                        .run_if(on_message::<ScanBehaviorRefsRequest>),
                    actions::tick_ping_flashes,
                    actions::draw_selection_outlines,
                    actions::draw_ping_flashes,
                ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (menu_ui::locator_menu_ui, menu_ui::hint_overlay_ui),
            );
    }
}
