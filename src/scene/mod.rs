//! Sandbox scene: a small widget hierarchy the locator can be exercised on.
//!
//! Everything lives under a root named after one of the reserved scan
//! anchors, so "Find References" works out of the box. The hierarchy
//! deliberately includes a duplicate-named pair, a root-level widget and a
//! "canvas" overlay to show the menu filters doing their job.

pub mod behaviors;
mod widget;

pub use behaviors::{ButtonAction, FocusChain, LabelText, PanelSurface, TooltipSource};
pub use widget::{Selected, WidgetRect};

use bevy::prelude::*;

use crate::constants::ANCHOR_RUNTIME_ROOT;
use crate::locator::{BehaviorRef, BehaviorRegistration};
use crate::theme;

fn spawn_sample_scene(mut commands: Commands) {
    // Scan anchor and scene root. Plain node, no widget rectangle.
    let root = commands
        .spawn((
            Name::new(ANCHOR_RUNTIME_ROOT),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    // Topmost widget, yet never offered: its name contains a blocked fragment
    commands.spawn((
        Name::new("OverlayCanvas"),
        Sprite::from_color(theme::OVERLAY_FILL, Vec2::new(760.0, 520.0)),
        Transform::from_xyz(0.0, 0.0, 30.0),
        WidgetRect::new(760.0, 520.0),
        ChildOf(root),
        PanelSurface,
    ));

    let main_panel = commands
        .spawn((
            Name::new("MainPanel"),
            Sprite::from_color(theme::PANEL_FILL, Vec2::new(520.0, 360.0)),
            Transform::from_xyz(-150.0, 20.0, 10.0),
            WidgetRect::new(520.0, 360.0),
            ChildOf(root),
            PanelSurface,
        ))
        .id();

    commands.spawn((
        Name::new("HeaderBar"),
        Sprite::from_color(theme::GROUP_FILL, Vec2::new(520.0, 40.0)),
        Transform::from_xyz(0.0, 160.0, 1.0),
        WidgetRect::new(520.0, 40.0),
        ChildOf(main_panel),
        LabelText {
            value: "Inventory".to_string(),
        },
    ));

    let detail_label = commands
        .spawn((
            Name::new("DetailLabel"),
            Sprite::from_color(theme::LABEL_FILL, Vec2::new(180.0, 48.0)),
            Transform::from_xyz(140.0, 90.0, 1.0),
            WidgetRect::new(180.0, 48.0),
            ChildOf(main_panel),
            LabelText {
                value: "Select an item".to_string(),
            },
        ))
        .id();

    let inventory_grid = commands
        .spawn((
            Name::new("InventoryGrid"),
            Sprite::from_color(theme::GROUP_FILL, Vec2::new(300.0, 200.0)),
            Transform::from_xyz(-60.0, -50.0, 1.0),
            WidgetRect::new(300.0, 200.0),
            ChildOf(main_panel),
            PanelSurface,
        ))
        .id();

    // Two slots sharing a display name, so the menu shows its [n] suffixes
    let slot_a = commands
        .spawn((
            Name::new("SlotButton"),
            Sprite::from_color(theme::CONTROL_FILL, Vec2::new(64.0, 64.0)),
            Transform::from_xyz(-70.0, 0.0, 1.0),
            WidgetRect::new(64.0, 64.0),
            ChildOf(inventory_grid),
            ButtonAction {
                reveals: Some(detail_label),
            },
        ))
        .id();

    commands.spawn((
        Name::new("SlotButton"),
        Sprite::from_color(theme::CONTROL_FILL, Vec2::new(64.0, 64.0)),
        Transform::from_xyz(10.0, 0.0, 1.0),
        WidgetRect::new(64.0, 64.0),
        ChildOf(inventory_grid),
        ButtonAction { reveals: None },
        TooltipSource {
            text: "Empty slot".to_string(),
            attach_to: Some(detail_label),
        },
    ));

    // Tab order: the grid hands focus to the first slot's action
    commands.entity(inventory_grid).insert(FocusChain {
        next: Some(BehaviorRef::of::<ButtonAction>(slot_a)),
    });

    // Root-level widget: hierarchy depth 0, the menu never offers it
    commands.spawn((
        Name::new("FloatingNote"),
        Sprite::from_color(theme::LABEL_FILL, Vec2::new(160.0, 90.0)),
        Transform::from_xyz(450.0, 250.0, 10.0),
        WidgetRect::new(160.0, 90.0),
        LabelText {
            value: "Scratch note".to_string(),
        },
    ));

    info!("Sandbox scene spawned under {:?}", ANCHOR_RUNTIME_ROOT);
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_behavior::<PanelSurface>()
            .register_behavior::<ButtonAction>()
            .register_behavior::<TooltipSource>()
            .register_behavior::<FocusChain>()
            .register_behavior::<LabelText>()
            .add_systems(Startup, spawn_sample_scene);
    }
}
