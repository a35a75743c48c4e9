//! egui rendering for the locator context menu.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::actions::LocateRequest;
use super::menu::LocatorMenu;
use super::registry::BehaviorRef;
use super::scan::{ScanBehaviorRefsRequest, ScanWidgetRefsRequest};
use crate::constants::{MENU_LABEL_FIND_REFERENCES, MENU_LABEL_LOCATE, MENU_LABEL_NODE};
use crate::scene::{LabelText, Selected, TooltipSource};
use crate::theme;

/// Renders the context menu at the pick position while it is open.
///
/// Each entry expands into the locate action plus a "Find References"
/// submenu with one item for the node itself and one per behavior on it.
pub fn locator_menu_ui(
    mut contexts: EguiContexts,
    mut menu: ResMut<LocatorMenu>,
    mut locate_requests: MessageWriter<LocateRequest>,
    mut widget_scans: MessageWriter<ScanWidgetRefsRequest>,
    mut behavior_scans: MessageWriter<ScanBehaviorRefsRequest>,
) -> Result {
    if !menu.open {
        return Ok(());
    }
    let ctx = contexts.ctx_mut()?;
    let anchor = egui::pos2(menu.pointer.x, menu.pointer.y);
    let mut close_after = false;

    egui::Area::new(egui::Id::new("locator_menu"))
        .fixed_pos(anchor)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_min_width(180.0);
                for group in &menu.groups {
                    ui.label(
                        egui::RichText::new(&group.scene_label)
                            .small()
                            .color(theme::ui::SCENE_LABEL),
                    );
                    for entry in &group.entries {
                        ui.menu_button(&entry.label, |ui| {
                            if ui.button(MENU_LABEL_LOCATE).clicked() {
                                locate_requests.write(LocateRequest {
                                    target: entry.target,
                                });
                                close_after = true;
                                ui.close();
                            }
                            ui.menu_button(MENU_LABEL_FIND_REFERENCES, |ui| {
                                if ui.button(MENU_LABEL_NODE).clicked() {
                                    widget_scans.write(ScanWidgetRefsRequest {
                                        target: entry.target,
                                    });
                                    close_after = true;
                                    ui.close();
                                }
                                for behavior in &entry.behaviors {
                                    if ui.button(behavior.type_name).clicked() {
                                        behavior_scans.write(ScanBehaviorRefsRequest {
                                            behavior: BehaviorRef {
                                                owner: entry.target,
                                                type_id: behavior.type_id,
                                            },
                                            target_name: entry.name.clone(),
                                        });
                                        close_after = true;
                                        ui.close();
                                    }
                                }
                            });
                        });
                    }
                }
            });
        });

    // Submenus live in their own egui areas, so dismissal has to check
    // "over any area" rather than the root response rect
    let clicked_away = ctx.input(|i| i.pointer.any_click()) && !ctx.is_pointer_over_area();
    if close_after || clicked_away || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        menu.close();
    }
    Ok(())
}

/// Small always-on overlay with usage hints and the current selection.
pub fn hint_overlay_ui(
    mut contexts: EguiContexts,
    selected: Query<(&Name, Option<&LabelText>, Option<&TooltipSource>), With<Selected>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::Window::new("Locator")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Right-click a widget to locate it or find references")
                    .small()
                    .color(theme::ui::HINT_TEXT),
            );
            match selected.single() {
                Ok((name, label, tooltip)) => {
                    ui.label(egui::RichText::new(format!("Selected: {}", name.as_str())).small());
                    if let Some(label) = label {
                        ui.label(
                            egui::RichText::new(format!("Text: {:?}", label.value))
                                .small()
                                .weak(),
                        );
                    }
                    if let Some(tooltip) = tooltip {
                        ui.label(
                            egui::RichText::new(format!("Tooltip: {:?}", tooltip.text))
                                .small()
                                .weak(),
                        );
                    }
                }
                Err(_) => {
                    ui.label(egui::RichText::new("Nothing selected").small().weak());
                }
            }
        });
    Ok(())
}
