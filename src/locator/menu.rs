//! Locator menu model.
//!
//! Built once per right-click and rendered by the egui pass until an action
//! fires or the click lands elsewhere.

use std::collections::HashMap;

use bevy::prelude::*;

use super::candidates::{group_by_scene, Candidate};
use super::registry::BehaviorInfo;

/// One selectable widget in the menu.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub target: Entity,
    /// Node name as it appears in the scene.
    pub name: String,
    /// Display label, suffixed `[n]` when the name repeats in this menu.
    pub label: String,
    pub behaviors: Vec<BehaviorInfo>,
}

/// Entries sharing a scene label, shown under one header.
#[derive(Debug, Clone)]
pub struct MenuGroup {
    pub scene_label: String,
    pub entries: Vec<MenuEntry>,
}

/// Current menu contents, if any.
#[derive(Resource, Default)]
pub struct LocatorMenu {
    pub open: bool,
    /// Click position in logical window points, where the menu is anchored.
    pub pointer: Vec2,
    pub groups: Vec<MenuGroup>,
}

impl LocatorMenu {
    pub fn open_at(&mut self, pointer: Vec2, groups: Vec<MenuGroup>) {
        self.open = true;
        self.pointer = pointer;
        self.groups = groups;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.groups.clear();
    }
}

/// Disambiguates a repeated name with a `[n]` suffix.
///
/// The first occurrence keeps the bare name; later ones count up from `[1]`.
/// Counters are shared across the whole menu, not per group.
pub fn dedupe_label(counters: &mut HashMap<String, u32>, name: &str) -> String {
    match counters.get_mut(name) {
        Some(count) => {
            *count += 1;
            format!("{name}[{count}]")
        }
        None => {
            counters.insert(name.to_string(), 0);
            name.to_string()
        }
    }
}

/// Turns ranked candidates into grouped, label-deduped menu entries.
pub fn build_menu_groups(candidates: Vec<Candidate>) -> Vec<MenuGroup> {
    let mut counters: HashMap<String, u32> = HashMap::new();
    let mut groups = Vec::new();
    for (scene_label, members) in group_by_scene(candidates) {
        let mut entries = Vec::with_capacity(members.len());
        for candidate in members {
            let label = dedupe_label(&mut counters, &candidate.name);
            entries.push(MenuEntry {
                target: candidate.entity,
                name: candidate.name,
                label,
                behaviors: candidate.behaviors,
            });
        }
        groups.push(MenuGroup {
            scene_label,
            entries,
        });
    }
    groups
}
