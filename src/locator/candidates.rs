//! Candidate filtering and ranking for the locator menu.
//!
//! Every widget whose rectangle contains the click is a potential menu
//! entry. Candidates are dropped when hidden, parentless, bare of behaviors
//! or matching a blocked name fragment, then ranked deepest-first.

use bevy::prelude::*;

use super::registry::BehaviorInfo;
use crate::constants::MAX_MENU_CANDIDATES;

/// One widget that survived filtering and may appear in the menu.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entity: Entity,
    pub name: String,
    pub depth: u32,
    pub scene_label: String,
    pub behaviors: Vec<BehaviorInfo>,
}

/// Resolves effective visibility by walking up the hierarchy.
///
/// An explicit `Hidden` or `Visible` answers immediately; `Inherited` defers
/// to the parent. Entities without a `Visibility` component inherit, and a
/// fully inherited chain ends visible at the root.
pub fn is_active_in_hierarchy(
    entity: Entity,
    visibility_of: impl Fn(Entity) -> Option<Visibility>,
    parent_of: impl Fn(Entity) -> Option<Entity>,
) -> bool {
    let mut current = entity;
    loop {
        match visibility_of(current).unwrap_or(Visibility::Inherited) {
            Visibility::Hidden => return false,
            Visibility::Visible => return true,
            Visibility::Inherited => match parent_of(current) {
                Some(parent) => current = parent,
                None => return true,
            },
        }
    }
}

/// Whether `name` avoids every blocked fragment, case-insensitively.
pub fn passes_name_filter(name: &str, blocked_fragments: &[String]) -> bool {
    let lowered = name.to_lowercase();
    !blocked_fragments
        .iter()
        .any(|fragment| lowered.contains(&fragment.to_lowercase()))
}

/// Name of the candidate's root ancestor, used as its menu group header.
pub fn scene_label_of(
    entity: Entity,
    name_of: impl Fn(Entity) -> Option<String>,
    parent_of: impl Fn(Entity) -> Option<Entity>,
) -> String {
    let mut current = entity;
    while let Some(parent) = parent_of(current) {
        current = parent;
    }
    name_of(current).unwrap_or_else(|| String::from("Unnamed"))
}

/// Sorts deepest-first and keeps at most [`MAX_MENU_CANDIDATES`].
///
/// The sort is stable, so candidates at equal depth keep their query order.
pub fn rank_candidates(candidates: &mut Vec<Candidate>) {
    candidates.sort_by(|a, b| b.depth.cmp(&a.depth));
    candidates.truncate(MAX_MENU_CANDIDATES);
}

/// Groups ranked candidates by scene label, in first-encounter order.
pub fn group_by_scene(candidates: Vec<Candidate>) -> Vec<(String, Vec<Candidate>)> {
    let mut groups: Vec<(String, Vec<Candidate>)> = Vec::new();
    for candidate in candidates {
        match groups
            .iter_mut()
            .find(|(label, _)| *label == candidate.scene_label)
        {
            Some((_, members)) => members.push(candidate),
            None => groups.push((candidate.scene_label.clone(), vec![candidate])),
        }
    }
    groups
}
