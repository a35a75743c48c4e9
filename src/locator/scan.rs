//! Reference scans over the anchored subtree.
//!
//! Both variants walk the subtree under a reserved anchor node and ask every
//! registered behavior for its outgoing references. The widget variant pings
//! every referencing node; the behavior variant skips the target's own node
//! and same-named nodes, and stops at the first hit per behavior.

use std::collections::HashMap;

use bevy::ecs::world::EntityRef;
use bevy::prelude::*;

use super::actions::PingFlash;
use super::registry::{BehaviorRef, BehaviorRegistry, WidgetRef};
use crate::config::AppConfig;
use crate::scene::Selected;

/// Find every behavior referencing a widget node.
#[derive(Message, Debug, Clone, Copy)]
pub struct ScanWidgetRefsRequest {
    pub target: Entity,
}

/// Find every behavior referencing one specific behavior instance.
#[derive(Message, Debug, Clone)]
pub struct ScanBehaviorRefsRequest {
    pub behavior: BehaviorRef,
    /// Name of the behavior's node when the menu was built, used to skip
    /// same-named nodes during the scan.
    pub target_name: String,
}

/// Outcome of one scan pass.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// How many live subtree nodes were examined.
    pub visited: usize,
    /// Nodes owning a matching reference, in traversal order.
    pub matches: Vec<Entity>,
}

/// First entity carrying one of the anchor names. Names are tried in order,
/// so the first name that exists anywhere wins over later ones.
pub fn find_anchor<'a>(
    anchor_names: &[String],
    named: impl IntoIterator<Item = (Entity, &'a str)>,
) -> Option<Entity> {
    let named: Vec<(Entity, &str)> = named.into_iter().collect();
    for anchor in anchor_names {
        for &(entity, name) in &named {
            if name == anchor.as_str() {
                return Some(entity);
            }
        }
    }
    None
}

/// Collects `root` and every descendant, depth-first.
pub fn collect_subtree(
    root: Entity,
    links: impl IntoIterator<Item = (Entity, Entity)>,
) -> Vec<Entity> {
    let mut children_of: HashMap<Entity, Vec<Entity>> = HashMap::new();
    for (child, parent) in links {
        children_of.entry(parent).or_default().push(child);
    }
    let mut subtree = Vec::new();
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        subtree.push(entity);
        if let Some(children) = children_of.get(&entity) {
            stack.extend(children.iter().copied());
        }
    }
    subtree
}

/// Finds every reference to the widget node `target` in `subtree`.
///
/// All matching references are reported, including several on one node.
/// Despawned subtree entries are skipped.
pub fn scan_widget_refs<'a>(
    entity_ref_of: impl Fn(Entity) -> Option<EntityRef<'a>>,
    subtree: &[Entity],
    registry: &BehaviorRegistry,
    target: Entity,
) -> ScanReport {
    let mut report = ScanReport::default();
    for &entity in subtree {
        let Some(entity_ref) = entity_ref_of(entity) else {
            continue;
        };
        report.visited += 1;
        for (_, refs) in registry.collect_refs(entity_ref) {
            for widget_ref in refs {
                if widget_ref == WidgetRef::Widget(target) {
                    report.matches.push(entity);
                }
            }
        }
    }
    report
}

/// Finds references to one behavior instance in `subtree`.
///
/// The target's own node and any node sharing `target_name` cannot match.
/// Each behavior reports at most one match; the traversal itself never
/// stops early.
pub fn scan_behavior_refs<'a>(
    entity_ref_of: impl Fn(Entity) -> Option<EntityRef<'a>>,
    subtree: &[Entity],
    registry: &BehaviorRegistry,
    target: BehaviorRef,
    target_name: &str,
) -> ScanReport {
    let mut report = ScanReport::default();
    for &entity in subtree {
        let Some(entity_ref) = entity_ref_of(entity) else {
            continue;
        };
        report.visited += 1;
        if entity == target.owner {
            continue;
        }
        if entity_ref
            .get::<Name>()
            .is_some_and(|name| name.as_str() == target_name)
        {
            continue;
        }
        for (_, refs) in registry.collect_refs(entity_ref) {
            for widget_ref in refs {
                if widget_ref == WidgetRef::Behavior(target) {
                    report.matches.push(entity);
                    break;
                }
            }
        }
    }
    report
}

/// Ping every match and select the last one, mirroring how repeated pings
/// leave only the final selection active.
fn apply_scan_matches(
    report: &ScanReport,
    selected: &Query<Entity, With<Selected>>,
    named: &Query<(Entity, &Name)>,
    commands: &mut Commands,
) {
    let Some(&last) = report.matches.last() else {
        return;
    };
    for previous in selected.iter() {
        commands.entity(previous).remove::<Selected>();
    }
    for &matched in &report.matches {
        let name = named
            .get(matched)
            .map(|(_, name)| name.as_str())
            .unwrap_or("<unnamed>");
        debug!("Reference match on {} ({:?})", name, matched);
        commands.entity(matched).insert(PingFlash::default());
    }
    commands.entity(last).insert(Selected);
}

#[allow(clippy::too_many_arguments)]
pub fn handle_widget_scan_requests(
    mut requests: MessageReader<ScanWidgetRefsRequest>,
    entities: Query<EntityRef>,
    named: Query<(Entity, &Name)>,
    links: Query<(Entity, &ChildOf)>,
    selected: Query<Entity, With<Selected>>,
    registry: Res<BehaviorRegistry>,
    config: Res<AppConfig>,
    mut commands: Commands,
) {
    for request in requests.read() {
        let Some(anchor) = find_anchor(
            &config.data.anchor_names,
            named.iter().map(|(entity, name)| (entity, name.as_str())),
        ) else {
            info!("No anchor node present, reference scan skipped");
            continue;
        };
        let subtree = collect_subtree(
            anchor,
            links.iter().map(|(child, link)| (child, link.parent())),
        );
        let report = scan_widget_refs(
            |entity| entities.get(entity).ok(),
            &subtree,
            &registry,
            request.target,
        );
        info!(
            "Node reference scan visited {} nodes, {} matches",
            report.visited,
            report.matches.len()
        );
        apply_scan_matches(&report, &selected, &named, &mut commands);
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handle_behavior_scan_requests(
    mut requests: MessageReader<ScanBehaviorRefsRequest>,
    entities: Query<EntityRef>,
    named: Query<(Entity, &Name)>,
    links: Query<(Entity, &ChildOf)>,
    selected: Query<Entity, With<Selected>>,
    registry: Res<BehaviorRegistry>,
    config: Res<AppConfig>,
    mut commands: Commands,
) {
    for request in requests.read() {
        let Some(anchor) = find_anchor(
            &config.data.anchor_names,
            named.iter().map(|(entity, name)| (entity, name.as_str())),
        ) else {
            info!("No anchor node present, reference scan skipped");
            continue;
        };
        let subtree = collect_subtree(
            anchor,
            links.iter().map(|(child, link)| (child, link.parent())),
        );
        let report = scan_behavior_refs(
            |entity| entities.get(entity).ok(),
            &subtree,
            &registry,
            request.behavior,
            &request.target_name,
        );
        let type_name = registry
            .info_for(request.behavior.type_id)
            .map(|info| info.type_name)
            .unwrap_or("<unregistered>");
        info!(
            "{} reference scan visited {} nodes, {} matches",
            type_name,
            report.visited,
            report.matches.len()
        );
        apply_scan_matches(&report, &selected, &named, &mut commands);
    }
}
