//! Typed behavior registry.
//!
//! Scans and menu labelling need to ask "which behavior types sit on this
//! entity, and what do they reference?" without naming every component type
//! at the call site. Registering a behavior stores a pair of monomorphized
//! probe functions; lookups then run over plain function pointers.

use std::any::TypeId;

use bevy::ecs::world::EntityRef;
use bevy::prelude::*;

/// Reference from a behavior to something else in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetRef {
    /// Points at a whole widget node.
    Widget(Entity),
    /// Points at one behavior on a node.
    Behavior(BehaviorRef),
}

/// Identity of a behavior instance: owning entity plus component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorRef {
    pub owner: Entity,
    pub type_id: TypeId,
}

impl BehaviorRef {
    pub fn of<T: 'static>(owner: Entity) -> Self {
        Self {
            owner,
            type_id: TypeId::of::<T>(),
        }
    }
}

/// Declares the outgoing references of a behavior component.
pub trait WidgetRefSource {
    fn widget_refs(&self) -> Vec<WidgetRef>;
}

/// Display name and id of a registered behavior type. The name is the
/// fully qualified type path, shown as-is in the references submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorInfo {
    pub type_id: TypeId,
    pub type_name: &'static str,
}

struct BehaviorEntry {
    info: BehaviorInfo,
    contains: fn(EntityRef) -> bool,
    probe: fn(EntityRef) -> Option<Vec<WidgetRef>>,
}

fn contains_probe<T: Component>(entity: EntityRef) -> bool {
    entity.contains::<T>()
}

fn refs_probe<T: Component + WidgetRefSource>(entity: EntityRef) -> Option<Vec<WidgetRef>> {
    entity.get::<T>().map(|behavior| behavior.widget_refs())
}

/// All behavior types known to the locator, in registration order.
#[derive(Resource, Default)]
pub struct BehaviorRegistry {
    entries: Vec<BehaviorEntry>,
}

impl BehaviorRegistry {
    pub fn register<T: Component + WidgetRefSource>(&mut self) {
        let type_id = TypeId::of::<T>();
        if self
            .entries
            .iter()
            .any(|entry| entry.info.type_id == type_id)
        {
            return;
        }
        self.entries.push(BehaviorEntry {
            info: BehaviorInfo {
                type_id,
                type_name: std::any::type_name::<T>(),
            },
            contains: contains_probe::<T>,
            probe: refs_probe::<T>,
        });
    }

    /// Behavior types present on `entity`.
    pub fn behaviors_on(&self, entity: EntityRef) -> Vec<BehaviorInfo> {
        self.entries
            .iter()
            .filter(|entry| (entry.contains)(entity))
            .map(|entry| entry.info)
            .collect()
    }

    /// Every behavior on `entity` together with its outgoing references.
    pub fn collect_refs(&self, entity: EntityRef) -> Vec<(BehaviorInfo, Vec<WidgetRef>)> {
        self.entries
            .iter()
            .filter_map(|entry| (entry.probe)(entity).map(|refs| (entry.info, refs)))
            .collect()
    }

    pub fn info_for(&self, type_id: TypeId) -> Option<BehaviorInfo> {
        self.entries
            .iter()
            .find(|entry| entry.info.type_id == type_id)
            .map(|entry| entry.info)
    }
}

/// App hook for wiring a behavior type into the registry.
pub trait BehaviorRegistration {
    fn register_behavior<T: Component + WidgetRefSource>(&mut self) -> &mut Self;
}

impl BehaviorRegistration for App {
    fn register_behavior<T: Component + WidgetRefSource>(&mut self) -> &mut Self {
        self.init_resource::<BehaviorRegistry>();
        self.world_mut()
            .resource_mut::<BehaviorRegistry>()
            .register::<T>();
        self
    }
}
