//! Hierarchy depth cache.
//!
//! Candidate ranking asks for the depth of every widget under the cursor on
//! each right-click, so depths are memoized per entity. Any reparenting or
//! detaching clears the whole cache, since a moved ancestor shifts the depth
//! of its entire subtree.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::constants::DEPTH_CACHE_CAPACITY;

#[derive(Resource)]
pub struct DepthCache {
    depths: HashMap<Entity, u32>,
    computed: usize,
}

impl Default for DepthCache {
    fn default() -> Self {
        Self {
            depths: HashMap::with_capacity(DEPTH_CACHE_CAPACITY),
            computed: 0,
        }
    }
}

impl DepthCache {
    /// Number of parent links between `entity` and its root. Roots are 0.
    ///
    /// `parent_of` resolves one hop upward. Only the queried entity is
    /// memoized; ancestors touched along the walk are not.
    pub fn depth_of(
        &mut self,
        entity: Entity,
        parent_of: impl Fn(Entity) -> Option<Entity>,
    ) -> u32 {
        if let Some(&depth) = self.depths.get(&entity) {
            return depth;
        }
        let mut depth = 0;
        let mut current = entity;
        while let Some(parent) = parent_of(current) {
            depth += 1;
            current = parent;
        }
        self.depths.insert(entity, depth);
        self.computed += 1;
        depth
    }

    /// How many depths were computed rather than served from cache.
    pub fn computed(&self) -> usize {
        self.computed
    }

    pub fn clear(&mut self) {
        self.depths.clear();
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

/// Drops all memoized depths whenever the hierarchy changes shape.
pub fn invalidate_depth_cache(
    mut cache: ResMut<DepthCache>,
    reparented: Query<Entity, Changed<ChildOf>>,
    mut detached: RemovedComponents<ChildOf>,
) {
    let reparented = reparented.iter().count();
    let detached = detached.read().count();
    if reparented == 0 && detached == 0 {
        return;
    }
    if !cache.is_empty() {
        debug!(
            "Hierarchy changed ({} reparented, {} detached), clearing depth cache",
            reparented, detached
        );
    }
    cache.clear();
}
