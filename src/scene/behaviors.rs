//! Behavior components carried by sandbox widgets.
//!
//! Each behavior declares its outgoing references through
//! [`WidgetRefSource`], which is what the reference scan walks. A behavior
//! type only participates in picking and scanning once it is registered
//! with the app (see [`ScenePlugin`](super::ScenePlugin)).

use bevy::prelude::*;

use crate::locator::{BehaviorRef, WidgetRef, WidgetRefSource};

/// Visual container surface
#[derive(Component, Debug, Clone)]
pub struct PanelSurface;

impl WidgetRefSource for PanelSurface {
    fn widget_refs(&self) -> Vec<WidgetRef> {
        Vec::new()
    }
}

/// Click action that can reveal another widget
#[derive(Component, Debug, Clone)]
pub struct ButtonAction {
    pub reveals: Option<Entity>,
}

impl WidgetRefSource for ButtonAction {
    fn widget_refs(&self) -> Vec<WidgetRef> {
        self.reveals.into_iter().map(WidgetRef::Widget).collect()
    }
}

/// Hover tooltip attached to some other widget
#[derive(Component, Debug, Clone)]
pub struct TooltipSource {
    pub text: String,
    pub attach_to: Option<Entity>,
}

impl WidgetRefSource for TooltipSource {
    fn widget_refs(&self) -> Vec<WidgetRef> {
        self.attach_to.into_iter().map(WidgetRef::Widget).collect()
    }
}

/// Tab-order link to another widget's click action
#[derive(Component, Debug, Clone)]
pub struct FocusChain {
    pub next: Option<BehaviorRef>,
}

impl WidgetRefSource for FocusChain {
    fn widget_refs(&self) -> Vec<WidgetRef> {
        self.next.into_iter().map(WidgetRef::Behavior).collect()
    }
}

/// Static text content
#[derive(Component, Debug, Clone)]
pub struct LabelText {
    pub value: String,
}

impl WidgetRefSource for LabelText {
    fn widget_refs(&self) -> Vec<WidgetRef> {
        Vec::new()
    }
}
