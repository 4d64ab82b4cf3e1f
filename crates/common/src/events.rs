use bevy::prelude::{Entity, Event, Transform, Vec3};

use crate::components::surface::SurfaceKind;

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum ContactEvent {
    ContactEnter { rig: Entity, surface: SurfaceKind, normal: Vec3 },
    ContactExit { rig: Entity, surface: SurfaceKind },
    TriggerEnter { rig: Entity, surface: SurfaceKind },
    TriggerExit { rig: Entity, surface: SurfaceKind },
}

impl ContactEvent {
    pub fn rig(&self) -> Entity {
        match *self {
            ContactEvent::ContactEnter { rig, .. }
            | ContactEvent::ContactExit { rig, .. }
            | ContactEvent::TriggerEnter { rig, .. }
            | ContactEvent::TriggerExit { rig, .. } => rig,
        }
    }
}

#[derive(Event, Debug, Clone, Copy)]
pub struct RespawnRequested {
    pub rig: Entity,
    pub transform: Transform,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct LevelTransitionRequested {
    pub rig: Entity,
}
