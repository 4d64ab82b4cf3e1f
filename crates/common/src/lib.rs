use bevy::prelude::{App, Plugin, SystemSet};
use components::{config::{LocomotionConfig, SteeringSource}, input::LocomotionInput, surface::SurfaceKind};
use events::{ContactEvent, LevelTransitionRequested, RespawnRequested};

pub mod bundles;
pub mod components;
pub mod events;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    ContactFeed,
    Contacts,
    Resolve,
    Respawn,
}

#[derive(Debug, Default)]
pub struct CommonPlugin {}

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app
            .register_type::<LocomotionConfig>()
            .register_type::<SteeringSource>()
            .register_type::<SurfaceKind>()
            .register_type::<LocomotionInput>()
            .init_resource::<LocomotionInput>()
            .add_event::<ContactEvent>()
            .add_event::<RespawnRequested>()
            .add_event::<LevelTransitionRequested>();
    }
}
