use bevy::prelude::{App, IntoSystemConfigs, IntoSystemSetConfigs, Plugin, PreUpdate, Update};
use physics::{apply_respawn_requests, attach_controllers, handle_contact_events, update_locomotion};
use vs_common::LocomotionSet;

pub mod acceleration;
pub mod backend;
pub mod capsule;
pub mod contacts;
pub mod controller;
pub mod jumping;
pub mod orientation;
pub mod phase;
pub mod physics;
pub mod resolver;

#[derive(Debug, Default)]
pub struct LocomotionPlugin {}

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app
            .configure_sets(Update, (
                LocomotionSet::ContactFeed,
                LocomotionSet::Contacts,
                LocomotionSet::Resolve,
                LocomotionSet::Respawn,
            ).chain())
            .add_systems(PreUpdate, attach_controllers)
            .add_systems(Update, (
                handle_contact_events.in_set(LocomotionSet::Contacts),
                update_locomotion.in_set(LocomotionSet::Resolve),
                apply_respawn_requests.in_set(LocomotionSet::Respawn),
            ));
    }
}
