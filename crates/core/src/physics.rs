use bevy::prelude::{App, Entity, EventReader, EventWriter, IntoSystemConfigs, Plugin, Query, Res, Update, Vec3, With};
use bevy_rapier3d::{prelude::{CollisionEvent, NoUserData, RapierContext, RapierPhysicsPlugin}, rapier::geometry::CollisionEventFlags};
use vs_common::{components::{rig::VrRig, surface::SurfaceKind}, events::ContactEvent, LocomotionSet};

#[derive(Debug, Default)]
pub struct PhysicsPlugin {}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(Update, feed_contacts.in_set(LocomotionSet::ContactFeed));
    }
}

// Rapier's normal points from collider1 to collider2.
fn normal_toward_rig(normal: Vec3, rig_is_first: bool) -> Vec3 {
    if rig_is_first {
        -normal
    } else {
        normal
    }
}

fn contact_normal(rapier: &RapierContext, rig: Entity, other: Entity) -> Vec3 {
    rapier
        .contact_pair(rig, other)
        .and_then(|pair| {
            let rig_is_first = pair.collider1() == rig;
            pair.manifolds()
                .next()
                .map(|manifold| normal_toward_rig(manifold.normal(), rig_is_first))
        })
        .and_then(|normal| normal.try_normalize())
        .unwrap_or(Vec3::Y)
}

pub fn feed_contacts(
    mut collision_events: EventReader<CollisionEvent>,
    q_rigs: Query<(), With<VrRig>>,
    q_surfaces: Query<&SurfaceKind>,
    rapier: Res<RapierContext>,
    mut contact_events: EventWriter<ContactEvent>,
) {
    for collision_event in collision_events.iter() {
        let (e1, e2, flags, started) = match *collision_event {
            CollisionEvent::Started(e1, e2, flags) => (e1, e2, flags, true),
            CollisionEvent::Stopped(e1, e2, flags) => (e1, e2, flags, false),
        };

        let (rig, other) = if q_rigs.contains(e1) {
            (e1, e2)
        } else if q_rigs.contains(e2) {
            (e2, e1)
        } else {
            continue;
        };

        let surface = q_surfaces.get(other).copied().unwrap_or_default();
        contact_events.send(to_contact_event(rig, surface, flags, started, || contact_normal(&rapier, rig, other)));
    }
}

fn to_contact_event(
    rig: Entity,
    surface: SurfaceKind,
    flags: CollisionEventFlags,
    started: bool,
    normal: impl FnOnce() -> Vec3,
) -> ContactEvent {
    match (flags.contains(CollisionEventFlags::SENSOR), started) {
        (true, true) => ContactEvent::TriggerEnter { rig, surface },
        (true, false) => ContactEvent::TriggerExit { rig, surface },
        (false, true) => ContactEvent::ContactEnter { rig, surface, normal: normal() },
        (false, false) => ContactEvent::ContactExit { rig, surface },
    }
}
