use bevy::{log::info, prelude::{BuildChildren, Commands, Quat, Res, SpatialBundle, Transform}};
use bevy_rapier3d::prelude::{Collider, Sensor};
use vs_common::{
    bundles::{SurfaceBundle, VrRigBundle},
    components::{config::LocomotionConfig, rig::{VrHand, VrHead, VrRig}, surface::SurfaceKind},
};

const HEAD_HEIGHT: f32 = 1.7;

pub fn spawn_level(mut commands: Commands) {
    // Walkable area, top face at y = 0.
    commands.spawn(SurfaceBundle::new(
        SurfaceKind::WalkableFloor,
        Transform::from_xyz(0.0, -0.1, 0.0),
        Collider::cuboid(10.0, 0.1, 10.0),
    ));

    let ramp = Transform::from_xyz(0.0, 1.0, -14.0)
        .with_rotation(Quat::from_rotation_x(0.35));
    commands.spawn(SurfaceBundle::new(
        SurfaceKind::SurfPlatform,
        ramp,
        Collider::cuboid(1.5, 0.1, 4.0),
    ));
    commands.spawn((
        SurfaceBundle::new(SurfaceKind::SurfVolume, ramp, Collider::cuboid(1.6, 0.4, 4.1)),
        Sensor,
    ));

    commands.spawn(SurfaceBundle::new(
        SurfaceKind::DeathFloor,
        Transform::from_xyz(0.0, -10.0, 0.0),
        Collider::cuboid(50.0, 0.25, 50.0),
    ));

    commands.spawn(SurfaceBundle::new(
        SurfaceKind::Teleporter,
        Transform::from_xyz(8.0, 0.5, 8.0),
        Collider::cuboid(0.5, 0.5, 0.5),
    ));
}

pub fn spawn_rig(mut commands: Commands, config: Res<LocomotionConfig>) {
    let head = commands
        .spawn((SpatialBundle::from_transform(Transform::from_xyz(0.0, HEAD_HEIGHT, 0.0)), VrHead))
        .id();
    let hand = commands
        .spawn((SpatialBundle::from_transform(Transform::from_xyz(0.25, 1.1, -0.3)), VrHand))
        .id();

    let rig = commands
        .spawn(VrRigBundle::new(
            VrRig::new(head).with_hand(hand),
            config.respawn,
            config.clone(),
        ))
        .push_children(&[head, hand])
        .id();

    info!("spawned rig {:?} at {:?}", rig, config.respawn.translation);
}
