use bevy::prelude::{Bundle, Quat, SpatialBundle, Transform, Vec3};
use bevy_rapier3d::prelude::{ActiveEvents, Collider, CoefficientCombineRule, Friction, GravityScale, LockedAxes, RigidBody, Sleeping, Velocity};
use vs_util::constants::CAPSULE_MAX_HEIGHT;

use crate::components::{config::LocomotionConfig, rig::VrRig, surface::SurfaceKind};

pub fn capsule_collider(height: f32, center: Vec3, radius: f32) -> Collider {
    let half_segment = (height / 2.0 - radius).max(0.0);
    Collider::compound(vec![
        (center, Quat::IDENTITY, Collider::capsule_y(half_segment, radius)),
    ])
}

pub fn friction(coefficient: f32) -> Friction {
    Friction {
        coefficient,
        combine_rule: CoefficientCombineRule::Min,
    }
}

#[derive(Bundle)]
pub struct VrRigBundle {
    pub spatial: SpatialBundle,
    pub rig: VrRig,
    pub config: LocomotionConfig,
    pub body: RigidBody,
    pub velocity: Velocity,
    pub collider: Collider,
    pub friction: Friction,
    pub gravity: GravityScale,
    pub sleeping: Sleeping,
    pub locked_axes: LockedAxes,
    pub active_events: ActiveEvents,
}

impl VrRigBundle {
    pub fn new(rig: VrRig, transform: Transform, config: LocomotionConfig) -> Self {
        let center = Vec3::new(0.0, CAPSULE_MAX_HEIGHT / 2.0, 0.0);
        let collider = capsule_collider(CAPSULE_MAX_HEIGHT, center, config.capsule_radius);
        let friction = friction(config.high_friction);

        Self {
            spatial: SpatialBundle::from_transform(transform),
            rig,
            config,
            body: RigidBody::Dynamic,
            velocity: Velocity::default(),
            collider,
            friction,
            gravity: GravityScale(1.0),
            sleeping: Sleeping::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            active_events: ActiveEvents::COLLISION_EVENTS,
        }
    }
}

#[derive(Bundle)]
pub struct SurfaceBundle {
    pub spatial: SpatialBundle,
    pub surface: SurfaceKind,
    pub body: RigidBody,
    pub collider: Collider,
}

impl SurfaceBundle {
    pub fn new(surface: SurfaceKind, transform: Transform, collider: Collider) -> Self {
        Self {
            spatial: SpatialBundle::from_transform(transform),
            surface,
            body: RigidBody::Fixed,
            collider,
        }
    }
}
