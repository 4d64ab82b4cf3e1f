use bevy::prelude::{Vec2, Vec3};
use vs_common::components::config::LocomotionConfig;

use crate::{contacts::ContactState, jumping::jump_velocity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionMode {
    Surf,
    Glide,
    Walk,
    #[default]
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMaterial {
    LowFriction,
    HighFriction,
}

pub fn select_mode(contacts: &ContactState, stick: Vec2, deadzone: f32) -> LocomotionMode {
    if contacts.is_surfing() {
        LocomotionMode::Surf
    } else if !contacts.is_walkable_floor() && !contacts.is_jumping() && contacts.glide_armed() {
        LocomotionMode::Glide
    } else if stick.length() > deadzone {
        LocomotionMode::Walk
    } else {
        LocomotionMode::Idle
    }
}

// Projection of `forward` onto the surface plane, left unnormalized so a
// forward straight into the surface gives zero.
pub fn surf_direction(normal: Vec3, forward: Vec3) -> Vec3 {
    let tangent = normal.cross(forward);
    tangent.cross(normal)
}

#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub velocity: Vec3,
    pub head_forward: Vec3,
    pub facing_forward: Vec3,
    pub acceleration_factor: f32,
    pub jump_edge: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcePlan {
    pub mode: LocomotionMode,
    pub velocity_change: Option<Vec3>,
    pub jump_velocity: Option<f32>,
    pub material: Option<BodyMaterial>,
    pub gravity_enabled: bool,
    pub may_sleep: bool,
}

impl ForcePlan {
    fn new(mode: LocomotionMode, gravity_enabled: bool) -> Self {
        Self {
            mode,
            velocity_change: None,
            jump_velocity: None,
            material: None,
            gravity_enabled,
            may_sleep: false,
        }
    }

    pub fn total_velocity_change(&self) -> Option<Vec3> {
        match (self.velocity_change, self.jump_velocity) {
            (None, None) => None,
            (change, jump) => Some(change.unwrap_or(Vec3::ZERO) + Vec3::Y * jump.unwrap_or(0.0)),
        }
    }
}

pub fn resolve(
    mode: LocomotionMode,
    contacts: &ContactState,
    config: &LocomotionConfig,
    frame: &FrameContext,
) -> ForcePlan {
    let boosted_speed = config.speed * frame.acceleration_factor;

    match mode {
        LocomotionMode::Surf => {
            let mut plan = ForcePlan::new(mode, false);
            let direction = surf_direction(contacts.collision_normal(), frame.head_forward);
            plan.velocity_change = Some(direction * boosted_speed - frame.velocity);
            plan
        }
        LocomotionMode::Glide => {
            let mut plan = ForcePlan::new(mode, false);
            let mut target = frame.head_forward * boosted_speed;
            target.y = -config.gliding_decay;
            plan.velocity_change = Some(target - frame.velocity);
            plan
        }
        LocomotionMode::Walk => {
            let mut plan = ForcePlan::new(mode, true);
            let target = frame.facing_forward * config.speed;
            plan.material = Some(BodyMaterial::LowFriction);
            plan.velocity_change = Some(Vec3::new(
                target.x - frame.velocity.x,
                0.0,
                target.z - frame.velocity.z,
            ));
            if frame.jump_edge && contacts.on_floor() {
                plan.jump_velocity = Some(jump_velocity(config.jump_height));
            }
            plan
        }
        LocomotionMode::Idle => {
            let mut plan = ForcePlan::new(mode, true);
            if contacts.on_floor() {
                plan.material = Some(BodyMaterial::HighFriction);
                plan.may_sleep = frame.velocity.length() < config.sleep_speed;
            }
            plan
        }
    }
}
