use bevy::prelude::{Quat, Transform, Vec2, Vec3};

use crate::{capsule::CapsuleFit, resolver::BodyMaterial};

pub trait PoseSource {
    fn head_position(&self) -> Vec3;

    fn head_rotation(&self) -> Quat;

    fn head_forward(&self) -> Vec3 {
        self.head_rotation() * Vec3::NEG_Z
    }

    fn hand_rotation(&self) -> Option<Quat> {
        None
    }
}

pub trait InputSource {
    fn stick_axis(&self) -> Vec2;

    fn jump_edge(&self) -> bool;
}

pub trait PhysicsBody {
    fn velocity(&self) -> Vec3;

    fn apply_velocity_change(&mut self, change: Vec3);

    fn set_capsule(&mut self, fit: CapsuleFit);

    fn set_material(&mut self, material: BodyMaterial);

    fn set_gravity_enabled(&mut self, enabled: bool);

    fn sleep(&mut self);

    fn wake(&mut self);

    fn yaw(&self) -> f32;
}

pub trait LevelHooks {
    fn respawn_at(&mut self, transform: Transform);

    fn trigger_level_transition(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSample {
    pub head_position: Vec3,
    pub head_rotation: Quat,
    pub hand_rotation: Option<Quat>,
}

impl Default for PoseSample {
    fn default() -> Self {
        Self {
            head_position: Vec3::new(0.0, 1.7, 0.0),
            head_rotation: Quat::IDENTITY,
            hand_rotation: None,
        }
    }
}

impl PoseSource for PoseSample {
    fn head_position(&self) -> Vec3 {
        self.head_position
    }

    fn head_rotation(&self) -> Quat {
        self.head_rotation
    }

    fn hand_rotation(&self) -> Option<Quat> {
        self.hand_rotation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    pub stick: Vec2,
    pub jump_edge: bool,
}

impl InputSource for InputSample {
    fn stick_axis(&self) -> Vec2 {
        self.stick
    }

    fn jump_edge(&self) -> bool {
        self.jump_edge
    }
}
