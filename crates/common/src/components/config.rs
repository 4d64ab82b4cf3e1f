use bevy::{log::warn, prelude::{Component, ReflectComponent, ReflectResource, Resource, Transform, Vec3}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};
use serde::{Deserialize, Serialize};
use vs_util::constants::{
    ACCELERATION_DECAY, ACCELERATION_RESET_TIME, CAPSULE_MIN_HEIGHT, CAPSULE_RADIUS, GLIDING_DECAY,
    HIGH_FRICTION, LOW_FRICTION, MAX_ACCELERATION, PLAYER_JUMP_HEIGHT, PLAYER_SPEED,
    RESPAWN_POSITION, SLEEP_SPEED, STICK_DEADZONE,
};

#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteeringSource {
    #[default]
    Head,
    Hand,
}

#[derive(Component, Resource, Reflect, InspectorOptions, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[reflect(Component, Resource, InspectorOptions)]
#[serde(default)]
pub struct LocomotionConfig {
    #[inspector(min = 0.0)]
    pub speed: f32,
    #[inspector(min = 0.0, max = 1.0)]
    pub deadzone: f32,
    #[inspector(min = 0.0)]
    pub jump_height: f32,
    #[inspector(min = 1.0)]
    pub max_acceleration: f32,
    #[inspector(min = 0.0, max = 1.0)]
    pub acceleration_decay: f32,
    #[inspector(min = 0.0)]
    pub acceleration_reset_time: f32,
    #[inspector(min = 0.0)]
    pub gliding_decay: f32,
    #[inspector(min = 0.01)]
    pub capsule_radius: f32,
    #[inspector(min = 0.0)]
    pub low_friction: f32,
    #[inspector(min = 0.0)]
    pub high_friction: f32,
    #[inspector(min = 0.0)]
    pub sleep_speed: f32,
    pub steering: SteeringSource,
    pub respawn: Transform,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            deadzone: STICK_DEADZONE,
            jump_height: PLAYER_JUMP_HEIGHT,
            max_acceleration: MAX_ACCELERATION,
            acceleration_decay: ACCELERATION_DECAY,
            acceleration_reset_time: ACCELERATION_RESET_TIME,
            gliding_decay: GLIDING_DECAY,
            capsule_radius: CAPSULE_RADIUS,
            low_friction: LOW_FRICTION,
            high_friction: HIGH_FRICTION,
            sleep_speed: SLEEP_SPEED,
            steering: SteeringSource::Head,
            respawn: Transform::from_translation(Vec3::from_array(RESPAWN_POSITION)),
        }
    }
}

impl LocomotionConfig {
    pub fn validated(mut self) -> Self {
        self.speed = clamp_knob("speed", self.speed, 0.0, f32::MAX);
        self.deadzone = clamp_knob("deadzone", self.deadzone, 0.0, 1.0);
        self.jump_height = clamp_knob("jump_height", self.jump_height, 0.0, f32::MAX);
        self.max_acceleration = clamp_knob("max_acceleration", self.max_acceleration, 1.0, f32::MAX);
        self.acceleration_decay = clamp_knob("acceleration_decay", self.acceleration_decay, 0.0, 1.0);
        self.acceleration_reset_time = clamp_knob("acceleration_reset_time", self.acceleration_reset_time, 0.0, f32::MAX);
        self.gliding_decay = clamp_knob("gliding_decay", self.gliding_decay, 0.0, f32::MAX);
        // The capsule must still have a segment at its shortest fitted height.
        self.capsule_radius = clamp_knob("capsule_radius", self.capsule_radius, 0.01, CAPSULE_MIN_HEIGHT / 2.0);
        self.low_friction = clamp_knob("low_friction", self.low_friction, 0.0, f32::MAX);
        self.high_friction = clamp_knob("high_friction", self.high_friction, 0.0, f32::MAX);
        self.sleep_speed = clamp_knob("sleep_speed", self.sleep_speed, 0.0, f32::MAX);
        self
    }
}

fn clamp_knob(name: &str, value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        warn!("locomotion config `{}` is NaN, using {}", name, min);
        return min;
    }

    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("locomotion config `{}` = {} out of range, clamped to {}", name, value, clamped);
    }

    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_valid() {
        let config = LocomotionConfig::default();
        assert_eq!(config.clone().validated(), config);
    }

    #[test]
    fn out_of_range_knobs_are_clamped() {
        let config = LocomotionConfig {
            deadzone: 1.5,
            max_acceleration: 0.2,
            acceleration_decay: -0.1,
            capsule_radius: 2.0,
            speed: f32::NAN,
            ..Default::default()
        }.validated();

        assert_eq!(config.deadzone, 1.0);
        assert_eq!(config.max_acceleration, 1.0);
        assert_eq!(config.acceleration_decay, 0.0);
        assert_eq!(config.capsule_radius, 0.5);
        assert_eq!(config.speed, 0.0);
    }

    #[test]
    fn steering_defaults_to_head() {
        assert_eq!(LocomotionConfig::default().steering, SteeringSource::Head);
    }
}
