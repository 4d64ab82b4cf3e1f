use bevy::prelude::{EulerRot, Quat, Vec2, Vec3};

pub fn stick_angle_degrees(stick: Vec2) -> f32 {
    if stick == Vec2::ZERO || !stick.is_finite() {
        return 0.0;
    }

    let degrees = stick.x.atan2(stick.y).to_degrees().rem_euclid(360.0);
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

pub fn yaw_of(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    yaw
}

pub fn facing_rotation(reference: Quat, stick: Vec2) -> Quat {
    Quat::from_rotation_y(yaw_of(reference) - stick_angle_degrees(stick).to_radians())
}

pub fn facing_forward(reference: Quat, stick: Vec2) -> Vec3 {
    facing_rotation(reference, stick) * Vec3::NEG_Z
}

#[derive(Debug, Default, Clone)]
pub struct TurnRateTracker {
    previous: Option<Quat>,
}

impl TurnRateTracker {
    pub fn sample(&mut self, current: Quat, dt: f32) -> Vec3 {
        let Some(previous) = self.previous.replace(current) else {
            return Vec3::ZERO;
        };

        if dt <= 0.0 {
            return Vec3::ZERO;
        }

        let mut delta = (current * previous.inverse()).normalize();
        // Shortest arc.
        if delta.w < 0.0 {
            delta = -delta;
        }

        let (axis, angle) = delta.to_axis_angle();
        if !angle.is_finite() || angle <= f32::EPSILON {
            return Vec3::ZERO;
        }

        axis * (angle / dt)
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
