use bevy::prelude::{Quat, Vec3};
use vs_util::constants::{CAPSULE_FIT_EPSILON, CAPSULE_MAX_HEIGHT, CAPSULE_MIN_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleFit {
    pub height: f32,
    pub center: Vec3,
}

impl CapsuleFit {
    pub fn approx_eq(&self, other: &CapsuleFit) -> bool {
        (self.height - other.height).abs() <= CAPSULE_FIT_EPSILON
            && self.center.abs_diff_eq(other.center, CAPSULE_FIT_EPSILON)
    }
}

// The lateral offset is in capsule space, so the body yaw is undone.
pub fn fit_capsule(head_local: Vec3, body_yaw: f32) -> CapsuleFit {
    let height = head_local.y.clamp(CAPSULE_MIN_HEIGHT, CAPSULE_MAX_HEIGHT);
    let offset = Vec3::new(head_local.x, height / 2.0, head_local.z);

    CapsuleFit {
        height,
        center: Quat::from_rotation_y(-body_yaw) * offset,
    }
}
