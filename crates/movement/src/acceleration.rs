use bevy::prelude::Vec3;
use vs_util::constants::TURN_RATE_PER_ACCELERATION;

#[derive(Debug, Clone)]
pub struct AccelerationShaper {
    max_acceleration: f32,
    decay: f32,
    reset_time: f32,
    previous_factor: f32,
    hold_timer: f32,
}

impl AccelerationShaper {
    pub fn new(max_acceleration: f32, decay: f32, reset_time: f32) -> Self {
        Self {
            max_acceleration: max_acceleration.max(1.0),
            decay: decay.clamp(0.0, 1.0),
            reset_time: reset_time.max(0.0),
            previous_factor: 1.0,
            hold_timer: 0.0,
        }
    }

    pub fn factor(&self) -> f32 {
        self.previous_factor
    }

    pub fn hold_timer(&self) -> f32 {
        self.hold_timer
    }

    pub fn raw_factor(&self, turn_rate: Vec3) -> f32 {
        (turn_rate.y.abs() / TURN_RATE_PER_ACCELERATION + 1.0).min(self.max_acceleration)
    }

    pub fn step(&mut self, turn_rate: Vec3, dt: f32) -> f32 {
        let raw = self.raw_factor(turn_rate);
        self.step_raw(raw, dt)
    }

    pub fn step_raw(&mut self, raw: f32, dt: f32) -> f32 {
        let raw = if raw.is_nan() { 1.0 } else { raw.min(self.max_acceleration) };

        let mut factor = if raw > self.previous_factor {
            self.hold_timer = 0.0;
            raw
        } else {
            self.previous_factor
        };

        if self.hold_timer >= self.reset_time {
            factor = (factor * (1.0 - self.decay)).max(1.0);
        }

        self.hold_timer += dt.max(0.0);

        let factor = factor.clamp(1.0, self.max_acceleration);
        self.previous_factor = factor;
        factor
    }
}
