use bevy::prelude::Component;
use vs_common::components::history::WithPrevious;
use vs_util::constants::GRAVITY;

pub fn jump_velocity(jump_height: f32) -> f32 {
    (2.0 * jump_height.max(0.0) * GRAVITY).sqrt()
}

#[derive(Component, Debug, Default, Clone)]
pub struct JumpTrigger {
    held: WithPrevious<bool>,
}

impl JumpTrigger {
    pub fn sample(&mut self, held: bool) -> bool {
        self.held.update_value(held);
        self.held.rose()
    }
}
