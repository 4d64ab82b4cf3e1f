use bevy::prelude::{Plugin, App};

use self::physics::PhysicsPlugin;

pub mod physics;

#[derive(Debug, Default)]
pub struct CorePlugin {}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugin {});
    }
}
