use bevy::{prelude::{ReflectResource, Resource, Vec2}, reflect::Reflect};

#[derive(Resource, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct LocomotionInput {
    pub stick: Vec2,
    pub jump_held: bool,
}
