use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};

#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[reflect(Component)]
pub enum SurfaceKind {
    #[default]
    Untagged,
    WalkableFloor,
    SurfPlatform,
    DeathFloor,
    Teleporter,
    SurfVolume,
}

impl SurfaceKind {
    pub fn is_tagged(self) -> bool {
        self != SurfaceKind::Untagged
    }
}
