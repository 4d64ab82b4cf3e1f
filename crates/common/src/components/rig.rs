use bevy::prelude::{Component, Entity};

#[derive(Component, Debug, Clone, Copy)]
pub struct VrRig {
    pub head: Entity,
    pub hand: Option<Entity>,
}

impl VrRig {
    pub fn new(head: Entity) -> Self {
        Self { head, hand: None }
    }

    pub fn with_hand(mut self, hand: Entity) -> Self {
        self.hand = Some(hand);
        self
    }
}

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct VrHead;

#[derive(Component, Debug, Default, Clone, Copy)]
pub struct VrHand;
