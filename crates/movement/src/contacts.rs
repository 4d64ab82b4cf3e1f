use std::fmt;

use bevy::prelude::Vec3;
use vs_common::components::surface::SurfaceKind;

use crate::phase::{MotionPhase, PhaseTransition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    None,
    Respawn,
    LevelTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFault {
    UnmatchedContactExit(SurfaceKind),
    UnmatchedTriggerExit(SurfaceKind),
}

impl fmt::Display for ContactFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactFault::UnmatchedContactExit(surface) => {
                write!(f, "contact exit from {:?} without a matching enter", surface)
            }
            ContactFault::UnmatchedTriggerExit(surface) => {
                write!(f, "trigger exit from {:?} without a matching enter", surface)
            }
        }
    }
}

impl std::error::Error for ContactFault {}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactState {
    floor_contacts: u32,
    surf_contacts: u32,
    collision_normal: Vec3,
    phase: MotionPhase,
    unmatched_exits: u32,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            floor_contacts: 0,
            surf_contacts: 0,
            collision_normal: Vec3::Y,
            phase: MotionPhase::default(),
            unmatched_exits: 0,
        }
    }
}

impl ContactState {
    pub fn floor_contacts(&self) -> u32 {
        self.floor_contacts
    }

    pub fn surf_contacts(&self) -> u32 {
        self.surf_contacts
    }

    pub fn collision_normal(&self) -> Vec3 {
        self.collision_normal
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn unmatched_exits(&self) -> u32 {
        self.unmatched_exits
    }

    pub fn on_floor(&self) -> bool {
        self.floor_contacts > 0
    }

    pub fn is_walkable_floor(&self) -> bool {
        self.on_floor()
    }

    pub fn is_surfing(&self) -> bool {
        self.surf_contacts > 0
    }

    pub fn is_jumping(&self) -> bool {
        self.phase.is_jumping()
    }

    pub fn is_gliding(&self) -> bool {
        self.phase.is_gliding()
    }

    pub fn glide_armed(&self) -> bool {
        self.phase.glide_armed()
    }

    pub fn contact_enter(&mut self, surface: SurfaceKind, normal: Vec3) -> ContactOutcome {
        self.collision_normal = normal.try_normalize().unwrap_or(Vec3::Y);

        match surface {
            SurfaceKind::WalkableFloor => {
                self.floor_contacts += 1;
                self.transition(PhaseTransition::LandedOnWalkable);
                ContactOutcome::None
            }
            SurfaceKind::SurfPlatform => {
                self.transition(PhaseTransition::BoardedSurfPlatform);
                ContactOutcome::None
            }
            SurfaceKind::DeathFloor => {
                self.transition(PhaseTransition::TouchedSurface);
                ContactOutcome::Respawn
            }
            SurfaceKind::Teleporter => {
                self.transition(PhaseTransition::TouchedSurface);
                ContactOutcome::LevelTransition
            }
            SurfaceKind::SurfVolume | SurfaceKind::Untagged => {
                self.transition(PhaseTransition::TouchedSurface);
                ContactOutcome::None
            }
        }
    }

    pub fn contact_exit(&mut self, surface: SurfaceKind) -> Result<(), ContactFault> {
        match surface {
            SurfaceKind::WalkableFloor => {
                if self.floor_contacts == 0 {
                    self.unmatched_exits += 1;
                    return Err(ContactFault::UnmatchedContactExit(surface));
                }
                self.floor_contacts -= 1;
                self.transition(PhaseTransition::LeftWalkable {
                    still_on_floor: self.on_floor(),
                });
            }
            SurfaceKind::SurfPlatform => {
                self.transition(PhaseTransition::LeftSurfPlatform {
                    on_floor: self.on_floor(),
                });
            }
            _ => {}
        }

        Ok(())
    }

    pub fn trigger_enter(&mut self, surface: SurfaceKind) {
        if surface.is_tagged() {
            self.surf_contacts += 1;
        }
    }

    pub fn trigger_exit(&mut self, surface: SurfaceKind) -> Result<(), ContactFault> {
        if !surface.is_tagged() {
            return Ok(());
        }

        if self.surf_contacts == 0 {
            self.unmatched_exits += 1;
            return Err(ContactFault::UnmatchedTriggerExit(surface));
        }

        self.surf_contacts -= 1;
        Ok(())
    }

    pub fn notify_jumped(&mut self) {
        self.transition(PhaseTransition::Jumped);
    }

    fn transition(&mut self, transition: PhaseTransition) {
        let next = self.phase.next(transition);
        if next != self.phase {
            bevy::log::debug!("motion phase {:?} -> {:?} on {:?}", self.phase, next, transition);
        }
        self.phase = next;
    }
}
