// `glide_armed` is only cleared by boarding a surf platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPhase {
    Grounded { glide_armed: bool },
    Airborne { jumped: bool, glide_armed: bool },
    Gliding,
    Surfing,
}

impl Default for MotionPhase {
    fn default() -> Self {
        MotionPhase::Airborne { jumped: false, glide_armed: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseTransition {
    LandedOnWalkable,
    LeftWalkable { still_on_floor: bool },
    BoardedSurfPlatform,
    LeftSurfPlatform { on_floor: bool },
    TouchedSurface,
    Jumped,
}

fn airborne(jumped: bool, glide_armed: bool) -> MotionPhase {
    if glide_armed && !jumped {
        MotionPhase::Gliding
    } else {
        MotionPhase::Airborne { jumped, glide_armed }
    }
}

impl MotionPhase {
    pub fn next(self, transition: PhaseTransition) -> MotionPhase {
        use MotionPhase::*;
        use PhaseTransition::*;

        let armed = self.glide_armed();
        match (self, transition) {
            (_, Jumped) => Airborne { jumped: true, glide_armed: armed },
            (_, BoardedSurfPlatform) => Surfing,
            (Surfing, LandedOnWalkable) => Grounded { glide_armed: false },
            (_, LandedOnWalkable) => Grounded { glide_armed: armed },
            (_, LeftSurfPlatform { on_floor: true }) => Grounded { glide_armed: true },
            (Airborne { jumped, .. }, LeftSurfPlatform { on_floor: false }) => airborne(jumped, true),
            (_, LeftSurfPlatform { on_floor: false }) => Gliding,
            (Grounded { glide_armed }, LeftWalkable { still_on_floor: false }) => airborne(false, glide_armed),
            (Airborne { glide_armed, .. }, TouchedSurface) => airborne(false, glide_armed),
            (phase, _) => phase,
        }
    }

    pub fn glide_armed(self) -> bool {
        match self {
            MotionPhase::Grounded { glide_armed } | MotionPhase::Airborne { glide_armed, .. } => glide_armed,
            MotionPhase::Gliding => true,
            MotionPhase::Surfing => false,
        }
    }

    pub fn is_jumping(self) -> bool {
        matches!(self, MotionPhase::Airborne { jumped: true, .. })
    }

    pub fn is_gliding(self) -> bool {
        self == MotionPhase::Gliding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MotionPhase::*;
    use PhaseTransition::*;

    fn run(start: MotionPhase, transitions: &[PhaseTransition]) -> MotionPhase {
        transitions.iter().fold(start, |phase, transition| phase.next(*transition))
    }

    #[test]
    fn starts_falling_unarmed() {
        assert_eq!(MotionPhase::default(), Airborne { jumped: false, glide_armed: false });
        assert!(!MotionPhase::default().glide_armed());
    }

    #[test]
    fn jump_and_land() {
        let phase = Grounded { glide_armed: false }.next(Jumped);
        assert!(phase.is_jumping());
        assert_eq!(phase.next(TouchedSurface), Airborne { jumped: false, glide_armed: false });
        assert_eq!(phase.next(LandedOnWalkable), Grounded { glide_armed: false });
    }

    #[test]
    fn leaving_a_surf_platform_in_the_air_glides() {
        let phase = run(Default::default(), &[BoardedSurfPlatform, LeftSurfPlatform { on_floor: false }]);
        assert!(phase.is_gliding());
    }

    #[test]
    fn glide_stays_armed_across_a_landing() {
        let phase = run(Default::default(), &[
            BoardedSurfPlatform,
            LeftSurfPlatform { on_floor: false },
            LandedOnWalkable,
        ]);
        assert_eq!(phase, Grounded { glide_armed: true });
        assert!(phase.next(LeftWalkable { still_on_floor: false }).is_gliding());
    }

    #[test]
    fn leaving_a_surf_platform_on_the_floor_arms_the_next_drop() {
        let phase = run(Grounded { glide_armed: false }, &[
            BoardedSurfPlatform,
            LeftSurfPlatform { on_floor: true },
        ]);
        assert_eq!(phase, Grounded { glide_armed: true });
        assert!(phase.next(LeftWalkable { still_on_floor: false }).is_gliding());
    }

    #[test]
    fn jumping_suspends_the_glide_until_the_next_contact() {
        let phase = run(Grounded { glide_armed: true }, &[Jumped, LeftWalkable { still_on_floor: false }]);
        assert_eq!(phase, Airborne { jumped: true, glide_armed: true });
        assert!(phase.next(TouchedSurface).is_gliding());
    }

    #[test]
    fn only_boarding_a_surf_platform_disarms() {
        assert!(!Gliding.next(BoardedSurfPlatform).glide_armed());
        assert!(Gliding.next(TouchedSurface).is_gliding());
        assert!(Gliding.next(LandedOnWalkable).glide_armed());
    }

    #[test]
    fn overlapping_floors_keep_the_body_grounded() {
        let grounded = Grounded { glide_armed: true };
        assert_eq!(grounded.next(LeftWalkable { still_on_floor: true }), grounded);
    }

    #[test]
    fn plain_ledges_never_glide() {
        let phase = Grounded { glide_armed: false }.next(LeftWalkable { still_on_floor: false });
        assert_eq!(phase, Airborne { jumped: false, glide_armed: false });
    }
}
