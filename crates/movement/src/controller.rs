use bevy::{log::{debug, info, warn}, prelude::{Component, Vec2, Vec3}};
use vs_common::components::{config::{LocomotionConfig, SteeringSource}, history::WithPrevious, surface::SurfaceKind};

use crate::{
    acceleration::AccelerationShaper,
    backend::{InputSource, LevelHooks, PhysicsBody, PoseSource},
    capsule::{fit_capsule, CapsuleFit},
    contacts::{ContactFault, ContactOutcome, ContactState},
    orientation::{facing_forward, TurnRateTracker},
    resolver::{resolve, select_mode, BodyMaterial, FrameContext, LocomotionMode},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub mode: LocomotionMode,
    pub mode_changed: bool,
    pub acceleration_factor: f32,
    pub turn_rate: Vec3,
    pub jumped: bool,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    contacts: ContactState,
    turn_tracker: TurnRateTracker,
    shaper: AccelerationShaper,
    capsule: Option<CapsuleFit>,
    material: Option<BodyMaterial>,
    gravity_enabled: Option<bool>,
    mode: WithPrevious<LocomotionMode>,
}

impl LocomotionController {
    pub fn new(config: LocomotionConfig) -> Self {
        let config = config.validated();
        let shaper = AccelerationShaper::new(
            config.max_acceleration,
            config.acceleration_decay,
            config.acceleration_reset_time,
        );

        Self {
            config,
            contacts: ContactState::default(),
            turn_tracker: TurnRateTracker::default(),
            shaper,
            capsule: None,
            material: None,
            gravity_enabled: None,
            mode: WithPrevious::new(LocomotionMode::Idle),
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    pub fn mode(&self) -> LocomotionMode {
        self.mode.current
    }

    pub fn acceleration_factor(&self) -> f32 {
        self.shaper.factor()
    }

    pub fn capsule(&self) -> Option<CapsuleFit> {
        self.capsule
    }

    pub fn update(
        &mut self,
        dt: f32,
        pose: &impl PoseSource,
        input: &impl InputSource,
        body: &mut impl PhysicsBody,
    ) -> FrameReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        let fit = fit_capsule(pose.head_position(), body.yaw());
        if !self.capsule.is_some_and(|last| last.approx_eq(&fit)) {
            body.set_capsule(fit);
            self.capsule = Some(fit);
        }

        let head_rotation = pose.head_rotation();
        let reference = match self.config.steering {
            SteeringSource::Head => head_rotation,
            SteeringSource::Hand => pose.hand_rotation().unwrap_or(head_rotation),
        };

        let stick = sanitize_stick(input.stick_axis());
        let turn_rate = self.turn_tracker.sample(head_rotation, dt);
        let acceleration_factor = self.shaper.step(turn_rate, dt);

        let mode = select_mode(&self.contacts, stick, self.config.deadzone);
        let frame = FrameContext {
            velocity: body.velocity(),
            head_forward: pose.head_forward(),
            facing_forward: facing_forward(reference, stick),
            acceleration_factor,
            jump_edge: input.jump_edge(),
        };
        let plan = resolve(mode, &self.contacts, &self.config, &frame);

        if let Some(material) = plan.material {
            if self.material != Some(material) {
                body.set_material(material);
                self.material = Some(material);
            }
        }

        if self.gravity_enabled != Some(plan.gravity_enabled) {
            body.set_gravity_enabled(plan.gravity_enabled);
            self.gravity_enabled = Some(plan.gravity_enabled);
        }

        if let Some(change) = plan.total_velocity_change() {
            body.wake();
            body.apply_velocity_change(change);
        } else if plan.may_sleep {
            body.sleep();
        }

        let jumped = plan.jump_velocity.is_some();
        if jumped {
            self.contacts.notify_jumped();
        }

        self.mode.update_value(mode);
        let mode_changed = !self.mode.is_same_as_previous();

        FrameReport {
            mode,
            mode_changed,
            acceleration_factor,
            turn_rate,
            jumped,
        }
    }

    pub fn on_contact_enter(&mut self, surface: SurfaceKind, normal: Vec3, hooks: &mut impl LevelHooks) {
        match self.contacts.contact_enter(surface, normal) {
            ContactOutcome::None => {}
            ContactOutcome::Respawn => {
                info!("death floor touched, respawning at {:?}", self.config.respawn.translation);
                hooks.respawn_at(self.config.respawn);
            }
            ContactOutcome::LevelTransition => {
                info!("teleporter touched, requesting level transition");
                hooks.trigger_level_transition();
            }
        }
    }

    pub fn on_contact_exit(&mut self, surface: SurfaceKind) {
        if let Err(fault) = self.contacts.contact_exit(surface) {
            report_fault(fault);
        }
    }

    pub fn on_trigger_enter(&mut self, surface: SurfaceKind) {
        self.contacts.trigger_enter(surface);
        debug!("entered {:?}, {} surf volume(s)", surface, self.contacts.surf_contacts());
    }

    pub fn on_trigger_exit(&mut self, surface: SurfaceKind) {
        if let Err(fault) = self.contacts.trigger_exit(surface) {
            report_fault(fault);
        }
    }
}

// Already clamped and counted in `ContactState::unmatched_exits`.
fn report_fault(fault: ContactFault) {
    warn!("{}", fault);
}

fn sanitize_stick(stick: Vec2) -> Vec2 {
    if stick.is_finite() {
        stick.clamp(Vec2::NEG_ONE, Vec2::ONE)
    } else {
        Vec2::ZERO
    }
}
