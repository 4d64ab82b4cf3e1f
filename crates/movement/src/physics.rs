use bevy::{log::{debug, info, warn}, prelude::{Commands, Entity, EventReader, EventWriter, Mut, Query, Res, Transform, Vec3, With, Without}, time::Time};
use bevy_rapier3d::prelude::{Collider, Friction, GravityScale, Sleeping, Velocity};
use vs_common::{
    bundles::{capsule_collider, friction},
    components::{config::LocomotionConfig, input::LocomotionInput, rig::VrRig},
    events::{ContactEvent, LevelTransitionRequested, RespawnRequested},
};

use crate::{
    backend::{InputSample, LevelHooks, PhysicsBody, PoseSample},
    capsule::CapsuleFit,
    controller::LocomotionController,
    jumping::JumpTrigger,
    orientation::yaw_of,
    resolver::BodyMaterial,
};

struct RapierBody<'w> {
    velocity: Mut<'w, Velocity>,
    collider: Mut<'w, Collider>,
    friction: Mut<'w, Friction>,
    gravity: Mut<'w, GravityScale>,
    sleeping: Mut<'w, Sleeping>,
    yaw: f32,
    capsule_radius: f32,
    low_friction: f32,
    high_friction: f32,
}

impl PhysicsBody for RapierBody<'_> {
    fn velocity(&self) -> Vec3 {
        self.velocity.linvel
    }

    fn apply_velocity_change(&mut self, change: Vec3) {
        self.velocity.linvel += change;
    }

    fn set_capsule(&mut self, fit: CapsuleFit) {
        *self.collider = capsule_collider(fit.height, fit.center, self.capsule_radius);
    }

    fn set_material(&mut self, material: BodyMaterial) {
        let coefficient = match material {
            BodyMaterial::LowFriction => self.low_friction,
            BodyMaterial::HighFriction => self.high_friction,
        };
        *self.friction = friction(coefficient);
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity.0 = if enabled { 1.0 } else { 0.0 };
    }

    fn sleep(&mut self) {
        if !self.sleeping.sleeping {
            self.sleeping.sleeping = true;
        }
    }

    fn wake(&mut self) {
        if self.sleeping.sleeping {
            self.sleeping.sleeping = false;
        }
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }
}

struct EventLevelHooks<'a, 'w, 's> {
    rig: Entity,
    respawns: &'a mut EventWriter<'w, RespawnRequested>,
    transitions: &'a mut EventWriter<'s, LevelTransitionRequested>,
}

impl LevelHooks for EventLevelHooks<'_, '_, '_> {
    fn respawn_at(&mut self, transform: Transform) {
        self.respawns.send(RespawnRequested { rig: self.rig, transform });
    }

    fn trigger_level_transition(&mut self) {
        self.transitions.send(LevelTransitionRequested { rig: self.rig });
    }
}

pub fn attach_controllers(
    mut commands: Commands,
    q_rigs: Query<(Entity, Option<&LocomotionConfig>), (With<VrRig>, Without<LocomotionController>)>,
    config: Option<Res<LocomotionConfig>>,
) {
    for (entity, rig_config) in q_rigs.iter() {
        let config = rig_config
            .cloned()
            .or_else(|| config.as_deref().cloned())
            .unwrap_or_default();

        debug!("attaching locomotion controller to {:?}", entity);
        commands.entity(entity).insert((
            LocomotionController::new(config),
            JumpTrigger::default(),
        ));
    }
}

pub fn handle_contact_events(
    mut contact_events: EventReader<ContactEvent>,
    mut q_controllers: Query<&mut LocomotionController>,
    mut respawns: EventWriter<RespawnRequested>,
    mut transitions: EventWriter<LevelTransitionRequested>,
) {
    for event in contact_events.iter() {
        let rig = event.rig();
        let Ok(mut controller) = q_controllers.get_mut(rig) else {
            debug!("contact event for {:?} which has no locomotion controller", rig);
            continue;
        };

        let mut hooks = EventLevelHooks {
            rig,
            respawns: &mut respawns,
            transitions: &mut transitions,
        };

        match *event {
            ContactEvent::ContactEnter { surface, normal, .. } => controller.on_contact_enter(surface, normal, &mut hooks),
            ContactEvent::ContactExit { surface, .. } => controller.on_contact_exit(surface),
            ContactEvent::TriggerEnter { surface, .. } => controller.on_trigger_enter(surface),
            ContactEvent::TriggerExit { surface, .. } => controller.on_trigger_exit(surface),
        }
    }
}

#[allow(clippy::type_complexity)]
pub fn update_locomotion(
    mut q_rigs: Query<(
        Entity,
        &VrRig,
        &Transform,
        &mut LocomotionController,
        &mut JumpTrigger,
        &mut Velocity,
        &mut Collider,
        &mut Friction,
        &mut GravityScale,
        &mut Sleeping,
    )>,
    q_tracked: Query<&Transform, Without<VrRig>>,
    input: Res<LocomotionInput>,
    time: Res<Time>,
) {
    for (entity, rig, transform, mut controller, mut jump_trigger, velocity, collider, friction, gravity, sleeping) in q_rigs.iter_mut() {
        let Ok(head) = q_tracked.get(rig.head) else {
            warn!("rig {:?} has no tracked head {:?}, skipping", entity, rig.head);
            continue;
        };

        let hand_rotation = rig
            .hand
            .and_then(|hand| q_tracked.get(hand).ok())
            .map(|hand| transform.rotation * hand.rotation);

        let pose = PoseSample {
            head_position: head.translation,
            head_rotation: transform.rotation * head.rotation,
            hand_rotation,
        };

        let input = InputSample {
            stick: input.stick,
            jump_edge: jump_trigger.sample(input.jump_held),
        };

        let config = controller.config();
        let mut body = RapierBody {
            velocity,
            collider,
            friction,
            gravity,
            sleeping,
            yaw: yaw_of(transform.rotation),
            capsule_radius: config.capsule_radius,
            low_friction: config.low_friction,
            high_friction: config.high_friction,
        };

        let report = controller.update(time.delta_seconds(), &pose, &input, &mut body);
        if report.mode_changed {
            debug!("rig {:?} locomotion mode -> {:?} (x{:.2})", entity, report.mode, report.acceleration_factor);
        }
        if report.jumped {
            debug!("rig {:?} jumped", entity);
        }
    }
}

pub fn apply_respawn_requests(
    mut respawns: EventReader<RespawnRequested>,
    mut q_rigs: Query<(&mut Transform, Option<&mut Velocity>, Option<&mut Sleeping>), With<VrRig>>,
) {
    for request in respawns.iter() {
        let Ok((mut transform, velocity, sleeping)) = q_rigs.get_mut(request.rig) else {
            warn!("respawn requested for {:?} which is not a rig", request.rig);
            continue;
        };

        *transform = request.transform;
        if let Some(mut velocity) = velocity {
            *velocity = Velocity::zero();
        }
        if let Some(mut sleeping) = sleeping {
            sleeping.sleeping = false;
        }

        info!("rig {:?} respawned at {:?}", request.rig, request.transform.translation);
    }
}
