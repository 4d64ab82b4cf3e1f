use std::time::Duration;

use bevy::{ecs::event::Events, prelude::{App, Entity, Transform, Vec2, Vec3}, time::TimeUpdateStrategy, MinimalPlugins};
use bevy_rapier3d::prelude::{Friction, GravityScale, Sleeping, Velocity};
use vs_common::{
    bundles::VrRigBundle,
    components::{config::LocomotionConfig, input::LocomotionInput, rig::{VrHead, VrRig}, surface::SurfaceKind},
    events::{ContactEvent, LevelTransitionRequested},
    CommonPlugin,
};
use vs_movement::{controller::LocomotionController, resolver::LocomotionMode, LocomotionPlugin};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(1.0 / 90.0)))
        .add_plugins(CommonPlugin {})
        .add_plugins(LocomotionPlugin {});
    app
}

fn spawn_rig(app: &mut App, head_position: Vec3) -> Entity {
    let head = app.world.spawn((Transform::from_translation(head_position), VrHead)).id();
    let rig = app
        .world
        .spawn(VrRigBundle::new(VrRig::new(head), Transform::IDENTITY, LocomotionConfig::default()))
        .id();

    // Attaches the controller.
    app.update();
    rig
}

fn send(app: &mut App, event: ContactEvent) {
    app.world.resource_mut::<Events<ContactEvent>>().send(event);
}

fn land(app: &mut App, rig: Entity) {
    send(app, ContactEvent::ContactEnter { rig, surface: SurfaceKind::WalkableFloor, normal: Vec3::Y });
}

fn set_input(app: &mut App, stick: Vec2, jump_held: bool) {
    *app.world.resource_mut::<LocomotionInput>() = LocomotionInput { stick, jump_held };
}

fn controller(app: &App, rig: Entity) -> &LocomotionController {
    app.world.get::<LocomotionController>(rig).unwrap()
}

fn velocity(app: &App, rig: Entity) -> Vec3 {
    app.world.get::<Velocity>(rig).unwrap().linvel
}

#[test]
fn controllers_are_attached_to_new_rigs() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    assert_eq!(controller(&app, rig).mode(), LocomotionMode::Idle);
}

#[test]
fn walking_sets_horizontal_velocity_and_low_friction() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    land(&mut app, rig);
    set_input(&mut app, Vec2::new(0.0, 1.0), false);
    app.update();

    let config = LocomotionConfig::default();
    assert_eq!(controller(&app, rig).mode(), LocomotionMode::Walk);
    assert!((velocity(&app, rig) - Vec3::new(0.0, 0.0, -config.speed)).length() < 1e-4);
    assert_eq!(app.world.get::<Friction>(rig).unwrap().coefficient, config.low_friction);
    assert_eq!(app.world.get::<GravityScale>(rig).unwrap().0, 1.0);
}

#[test]
fn idle_on_the_floor_grips_and_sleeps() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    land(&mut app, rig);
    app.update();

    assert_eq!(app.world.get::<Friction>(rig).unwrap().coefficient, LocomotionConfig::default().high_friction);
    assert!(app.world.get::<Sleeping>(rig).unwrap().sleeping);
}

#[test]
fn surfing_wins_over_the_stick_and_drops_gravity() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    land(&mut app, rig);
    send(&mut app, ContactEvent::TriggerEnter { rig, surface: SurfaceKind::SurfVolume });
    set_input(&mut app, Vec2::new(1.0, 0.0), false);
    app.update();

    let velocity = velocity(&app, rig);
    assert_eq!(controller(&app, rig).mode(), LocomotionMode::Surf);
    assert!(velocity.x.abs() < 1e-4);
    assert!(velocity.z < 0.0);
    assert_eq!(app.world.get::<GravityScale>(rig).unwrap().0, 0.0);
}

#[test]
fn holding_jump_only_jumps_once() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    land(&mut app, rig);
    app.update();

    set_input(&mut app, Vec2::new(0.0, 1.0), true);
    app.update();
    app.update();

    let velocity = velocity(&app, rig);
    assert!((velocity.y - (2.0_f32 * 9.81).sqrt()).abs() < 1e-4);
    assert!((velocity.z + LocomotionConfig::default().speed).abs() < 1e-4);
    assert!(controller(&app, rig).contacts().is_jumping());
}

#[test]
fn death_floor_respawns_the_rig() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    land(&mut app, rig);
    send(&mut app, ContactEvent::TriggerEnter { rig, surface: SurfaceKind::SurfVolume });
    app.update();
    let phase = controller(&app, rig).contacts().phase();

    app.world.get_mut::<Transform>(rig).unwrap().translation = Vec3::new(5.0, -9.0, 5.0);
    app.world.get_mut::<Velocity>(rig).unwrap().linvel = Vec3::new(1.0, -5.0, 0.0);

    send(&mut app, ContactEvent::ContactEnter { rig, surface: SurfaceKind::DeathFloor, normal: Vec3::Y });
    app.update();

    let respawn = LocomotionConfig::default().respawn;
    assert_eq!(*app.world.get::<Transform>(rig).unwrap(), respawn);
    assert_eq!(velocity(&app, rig), Vec3::ZERO);

    // Only the transform is reset.
    let contacts = controller(&app, rig).contacts();
    assert_eq!(contacts.floor_contacts(), 1);
    assert_eq!(contacts.surf_contacts(), 1);
    assert_eq!(contacts.phase(), phase);
}

#[test]
fn glide_resumes_after_walking_off_a_floor() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    send(&mut app, ContactEvent::ContactEnter { rig, surface: SurfaceKind::SurfPlatform, normal: Vec3::Y });
    send(&mut app, ContactEvent::ContactExit { rig, surface: SurfaceKind::SurfPlatform });
    land(&mut app, rig);
    app.update();
    assert_eq!(controller(&app, rig).mode(), LocomotionMode::Idle);

    send(&mut app, ContactEvent::ContactExit { rig, surface: SurfaceKind::WalkableFloor });
    app.update();

    let config = LocomotionConfig::default();
    assert_eq!(controller(&app, rig).mode(), LocomotionMode::Glide);
    assert!((velocity(&app, rig).y + config.gliding_decay).abs() < 1e-4);
    assert_eq!(app.world.get::<GravityScale>(rig).unwrap().0, 0.0);
}

#[test]
fn teleporter_requests_a_level_transition() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    send(&mut app, ContactEvent::ContactEnter { rig, surface: SurfaceKind::Teleporter, normal: Vec3::Y });
    app.update();

    assert_eq!(app.world.resource::<Events<LevelTransitionRequested>>().len(), 1);
}

#[test]
fn unmatched_exit_is_counted_not_underflowed() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    send(&mut app, ContactEvent::ContactExit { rig, surface: SurfaceKind::WalkableFloor });
    app.update();

    let contacts = controller(&app, rig).contacts();
    assert_eq!(contacts.floor_contacts(), 0);
    assert_eq!(contacts.unmatched_exits(), 1);
}

#[test]
fn capsule_follows_head_height() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.2, 1.2, 0.0));

    let capsule = controller(&app, rig).capsule().unwrap();
    assert_eq!(capsule.height, 1.2);
    assert!((capsule.center - Vec3::new(0.2, 0.6, 0.0)).length() < 1e-5);
}

#[test]
fn rig_without_head_is_skipped() {
    let mut app = app();
    let rig = spawn_rig(&mut app, Vec3::new(0.0, 1.7, 0.0));
    let head = app.world.get::<VrRig>(rig).unwrap().head;
    app.world.despawn(head);

    land(&mut app, rig);
    set_input(&mut app, Vec2::new(0.0, 1.0), false);
    app.update();

    assert_eq!(velocity(&app, rig), Vec3::ZERO);
    assert_eq!(controller(&app, rig).contacts().floor_contacts(), 1);
}
