use bevy::{
    app::AppExit,
    log::info,
    prelude::{EventReader, EventWriter, Quat, Query, Res, ResMut, Resource, Transform, Vec2, With},
    time::{Time, Timer, TimerMode},
};
use vs_common::{components::{input::LocomotionInput, rig::{VrHead, VrRig}}, events::LevelTransitionRequested};
use vs_movement::controller::LocomotionController;

pub const DEMO_LENGTH: f32 = 8.0;

#[derive(Resource)]
pub struct StatusTimer(pub Timer);

impl Default for StatusTimer {
    fn default() -> Self {
        StatusTimer(Timer::from_seconds(1.0, TimerMode::Repeating))
    }
}

fn scripted_input(t: f32) -> LocomotionInput {
    let stick = match t {
        t if t < 1.0 => Vec2::ZERO,
        t if t < 4.0 => Vec2::new(0.0, 1.0),
        t if t < 6.0 => Vec2::new(1.0, 0.0),
        _ => Vec2::ZERO,
    };

    LocomotionInput {
        stick,
        jump_held: (3.5..3.7).contains(&t),
    }
}

fn scripted_head_yaw(t: f32) -> f32 {
    if (2.0..3.0).contains(&t) {
        ((t - 2.0) * std::f32::consts::TAU).sin() * 0.8
    } else {
        0.0
    }
}

pub fn drive_script(
    time: Res<Time>,
    mut input: ResMut<LocomotionInput>,
    mut q_heads: Query<&mut Transform, With<VrHead>>,
    mut app_exit: EventWriter<AppExit>,
) {
    let t = time.elapsed_seconds();
    if t >= DEMO_LENGTH {
        info!("demo finished after {:.1}s", t);
        app_exit.send(AppExit);
        return;
    }

    *input = scripted_input(t);
    for mut head in q_heads.iter_mut() {
        head.rotation = Quat::from_rotation_y(scripted_head_yaw(t));
    }
}

pub fn log_status(
    time: Res<Time>,
    mut timer: ResMut<StatusTimer>,
    q_rigs: Query<(&Transform, &LocomotionController), With<VrRig>>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }

    for (transform, controller) in q_rigs.iter() {
        let contacts = controller.contacts();
        info!(
            "t={:.1}s pos={:.2?} mode={:?} phase={:?} factor={:.2} floor={} surf={}",
            time.elapsed_seconds(),
            transform.translation,
            controller.mode(),
            contacts.phase(),
            controller.acceleration_factor(),
            contacts.floor_contacts(),
            contacts.surf_contacts(),
        );
    }
}

pub fn log_level_transitions(mut transitions: EventReader<LevelTransitionRequested>) {
    for request in transitions.iter() {
        info!("level transition requested by {:?}", request.rig);
    }
}
