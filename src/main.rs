use std::time::Duration;

use bevy::{
    app::ScheduleRunnerPlugin,
    hierarchy::HierarchyPlugin,
    log::{Level, LogPlugin},
    prelude::{App, IntoSystemConfigs, PluginGroup, Startup, Update},
    time::TimeUpdateStrategy,
    transform::TransformPlugin,
    MinimalPlugins,
};
use script::{drive_script, log_level_transitions, log_status, StatusTimer};
use settings::SettingsPlugin;
use vs_common::{CommonPlugin, LocomotionSet};
use vs_core::CorePlugin;
use vs_movement::LocomotionPlugin;

mod scene;
mod script;
mod settings;

const TICK: f64 = 1.0 / 90.0;

fn main() {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(TICK))))
        .add_plugins(LogPlugin {
            filter: "wgpu=error,vs_movement=debug,vs_core=info,vr_surf=info".into(),
            level: Level::INFO,
        })
        .add_plugins((TransformPlugin, HierarchyPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(TICK)))
        .add_plugins(SettingsPlugin {})
        .add_plugins(CommonPlugin {})
        .add_plugins(CorePlugin {})
        .add_plugins(LocomotionPlugin {});

    app.init_resource::<StatusTimer>()
        .add_systems(Startup, (scene::spawn_level, scene::spawn_rig))
        .add_systems(Update, (
            drive_script.before(LocomotionSet::ContactFeed),
            log_status.after(LocomotionSet::Respawn),
            log_level_transitions.after(LocomotionSet::Contacts),
        ));

    app.run();
}
