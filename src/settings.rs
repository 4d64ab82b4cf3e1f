use std::path::PathBuf;

use bevy::{log::{info, warn}, prelude::{App, Plugin}};
use bevy_persistent::prelude::{Persistent, StorageFormat};
use vs_common::components::config::LocomotionConfig;
use vs_util::constants::{APP_NAME, SETTINGS_FILE};

pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(SETTINGS_FILE)
}

#[derive(Debug, Default)]
pub struct SettingsPlugin {}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let path = settings_path();
        let persistent = Persistent::<LocomotionConfig>::builder()
            .name("locomotion settings")
            .format(StorageFormat::Json)
            .path(path.clone())
            .default(LocomotionConfig::default())
            .build();

        let config = match persistent {
            Ok(persistent) => {
                info!("locomotion settings loaded from {}", path.display());
                let config = persistent.get().clone().validated();
                app.insert_resource(persistent);
                config
            }
            Err(error) => {
                warn!("could not load locomotion settings from {}: {}, using defaults", path.display(), error);
                LocomotionConfig::default()
            }
        };

        app.insert_resource(config);
    }
}
