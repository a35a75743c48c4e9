//! Persisted application settings.
//!
//! Settings live in a small JSON file (see [`crate::paths::config_file`]).
//! They are loaded once at startup; saves are requested through
//! [`SaveConfigRequest`] and gated on the dirty flag. A missing file is
//! written back once with the defaults, so users get an editable file on
//! first run.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    ANCHOR_ENVIRONMENT_ROOT, ANCHOR_RUNTIME_ROOT, DEFAULT_BLOCKED_NAME_FRAGMENTS,
};

/// Settings persisted to disk. Every field has a serde default so old
/// or hand-edited files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Root names the reference scan looks for, checked in order.
    /// The first entity whose name exactly equals one of these becomes
    /// the scan root.
    #[serde(default = "default_anchor_names")]
    pub anchor_names: Vec<String>,

    /// Name fragments that exclude a widget from the context menu
    /// (matched case-insensitively as substrings)
    #[serde(default = "default_blocked_fragments")]
    pub blocked_name_fragments: Vec<String>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            anchor_names: default_anchor_names(),
            blocked_name_fragments: default_blocked_fragments(),
        }
    }
}

fn default_anchor_names() -> Vec<String> {
    vec![
        ANCHOR_ENVIRONMENT_ROOT.to_string(),
        ANCHOR_RUNTIME_ROOT.to_string(),
    ]
}

fn default_blocked_fragments() -> Vec<String> {
    DEFAULT_BLOCKED_NAME_FRAGMENTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Load settings from `config_path`, falling back to defaults on any error
fn load_config(config_path: &Path) -> AppConfigData {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return AppConfigData::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                data
            }
            Err(e) => {
                warn!("Config file corrupted, using defaults: {}", e);
                AppConfigData::default()
            }
        },
        Err(e) => {
            warn!("Could not read config file, using defaults: {}", e);
            AppConfigData::default()
        }
    }
}

fn save_config(config: &AppConfig) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(&config.data).map_err(std::io::Error::other)?;
    std::fs::write(&config.config_path, json)
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut save_requests: MessageWriter<SaveConfigRequest>,
) {
    let first_run = !config.config_path.exists();
    config.data = load_config(&config.config_path);
    config.dirty = first_run;
    if first_run {
        save_requests.write(SaveConfigRequest);
    }
}

/// Save on request. The dirty flag survives a failed write so the next
/// request retries.
fn save_config_system(
    mut requests: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    requests.clear();
    if !config.dirty {
        return;
    }

    match save_config(&config) {
        Ok(()) => {
            info!("Config saved to {:?}", config.config_path);
            config.dirty = false;
        }
        Err(e) => error!("Failed to save config: {}", e),
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system)
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_both_anchor_names() {
        let data = AppConfigData::default();
        assert_eq!(
            data.anchor_names,
            vec![
                ANCHOR_ENVIRONMENT_ROOT.to_string(),
                ANCHOR_RUNTIME_ROOT.to_string()
            ]
        );
        assert_eq!(data.blocked_name_fragments, vec!["canvas".to_string()]);
    }

    #[test]
    fn test_settings_survive_serialization() {
        let data = AppConfigData {
            anchor_names: vec!["Root A".to_string(), "Root B".to_string()],
            blocked_name_fragments: vec!["canvas".to_string(), "debug".to_string()],
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.anchor_names, data.anchor_names);
        assert_eq!(parsed.blocked_name_fragments, data.blocked_name_fragments);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: AppConfigData = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.anchor_names, default_anchor_names());
        assert_eq!(parsed.blocked_name_fragments, default_blocked_fragments());
    }

    #[test]
    fn test_load_from_missing_path_yields_defaults() {
        let data = load_config(Path::new("does-not-exist/config.json"));
        assert_eq!(data.anchor_names, default_anchor_names());
    }
}
