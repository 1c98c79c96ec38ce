mod schema;

pub use schema::{Config, Preset, Settings};

use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "XMMS2_OBMENU_CONFIG";
const CONFIG_DIR_NAME: &str = "xmms2-obmenu";

/// config location: `--config`, then `XMMS2_OBMENU_CONFIG`, then the XDG config dir
pub fn get_config_path(override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .ok_or_else(|| anyhow!("Could not find config directory"))?;

    Ok(base.join(CONFIG_DIR_NAME).join("config.json"))
}

/// load the config, falling back to defaults when the file does not exist
///
/// never writes to disk; a pipe menu runs on every hover
pub fn load_with_override(override_path: Option<&Path>) -> Result<Config> {
    let path = get_config_path(override_path)?;

    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    for problem in verify(&config) {
        tracing::warn!("{}: {}", path.display(), problem);
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// parse JSON (comments and trailing commas allowed) and expand `~`/`$VAR`
pub fn parse(content: &str) -> Result<Config> {
    let mut config: Config = json5::from_str(content)?;
    expand_paths(&mut config.settings);
    Ok(config)
}

fn expand_paths(settings: &mut Settings) {
    if let Some(path) = settings.ipc_path.as_mut() {
        *path = expand(path);
    }
    if let Some(program) = settings.program.as_mut() {
        *program = expand(program);
    }
    for word in settings.prompt_command.iter_mut() {
        *word = expand(word);
    }
}

fn expand(value: &str) -> String {
    match shellexpand::full(value) {
        Ok(expanded) => expanded.into_owned(),
        Err(e) => {
            tracing::warn!("could not expand '{}': {}", value, e);
            value.to_string()
        }
    }
}

/// Verify configuration and return a list of problems
pub fn verify(config: &Config) -> Vec<String> {
    let mut errors = Vec::new();

    if config.settings.alphabet_keys().is_empty() {
        errors.push("settings.alphabet: must contain at least one key".to_string());
    }

    if config.settings.prompt_command.is_empty() {
        errors.push("settings.prompt_command: must name a program".to_string());
    }

    if config.settings.playlist_window.page == 0 {
        errors.push("settings.playlist_window.page: must be at least 1".to_string());
    }

    if config.settings.client_name.is_empty()
        || !config
            .settings
            .client_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        errors.push(format!(
            "settings.client_name: '{}' may only contain letters, digits, '_' and '-'",
            config.settings.client_name
        ));
    }

    let mut seen = HashSet::new();
    for (i, preset) in config.presets.iter().enumerate() {
        let prefix = format!("presets[{}]", i);

        if preset.name.trim().is_empty() {
            errors.push(format!("{}: name must not be empty", prefix));
        } else if !seen.insert(preset.name.as_str()) {
            errors.push(format!("{}: duplicate preset name '{}'", prefix, preset.name));
        }

        if preset.values.is_empty() {
            errors.push(format!("{}: preset '{}' has no values", prefix, preset.name));
        }
    }

    errors
}
