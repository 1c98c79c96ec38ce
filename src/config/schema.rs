use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Config {
    pub fn find_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

/// named set of daemon config values applied together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

pub const DEFAULT_CLIENT_NAME: &str = "xmms2_obmenu";
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// daemon url (`unix:///path` or `tcp://host:port`); `XMMS_PATH` overrides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipc_path: Option<String>,
    #[serde(default = "default_client_name")]
    pub client_name: String,
    /// read/write timeout for daemon calls, 0 disables it
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// index keys of the medialib browser, one per character
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    #[serde(default)]
    pub playlist_window: PlaylistWindow,
    /// command printing a new playlist name on stdout
    #[serde(default = "default_prompt_command")]
    pub prompt_command: Vec<String>,
    /// executable written into menu actions (defaults to the running binary)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

fn default_client_name() -> String {
    DEFAULT_CLIENT_NAME.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_prompt_command() -> Vec<String> {
    [
        "zenity",
        "--entry",
        "--title=New Playlist Name",
        "--text=Enter a new Playlist Name",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ipc_path: None,
            client_name: default_client_name(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            alphabet: default_alphabet(),
            playlist_window: PlaylistWindow::default(),
            prompt_command: default_prompt_command(),
            program: None,
        }
    }
}

impl Settings {
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }

    pub fn alphabet_keys(&self) -> Vec<String> {
        self.alphabet
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string())
            .collect()
    }
}

pub const DEFAULT_WINDOW_BEFORE: usize = 5;
pub const DEFAULT_WINDOW_AFTER: usize = 15;
pub const DEFAULT_WINDOW_PAGE: usize = 30;

/// how much of the active playlist the menus show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistWindow {
    /// entries shown before the current one in the main menu
    #[serde(default = "default_window_before")]
    pub before: usize,
    /// entries shown after the current one in the main menu
    #[serde(default = "default_window_after")]
    pub after: usize,
    /// entries per page of the full playlist menu
    #[serde(default = "default_window_page")]
    pub page: usize,
}

fn default_window_before() -> usize {
    DEFAULT_WINDOW_BEFORE
}

fn default_window_after() -> usize {
    DEFAULT_WINDOW_AFTER
}

fn default_window_page() -> usize {
    DEFAULT_WINDOW_PAGE
}

impl Default for PlaylistWindow {
    fn default() -> Self {
        Self {
            before: DEFAULT_WINDOW_BEFORE,
            after: DEFAULT_WINDOW_AFTER,
            page: DEFAULT_WINDOW_PAGE,
        }
    }
}

impl PlaylistWindow {
    /// index range shown around `current` in a playlist of `len` entries
    pub fn around(&self, current: Option<usize>, len: usize) -> std::ops::Range<usize> {
        let current = current.unwrap_or(0).min(len.saturating_sub(1));
        let start = current.saturating_sub(self.before);
        let end = current
            .saturating_add(self.after)
            .saturating_add(1)
            .min(len);
        start..end.max(start)
    }
}
