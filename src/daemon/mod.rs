//! XMMS2 daemon access
//!
//! [`MediaDaemon`] is the seam the menu handlers talk to. [`Xmms2Client`]
//! implements it over the native IPC protocol; tests substitute an in-memory
//! fake.

mod client;
mod collection;
mod error;
#[cfg(test)]
pub mod fake;
pub mod ipc;
pub mod protocol;
pub mod value;

pub use client::Xmms2Client;
pub use collection::{Collection, CollectionKind};
pub use error::{DaemonError, Result};
pub use ipc::IpcPath;
pub use value::Value;

use std::collections::BTreeMap;

/// flattened metadata of one medialib entry (`artist`, `album`, `id`, ...)
pub type MediaInfo = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

impl PlaybackStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            protocol::PLAYBACK_STATUS_PLAY => Self::Playing,
            protocol::PLAYBACK_STATUS_PAUSE => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

/// medialib query: which entries, in what order, which fields to return
#[derive(Debug, Clone, PartialEq)]
pub struct InfoQuery {
    pub collection: Collection,
    pub order: Vec<String>,
    pub fetch: Vec<String>,
    pub group: Vec<String>,
}

impl InfoQuery {
    pub fn new(collection: Collection, fetch: &[&str]) -> Self {
        Self {
            collection,
            order: Vec::new(),
            fetch: fetch.iter().map(|f| f.to_string()).collect(),
            group: Vec::new(),
        }
    }

    pub fn order_by(mut self, fields: &[&str]) -> Self {
        self.order = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn group_by(mut self, fields: &[&str]) -> Self {
        self.group = fields.iter().map(|f| f.to_string()).collect();
        self
    }
}

/// operations the menu needs from the media daemon
///
/// playlist operations act on the active playlist unless a name is given
pub trait MediaDaemon {
    fn playback_status(&mut self) -> Result<PlaybackStatus>;
    fn playback_start(&mut self) -> Result<()>;
    fn playback_pause(&mut self) -> Result<()>;
    /// skip to whatever entry is queued next
    fn playback_tickle(&mut self) -> Result<()>;
    /// medialib id of the playing entry, 0 when there is none
    fn playback_current_id(&mut self) -> Result<u32>;

    fn playlist_set_next_rel(&mut self, delta: i32) -> Result<()>;
    fn playlist_set_next(&mut self, position: i32) -> Result<()>;
    fn playlist_list(&mut self) -> Result<Vec<String>>;
    fn playlist_current_active(&mut self) -> Result<String>;
    /// position of the current entry, `None` when nothing is selected
    fn playlist_current_pos(&mut self) -> Result<Option<u32>>;
    fn playlist_list_entries(&mut self) -> Result<Vec<u32>>;
    fn playlist_insert_id(&mut self, position: i32, id: u32) -> Result<()>;
    fn playlist_remove_entry(&mut self, position: i32) -> Result<()>;
    fn playlist_load(&mut self, name: &str) -> Result<()>;
    fn playlist_create(&mut self, name: &str) -> Result<()>;
    fn playlist_remove(&mut self, name: &str) -> Result<()>;

    fn medialib_get_info(&mut self, id: u32) -> Result<MediaInfo>;
    fn coll_query_infos(&mut self, query: &InfoQuery) -> Result<Vec<MediaInfo>>;

    fn config_list_values(&mut self) -> Result<BTreeMap<String, String>>;
    fn config_set_value(&mut self, key: &str, value: &str) -> Result<()>;
}

/// string form of a metadata field, if present
pub fn info_str(info: &MediaInfo, key: &str) -> Option<String> {
    info.get(key).and_then(Value::display).filter(|s| !s.is_empty())
}
