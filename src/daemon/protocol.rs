//! XMMS2 IPC object and command numbers (protocol of the 0.8 series)
//!
//! only the commands this client sends are listed

#![allow(dead_code)]

pub const PROTOCOL_VERSION: i64 = 23;

/// reply command ids
pub const CMD_REPLY: u32 = 0;
pub const CMD_ERROR: u32 = 1;

pub mod object {
    pub const SIGNAL: u32 = 0;
    pub const MAIN: u32 = 1;
    pub const PLAYLIST: u32 = 2;
    pub const CONFIG: u32 = 3;
    pub const PLAYBACK: u32 = 4;
    pub const MEDIALIB: u32 = 5;
    pub const COLLECTION: u32 = 6;
}

pub mod main {
    pub const HELLO: u32 = 32;
}

pub mod playlist {
    pub const SET_POS: u32 = 33;
    pub const SET_POS_REL: u32 = 34;
    pub const REMOVE_ENTRY: u32 = 37;
    pub const LIST: u32 = 39;
    pub const CURRENT_POS: u32 = 40;
    pub const CURRENT_ACTIVE: u32 = 41;
    pub const INSERT_COLL: u32 = 43;
    pub const LOAD: u32 = 44;
}

pub mod config {
    pub const SET_VALUE: u32 = 33;
    pub const LIST_VALUES: u32 = 35;
}

pub mod playback {
    pub const START: u32 = 32;
    pub const PAUSE: u32 = 34;
    /// "tickle": drop the current decoder so the next entry starts
    pub const DECODER_KILL: u32 = 35;
    pub const STATUS: u32 = 41;
    pub const CURRENT_ID: u32 = 42;
}

pub mod medialib {
    pub const INFO: u32 = 32;
}

pub mod collection {
    pub const LIST: u32 = 33;
    pub const SAVE: u32 = 34;
    pub const REMOVE: u32 = 35;
    pub const QUERY_INFOS: u32 = 39;
}

/// collection namespace holding playlists
pub const NS_PLAYLISTS: &str = "Playlists";

/// name the daemon resolves to the active playlist
pub const ACTIVE_PLAYLIST: &str = "_active";

pub const PLAYBACK_STATUS_STOP: i64 = 0;
pub const PLAYBACK_STATUS_PLAY: i64 = 1;
pub const PLAYBACK_STATUS_PAUSE: i64 = 2;
