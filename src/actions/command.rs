//! unified command definitions
//!
//! one variant per action flag. the CLI parses into this type and menu
//! entries re-invoke the program with [`Command::flag`] names, so the two
//! stay in sync through the constants in [`flags`].

/// action flag names, as written on the command line and in menu actions
pub mod flags {
    pub const PLAY: &str = "play";
    pub const PAUSE: &str = "pause";
    pub const NEXT: &str = "next";
    pub const PREV: &str = "prev";

    pub const ALPHABET_INDEX_MENU: &str = "alphabetIndexMenu";
    pub const ALPHABET_INDEX_ARTISTS: &str = "alphabetIndexArtists";
    pub const INDEX_ALBUM: &str = "indexAlbum";
    pub const INDEX_TRACKS: &str = "indexTracks";

    pub const PLAYLIST_JUMP: &str = "playlistJump";
    pub const INSERT_INTO_PLAYLIST: &str = "insertIntoPlaylist";
    pub const REMOVE_FROM_PLAYLIST: &str = "removeFromPlaylist";
    pub const LOAD_PLAYLIST: &str = "loadPlaylist";
    pub const CREATE_PLAYLIST: &str = "createPlaylist";
    pub const REMOVE_PLAYLIST: &str = "removePlaylist";
    pub const PLAYLIST_MENU: &str = "playlistMenu";

    pub const PRESET_MENU: &str = "presetMenu";
    pub const LOAD_PRESET: &str = "loadPreset";
}

/// parameter flag names
pub mod params {
    pub const ID: &str = "id";
    pub const ARTIST: &str = "artist";
    pub const ALBUM: &str = "album";
    pub const ALPHABET_INDEX: &str = "alphabetIndex";
    pub const LIST_POSITION: &str = "listPosition";
    pub const NAME: &str = "name";
    pub const OFFSET: &str = "offset";
    pub const PRESET: &str = "preset";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// top level menu (no action flag)
    MainMenu,

    // ==================== Playback ====================
    Play,
    Pause,
    Next,
    Prev,

    // ==================== Medialib browser ====================
    AlphabetIndexMenu,
    AlphabetIndexArtists { key: String },
    IndexAlbum { artist: String },
    IndexTracks { artist: String, album: String },

    // ==================== Playlists ====================
    PlaylistJump { position: i32 },
    InsertIntoPlaylist { id: u32 },
    RemoveFromPlaylist { position: i32 },
    /// `None` is accepted and ignored
    LoadPlaylist { name: Option<String> },
    /// `None` asks for a name interactively
    CreatePlaylist { name: Option<String> },
    /// `None` is accepted and ignored
    RemovePlaylist { name: Option<String> },
    PlaylistMenu { offset: usize },

    // ==================== Presets ====================
    PresetMenu,
    LoadPreset { name: String },
}

impl Command {
    /// flag that selects this command, `None` for the main menu
    pub fn flag(&self) -> Option<&'static str> {
        let flag = match self {
            Command::MainMenu => return None,
            Command::Play => flags::PLAY,
            Command::Pause => flags::PAUSE,
            Command::Next => flags::NEXT,
            Command::Prev => flags::PREV,
            Command::AlphabetIndexMenu => flags::ALPHABET_INDEX_MENU,
            Command::AlphabetIndexArtists { .. } => flags::ALPHABET_INDEX_ARTISTS,
            Command::IndexAlbum { .. } => flags::INDEX_ALBUM,
            Command::IndexTracks { .. } => flags::INDEX_TRACKS,
            Command::PlaylistJump { .. } => flags::PLAYLIST_JUMP,
            Command::InsertIntoPlaylist { .. } => flags::INSERT_INTO_PLAYLIST,
            Command::RemoveFromPlaylist { .. } => flags::REMOVE_FROM_PLAYLIST,
            Command::LoadPlaylist { .. } => flags::LOAD_PLAYLIST,
            Command::CreatePlaylist { .. } => flags::CREATE_PLAYLIST,
            Command::RemovePlaylist { .. } => flags::REMOVE_PLAYLIST,
            Command::PlaylistMenu { .. } => flags::PLAYLIST_MENU,
            Command::PresetMenu => flags::PRESET_MENU,
            Command::LoadPreset { .. } => flags::LOAD_PRESET,
        };
        Some(flag)
    }

    /// name used in logs
    pub fn method_name(&self) -> &'static str {
        self.flag().unwrap_or("menu")
    }

    /// whether stdout is read by the window manager as a menu
    pub fn produces_menu(&self) -> bool {
        matches!(
            self,
            Command::MainMenu
                | Command::AlphabetIndexMenu
                | Command::AlphabetIndexArtists { .. }
                | Command::IndexAlbum { .. }
                | Command::IndexTracks { .. }
                | Command::PlaylistMenu { .. }
                | Command::PresetMenu
        )
    }
}
