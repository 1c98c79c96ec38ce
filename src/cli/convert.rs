//! conversion from parsed flags to the unified command

use crate::actions::{params, ActionError, Command};

use super::commands::Cli;

/// value of a parameter the chosen action cannot do without
fn required<T: Clone>(value: &Option<T>, param: &str, action: &str) -> Result<T, ActionError> {
    value
        .clone()
        .ok_or_else(|| ActionError::invalid_args(format!("--{} requires --{}", action, param)))
}

impl Cli {
    /// convert CLI flags to unified Command enum
    ///
    /// no action flag means the main menu
    pub fn to_command(&self) -> Result<Command, ActionError> {
        use crate::actions::flags::*;

        let command = if self.play {
            Command::Play
        } else if self.pause {
            Command::Pause
        } else if self.next {
            Command::Next
        } else if self.prev {
            Command::Prev
        } else if self.alphabet_index_menu {
            Command::AlphabetIndexMenu
        } else if self.alphabet_index_artists {
            Command::AlphabetIndexArtists {
                key: required(&self.alphabet_index, params::ALPHABET_INDEX, ALPHABET_INDEX_ARTISTS)?,
            }
        } else if self.index_album {
            Command::IndexAlbum {
                artist: required(&self.artist, params::ARTIST, INDEX_ALBUM)?,
            }
        } else if self.index_tracks {
            Command::IndexTracks {
                artist: required(&self.artist, params::ARTIST, INDEX_TRACKS)?,
                album: required(&self.album, params::ALBUM, INDEX_TRACKS)?,
            }
        } else if self.playlist_jump {
            Command::PlaylistJump {
                position: required(&self.list_position, params::LIST_POSITION, PLAYLIST_JUMP)?,
            }
        } else if self.insert_into_playlist {
            Command::InsertIntoPlaylist {
                id: required(&self.id, params::ID, INSERT_INTO_PLAYLIST)?,
            }
        } else if self.remove_from_playlist {
            Command::RemoveFromPlaylist {
                position: required(
                    &self.list_position,
                    params::LIST_POSITION,
                    REMOVE_FROM_PLAYLIST,
                )?,
            }
        } else if self.load_playlist {
            Command::LoadPlaylist {
                name: self.name.clone(),
            }
        } else if self.create_playlist {
            Command::CreatePlaylist {
                name: self.name.clone(),
            }
        } else if self.remove_playlist {
            Command::RemovePlaylist {
                name: self.name.clone(),
            }
        } else if self.playlist_menu {
            Command::PlaylistMenu {
                offset: self.offset.unwrap_or(0),
            }
        } else if self.preset_menu {
            Command::PresetMenu
        } else if self.load_preset {
            Command::LoadPreset {
                name: required(&self.preset, params::PRESET, LOAD_PRESET)?,
            }
        } else {
            Command::MainMenu
        };

        Ok(command)
    }

    /// whether the chosen action answers with a menu
    ///
    /// decided from the flags alone, so it holds even when `to_command` fails
    pub fn requests_menu(&self) -> bool {
        let imperative = self.play
            || self.pause
            || self.next
            || self.prev
            || self.playlist_jump
            || self.insert_into_playlist
            || self.remove_from_playlist
            || self.load_playlist
            || self.create_playlist
            || self.remove_playlist
            || self.load_preset;
        !imperative
    }
}
