//! unified action layer
//!
//! every flag combination the CLI accepts is parsed into one [`Command`] and
//! executed here. menu commands produce a [`MenuDocument`](crate::menu::MenuDocument)
//! for Openbox to read; the rest perform one daemon call and print nothing

mod command;
mod context;
mod error;
mod handlers;
mod prompt;
mod result;

pub use command::{flags, params, Command};
pub use context::ExecutionContext;
pub use error::ActionError;
pub use prompt::CommandPrompt;
pub use result::ActionResult;

/// execute a command with the given context
pub fn execute(cmd: Command, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    tracing::debug!("executing {}", cmd.method_name());

    match cmd {
        Command::MainMenu => handlers::main_menu::execute(ctx),

        // playback commands
        Command::Play => handlers::playback::execute_play(ctx),
        Command::Pause => handlers::playback::execute_pause(ctx),
        Command::Next => handlers::playback::execute_next(ctx),
        Command::Prev => handlers::playback::execute_prev(ctx),

        // medialib browser
        Command::AlphabetIndexMenu => handlers::medialib::execute_alphabet_index(ctx),
        Command::AlphabetIndexArtists { key } => handlers::medialib::execute_artists(&key, ctx),
        Command::IndexAlbum { artist } => handlers::medialib::execute_albums(&artist, ctx),
        Command::IndexTracks { artist, album } => {
            handlers::medialib::execute_tracks(&artist, &album, ctx)
        }

        // playlist commands
        Command::PlaylistJump { position } => handlers::playlist::execute_jump(position, ctx),
        Command::InsertIntoPlaylist { id } => handlers::playlist::execute_insert(id, ctx),
        Command::RemoveFromPlaylist { position } => {
            handlers::playlist::execute_remove_entry(position, ctx)
        }
        Command::LoadPlaylist { name } => handlers::playlist::execute_load(name, ctx),
        Command::CreatePlaylist { name } => handlers::playlist::execute_create(name, ctx),
        Command::RemovePlaylist { name } => handlers::playlist::execute_remove(name, ctx),
        Command::PlaylistMenu { offset } => handlers::playlist::execute_menu(offset, ctx),

        // preset commands
        Command::PresetMenu => handlers::presets::execute_menu(ctx),
        Command::LoadPreset { name } => handlers::presets::execute_load(&name, ctx),
    }
}
