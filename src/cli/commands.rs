use anyhow::Result;
use clap::{ArgGroup, Parser};

use std::path::PathBuf;

use crate::actions::{self, ActionError, ActionResult, CommandPrompt, ExecutionContext};
use crate::config::{self, Config};
use crate::daemon::{IpcPath, Xmms2Client};
use crate::menu::Program;

use super::output;

#[derive(Parser, Debug, Default)]
#[command(name = "xmms2-obmenu")]
#[command(about = "Openbox pipe menu for the XMMS2 media player")]
#[command(version)]
#[command(group(ArgGroup::new("action").multiple(false)))]
pub struct Cli {
    /// Path to config file (overrides XMMS2_OBMENU_CONFIG env var and default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    // ==================== Playback ====================
    /// Start playback
    #[arg(long, group = "action")]
    pub play: bool,

    /// Pause playback
    #[arg(long, group = "action")]
    pub pause: bool,

    /// Skip to the next entry
    #[arg(long, group = "action")]
    pub next: bool,

    /// Skip to the previous entry
    #[arg(long, group = "action")]
    pub prev: bool,

    // ==================== Medialib browser ====================
    /// Print the alphabet index pipe menu
    #[arg(long = "alphabetIndexMenu", group = "action")]
    pub alphabet_index_menu: bool,

    /// Print the artists under --alphabetIndex
    #[arg(long = "alphabetIndexArtists", group = "action")]
    pub alphabet_index_artists: bool,

    /// Print the albums of --artist
    #[arg(long = "indexAlbum", group = "action")]
    pub index_album: bool,

    /// Print the tracks of --artist and --album
    #[arg(long = "indexTracks", group = "action")]
    pub index_tracks: bool,

    // ==================== Playlists ====================
    /// Jump to --listPosition in the active playlist
    #[arg(long = "playlistJump", group = "action")]
    pub playlist_jump: bool,

    /// Insert medialib entry --id at the top of the active playlist
    #[arg(long = "insertIntoPlaylist", group = "action")]
    pub insert_into_playlist: bool,

    /// Remove --listPosition from the active playlist
    #[arg(long = "removeFromPlaylist", group = "action")]
    pub remove_from_playlist: bool,

    /// Make playlist --name the active one
    #[arg(long = "loadPlaylist", group = "action")]
    pub load_playlist: bool,

    /// Create a playlist, asking for a name unless --name is given
    #[arg(long = "createPlaylist", group = "action")]
    pub create_playlist: bool,

    /// Delete playlist --name
    #[arg(long = "removePlaylist", group = "action")]
    pub remove_playlist: bool,

    /// Print one page of the active playlist, starting at --offset
    #[arg(long = "playlistMenu", group = "action")]
    pub playlist_menu: bool,

    // ==================== Presets ====================
    /// Print the configured presets
    #[arg(long = "presetMenu", group = "action")]
    pub preset_menu: bool,

    /// Apply preset --preset to the daemon config
    #[arg(long = "loadPreset", group = "action")]
    pub load_preset: bool,

    // ==================== Parameters ====================
    /// Medialib id
    #[arg(long)]
    pub id: Option<u32>,

    /// Artist name
    #[arg(long)]
    pub artist: Option<String>,

    /// Album name
    #[arg(long)]
    pub album: Option<String>,

    /// Index key, usually a single letter
    #[arg(long = "alphabetIndex")]
    pub alphabet_index: Option<String>,

    /// Position in the active playlist, starting at 0
    #[arg(long = "listPosition", allow_negative_numbers = true)]
    pub list_position: Option<i32>,

    /// Playlist name
    #[arg(long)]
    pub name: Option<String>,

    /// First playlist position shown by --playlistMenu
    #[arg(long)]
    pub offset: Option<usize>,

    /// Preset name
    #[arg(long)]
    pub preset: Option<String>,
}

pub fn execute(cli: Cli) -> Result<()> {
    let produces_menu = cli.requests_menu();
    let command = match cli.to_command() {
        Ok(command) => command,
        Err(err) => fail(&err, produces_menu, &Program::current()),
    };

    let config = match config::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = ActionError::config(format!("{:#}", e));
            fail(&err, produces_menu, &Program::current());
        }
    };
    let program = program_for(&config);

    let connected = IpcPath::resolve(config.settings.ipc_path.as_deref()).and_then(|path| {
        tracing::debug!("connecting to {}", path);
        Xmms2Client::connect(&path, &config.settings.client_name, config.settings.timeout())
    });
    let mut client = match connected {
        Ok(client) => client,
        Err(e) => {
            let err = ActionError::from(e);
            // Openbox shows the reason in place of the menu, whatever was asked for
            output::print_menu(&output::error_menu(&err), &program)?;
            std::process::exit(err.code);
        }
    };

    let prompt = CommandPrompt::new(config.settings.prompt_command.clone());
    let mut ctx = ExecutionContext::new(&config, &mut client, &prompt);

    match actions::execute(command, &mut ctx) {
        Ok(ActionResult::Menu(document)) => output::print_menu(&document, &program),
        Ok(ActionResult::Done { action }) => {
            tracing::debug!("{} done", action);
            Ok(())
        }
        Err(err) => fail(&err, produces_menu, &program),
    }
}

/// report an error where the caller will see it and exit with its code
fn fail(err: &ActionError, produces_menu: bool, program: &Program) -> ! {
    tracing::debug!("exiting with {}: {}", err.code, err.message);
    if produces_menu {
        if let Err(e) = output::print_menu(&output::error_menu(err), program) {
            eprintln!("Error: {}", e);
        }
    } else {
        eprintln!("Error: {}", err);
    }
    std::process::exit(err.code);
}

/// executable written into menu actions
fn program_for(config: &Config) -> Program {
    match &config.settings.program {
        Some(path) => Program::new(path.as_str()),
        None => Program::current(),
    }
}
