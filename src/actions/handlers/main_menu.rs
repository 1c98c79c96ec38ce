//! top level menu: playback controls, medialib, playlists, active playlist

use crate::actions::command::{flags, params};
use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::handlers::common;
use crate::actions::result::ActionResult;
use crate::daemon::PlaybackStatus;
use crate::menu::{Invocation, MenuDocument, MenuNode};

/// execute main menu action
pub fn execute(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let status = ctx.daemon.playback_status()?;
    let playlists = ctx.daemon.playlist_list()?;
    let active = ctx.daemon.playlist_current_active()?;
    let entries = ctx.daemon.playlist_list_entries()?;
    let current_id = ctx.daemon.playback_current_id()?;
    let current_pos = ctx.daemon.playlist_current_pos()?;
    tracing::debug!(
        "status {:?}, playlist '{}' with {} entries, current id {} at {:?}",
        status,
        active,
        entries.len(),
        current_id,
        current_pos
    );

    let mut nodes = playback_controls(status);

    nodes.push(MenuNode::pipe(
        "Medialib",
        Invocation::new(flags::ALPHABET_INDEX_MENU),
    ));
    nodes.push(MenuNode::separator());

    nodes.push(playlists_submenu(&playlists, &active));
    nodes.push(MenuNode::separator());

    if entries.is_empty() {
        nodes.push(MenuNode::label(common::PLAYLIST_EMPTY));
    } else {
        let current = current_pos
            .map(|pos| pos as usize)
            .or_else(|| entries.iter().position(|&id| id == current_id));
        let window = &ctx.config.settings.playlist_window;
        let range = window.around(current, entries.len());
        nodes.extend(common::entry_window(
            ctx.daemon,
            &entries,
            range,
            current_id,
            window.page,
        )?);
    }

    if !ctx.config.presets.is_empty() {
        nodes.push(MenuNode::separator());
        nodes.push(MenuNode::pipe("Presets", Invocation::new(flags::PRESET_MENU)));
    }

    Ok(ActionResult::menu(MenuDocument::new(nodes)))
}

fn playback_controls(status: PlaybackStatus) -> Vec<MenuNode> {
    let toggle = match status {
        PlaybackStatus::Playing => MenuNode::item("⧐ Pause", Invocation::new(flags::PAUSE)),
        PlaybackStatus::Paused | PlaybackStatus::Stopped => {
            MenuNode::item("⧐ Play", Invocation::new(flags::PLAY))
        }
    };

    vec![
        toggle,
        MenuNode::item("≫ next", Invocation::new(flags::NEXT)),
        MenuNode::item("≪ prev", Invocation::new(flags::PREV)),
        MenuNode::separator(),
    ]
}

/// `Playlist: <active>` submenu with one load/delete submenu per playlist
fn playlists_submenu(playlists: &[String], active: &str) -> MenuNode {
    let mut children = vec![
        MenuNode::item("New Playlist", Invocation::new(flags::CREATE_PLAYLIST)),
        MenuNode::separator(),
    ];

    // names starting with '_' are daemon internals such as "_active"
    for name in playlists.iter().filter(|name| !name.starts_with('_')) {
        children.push(
            MenuNode::submenu(
                format!("xmms-playlist-{}", name),
                name.as_str(),
                vec![
                    MenuNode::item(
                        "load",
                        Invocation::new(flags::LOAD_PLAYLIST).param(params::NAME, name),
                    ),
                    MenuNode::separator(),
                    MenuNode::item(
                        "delete",
                        Invocation::new(flags::REMOVE_PLAYLIST).param(params::NAME, name),
                    ),
                ],
            )
            .marked(name == active),
        );
    }

    MenuNode::submenu("xmms-playlists", format!("Playlist: {}", active), children)
}
