//! common utilities for action handlers

use std::ops::Range;

use crate::actions::command::{flags, params};
use crate::actions::error::ActionError;
use crate::daemon::{info_str, DaemonError, MediaDaemon, MediaInfo, Value};
use crate::menu::{Invocation, MenuNode};

pub const NOTHING_FOUND: &str = "Nothing found";
pub const PLAYLIST_EMPTY: &str = "Playlist is empty";

/// `artist - album - title`, with `Unknown` for a missing artist
pub fn entry_label(info: &MediaInfo) -> String {
    format!(
        "{} - {} - {}",
        info_str(info, "artist").unwrap_or_else(|| "Unknown".to_string()),
        info_str(info, "album").unwrap_or_default(),
        info_str(info, "title").unwrap_or_default()
    )
}

/// medialib id of a query row
pub fn row_id(info: &MediaInfo) -> Option<u32> {
    info.get("id")
        .and_then(|v| v.as_int().ok())
        .and_then(|id| u32::try_from(id).ok())
}

/// submenu for the active playlist entry at `position`
///
/// the id includes the position so a track queued twice still gets
/// distinct menus
pub fn entry_submenu(position: usize, id: u32, info: &MediaInfo, current_id: u32) -> MenuNode {
    MenuNode::submenu(
        format!("xmms-activePlaylist-{}-{}", position, id),
        entry_label(info),
        vec![
            MenuNode::item(
                "jump",
                Invocation::new(flags::PLAYLIST_JUMP).param(params::LIST_POSITION, position),
            ),
            MenuNode::separator(),
            MenuNode::item(
                "delete",
                Invocation::new(flags::REMOVE_FROM_PLAYLIST).param(params::LIST_POSITION, position),
            ),
        ],
    )
    .marked(id != 0 && id == current_id)
}

/// entry submenus for `range` of the playlist, plus links to what lies outside it
pub fn entry_window(
    daemon: &mut dyn MediaDaemon,
    entries: &[u32],
    range: Range<usize>,
    current_id: u32,
    page: usize,
) -> Result<Vec<MenuNode>, ActionError> {
    let page = page.max(1);
    let start = range.start.min(entries.len());
    let end = range.end.clamp(start, entries.len());
    let mut nodes = Vec::with_capacity(end - start + 2);

    if start > 0 {
        nodes.push(MenuNode::pipe(
            format!("... {} earlier", start),
            Invocation::new(flags::PLAYLIST_MENU).param(params::OFFSET, start.saturating_sub(page)),
        ));
    }

    for (position, &id) in entries.iter().enumerate().take(end).skip(start) {
        let info = entry_info(daemon, id)?;
        nodes.push(entry_submenu(position, id, &info, current_id));
    }

    if end < entries.len() {
        nodes.push(MenuNode::pipe(
            format!("... {} more", entries.len() - end),
            Invocation::new(flags::PLAYLIST_MENU).param(params::OFFSET, end),
        ));
    }

    Ok(nodes)
}

/// metadata for a playlist entry; entries the medialib no longer knows render blank
fn entry_info(daemon: &mut dyn MediaDaemon, id: u32) -> Result<MediaInfo, ActionError> {
    match daemon.medialib_get_info(id) {
        Ok(info) => Ok(info),
        Err(DaemonError::Server(message)) => {
            tracing::warn!("no medialib info for id {}: {}", id, message);
            let mut info = MediaInfo::new();
            info.insert("id".to_string(), Value::from(id));
            Ok(info)
        }
        Err(e) => Err(e.into()),
    }
}

/// pipe menus must never be empty or Openbox shows a parse error
pub fn or_nothing_found(nodes: Vec<MenuNode>) -> Vec<MenuNode> {
    if nodes.is_empty() {
        vec![MenuNode::label(NOTHING_FOUND)]
    } else {
        nodes
    }
}
