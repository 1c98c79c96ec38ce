//! medialib browser: alphabet index -> artists -> albums -> tracks
//!
//! every level is a pipe menu, so only the level being hovered is queried

use crate::actions::command::{flags, params};
use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::handlers::common;
use crate::actions::result::ActionResult;
use crate::daemon::{info_str, Collection, InfoQuery, MediaInfo};
use crate::menu::{Invocation, MenuDocument, MenuNode};

/// execute alphabet index menu action
pub fn execute_alphabet_index(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let mut nodes = Vec::new();

    for key in ctx.config.settings.alphabet_keys() {
        let query = InfoQuery::new(artist_prefix(&key), &["artist"]);
        let count = ctx.daemon.coll_query_infos(&query)?.len();
        tracing::trace!("index {}: {} rows", key, count);

        nodes.push(MenuNode::pipe(
            format!("{} ({})", key, count),
            Invocation::new(flags::ALPHABET_INDEX_ARTISTS).param(params::ALPHABET_INDEX, &key),
        ));
    }

    Ok(ActionResult::menu(MenuDocument::new(common::or_nothing_found(nodes))))
}

/// execute artists action for one index key
pub fn execute_artists(key: &str, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let query = InfoQuery::new(artist_prefix(key), &["artist"])
        .order_by(&["artist"])
        .group_by(&["artist"]);
    let rows = ctx.daemon.coll_query_infos(&query)?;

    let nodes = rows
        .iter()
        .filter_map(|row| info_str(row, "artist"))
        .map(|artist| {
            MenuNode::pipe(
                artist.clone(),
                Invocation::new(flags::INDEX_ALBUM).param(params::ARTIST, artist),
            )
        })
        .collect();

    Ok(ActionResult::menu(MenuDocument::new(common::or_nothing_found(nodes))))
}

/// execute albums action for one artist
pub fn execute_albums(artist: &str, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let query = InfoQuery::new(Collection::equals("artist", artist), &["album", "year", "date"])
        .order_by(&["album"])
        .group_by(&["album"]);
    let rows = ctx.daemon.coll_query_infos(&query)?;

    let mut nodes = Vec::new();
    for row in &rows {
        let Some(album) = info_str(row, "album") else {
            continue;
        };
        nodes.push(MenuNode::pipe(
            album_label(row, &album),
            Invocation::new(flags::INDEX_TRACKS)
                .param(params::ARTIST, artist)
                .param(params::ALBUM, album),
        ));
    }

    Ok(ActionResult::menu(MenuDocument::new(common::or_nothing_found(nodes))))
}

/// execute tracks action for one album
pub fn execute_tracks(
    artist: &str,
    album: &str,
    ctx: &mut ExecutionContext,
) -> Result<ActionResult, ActionError> {
    let collection = Collection::intersection(vec![
        Collection::equals("artist", artist),
        Collection::equals("album", album),
    ]);
    let query = InfoQuery::new(collection, &["tracknr", "title", "id"]).order_by(&["tracknr"]);
    let rows = ctx.daemon.coll_query_infos(&query)?;

    let mut nodes = Vec::new();
    for row in &rows {
        let Some(id) = common::row_id(row) else {
            tracing::debug!("track row without id: {:?}", row);
            continue;
        };
        nodes.push(MenuNode::submenu(
            format!("xmms-track-{}", id),
            track_label(row),
            vec![MenuNode::item(
                "Add to Playlist",
                Invocation::new(flags::INSERT_INTO_PLAYLIST).param(params::ID, id),
            )],
        ));
    }

    Ok(ActionResult::menu(MenuDocument::new(common::or_nothing_found(nodes))))
}

fn artist_prefix(key: &str) -> Collection {
    Collection::matching("artist", &format!("{}*", key))
}

/// `[year]album`, falling back to the date tag for the year
fn album_label(row: &MediaInfo, album: &str) -> String {
    match info_str(row, "year").or_else(|| info_str(row, "date")) {
        Some(year) => format!("[{}]{}", year, album),
        None => album.to_string(),
    }
}

fn track_label(row: &MediaInfo) -> String {
    let title = info_str(row, "title").unwrap_or_default();
    match info_str(row, "tracknr") {
        Some(tracknr) => format!("{}. {}", tracknr, title),
        None => title,
    }
}
