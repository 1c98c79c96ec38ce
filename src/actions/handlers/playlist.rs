//! playlist action handlers

use crate::actions::command::flags;
use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::handlers::common;
use crate::actions::result::ActionResult;
use crate::menu::{MenuDocument, MenuNode};

/// execute playlist jump action
pub fn execute_jump(position: i32, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    ctx.daemon.playlist_set_next(position)?;
    ctx.daemon.playback_tickle()?;
    Ok(ActionResult::done(flags::PLAYLIST_JUMP))
}

/// execute insert action, queueing the entry at the top of the active playlist
pub fn execute_insert(id: u32, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    ctx.daemon.playlist_insert_id(0, id)?;
    Ok(ActionResult::done(flags::INSERT_INTO_PLAYLIST))
}

/// execute remove entry action
pub fn execute_remove_entry(
    position: i32,
    ctx: &mut ExecutionContext,
) -> Result<ActionResult, ActionError> {
    ctx.daemon.playlist_remove_entry(position)?;
    Ok(ActionResult::done(flags::REMOVE_FROM_PLAYLIST))
}

/// execute load action
pub fn execute_load(
    name: Option<String>,
    ctx: &mut ExecutionContext,
) -> Result<ActionResult, ActionError> {
    match name {
        Some(name) => ctx.daemon.playlist_load(&name)?,
        None => tracing::debug!("loadPlaylist without a name, ignoring"),
    }
    Ok(ActionResult::done(flags::LOAD_PLAYLIST))
}

/// execute create action, asking for a name when none was given
pub fn execute_create(
    name: Option<String>,
    ctx: &mut ExecutionContext,
) -> Result<ActionResult, ActionError> {
    let name = match name {
        Some(name) => Some(name),
        None => ctx.prompt.ask()?,
    };

    match name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => {
            tracing::debug!("creating playlist '{}'", name);
            ctx.daemon.playlist_create(name)?;
        }
        None => tracing::debug!("no playlist name, nothing created"),
    }
    Ok(ActionResult::done(flags::CREATE_PLAYLIST))
}

/// execute remove action
pub fn execute_remove(
    name: Option<String>,
    ctx: &mut ExecutionContext,
) -> Result<ActionResult, ActionError> {
    match name {
        Some(name) => ctx.daemon.playlist_remove(&name)?,
        None => tracing::debug!("removePlaylist without a name, ignoring"),
    }
    Ok(ActionResult::done(flags::REMOVE_PLAYLIST))
}

/// execute playlist menu action: one page of the active playlist
pub fn execute_menu(offset: usize, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let entries = ctx.daemon.playlist_list_entries()?;
    if entries.is_empty() {
        return Ok(ActionResult::menu(MenuDocument::new(vec![MenuNode::label(
            common::PLAYLIST_EMPTY,
        )])));
    }

    let current_id = ctx.daemon.playback_current_id()?;
    let page = ctx.config.settings.playlist_window.page.max(1);
    let start = offset.min(entries.len());
    let end = start.saturating_add(page).min(entries.len());

    let nodes = common::entry_window(ctx.daemon, &entries, start..end, current_id, page)?;
    Ok(ActionResult::menu(MenuDocument::new(common::or_nothing_found(nodes))))
}
