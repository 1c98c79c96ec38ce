//! playback action handlers

use crate::actions::command::flags;
use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::result::ActionResult;

/// execute play action
pub fn execute_play(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    ctx.daemon.playback_start()?;
    Ok(ActionResult::done(flags::PLAY))
}

/// execute pause action
pub fn execute_pause(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    ctx.daemon.playback_pause()?;
    Ok(ActionResult::done(flags::PAUSE))
}

/// execute next action
pub fn execute_next(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    skip(ctx, 1)?;
    Ok(ActionResult::done(flags::NEXT))
}

/// execute prev action
pub fn execute_prev(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    skip(ctx, -1)?;
    Ok(ActionResult::done(flags::PREV))
}

fn skip(ctx: &mut ExecutionContext, delta: i32) -> Result<(), ActionError> {
    ctx.daemon.playlist_set_next_rel(delta)?;
    ctx.daemon.playback_tickle()?;
    Ok(())
}
