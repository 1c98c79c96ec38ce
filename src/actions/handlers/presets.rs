//! preset action handlers

use std::collections::BTreeMap;

use crate::actions::command::{flags, params};
use crate::actions::context::ExecutionContext;
use crate::actions::error::ActionError;
use crate::actions::result::ActionResult;
use crate::config::Preset;
use crate::menu::{Invocation, MenuDocument, MenuNode};

/// execute preset menu action
pub fn execute_menu(ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let presets = &ctx.config.presets;
    if presets.is_empty() {
        return Ok(ActionResult::menu(MenuDocument::message(
            "No presets configured",
        )));
    }

    let current = ctx.daemon.config_list_values()?;
    let nodes = presets
        .iter()
        .map(|preset| preset_submenu(preset, &current))
        .collect();

    Ok(ActionResult::menu(MenuDocument::new(nodes)))
}

/// execute load preset action
pub fn execute_load(name: &str, ctx: &mut ExecutionContext) -> Result<ActionResult, ActionError> {
    let preset = ctx
        .config
        .find_preset(name)
        .ok_or_else(|| ActionError::invalid_args(format!("unknown preset '{}'", name)))?;

    for (key, value) in &preset.values {
        tracing::debug!("preset {}: {} = {}", name, key, value);
        ctx.daemon.config_set_value(key, value)?;
    }
    Ok(ActionResult::done(flags::LOAD_PRESET))
}

/// whether every value of the preset is already set on the daemon
pub fn is_active(preset: &Preset, current: &BTreeMap<String, String>) -> bool {
    preset
        .values
        .iter()
        .all(|(key, value)| current.get(key) == Some(value))
}

fn preset_submenu(preset: &Preset, current: &BTreeMap<String, String>) -> MenuNode {
    let mut children = vec![
        MenuNode::item(
            "load",
            Invocation::new(flags::LOAD_PRESET).param(params::PRESET, &preset.name),
        ),
        MenuNode::separator(),
    ];
    children.extend(
        preset
            .values
            .iter()
            .map(|(key, value)| MenuNode::label(format!("{} = {}", key, value))),
    );

    MenuNode::submenu(format!("xmms-preset-{}", preset.name), &preset.name, children)
        .marked(is_active(preset, current))
}
