//! action handlers - implementation of each action type

pub mod common;
pub mod main_menu;
pub mod medialib;
pub mod playback;
pub mod playlist;
pub mod presets;
