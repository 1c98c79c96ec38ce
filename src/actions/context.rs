//! execution context for actions

use crate::actions::prompt::NamePrompt;
use crate::config::Config;
use crate::daemon::MediaDaemon;

/// context passed to action handlers
pub struct ExecutionContext<'a> {
    pub config: &'a Config,
    pub daemon: &'a mut dyn MediaDaemon,
    /// asks the user for a new playlist name
    pub prompt: &'a dyn NamePrompt,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        config: &'a Config,
        daemon: &'a mut dyn MediaDaemon,
        prompt: &'a dyn NamePrompt,
    ) -> Self {
        Self {
            config,
            daemon,
            prompt,
        }
    }
}
