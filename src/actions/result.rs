//! action result types

use crate::menu::MenuDocument;

#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// pipe menu to print on stdout
    Menu(MenuDocument),
    /// imperative action completed, nothing to print
    Done { action: &'static str },
}

impl ActionResult {
    pub fn menu(document: MenuDocument) -> Self {
        Self::Menu(document)
    }

    pub fn done(action: &'static str) -> Self {
        Self::Done { action }
    }

    #[cfg(test)]
    pub fn as_menu(&self) -> Option<&MenuDocument> {
        match self {
            Self::Menu(document) => Some(document),
            Self::Done { .. } => None,
        }
    }
}
