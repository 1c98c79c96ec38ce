//! openbox pipe menu model
//!
//! a menu is a tree of [`MenuNode`]s that serializes itself to the
//! `openbox_pipe_menu` XML dialect. actions and lazily expanded submenus
//! carry an [`Invocation`] that re-runs this program with different flags.

mod invocation;

pub use invocation::{Invocation, Program};

use std::borrow::Cow;
use std::fmt::Write;

use quick_xml::escape::escape;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// code points XML 1.0 does not allow anywhere in a document
fn is_illegal_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}'
    )
}

/// attribute or text content: illegal code points dropped, markup escaped
fn attr(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_illegal_xml_char) {
        return escape(text);
    }
    let cleaned: String = text.chars().filter(|&c| !is_illegal_xml_char(c)).collect();
    Cow::Owned(escape(cleaned.as_str()).into_owned())
}

/// self-selection marker prefixed to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// label is rendered as-is
    #[default]
    None,
    /// selectable but not selected, padded to line up with marked siblings
    Unmarked,
    /// currently selected
    Marked,
}

impl Marker {
    pub fn selected(is_selected: bool) -> Self {
        if is_selected {
            Self::Marked
        } else {
            Self::Unmarked
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Unmarked => ".     ",
            Self::Marked => "=> ",
        }
    }

    pub fn apply(&self, label: &str) -> String {
        format!("{}{}", self.prefix(), label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    /// clickable entry running an invocation
    Item {
        label: String,
        marker: Marker,
        invocation: Invocation,
    },
    /// inline submenu with its children
    Submenu {
        id: String,
        label: String,
        marker: Marker,
        children: Vec<MenuNode>,
    },
    /// submenu whose contents come from running an invocation on hover
    PipeSubmenu {
        label: String,
        marker: Marker,
        invocation: Invocation,
    },
    Separator,
    /// non-clickable text line (a labelled separator)
    Label(String),
    /// top level `openbox_pipe_menu` element
    Container(Vec<MenuNode>),
}

impl MenuNode {
    pub fn item(label: impl Into<String>, invocation: Invocation) -> Self {
        Self::Item {
            label: label.into(),
            marker: Marker::None,
            invocation,
        }
    }

    pub fn submenu(id: impl Into<String>, label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self::Submenu {
            id: id.into(),
            label: label.into(),
            marker: Marker::None,
            children,
        }
    }

    pub fn pipe(label: impl Into<String>, invocation: Invocation) -> Self {
        Self::PipeSubmenu {
            label: label.into(),
            marker: Marker::None,
            invocation,
        }
    }

    pub fn separator() -> Self {
        Self::Separator
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    pub fn container(children: Vec<MenuNode>) -> Self {
        Self::Container(children)
    }

    /// set the marker on items and submenus; other nodes are unchanged
    pub fn with_marker(mut self, new_marker: Marker) -> Self {
        match &mut self {
            Self::Item { marker, .. }
            | Self::Submenu { marker, .. }
            | Self::PipeSubmenu { marker, .. } => *marker = new_marker,
            Self::Separator | Self::Label(_) | Self::Container(_) => {}
        }
        self
    }

    pub fn marked(self, is_selected: bool) -> Self {
        self.with_marker(Marker::selected(is_selected))
    }

    pub fn to_xml(&self, program: &Program) -> String {
        let mut out = String::new();
        self.write_to(&mut out, program);
        out
    }

    /// append this node, one element per line
    pub fn write_to(&self, out: &mut String, program: &Program) {
        // writing into a String cannot fail
        let _ = self.write_node(out, program);
    }

    fn write_node(&self, out: &mut String, program: &Program) -> std::fmt::Result {
        match self {
            Self::Item {
                label,
                marker,
                invocation,
            } => {
                writeln!(out, "<item label=\"{}\">", attr(&marker.apply(label)))?;
                writeln!(
                    out,
                    "<action name=\"Execute\"><execute>{}</execute></action>",
                    attr(&program.command_line(invocation))
                )?;
                writeln!(out, "</item>")
            }
            Self::Submenu {
                id,
                label,
                marker,
                children,
            } => {
                writeln!(
                    out,
                    "<menu id=\"{}\" label=\"{}\">",
                    attr(id),
                    attr(&marker.apply(label))
                )?;
                for child in children {
                    child.write_node(out, program)?;
                }
                writeln!(out, "</menu>")
            }
            Self::PipeSubmenu {
                label,
                marker,
                invocation,
            } => writeln!(
                out,
                "<menu execute=\"{}\" id=\"{}\" label=\"{}\"/>",
                attr(&program.command_line(invocation)),
                attr(&invocation.to_args()),
                attr(&marker.apply(label))
            ),
            Self::Separator => writeln!(out, "<separator/>"),
            Self::Label(text) => writeln!(out, "<separator label=\"{}\"/>", attr(text)),
            Self::Container(children) => {
                writeln!(out, "<openbox_pipe_menu>")?;
                for child in children {
                    child.write_node(out, program)?;
                }
                writeln!(out, "</openbox_pipe_menu>")
            }
        }
    }
}

/// complete pipe menu output with XML declaration
#[derive(Debug, Clone, PartialEq)]
pub struct MenuDocument {
    root: MenuNode,
}

impl MenuDocument {
    pub fn new(children: Vec<MenuNode>) -> Self {
        Self {
            root: MenuNode::container(children),
        }
    }

    /// single-label menu, used to surface errors inside the menu itself
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(vec![MenuNode::label(text)])
    }

    #[cfg(test)]
    pub fn children(&self) -> &[MenuNode] {
        match &self.root {
            MenuNode::Container(children) => children,
            _ => &[],
        }
    }

    pub fn render(&self, program: &Program) -> String {
        let mut out = String::from(XML_DECLARATION);
        out.push('\n');
        self.root.write_to(&mut out, program);
        out
    }
}
