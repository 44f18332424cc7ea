//! The editing surface boundary.
//!
//! [`Surface`] is the entire interface the host UI/DOM layer calls
//! into: a style command, a content-changed notification, and a copy
//! request. It owns the current tree between calls; the host owns the
//! live editable region and the selection, reporting both in.

use crate::caret::{CaretHint, CaretPos};
use crate::command::{apply_style, Selection};
use crate::sanitize::sanitize;
use discolor_ansi::{fenced, serialize};
use discolor_core::{Node, StyleCode};

/// The sanitized editing state and its three entry points.
#[derive(Debug, Default)]
pub struct Surface {
    tree: Vec<Node>,
    selection: Option<Selection>,
    caret: Option<CaretPos>,
}

impl Surface {
    /// An empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface initialized from raw markup (sanitized on the way in).
    pub fn from_markup(raw: &str) -> Self {
        let (tree, _) = sanitize(raw, None);
        Self {
            tree,
            selection: None,
            caret: None,
        }
    }

    /// The current sanitized tree.
    pub fn tree(&self) -> &[Node] {
        &self.tree
    }

    /// The current caret position, if one was restored.
    pub fn caret(&self) -> Option<&CaretPos> {
        self.caret.as_ref()
    }

    /// Record the host's current selection (None = no selection).
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    /// Apply a style command to the current selection.
    ///
    /// Codes outside the recognized vocabulary are logged and ignored;
    /// a missing or empty selection is a silent no-op.
    pub fn on_style_command(&mut self, code: u8) {
        let Some(code) = StyleCode::new(code) else {
            log::warn!("ignoring unrecognized style code {}", code);
            return;
        };
        let Some(selection) = self.selection else {
            return;
        };
        if selection.is_empty() {
            return;
        }
        log::debug!("applying style {} to {:?}", code, selection);
        self.tree = apply_style(&self.tree, selection, code);
    }

    /// Take the host's raw markup after an edit, sanitize it, and
    /// restore the caret.
    ///
    /// Returns the sanitized tree and the restored caret position
    /// (None leaves the host's default placement in charge).
    pub fn on_content_changed(
        &mut self,
        raw: &str,
        caret: Option<&CaretHint>,
    ) -> (&[Node], Option<CaretPos>) {
        let (tree, pos) = sanitize(raw, caret);
        self.tree = tree;
        self.caret = pos.clone();
        (&self.tree, pos)
    }

    /// Produce the full fenced ANSI block for the clipboard.
    pub fn on_copy_requested(&self) -> String {
        fenced(&serialize(&self.tree))
    }
}
