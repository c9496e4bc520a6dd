//! Explorer view state.
//!
//! Holds the UI-only state of the file tree: which folders are open and which
//! single item is highlighted. Neither survives a page reload, and both are
//! independent of each other. Kept as a plain model so the mutation rules are
//! testable without a browser; `ExplorerState` in `app.rs` wraps this in a
//! signal.

use std::collections::HashSet;

/// Set of folder paths currently shown open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedSet(HashSet<String>);

impl ExpandedSet {
    /// Flip membership of `path`: expand if collapsed, collapse if expanded.
    pub fn toggle(&mut self, path: &str) {
        if !self.0.remove(path) {
            self.0.insert(path.to_string());
        }
    }

    /// Check whether `path` is currently expanded.
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains(path)
    }
}

/// Explorer state holder with exactly two mutation entry points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorerModel {
    /// Folders currently open.
    pub expanded: ExpandedSet,
    /// At most one highlighted path (file or folder).
    pub selected: Option<String>,
}

impl ExplorerModel {
    /// Flip the expansion state of a folder.
    pub fn toggle(&mut self, path: &str) {
        self.expanded.toggle(path);
    }

    /// Highlight `path`, replacing any previous selection.
    pub fn select(&mut self, path: &str) {
        self.selected = Some(path.to_string());
    }

    /// Check whether `path` is the current selection.
    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.as_deref() == Some(path)
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }
}

/// The single file shown in the preview pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFile {
    /// Full URL the browser fetches directly (embed/img).
    pub url: String,
    /// Display name shown in the preview header.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut model = ExplorerModel::default();
        assert!(!model.is_expanded("Science"));

        model.toggle("Science");
        assert!(model.is_expanded("Science"));

        model.toggle("Science");
        assert!(!model.is_expanded("Science"));
    }

    #[test]
    fn test_toggle_is_per_path() {
        let mut model = ExplorerModel::default();
        model.toggle("Science");
        model.toggle("Maths");
        model.toggle("Science");

        assert!(!model.is_expanded("Science"));
        assert!(model.is_expanded("Maths"));
    }

    #[test]
    fn test_at_most_one_selection() {
        let mut model = ExplorerModel::default();
        model.select("Science/notes.pdf");
        assert!(model.is_selected("Science/notes.pdf"));

        model.select("Science");
        assert!(model.is_selected("Science"));
        assert!(!model.is_selected("Science/notes.pdf"));
        assert_eq!(model.selected.as_deref(), Some("Science"));
    }

    #[test]
    fn test_selection_independent_of_expansion() {
        let mut model = ExplorerModel::default();
        model.toggle("Science");
        model.select("Science");

        // Collapsing does not clear the highlight.
        model.toggle("Science");
        assert!(!model.is_expanded("Science"));
        assert!(model.is_selected("Science"));
    }
}
