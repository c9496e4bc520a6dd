//! Folder/file tree wire model.
//!
//! The backend returns the entire hierarchy from `/list_tree` on every fetch;
//! the tree is rebuilt wholesale each time, with paths as the only identity
//! carried across refreshes.

use serde::Deserialize;

/// Node variant tag from the backend (`"file"` or `"folder"`).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Folder,
    File,
}

/// A single entry in the folder/file tree.
///
/// Paths are unique within the tree and serve as node identity. Folders own
/// their children; files never carry any.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TreeNode {
    /// Display name (last path segment).
    pub name: String,
    /// Path relative to the notes root, e.g. `"Science/notes.pdf"`.
    pub path: String,
    /// Variant tag.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Child nodes (folders only; absent in the wire format for files).
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// Response envelope for `GET /list_tree`.
#[derive(Clone, Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeNode>,
}

// =============================================================================
// File Kind
// =============================================================================

/// Icon category for a file, keyed on its extension.
///
/// Every extension the explorer distinguishes gets its own variant; anything
/// unlisted falls back to [`FileKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
    Markdown,
    Script,
    Stylesheet,
    Html,
    Json,
    Python,
    Other,
}

impl FileKind {
    /// Detect the kind from a file name's extension, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit('.').next().map(|s| s.to_lowercase()).as_deref() {
            Some("pdf") => Self::Pdf,
            Some("txt") => Self::Text,
            Some("md") => Self::Markdown,
            Some("js" | "jsx") => Self::Script,
            Some("css") => Self::Stylesheet,
            Some("html") => Self::Html,
            Some("json") => Self::Json,
            Some("py") => Self::Python,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_detection() {
        assert_eq!(FileKind::from_name("notes.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_name("todo.txt"), FileKind::Text);
        assert_eq!(FileKind::from_name("README.md"), FileKind::Markdown);
        assert_eq!(FileKind::from_name("app.js"), FileKind::Script);
        assert_eq!(FileKind::from_name("App.jsx"), FileKind::Script);
        assert_eq!(FileKind::from_name("style.css"), FileKind::Stylesheet);
        assert_eq!(FileKind::from_name("index.html"), FileKind::Html);
        assert_eq!(FileKind::from_name("data.json"), FileKind::Json);
        assert_eq!(FileKind::from_name("ingest.py"), FileKind::Python);
    }

    #[test]
    fn test_file_kind_unlisted_extension_is_other() {
        assert_eq!(FileKind::from_name("archive.zip"), FileKind::Other);
        assert_eq!(FileKind::from_name("noextension"), FileKind::Other);
    }

    #[test]
    fn test_file_kind_is_case_insensitive() {
        assert_eq!(FileKind::from_name("SCAN.PDF"), FileKind::Pdf);
        assert_eq!(
            FileKind::from_name("scan.Pdf"),
            FileKind::from_name("scan.pdf")
        );
    }

    #[test]
    fn test_tree_deserializes_backend_shape() {
        let json = r#"{"tree":[{"name":"Science","path":"Science","type":"folder","children":[{"name":"notes.pdf","path":"Science/notes.pdf","type":"file"}]}]}"#;
        let resp: TreeResponse = serde_json::from_str(json).expect("valid tree");

        assert_eq!(resp.tree.len(), 1);
        let folder = &resp.tree[0];
        assert_eq!(folder.name, "Science");
        assert_eq!(folder.kind, NodeKind::Folder);
        assert_eq!(folder.children.len(), 1);

        let file = &folder.children[0];
        assert_eq!(file.kind, NodeKind::File);
        assert_eq!(file.path, "Science/notes.pdf");
        assert!(file.children.is_empty());
    }
}
