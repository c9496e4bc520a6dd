//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Backend Configuration
// =============================================================================

/// Base URL of the notes backend. All API calls and preview URLs hang off it.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Static mount the backend serves uploaded documents from.
pub const USER_NOTES_PREFIX: &str = "user_notes";

/// Endpoint paths, relative to [`API_BASE_URL`].
pub mod endpoints {
    /// Full tree fetch (GET).
    pub const LIST_TREE: &str = "/list_tree";
    /// Folder creation (POST multipart: `path`, `name`).
    pub const CREATE_FOLDER: &str = "/create_folder";
    /// Document upload (POST multipart: `path`, `file`, `auto_extract`).
    pub const UPLOAD_NOTE: &str = "/upload_note";
    /// Question answering (POST multipart: `query`, `subject`).
    pub const QUERY_FOLDER: &str = "/query_folder";
}

// =============================================================================
// Explorer Configuration
// =============================================================================

/// Per-level indentation in the tree, in pixels.
pub const INDENT_STEP_PX: usize = 8;

/// Base left padding of a folder row.
pub const FOLDER_ROW_BASE_PX: usize = 8;

/// Base left padding of a file row (extra room for the missing arrow).
pub const FILE_ROW_BASE_PX: usize = 24;

/// File picker filter for uploads. Enforced only by the picker itself; the
/// selection is not re-validated client-side.
pub const UPLOAD_ACCEPT: &str = "image/*,.pdf";

// =============================================================================
// Query Configuration
// =============================================================================

/// Maximum number of characters of a source snippet shown in the sources list.
pub const SNIPPET_MAX_CHARS: usize = 200;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
