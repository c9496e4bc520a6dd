//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Tree view with the root-level folder form
//! - `node_view` - Recursive folder/file row rendering
//! - [`FolderForm`] - Inline "new folder" form
//! - [`UploadForm`] - Inline file upload form

#[allow(clippy::module_inception)]
mod explorer;
mod folder_form;
mod node;
mod upload_form;

pub use explorer::Explorer;
pub use folder_form::FolderForm;
pub use upload_form::UploadForm;
