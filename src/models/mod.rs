//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`TreeNode`], [`NodeKind`], [`FileKind`] - folder/file tree representation
//! - [`ExplorerModel`], [`ExpandedSet`] - explorer UI state holder
//! - [`QueryResult`], [`SourceDocument`] - question-answering results
//! - [`PreviewFile`] - the currently previewed document

mod explorer;
mod query;
mod tree;

pub use explorer::{ExpandedSet, ExplorerModel, PreviewFile};
pub use query::{QueryResult, SourceDocument};
pub use tree::{FileKind, NodeKind, TreeNode, TreeResponse};
