//! Typed client for the notes backend.
//!
//! One function per endpoint, all hanging off the fixed
//! [`API_BASE_URL`](crate::config::API_BASE_URL). Mutations do not return the
//! new tree; callers re-fetch it wholesale via [`fetch_tree`] afterwards.

pub mod error;
mod http;

pub use error::FetchError;

use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::{API_BASE_URL, USER_NOTES_PREFIX, endpoints};
use crate::models::{QueryResult, TreeNode, TreeResponse};

/// Receipt from a successful upload.
///
/// The backend reports how many text chunks it extracted for retrieval; the
/// client surfaces the count and interprets it no further.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct UploadReceipt {
    pub chunks_created: u64,
}

fn endpoint_url(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

/// URL the browser loads a stored document from (preview embed/img).
pub fn note_file_url(path: &str) -> String {
    format!("{API_BASE_URL}/{USER_NOTES_PREFIX}/{path}")
}

/// Fetch the full folder/file tree.
pub async fn fetch_tree() -> Result<Vec<TreeNode>, FetchError> {
    let resp: TreeResponse = http::get_json(&endpoint_url(endpoints::LIST_TREE)).await?;
    Ok(resp.tree)
}

/// Create a folder named `name` under `parent` (empty string for the root).
///
/// The success body is ignored; the server is the source of truth for name
/// validity and duplicates.
pub async fn create_folder(parent: &str, name: &str) -> Result<(), FetchError> {
    let form = new_form()?;
    append(&form, "path", parent)?;
    append(&form, "name", name)?;
    http::post_form_discard(&endpoint_url(endpoints::CREATE_FOLDER), &form).await
}

/// Upload a document into `parent`, asking the backend to extract and embed
/// its text server-side.
pub async fn upload_note(parent: &str, file: &File) -> Result<UploadReceipt, FetchError> {
    let form = new_form()?;
    append(&form, "path", parent)?;
    form.append_with_blob("file", file)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    append(&form, "auto_extract", "true")?;
    http::post_form(&endpoint_url(endpoints::UPLOAD_NOTE), &form).await
}

/// Ask a question against a subject folder.
pub async fn query_folder(subject: &str, query: &str) -> Result<QueryResult, FetchError> {
    let form = new_form()?;
    append(&form, "query", query)?;
    append(&form, "subject", subject)?;
    http::post_form(&endpoint_url(endpoints::QUERY_FOLDER), &form).await
}

fn new_form() -> Result<FormData, FetchError> {
    FormData::new().map_err(|_| FetchError::RequestCreationFailed)
}

fn append(form: &FormData, name: &str, value: &str) -> Result<(), FetchError> {
    form.append_with_str(name, value)
        .map_err(|_| FetchError::RequestCreationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            endpoint_url(endpoints::LIST_TREE),
            "http://localhost:8000/list_tree"
        );
        assert_eq!(
            endpoint_url(endpoints::QUERY_FOLDER),
            "http://localhost:8000/query_folder"
        );
    }

    #[test]
    fn test_note_file_url() {
        assert_eq!(
            note_file_url("Science/notes.pdf"),
            "http://localhost:8000/user_notes/Science/notes.pdf"
        );
    }

    #[test]
    fn test_upload_receipt_ignores_extra_fields() {
        let json = r#"{"chunks_created": 4, "filename": "notes.pdf", "status": "ok"}"#;
        let receipt: UploadReceipt = serde_json::from_str(json).expect("valid receipt");
        assert_eq!(receipt.chunks_created, 4);
    }
}
