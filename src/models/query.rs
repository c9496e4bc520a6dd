//! Question-answering result model.
//!
//! One [`QueryResult`] is displayed at a time; each new query replaces it
//! wholesale. Failures are rendered through the same shape: the panel
//! synthesizes a result carrying the original question and an error-derived
//! answer with no sources.

use serde::Deserialize;

/// A retrieved source snippet backing an answer.
///
/// The backend attaches more fields (scores, metadata); only the content is
/// displayed, so everything else is ignored on deserialization.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SourceDocument {
    pub content: String,
}

/// Response from `POST /query_folder`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct QueryResult {
    /// The question as the backend echoed it.
    pub query: String,
    /// Generated answer text.
    pub answer: String,
    /// Snippets the answer was drawn from; may be empty.
    #[serde(default)]
    pub source_documents: Vec<SourceDocument>,
}

impl QueryResult {
    /// Synthesize a result for a failed query.
    ///
    /// Carries the question as submitted and an error-derived answer, with no
    /// sources. Rendered through the same path as a genuine answer.
    pub fn failure(query: &str, answer: impl Into<String>) -> Self {
        Self {
            query: query.to_string(),
            answer: answer.into(),
            source_documents: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_backend_response() {
        let json = r#"{
            "query": "What is photosynthesis?",
            "answer": "Photosynthesis is...",
            "source_documents": [{"content": "Plants convert light...", "score": 0.87}]
        }"#;
        let result: QueryResult = serde_json::from_str(json).expect("valid response");

        assert_eq!(result.query, "What is photosynthesis?");
        assert_eq!(result.source_documents.len(), 1);
        assert_eq!(result.source_documents[0].content, "Plants convert light...");
    }

    #[test]
    fn test_missing_sources_default_to_empty() {
        let json = r#"{"query": "q", "answer": "a"}"#;
        let result: QueryResult = serde_json::from_str(json).expect("valid response");
        assert!(result.source_documents.is_empty());
    }

    #[test]
    fn test_failure_keeps_query_and_empty_sources() {
        let result = QueryResult::failure("What is photosynthesis?", "Error: index missing");
        assert_eq!(result.query, "What is photosynthesis?");
        assert!(result.answer.contains("index missing"));
        assert!(result.source_documents.is_empty());
    }
}
