//! AI question-answering sidebar.

mod panel;

pub use panel::QueryPanel;
