//! Main explorer component.
//!
//! Fetches the full tree on mount and renders it recursively. Expansion only
//! controls visibility; nothing is fetched lazily.

use leptos::prelude::*;

use super::FolderForm;
use super::node::node_view;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
///
/// Reports clicked files upward as `(file_url, file_name)` through
/// `on_file_select`; the host view owns the preview state.
#[component]
pub fn Explorer(on_file_select: Callback<(String, String)>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Initial full fetch. A failure leaves the tree empty.
    ctx.explorer.refresh();

    view! {
        <div class=css::explorer role="tree" aria-label="Notes">
            // Root-level folder creation (parent path is the empty string).
            <FolderForm parent="" />

            {move || {
                ctx.explorer
                    .tree
                    .get()
                    .into_iter()
                    .map(|node| node_view(node, 0, on_file_select))
                    .collect_view()
            }}
        </div>
    }
}
