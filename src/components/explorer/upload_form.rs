//! Inline file upload form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, FetchError};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::UPLOAD_ACCEPT;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/forms.module.css");

/// File upload form, rendered inside every expanded folder.
///
/// The picker filters to images and PDF; the selection is not re-validated.
/// Uploads always request server-side text extraction (`auto_extract`). On
/// success the input is cleared, the tree re-fetched, and a blocking alert
/// reports the extracted chunk count. Failures alert with the server detail
/// when present. No progress reporting, no cancellation, no retry.
#[component]
pub fn UploadForm(#[prop(into)] parent: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let file = RwSignal::new_local(None::<web_sys::File>);

    let handle_change = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        file.set(input.files().and_then(|list| list.get(0)));
    };

    let handle_submit = move |_: ev::MouseEvent| {
        let Some(selected) = file.get() else { return };

        let parent = parent.clone();
        spawn_local(async move {
            match api::upload_note(&parent, &selected).await {
                Ok(receipt) => {
                    file.set(None);
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    ctx.explorer.refresh();
                    dom::alert(&format!(
                        "File uploaded and processed! Created {} chunks.",
                        receipt.chunks_created
                    ));
                }
                Err(FetchError::Api { detail, .. }) => {
                    dom::alert(&format!(
                        "Error: {}",
                        detail.as_deref().unwrap_or("Upload failed")
                    ));
                }
                Err(_) => dom::alert("Upload failed. Please try again."),
            }
        });
    };

    view! {
        <div class=css::form>
            <input
                node_ref=input_ref
                type="file"
                class=css::fileInput
                accept=UPLOAD_ACCEPT
                on:change=handle_change
            />
            <button type="button" class=css::button on:click=handle_submit>
                <Icon icon=ic::UPLOAD />
                <span>"File"</span>
            </button>
        </div>
    }
}
