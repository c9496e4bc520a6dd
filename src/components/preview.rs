//! Document preview pane.
//!
//! The browser does the heavy lifting: PDFs go through a native `<embed>`,
//! everything else is handed to `<img>`. Text-like files the explorer can
//! distinguish by icon are not previewable here.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::PreviewFile;

stylance::import_crate_style!(css, "src/components/preview.module.css");

/// Renders the currently previewed file, or a placeholder when nothing is
/// selected.
#[component]
pub fn PreviewPane(#[prop(into)] preview: Signal<Option<PreviewFile>>) -> impl IntoView {
    view! {
        {move || match preview.get() {
            Some(file) if file.url.ends_with(".pdf") => view! {
                <embed src=file.url type="application/pdf" class=css::embed />
            }
            .into_any(),
            Some(file) => view! {
                <img src=file.url alt=file.name class=css::image />
            }
            .into_any(),
            None => view! {
                <div class=css::placeholder>
                    <span class=css::placeholderIcon><Icon icon=ic::DOCUMENT /></span>
                    <p>"Select a file from the explorer to preview it here"</p>
                </div>
            }
            .into_any(),
        }}
    }
}
