//! Home view: the three-pane application shell.
//!
//! ## Layout
//!
//! - **Left sidebar**: file explorer
//! - **Middle**: document preview pane
//! - **Right sidebar**: AI query panel
//!
//! Owns the "currently previewed file" state; the explorer reports
//! selections upward through a callback.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::explorer::Explorer;
use crate::components::icons as ic;
use crate::components::preview::PreviewPane;
use crate::components::query::QueryPanel;
use crate::models::PreviewFile;

stylance::import_crate_style!(css, "src/components/home.module.css");

#[component]
pub fn Home() -> impl IntoView {
    let preview = RwSignal::new(None::<PreviewFile>);

    // Adopt every reported selection unconditionally; no existence check.
    let on_file_select = Callback::new(move |(url, name): (String, String)| {
        preview.set(Some(PreviewFile { url, name }));
    });

    view! {
        <div class=css::app>
            <aside class=css::sidebar>
                <div class=css::sidebarHeader>
                    <Icon icon=ic::EXPLORER />
                    <span>"File Explorer"</span>
                </div>
                <div class=css::sidebarContent>
                    <Explorer on_file_select=on_file_select />
                </div>
            </aside>

            <section class=css::previewPane>
                <div class=css::previewHeader>
                    <span class=css::previewTitle>
                        <Icon icon=ic::DOCUMENT />
                        <span>"Document Preview"</span>
                    </span>
                    {move || preview.get().map(|p| view! {
                        <span class=css::previewFilename>{p.name}</span>
                    })}
                </div>
                <div class=css::previewContent>
                    <PreviewPane preview=preview />
                </div>
            </section>

            <aside class=css::sidebar>
                <div class=css::sidebarHeader>
                    <Icon icon=ic::ASSISTANT />
                    <span>"AI Assistant"</span>
                </div>
                <div class=css::sidebarContent>
                    <QueryPanel />
                </div>
            </aside>
        </div>
    }
}
