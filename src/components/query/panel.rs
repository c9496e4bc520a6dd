//! Query panel component.
//!
//! Submits a (subject, question) pair to the backend and renders the answer
//! with its source snippets. The submit control is disabled while a request
//! is in flight or while either field is blank; that disabling is the only
//! guard against concurrent queries.
//!
//! Failures are rendered through the same path as answers: the panel
//! synthesizes a [`QueryResult`] with an error-derived answer and no sources,
//! visually indistinguishable from a genuine response.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, FetchError};
use crate::components::icons as ic;
use crate::models::QueryResult;
use crate::utils::format::{is_blank, truncate_snippet};

stylance::import_crate_style!(css, "src/components/query/panel.module.css");

#[component]
pub fn QueryPanel() -> impl IntoView {
    let (subject, set_subject) = signal(String::new());
    let (query, set_query) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let result = RwSignal::new(None::<QueryResult>);

    let can_submit = Signal::derive(move || {
        !loading.get() && !is_blank(&subject.get()) && !is_blank(&query.get())
    });

    let handle_subject = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_subject.set(input.value());
    };

    let handle_query = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let textarea = target.unchecked_into::<web_sys::HtmlTextAreaElement>();
        set_query.set(textarea.value());
    };

    let handle_submit = move |_: ev::MouseEvent| {
        let subject_value = subject.get();
        let query_value = query.get();
        if loading.get() || is_blank(&subject_value) || is_blank(&query_value) {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let displayed = match api::query_folder(&subject_value, &query_value).await {
                Ok(response) => response,
                Err(FetchError::Api { detail, .. }) => QueryResult::failure(
                    &query_value,
                    format!("Error: {}", detail.as_deref().unwrap_or("Query failed")),
                ),
                Err(_) => QueryResult::failure(&query_value, "Query failed. Please try again."),
            };
            result.set(Some(displayed));
            set_loading.set(false);
        });
    };

    view! {
        <div class=css::panel>
            <h3 class=css::title>"Query Your Notes"</h3>

            <div class=css::formGroup>
                <label class=css::label>"Subject Folder:"</label>
                <input
                    type="text"
                    class=css::input
                    placeholder="e.g., Science, Maths, SST"
                    prop:value=subject
                    on:input=handle_subject
                />
            </div>

            <div class=css::formGroup>
                <label class=css::label>"Your Question:"</label>
                <textarea
                    class=css::textarea
                    placeholder="Ask a question about your notes..."
                    rows="3"
                    prop:value=query
                    on:input=handle_query
                />
            </div>

            <button
                type="button"
                class=css::submit
                disabled=move || !can_submit.get()
                on:click=handle_submit
            >
                <Icon icon=ic::SEND />
                <span>{move || if loading.get() { "Processing..." } else { "Ask Question" }}</span>
            </button>

            {move || result.get().map(|r| view! {
                <div class=css::result>
                    <h4 class=css::resultHeading>"Answer:"</h4>
                    <div class=css::answer>{r.answer.clone()}</div>

                    {(!r.source_documents.is_empty()).then(|| view! {
                        <div class=css::sources>
                            <h5 class=css::sourcesHeading>"Sources:"</h5>
                            <div>
                                {r.source_documents
                                    .iter()
                                    .map(|doc| view! {
                                        <div class=css::sourceItem>
                                            {truncate_snippet(&doc.content)}
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}
                </div>
            })}
        </div>
    }
}
