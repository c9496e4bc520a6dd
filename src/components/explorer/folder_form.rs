//! Inline "new folder" form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;
use crate::utils::format::is_blank;

stylance::import_crate_style!(css, "src/components/explorer/forms.module.css");

/// Folder creation form, rendered at the root and inside every expanded
/// folder.
///
/// A blank name sends no request. On success the field is cleared and the
/// tree re-fetched; a failed creation changes nothing and stays silent in the
/// UI (console warning only).
#[component]
pub fn FolderForm(#[prop(into)] parent: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (name, set_name) = signal(String::new());

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_name.set(input.value());
    };

    let handle_submit = move |_: ev::MouseEvent| {
        let folder_name = name.get();
        if is_blank(&folder_name) {
            return;
        }

        let parent = parent.clone();
        spawn_local(async move {
            match api::create_folder(&parent, &folder_name).await {
                Ok(()) => {
                    set_name.set(String::new());
                    ctx.explorer.refresh();
                }
                Err(e) => dom::console_warn(&format!("folder creation failed: {e}")),
            }
        });
    };

    view! {
        <div class=css::form>
            <input
                type="text"
                class=css::textInput
                placeholder="Folder name"
                prop:value=name
                on:input=handle_input
            />
            <button type="button" class=css::button on:click=handle_submit>
                <Icon icon=ic::PLUS />
                <span>"Folder"</span>
            </button>
        </div>
    }
}
