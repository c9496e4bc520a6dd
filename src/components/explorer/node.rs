//! Recursive tree node rendering.
//!
//! Dispatches on [`NodeKind`]: a folder renders its own row plus, when
//! expanded, the per-folder create/upload forms and its children one level
//! deeper; a file renders a single row that reports `(url, name)` upward on
//! click.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{FolderForm, UploadForm};
use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{FILE_ROW_BASE_PX, FOLDER_ROW_BASE_PX, INDENT_STEP_PX};
use crate::models::{FileKind, NodeKind, TreeNode};

stylance::import_crate_style!(css, "src/components/explorer/node.module.css");

/// Get the icon for a file based on its extension.
fn file_icon(kind: FileKind) -> IconData {
    match kind {
        FileKind::Pdf => ic::FILE_PDF,
        FileKind::Text => ic::FILE_TEXT,
        FileKind::Markdown => ic::FILE_MARKDOWN,
        FileKind::Script => ic::FILE_SCRIPT,
        FileKind::Stylesheet => ic::FILE_STYLE,
        FileKind::Html => ic::FILE_HTML,
        FileKind::Json => ic::FILE_JSON,
        FileKind::Python => ic::FILE_PYTHON,
        FileKind::Other => ic::FILE,
    }
}

/// Render one tree node at the given depth.
pub(super) fn node_view(
    node: TreeNode,
    depth: usize,
    on_file_select: Callback<(String, String)>,
) -> AnyView {
    match node.kind {
        NodeKind::Folder => folder_view(node, depth, on_file_select),
        NodeKind::File => file_view(node, depth, on_file_select),
    }
}

fn folder_view(node: TreeNode, depth: usize, on_file_select: Callback<(String, String)>) -> AnyView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let TreeNode {
        name,
        path,
        children,
        ..
    } = node;

    let has_children = !children.is_empty();
    let indent = format!(
        "padding-left: {}px",
        depth * INDENT_STEP_PX + FOLDER_ROW_BASE_PX
    );

    let path_for_expand = path.clone();
    let is_expanded = Signal::derive(move || ctx.explorer.is_expanded(&path_for_expand));
    let path_for_select = path.clone();
    let is_selected = Signal::derive(move || ctx.explorer.is_selected(&path_for_select));

    // Clicking a folder row both highlights it and flips its expansion.
    let path_for_click = path.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.explorer.select(&path_for_click);
        ctx.explorer.toggle_folder(&path_for_click);
    };

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::folderRow, css::selected)
        } else {
            css::folderRow.to_string()
        }
    };
    let arrow_class = move || {
        if is_expanded.get() {
            format!("{} {}", css::arrow, css::arrowExpanded)
        } else {
            css::arrow.to_string()
        }
    };

    let aria_label = format!("Folder: {name}");

    view! {
        <div class=css::folder>
            <div
                class=row_class
                style=indent
                on:click=handle_click
                role="treeitem"
                aria-label=aria_label
                aria-expanded=move || is_expanded.get()
                aria-selected=move || is_selected.get()
            >
                <span class=arrow_class aria-hidden="true">
                    {has_children.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
                </span>
                <span class=css::folderIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
                <span class=css::folderName>{name}</span>
            </div>

            <Show when=move || is_expanded.get()>
                <div class=css::children>
                    <FolderForm parent=path.clone() />
                    <UploadForm parent=path.clone() />
                    {children
                        .clone()
                        .into_iter()
                        .map(|child| node_view(child, depth + 1, on_file_select))
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

fn file_view(node: TreeNode, depth: usize, on_file_select: Callback<(String, String)>) -> AnyView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let TreeNode { name, path, .. } = node;

    let icon = file_icon(FileKind::from_name(&name));
    let indent = format!(
        "padding-left: {}px",
        depth * INDENT_STEP_PX + FILE_ROW_BASE_PX
    );

    let path_for_select = path.clone();
    let is_selected = Signal::derive(move || ctx.explorer.is_selected(&path_for_select));

    // Clicking a file highlights it and reports (url, name) to the host view.
    let name_for_click = name.clone();
    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.explorer.select(&path);
        on_file_select.run((api::note_file_url(&path), name_for_click.clone()));
    };

    let row_class = move || {
        if is_selected.get() {
            format!("{} {}", css::fileRow, css::selected)
        } else {
            css::fileRow.to_string()
        }
    };

    let aria_label = format!("File: {name}");

    view! {
        <div
            class=row_class
            style=indent
            on:click=handle_click
            role="treeitem"
            aria-label=aria_label
            aria-selected=move || is_selected.get()
        >
            <span class=css::fileIcon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::fileName>{name}</span>
        </div>
    }
    .into_any()
}
