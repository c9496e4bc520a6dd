//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::Home;
use crate::models::{ExplorerModel, TreeNode};
use crate::utils::dom;

// ============================================================================
// ExplorerState
// ============================================================================

/// Explorer state managed with Leptos signals.
///
/// Owns the folder/file tree and the [`ExplorerModel`] (expansion +
/// selection), and exposes the two mutation entry points plus the sole
/// refresh mechanism: a full tree re-fetch.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// Current tree, rebuilt wholesale on every fetch.
    pub tree: RwSignal<Vec<TreeNode>>,
    /// Expansion and selection state.
    pub model: RwSignal<ExplorerModel>,
}

impl ExplorerState {
    /// Creates explorer state with an empty tree and nothing expanded or
    /// selected.
    pub fn new() -> Self {
        Self {
            tree: RwSignal::new(Vec::new()),
            model: RwSignal::new(ExplorerModel::default()),
        }
    }

    /// Flip a folder's expansion state.
    pub fn toggle_folder(&self, path: &str) {
        self.model.update(|m| m.toggle(path));
    }

    /// Highlight a path (file or folder), replacing any prior selection.
    pub fn select(&self, path: &str) {
        self.model.update(|m| m.select(path));
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.model.with(|m| m.is_expanded(path))
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.model.with(|m| m.is_selected(path))
    }

    /// Re-fetch the whole tree from the backend.
    ///
    /// Called on mount and after every successful mutation. A failed initial
    /// fetch leaves the tree empty; a failed refresh keeps the previous tree.
    /// Neither surfaces to the user beyond a console warning.
    pub fn refresh(&self) {
        let tree = self.tree;
        spawn_local(async move {
            match api::fetch_tree().await {
                Ok(nodes) => tree.set(nodes),
                Err(e) => dom::console_warn(&format!("tree fetch failed: {e}")),
            }
        });
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer state (tree, expansion, selection).
    pub explorer: ExplorerState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            explorer: ExplorerState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// Creates and provides the global AppContext, wraps the app in an
/// ErrorBoundary for graceful error handling, and renders the home view.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1e1e1e;
                    color: #cccccc;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #a0a0a0; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Home />
        </ErrorBoundary>
    }
}
