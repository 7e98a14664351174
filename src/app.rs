//! Pocket Widgets App
//!
//! Loads config, wires the widget controllers and lays out the three widgets.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ChallengeWidget, PollWidget, TodoWidget};
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    provide_context(store);

    let config = commands::load_config();
    log::info!("loading widgets from `{}` and `{}`", config.todo_key, config.poll_key);

    // Loading renders both documents into the store
    provide_context(AppContext::new(&config, store));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Widgets de bolso"</h1>
            </header>

            <main class="widget-grid">
                <TodoWidget />
                <PollWidget />
                <ChallengeWidget />
            </main>
        </div>
    }
}
