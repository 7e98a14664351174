//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The widget
//! controllers own the documents; the store holds what is on screen.

use leptos::prelude::*;
use reactive_stores::Store;
use widget_core::{ChallengeCard, PollState, Renderer, TodoList};

/// What the widgets currently draw
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Task list, insertion order
    pub todo: TodoList,
    /// Poll tallies and this browser's vote
    pub poll: PollState,
    /// Last generated challenge
    pub challenge: Option<ChallengeCard>,
}

/// Type alias for the store
pub type AppStore = Store<BoardState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Draws the task list by publishing it to the store
#[derive(Clone, Copy)]
pub struct TodoRenderer(pub AppStore);

impl Renderer<TodoList> for TodoRenderer {
    fn render(&mut self, doc: &TodoList) {
        *self.0.todo().write() = doc.clone();
    }
}

/// Draws the poll by publishing it to the store
#[derive(Clone, Copy)]
pub struct PollRenderer(pub AppStore);

impl Renderer<PollState> for PollRenderer {
    fn render(&mut self, doc: &PollState) {
        *self.0.poll().write() = doc.clone();
    }
}

/// Replace the challenge card
pub fn store_set_challenge(store: &AppStore, card: Option<ChallengeCard>) {
    *store.challenge().write() = card;
}
