//! Application Context
//!
//! Widget controllers shared via Leptos Context API.

use chrono::Utc;
use leptos::prelude::*;
use widget_core::poll::{self, VoteOutcome};
use widget_core::{
    PollLimits, PollState, StoreError, TodoList, Widget, WidgetConfig, WidgetError, WidgetResult,
};

use crate::storage::LocalStore;
use crate::store::{AppStore, PollRenderer, TodoRenderer};

pub type TodoWidget = Widget<TodoList, LocalStore, TodoRenderer>;
pub type PollWidget = Widget<PollState, LocalStore, PollRenderer>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    todo: StoredValue<TodoWidget>,
    poll: StoredValue<PollWidget>,
    /// Limits applied to free-text suggestions
    pub poll_limits: PollLimits,
}

fn disposed() -> WidgetError {
    StoreError::Unavailable("widget disposed".to_string()).into()
}

impl AppContext {
    /// Load both documents from localStorage and draw them into `store`
    pub fn new(config: &WidgetConfig, store: AppStore) -> Self {
        Self {
            todo: StoredValue::new(Widget::load(config.todo_key.clone(), LocalStore, TodoRenderer(store))),
            poll: StoredValue::new(Widget::load(config.poll_key.clone(), LocalStore, PollRenderer(store))),
            poll_limits: config.poll,
        }
    }

    pub fn add_task(&self, text: &str) -> WidgetResult<u64> {
        self.todo
            .try_update_value(|w| w.apply(|list| list.add_task(text, Utc::now())))
            .unwrap_or_else(|| Err(disposed()))
    }

    pub fn toggle_task(&self, id: u64) -> WidgetResult<bool> {
        self.todo
            .try_update_value(|w| w.apply(|list| list.toggle_task(id, Utc::now())))
            .unwrap_or_else(|| Err(disposed()))
    }

    pub fn delete_task(&self, id: u64) -> WidgetResult<()> {
        self.todo
            .try_update_value(|w| w.apply(|list| list.delete_task(id)).map(|_| ()))
            .unwrap_or_else(|| Err(disposed()))
    }

    /// Validate and record this browser's vote
    pub fn cast_vote(&self, option_id: Option<&str>, suggestion: &str) -> WidgetResult<VoteOutcome> {
        let limits = self.poll_limits;
        self.poll
            .try_update_value(|w| {
                w.apply(|state| poll::cast_vote(state, option_id, suggestion, Utc::now(), &limits))
                    .map_err(WidgetError::from)
            })
            .unwrap_or_else(|| Err(disposed()))
    }

    /// Option this browser voted for, if any
    pub fn my_vote(&self) -> Option<String> {
        self.poll
            .try_with_value(|w| w.doc().my_vote.as_ref().map(|v| v.option_id.clone()))
            .flatten()
    }

    pub fn reset_poll(&self) {
        self.poll.update_value(|w| w.reset());
        log::info!("poll results cleared");
    }
}
