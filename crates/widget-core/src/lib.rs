//! Widget Core
//!
//! DOM-free half of the pocket widgets:
//! - store: key-value persistence of JSON documents
//! - widget: the mutate → persist → render controller
//! - todo, poll, challenge: documents, mutators and view models

pub mod challenge;
pub mod config;
pub mod error;
pub mod i18n;
pub mod poll;
pub mod store;
pub mod todo;
pub mod widget;

mod tests;

pub use challenge::{ChallengeCard, CopyOutcome};
pub use config::{PollLimits, WidgetConfig};
pub use error::{StoreError, VoteError, WidgetError, WidgetResult};
pub use poll::{PollState, VoteOutcome};
pub use store::{Document, KeyValueStore, MemoryStore};
pub use todo::{Task, TodoList, TodoStats};
pub use widget::{Renderer, Widget};
