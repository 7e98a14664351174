//! UI Components
//!
//! Leptos components for the three widgets.

mod challenge_widget;
mod confirm_button;
mod poll_results;
mod poll_widget;
mod task_row;
mod todo_widget;

pub use challenge_widget::ChallengeWidget;
pub use confirm_button::ConfirmButton;
pub use poll_results::PollResults;
pub use poll_widget::PollWidget;
pub use task_row::TaskRow;
pub use todo_widget::TodoWidget;
