//! Task Row Component
//!
//! Individual task in the todo list.

use chrono::Local;
use leptos::prelude::*;
use widget_core::i18n::format_short;
use widget_core::Task;

use crate::context::AppContext;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let completed = task.completed;
    let title = task
        .completed_at
        .map(|at| format!("Concluída em {}", format_short(&at.with_timezone(&Local))));

    view! {
        <li class=if completed { "todo-item completed" } else { "todo-item" } title=title>
            // Checkbox
            <div
                class=if completed { "todo-checkbox checked" } else { "todo-checkbox" }
                role="checkbox"
                aria-checked=completed.to_string()
                on:click=move |_| {
                    if let Err(e) = ctx.toggle_task(id) {
                        log::warn!("could not toggle task {}: {}", id, e);
                    }
                }
            ></div>

            // Text
            <span class="todo-text">{task.text}</span>

            // Delete button
            <button
                class="delete-btn"
                aria-label="Excluir tarefa"
                on:click=move |_| {
                    if let Err(e) = ctx.delete_task(id) {
                        log::warn!("could not delete task {}: {}", id, e);
                    }
                }
            >
                "×"
            </button>
        </li>
    }
}
