//! Todo Widget Component
//!
//! Add form, task list with empty state, and counters.

use leptos::prelude::*;
use widget_core::WidgetError;

use crate::components::TaskRow;
use crate::context::AppContext;
use crate::store::{use_app_store, BoardStateStoreFields};

#[component]
pub fn TodoWidget() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (new_text, set_new_text) = signal(String::new());

    let focus_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add_task(&new_text.get_untracked()) {
            Ok(id) => {
                log::debug!("added task {}", id);
                set_new_text.set(String::new());
            }
            // Blank input: nothing to add, just hand focus back
            Err(WidgetError::EmptyTask) => {}
            Err(e) => log::warn!("could not add task: {}", e),
        }
        focus_input();
    };

    let stats = move || store.todo().read().stats();

    view! {
        <section class="widget todo-widget">
            <h2>"Minhas tarefas"</h2>

            <form class="todo-form" on:submit=add_task>
                <input
                    node_ref=input_ref
                    type="text"
                    placeholder="Adicionar nova tarefa..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Adicionar"</button>
            </form>

            <Show
                when=move || !store.todo().read().is_empty()
                fallback=|| view! {
                    <p class="empty-state show">"Nenhuma tarefa ainda. Adicione a primeira acima!"</p>
                }
            >
                <ul class="todo-list">
                    // Keyed on completion too, so a toggled row is rebuilt
                    <For
                        each=move || store.todo().get().tasks
                        key=|task| (task.id, task.completed)
                        children=move |task| view! { <TaskRow task=task /> }
                    />
                </ul>
            </Show>

            <div class="todo-stats">
                <span class="total-tasks">{move || stats().total_label()}</span>
                <span class="completed-tasks">{move || stats().completed_label()}</span>
            </div>
        </section>
    }
}
