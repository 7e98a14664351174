//! Poll Results Component
//!
//! Bar chart of the local tally plus the latest suggestions.

use leptos::prelude::*;
use widget_core::poll::render_results;

use crate::store::{use_app_store, BoardStateStoreFields};

/// Suggestions listed under the chart
const RECENT_SUGGESTIONS: usize = 5;

#[component]
pub fn PollResults() -> impl IntoView {
    let store = use_app_store();
    let results = Memo::new(move |_| render_results(&store.poll().read()));

    let recent = move || {
        store
            .poll()
            .read()
            .suggestions
            .iter()
            .rev()
            .take(RECENT_SUGGESTIONS)
            .map(|s| s.text.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="poll-results">
            {move || results.get().bars.into_iter().map(|bar| view! {
                <div class=if bar.mine { "poll-bar mine" } else { "poll-bar" }>
                    <div class="poll-bar-label">
                        <span>{bar.option.label}{if bar.mine { " (seu voto)" } else { "" }}</span>
                        <span class="poll-bar-count">{bar.count}</span>
                    </div>
                    <div class="poll-bar-track">
                        <div class="poll-bar-fill" style=format!("width: {}%;", bar.width)></div>
                    </div>
                </div>
            }).collect_view()}

            <p class="poll-total">{move || results.get().total_label()}</p>

            <Show when=move || !recent().is_empty()>
                <h3>"Sugestões recentes"</h3>
                <ul class="poll-suggestions">
                    {move || recent().into_iter().map(|text| view! { <li>{text}</li> }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
