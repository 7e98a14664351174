//! Challenge Widget Component
//!
//! Random micro-challenge with copy-to-clipboard.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use widget_core::challenge::{self, ChallengeCard, CopyOutcome};

use crate::commands;
use crate::store::{store_set_challenge, use_app_store, BoardStateStoreFields};

#[component]
pub fn ChallengeWidget() -> impl IntoView {
    let store = use_app_store();
    let text_ref = NodeRef::<leptos::html::P>::new();

    let generate = move || {
        let picked = challenge::pick(&mut rand::thread_rng());
        log::debug!("picked challenge tagged {}", picked.tag);
        store_set_challenge(&store, Some(ChallengeCard::new(picked, &Local::now())));
    };

    // First challenge right away
    generate();

    let copy = move |_| {
        let Some(card) = store.challenge().get_untracked() else {
            return;
        };
        spawn_local(async move {
            let outcome = match commands::write_text(card.copy_value()).await {
                Ok(()) => CopyOutcome::Copied,
                Err(e) => {
                    log::info!("clipboard write failed, selecting text instead: {}", e);
                    if let Some(node) = text_ref.get_untracked() {
                        if let Err(e) = commands::select_contents(&node) {
                            log::warn!("could not select challenge text: {}", e);
                        }
                    }
                    CopyOutcome::Selected
                }
            };
            store_set_challenge(&store, Some(card.with_copy_outcome(outcome)));
        });
    };

    view! {
        <section class="widget challenge-widget">
            <h2>"Micro-desafio"</h2>

            <p class="random-text" node_ref=text_ref>
                {move || store.challenge().read().as_ref().map(|c| c.challenge.text).unwrap_or("")}
            </p>
            <p class="random-meta">
                {move || store.challenge().read().as_ref().map(|c| c.meta.clone()).unwrap_or_default()}
            </p>

            <div class="challenge-actions">
                <button type="button" on:click=move |_| generate()>"Gerar outro"</button>
                <button
                    type="button"
                    on:click=copy
                    disabled=move || store.challenge().read().is_none()
                >
                    "Copiar"
                </button>
            </div>
        </section>
    }
}
