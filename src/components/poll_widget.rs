//! Poll Widget Component
//!
//! Option form with free-text suggestion, inline status, results and reset.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use widget_core::poll::{find_option, FREE_TEXT_OPTION, POLL_OPTIONS, POLL_QUESTION};
use widget_core::WidgetError;

use crate::components::{ConfirmButton, PollResults};
use crate::context::AppContext;

/// How long a success message stays visible
const STATUS_CLEAR_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Success(&'static str),
    Error(String),
}

#[component]
pub fn PollWidget() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let max_chars = ctx.poll_limits.suggestion_max_chars;

    // Preselect the stored vote
    let initial = ctx.my_vote().and_then(|id| find_option(&id)).map(|o| o.id);
    let (selected, set_selected) = signal::<Option<&'static str>>(initial);
    let (suggestion, set_suggestion) = signal(String::new());
    let (status, set_status) = signal::<Option<Status>>(None);
    let (status_seq, set_status_seq) = signal(0u32);

    let show_status = move |next: Status| {
        let seq = status_seq.get_untracked() + 1;
        set_status_seq.set(seq);
        let auto_clear = matches!(next, Status::Success(_));
        set_status.set(Some(next));
        if auto_clear {
            spawn_local(async move {
                TimeoutFuture::new(STATUS_CLEAR_MS).await;
                // A newer message owns the line now
                if status_seq.get_untracked() == seq {
                    set_status.set(None);
                }
            });
        }
    };

    let submit_vote = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.cast_vote(selected.get_untracked(), &suggestion.get_untracked()) {
            Ok(outcome) => {
                log::info!("vote stored: {:?}", outcome);
                set_suggestion.set(String::new());
                show_status(Status::Success(outcome.message()));
            }
            Err(WidgetError::Vote(e)) => show_status(Status::Error(e.user_message())),
            Err(e) => {
                log::error!("could not store vote: {}", e);
                show_status(Status::Error("Não foi possível salvar seu voto.".to_string()));
            }
        }
    };

    let reset = move |_: ()| {
        ctx.reset_poll();
        set_selected.set(None);
        set_suggestion.set(String::new());
        show_status(Status::Success("Resultados apagados."));
    };

    view! {
        <section class="widget poll-widget">
            <h2>"Enquete"</h2>
            <p class="poll-question">{POLL_QUESTION}</p>

            <form class="poll-form" on:submit=submit_vote>
                <div class="poll-options">
                    {POLL_OPTIONS.iter().map(|option| {
                        let id = option.id;
                        view! {
                            <label class="poll-option">
                                <input
                                    type="radio"
                                    name="poll-option"
                                    value=id
                                    prop:checked=move || selected.get() == Some(id)
                                    on:change=move |_| set_selected.set(Some(id))
                                />
                                <span>{option.label}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>

                <Show when=move || selected.get() == Some(FREE_TEXT_OPTION)>
                    <textarea
                        class="poll-suggestion"
                        placeholder="Qual jogo você gostaria de ver?"
                        maxlength=max_chars.to_string()
                        prop:value=move || suggestion.get()
                        on:input=move |ev| set_suggestion.set(event_target_value(&ev))
                    ></textarea>
                    <span class="poll-suggestion-count">
                        {move || format!("{}/{}", suggestion.get().chars().count(), max_chars)}
                    </span>
                </Show>

                <button type="submit">"Votar"</button>
            </form>

            {move || status.get().map(|s| match s {
                Status::Success(msg) => view! { <p class="poll-status success">{msg}</p> }.into_any(),
                Status::Error(msg) => view! { <p class="poll-status error" role="alert">{msg}</p> }.into_any(),
            })}

            <PollResults />

            <ConfirmButton
                button_class="poll-reset-btn"
                label="Zerar enquete"
                prompt="Apagar todos os votos salvos neste navegador?"
                on_confirm=reset
            />
        </section>
    }
}
