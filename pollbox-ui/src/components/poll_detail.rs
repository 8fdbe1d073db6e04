use super::{ErrorDisplay, LoadingSpinner};
use crate::pages::{cast_vote, delete_poll, get_poll};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use pollbox_errors::AppError;
use server_fn::ServerFnError;

/// One voting session, client-side. The component is rebuilt when the user
/// navigates to a different poll, which resets the machine to `Idle`.
#[derive(Debug, Clone, PartialEq)]
enum VoteState {
    Idle,
    Voting(i32),
    Voted,
    Errored(String),
}

fn email_looks_valid(email: &str) -> bool {
    email.len() > 3 && email.contains('@')
}

fn classify(err: &ServerFnError) -> AppError {
    let message = err.to_string();
    message
        .parse()
        .unwrap_or_else(|_| AppError::Internal(message.clone()))
}

#[component]
pub fn PollDetail(poll_id: i32) -> impl IntoView {
    let poll = Resource::new(move || poll_id, get_poll);
    let email = RwSignal::new(String::new());
    let state = RwSignal::new(VoteState::Idle);
    let deleting = RwSignal::new(false);
    let navigate = StoredValue::new(use_navigate());

    let voting = move || matches!(state.get(), VoteState::Voting(_));
    let voted = move || state.get() == VoteState::Voted;

    let on_vote = move |option_id: i32| {
        if voting() || voted() {
            return;
        }
        let address = email.get_untracked();
        if !email_looks_valid(&address) {
            state.set(VoteState::Errored(
                "Please enter a valid email address to vote.".to_string(),
            ));
            return;
        }

        state.set(VoteState::Voting(option_id));
        spawn_local(async move {
            match cast_vote(option_id, address).await {
                Ok(_) => {
                    state.set(VoteState::Voted);
                    poll.refetch();
                }
                Err(err) => match classify(&err) {
                    // the server remembers across sessions; treat a
                    // duplicate as having voted
                    AppError::DuplicateVote(_) => state.set(VoteState::Voted),
                    other => state.set(VoteState::Errored(other.to_string())),
                },
            }
        });
    };

    let on_delete = move || {
        if deleting.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        if address.trim().is_empty() {
            state.set(VoteState::Errored(
                "Admin email is required to delete.".to_string(),
            ));
            return;
        }

        deleting.set(true);
        spawn_local(async move {
            match delete_poll(poll_id, address).await {
                Ok(()) => navigate.with_value(|nav| nav("/", Default::default())),
                Err(err) => {
                    deleting.set(false);
                    state.set(VoteState::Errored(classify(&err).to_string()));
                }
            }
        });
    };

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner/> }>
            {move || {
                poll.get().map(|result| match result {
                    Ok(data) => {
                        let created = data.created_at.format("%Y-%m-%d %H:%M").to_string();
                        view! {
                            <div class="poll-detail">
                                <h2 class="poll-detail__question">{data.question.clone()}</h2>

                                {move || match state.get() {
                                    VoteState::Errored(message) => view! {
                                        <ErrorDisplay
                                            message=message
                                            on_retry=Callback::new(move |_| state.set(VoteState::Idle))
                                        />
                                    }.into_any(),
                                    VoteState::Voted => view! {
                                        <p class="voted-message">"Thank you for voting!"</p>
                                    }.into_any(),
                                    _ => view! {
                                        <div class="form-group">
                                            <label for="voter-email">"Your Email (to vote):"</label>
                                            <input
                                                id="voter-email"
                                                type="email"
                                                placeholder="you@example.com"
                                                prop:value=move || email.get()
                                                on:input=move |ev| email.set(event_target_value(&ev))
                                                prop:disabled=voting
                                            />
                                        </div>
                                    }.into_any(),
                                }}

                                <ul class="options-list">
                                    {data.options.iter().map(|option| {
                                        let option_id = option.id;
                                        view! {
                                            <li class="option-item">
                                                <span class="option-item__text">{option.text.clone()}</span>
                                                <span class="option-item__count">"Votes: " {option.votes}</span>
                                                <button
                                                    class="vote-button"
                                                    on:click=move |_| on_vote(option_id)
                                                    prop:disabled=move || {
                                                        voting() || voted() || !email_looks_valid(&email.get())
                                                    }
                                                >
                                                    {move || if state.get() == VoteState::Voting(option_id) {
                                                        "Voting..."
                                                    } else {
                                                        "Vote"
                                                    }}
                                                </button>
                                            </li>
                                        }
                                    }).collect::<Vec<_>>()}
                                </ul>

                                <p class="poll-detail__footer">"Created: " {created}</p>

                                <div class="poll-detail__admin">
                                    <button
                                        class="delete-button"
                                        on:click=move |_| on_delete()
                                        prop:disabled=move || deleting.get()
                                    >
                                        {move || if deleting.get() { "Deleting..." } else { "Delete Poll (admin)" }}
                                    </button>
                                </div>
                            </div>
                        }.into_any()
                    }
                    Err(err) => {
                        let message = match classify(&err) {
                            AppError::NotFound(_) => "Poll not found.".to_string(),
                            other => format!("Error loading poll: {other}"),
                        };
                        view! { <p class="error-message">{message}</p> }.into_any()
                    }
                })
            }}
        </Suspense>
    }
}
