use crate::pages::create_poll;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

const MAX_OPTIONS: usize = 10;

#[component]
pub fn CreatePollForm() -> impl IntoView {
    let question = RwSignal::new(String::new());
    // each option input owns its text; the outer signal only tracks how
    // many inputs exist
    let options = RwSignal::new(vec![
        RwSignal::new(String::new()),
        RwSignal::new(String::new()),
    ]);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let navigate = StoredValue::new(use_navigate());

    let add_option = move |_| {
        if options.with(Vec::len) >= MAX_OPTIONS {
            error.set(Some(format!("Maximum of {MAX_OPTIONS} options allowed.")));
            return;
        }
        options.update(|opts| opts.push(RwSignal::new(String::new())));
    };

    let remove_option = move |index: usize| {
        if options.with(Vec::len) <= 2 {
            error.set(Some("A poll must have at least two options.".to_string()));
            return;
        }
        options.update(|opts| {
            opts.remove(index);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let question_text = question.get_untracked().trim().to_string();
        if question_text.is_empty() {
            error.set(Some("Poll question cannot be empty.".to_string()));
            return;
        }

        let option_texts: Vec<String> = options
            .get_untracked()
            .iter()
            .map(|o| o.get_untracked().trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if option_texts.len() < 2 {
            error.set(Some(
                "Please provide at least two non-empty options.".to_string(),
            ));
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match create_poll(question_text, option_texts).await {
                Ok(poll) => {
                    navigate.with_value(|nav| nav(&format!("/poll/{}", poll.id), Default::default()));
                }
                Err(err) => {
                    error.set(Some(format!("Failed to create poll: {err}")));
                    submitting.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit>
            {move || error.get().map(|message| view! {
                <p class="error-message">{message}</p>
            })}

            <div class="form-group">
                <label for="question">"Poll Question:"</label>
                <input
                    type="text"
                    id="question"
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                    prop:disabled=move || submitting.get()
                    required
                />
            </div>

            <div class="form-group">
                <label>"Options:"</label>
                {move || {
                    let count = options.with(Vec::len);
                    options.get().into_iter().enumerate().map(|(index, option)| view! {
                        <div class="option-input-group">
                            <input
                                type="text"
                                placeholder={format!("Option {}", index + 1)}
                                prop:value=move || option.get()
                                on:input=move |ev| option.set(event_target_value(&ev))
                                prop:disabled=move || submitting.get()
                                required
                            />
                            {(count > 2).then(|| view! {
                                <button
                                    type="button"
                                    class="remove-option-btn"
                                    on:click=move |_| remove_option(index)
                                    prop:disabled=move || submitting.get()
                                >
                                    "Remove"
                                </button>
                            })}
                        </div>
                    }).collect::<Vec<_>>()
                }}
                {move || (options.with(Vec::len) < MAX_OPTIONS).then(|| view! {
                    <button
                        type="button"
                        class="add-option-btn"
                        on:click=add_option
                        prop:disabled=move || submitting.get()
                    >
                        "Add Option"
                    </button>
                })}
            </div>

            <button type="submit" class="submit-button" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "Creating Poll..." } else { "Create Poll" }}
            </button>
        </form>
    }
}
