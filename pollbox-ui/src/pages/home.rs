use leptos::prelude::*;
use pollbox_app::domain::PollSummary;
use server_fn::ServerFnError;

#[server(ListPollsFn, "/api", endpoint = "list_polls")]
pub async fn list_polls() -> Result<Vec<PollSummary>, ServerFnError> {
    use pollbox_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.manage_polls
        .list()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let polls = Resource::new(|| (), |_| list_polls());

    view! {
        <div class="hero">
            <h1 class="hero__title">"Available Polls"</h1>
            <p class="hero__subtitle">
                "Pick a poll to see live results and cast your vote, or create your own."
            </p>
        </div>

        <Suspense fallback=move || view! { <p class="loading-message">"Loading polls..."</p> }>
            {move || {
                polls.get().map(|result| match result {
                    Ok(polls) => {
                        if polls.is_empty() {
                            view! {
                                <p class="empty-message">"No polls available yet."</p>
                            }.into_any()
                        } else {
                            view! {
                                <ul class="poll-list">
                                    {polls.into_iter().map(|poll| view! {
                                        <li class="poll-list__item">
                                            <a href={format!("/poll/{}", poll.id)} class="poll-list__question">
                                                {poll.question}
                                            </a>
                                            <small class="poll-list__created">
                                                "Created: " {poll.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                            </small>
                                        </li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            }.into_any()
                        }
                    }
                    Err(_) => view! {
                        <p class="error-message">"Error loading polls."</p>
                    }.into_any(),
                })
            }}
        </Suspense>
    }
}
