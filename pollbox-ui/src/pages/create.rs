use crate::components::CreatePollForm;
use leptos::prelude::*;
use pollbox_app::domain::PollWithOptions;
use server_fn::ServerFnError;

#[server(CreatePollFn, "/api", endpoint = "create_poll")]
pub async fn create_poll(
    question: String,
    options: Vec<String>,
) -> Result<PollWithOptions, ServerFnError> {
    use pollbox_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.manage_polls
        .create(&question, &options)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn CreatePollPage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"Create a New Poll"</h1>
        </div>
        <CreatePollForm/>
    }
}
