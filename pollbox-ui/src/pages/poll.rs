use crate::components::PollDetail;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use pollbox_app::domain::{PollOption, PollWithOptions};
use server_fn::ServerFnError;

#[server(GetPollFn, "/api", endpoint = "get_poll")]
pub async fn get_poll(id: i32) -> Result<PollWithOptions, ServerFnError> {
    use pollbox_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.manage_polls
        .get(id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(CastVoteFn, "/api", endpoint = "cast_vote")]
pub async fn cast_vote(option_id: i32, user_email: String) -> Result<PollOption, ServerFnError> {
    use pollbox_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.cast_vote
        .execute(option_id, &user_email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server(DeletePollFn, "/api", endpoint = "delete_poll")]
pub async fn delete_poll(id: i32, user_email: String) -> Result<(), ServerFnError> {
    use pollbox_app::AppContext;

    let ctx = expect_context::<AppContext>();
    ctx.manage_polls
        .delete(id, &user_email)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn PollPage() -> impl IntoView {
    let params = use_params_map();
    let poll_id = Memo::new(move |_| {
        params.with(|p| p.get("id").and_then(|raw| raw.parse::<i32>().ok()))
    });

    view! {
        // keyed on the id: navigating to another poll rebuilds the detail
        // view, which resets its voting state
        {move || match poll_id.get() {
            Some(id) => view! { <PollDetail poll_id=id/> }.into_any(),
            None => view! { <p class="error-message">"Invalid poll id."</p> }.into_any(),
        }}
    }
}
