use axum::{routing::post, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use pollbox_app::AppContext;
use pollbox_ui::pages::{CastVoteFn, CreatePollFn, DeletePollFn, GetPollFn, ListPollsFn};
use pollbox_ui::App;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

mod rest;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env().await {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("failed to initialize database: {e}");
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<ListPollsFn>();
    server_fn::axum::register_explicit::<GetPollFn>();
    server_fn::axum::register_explicit::<CreatePollFn>();
    server_fn::axum::register_explicit::<CastVoteFn>();
    server_fn::axum::register_explicit::<DeletePollFn>();

    let app = Router::new()
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req,
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        .merge(rest::router(app_context.clone()))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // release the pool before the process goes away
    if let Err(e) = app_context.db.close().await {
        tracing::warn!("error closing database pool: {e}");
    }
    tracing::info!("database pool closed");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    tracing::info!("shutdown signal received: draining connections");
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Pollbox"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🗳️</text></svg>"/>
                <style>{CSS}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

const CSS: &str = r#"
:root {
    --base: #faf4ed;
    --surface: #fffaf3;
    --overlay: #f2e9e1;
    --muted: #9893a5;
    --subtle: #797593;
    --text: #575279;
    --love: #b4637a;
    --gold: #ea9d34;
    --pine: #286983;
    --foam: #56949f;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Inter', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 700px; margin: 0 auto; padding: 1.5rem; }
.nav { display: flex; gap: 1.5rem; max-width: 700px; margin: 0 auto; padding: 1rem 1.5rem 0; }
.nav__link { color: var(--pine); font-weight: 600; text-decoration: none; }
.nav__link:hover { text-decoration: underline; }
.hero { text-align: center; padding: 2rem 0 1rem; }
.hero__title { font-size: clamp(1.5rem, 4vw, 2.2rem); color: var(--love); font-weight: 800; margin-bottom: 0.5rem; }
.hero__subtitle { color: var(--subtle); max-width: 480px; margin: 0 auto; }
.loading-message, .empty-message { text-align: center; color: var(--subtle); padding: 2rem 0; font-style: italic; }
.loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
.loading__spinner {
    width: 42px; height: 42px; border: 4px solid var(--overlay);
    border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
.loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
.poll-list { list-style: none; }
.poll-list__item {
    background: var(--surface); border: 2px solid var(--overlay); border-radius: 8px;
    padding: 1rem 1.25rem; margin-bottom: 0.75rem; display: flex; flex-direction: column; gap: 0.25rem;
}
.poll-list__question { color: var(--pine); font-weight: 600; text-decoration: none; font-size: 1.05rem; }
.poll-list__question:hover { text-decoration: underline; }
.poll-list__created { color: var(--muted); }
.poll-detail {
    background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px;
    padding: 1.5rem; margin: 1rem 0;
}
.poll-detail__question { color: var(--love); font-size: 1.3rem; margin-bottom: 1rem; padding-bottom: 0.75rem; border-bottom: 2px solid var(--overlay); }
.poll-detail__footer { margin-top: 1.25rem; color: var(--muted); font-size: 0.85rem; }
.options-list { list-style: none; }
.option-item {
    display: flex; align-items: center; gap: 0.75rem; padding: 0.6rem 0;
    border-bottom: 1px solid var(--overlay);
}
.option-item__text { flex: 1; }
.option-item__count { color: var(--subtle); white-space: nowrap; }
.vote-button {
    padding: 0.4rem 1rem; background: var(--pine); color: var(--base); border: none;
    border-radius: 6px; font-weight: 600; cursor: pointer;
}
.vote-button:hover { opacity: 0.9; }
.vote-button:disabled { background: var(--muted); cursor: not-allowed; }
.voted-message { color: var(--pine); font-weight: 600; margin: 0.75rem 0; }
.form-group { margin: 1rem 0; display: flex; flex-direction: column; gap: 0.4rem; }
.form-group label { font-weight: 600; color: var(--subtle); }
.form-group input {
    padding: 0.7rem 1rem; border: 2px solid var(--overlay); border-radius: 8px;
    background: var(--surface); color: var(--text); font-size: 1rem;
}
.form-group input:focus { outline: none; border-color: var(--pine); }
.option-input-group { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
.option-input-group input { flex: 1; }
.add-option-btn, .remove-option-btn {
    padding: 0.5rem 0.9rem; background: var(--overlay); color: var(--text); border: none;
    border-radius: 6px; font-weight: 600; cursor: pointer;
}
.submit-button {
    padding: 0.8rem 1.6rem; background: var(--love); color: var(--base); border: none;
    border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer; margin-top: 0.5rem;
}
.submit-button:disabled { background: var(--muted); cursor: not-allowed; }
.delete-button {
    padding: 0.4rem 0.9rem; background: transparent; color: var(--love);
    border: 2px solid var(--love); border-radius: 6px; font-weight: 600; cursor: pointer;
}
.delete-button:disabled { color: var(--muted); border-color: var(--muted); cursor: not-allowed; }
.error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1rem 1.25rem; margin: 1rem 0; }
.error__title { color: var(--love); font-weight: 700; margin-bottom: 0.4rem; }
.error__message { color: #8b3d4d; }
.error__retry { margin-top: 0.75rem; padding: 0.4rem 0.9rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; }
.error-message { color: var(--love); margin: 0.75rem 0; }
.footer { text-align: center; padding: 2rem 0; color: var(--muted); font-size: 0.9rem; }
"#;
