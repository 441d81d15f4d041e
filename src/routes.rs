//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR routes for every client page, the compiled client
//! bundle under `/pkg`, and a health probe under a single Axum router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// SSR front-end: Leptos pages + static bundle + health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(&*leptos_options.site_root).join(&*leptos_options.site_pkg_dir);

    Router::new()
        .route("/", get(redirect_home))
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn redirect_home() -> Redirect {
    Redirect::temporary(client::routes::HOME.path())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
