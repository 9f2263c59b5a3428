//! HTTP server for the list and post pages

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::LoadError;
use crate::pages::RenderedPage;
use crate::Blog;

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PostParams {
    id: Option<String>,
}

/// Build the router serving `blog`
pub fn router(blog: Arc<Blog>) -> Router {
    let mut app = Router::new()
        .route("/", get(list_handler))
        .route("/index.html", get(list_handler))
        .route("/post.html", get(post_handler));

    // Only the asset and posts directories of a local site are public
    if let Some(root) = blog.transport().local_root() {
        for dir in blog.config.static_dirs() {
            tracing::debug!("Serving {:?} at /{}", root.join(&dir), dir);
            app = app.nest_service(&format!("/{}", dir), ServeDir::new(root.join(&dir)));
        }
    }

    app.layer(TraceLayer::new_for_http()).with_state(blog)
}

/// Start the server
pub async fn start(blog: Blog, ip: &str, port: u16) -> Result<()> {
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let app = router(Arc::new(blog));

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_handler(
    State(blog): State<Arc<Blog>>,
    Query(params): Query<SearchParams>,
) -> Response {
    page_response(blog.render_list_page(params.q.as_deref()).await)
}

async fn post_handler(
    State(blog): State<Arc<Blog>>,
    Query(params): Query<PostParams>,
) -> Response {
    page_response(blog.render_post_page(params.id.as_deref()).await)
}

fn page_response(result: Result<RenderedPage>) -> Response {
    match result {
        Ok(page) => {
            let status = page.error.as_ref().map(status_for).unwrap_or(StatusCode::OK);
            (status, Html(page.html)).into_response()
        }
        Err(e) => {
            tracing::error!("Page rendering failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

fn status_for(error: &LoadError) -> StatusCode {
    match error {
        LoadError::NotFound(_) => StatusCode::NOT_FOUND,
        LoadError::MissingIdentifier => StatusCode::BAD_REQUEST,
        LoadError::Fetch { .. } | LoadError::Parse(_) | LoadError::EmptyPost(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}
