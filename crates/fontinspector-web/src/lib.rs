use anyhow::{Context, Result};
use axum::{
    Router, middleware,
    routing::{get, post},
};

use fontinspector_core::FontInspector;
use fontinspector_core::models::RebuildReport;

mod dto;
mod error;
mod handlers;
mod html;
mod security;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub(crate) struct WebState {
    pub(crate) app: FontInspector,
}

impl WebState {
    fn new(app: FontInspector) -> Self {
        Self { app }
    }
}

/// Start the dashboard web server and block until shutdown.
///
/// # Errors
/// Returns an error when startup recovery fails, the runtime cannot be
/// created, the socket cannot be bound, or the server exits with a runtime
/// failure.
pub fn serve_web(app: FontInspector, host: &str, port: u16) -> Result<()> {
    let state = WebState::new(app);
    let recovery = run_startup_recovery(&state.app)
        .context("startup recovery failed; refusing to serve the dashboard")?;
    let bind_addr = format!("{host}:{port}");
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build web runtime")?;

    println!(
        "startup recovery complete: projects_rebuilt={} orphaned_refs={} status={}",
        recovery.projects_rebuilt, recovery.orphaned_refs, recovery.status
    );

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("failed to bind web server at {bind_addr}"))?;
        println!("dashboard listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app_router(state))
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await
            .context("web server failed")
    })
}

/// Run mandatory link reconciliation before serving requests.
///
/// # Errors
/// Returns an error when the rebuild fails or reports a non-success
/// terminal status.
pub(crate) fn run_startup_recovery(app: &FontInspector) -> Result<RebuildReport> {
    use fontinspector_core::models::RebuildRunStatus;

    let report = app.rebuild_links()?;
    if report.status != RebuildRunStatus::Success {
        anyhow::bail!("unexpected rebuild status: {}", report.status);
    }
    Ok(report)
}

pub(crate) fn app_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/assets/index.css", get(handlers::index_css))
        .route("/assets/index.js", get(handlers::index_js))
        .route("/api/project", get(handlers::get_project))
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/project/create", post(handlers::create_project))
        .route("/api/project/delete", post(handlers::delete_project))
        .route("/api/inspection", get(handlers::get_inspection))
        .route("/api/inspections", get(handlers::list_inspections))
        .route("/api/inspection/create", post(handlers::create_inspection))
        .route("/api/inspection/run", post(handlers::run_inspection))
        .route("/api/link", post(handlers::link))
        .route("/api/unlink", post(handlers::unlink))
        .route("/api/rebuild", post(handlers::rebuild))
        .route("/api/queue", get(handlers::queue))
        .layer(middleware::from_fn(security::security_headers_middleware))
        .with_state(state)
}
