use axum::{
    Router,
    body::{Body, to_bytes},
    response::Response,
};

use fontinspector_core::FontInspector;

use crate::{WebState, app_router};

pub(super) struct TestHarness {
    _temp: tempfile::TempDir,
    pub(super) state: WebState,
    pub(super) router: Router,
}

impl TestHarness {
    pub(super) fn setup() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        // `reqwest::blocking` builds a client by spinning up and dropping a
        // temporary runtime, which panics inside an async (`#[tokio::test]`)
        // context. Construct the app on a plain OS thread with no ambient
        // runtime, mirroring how production builds the app before `serve_web`.
        let path = temp.path().to_path_buf();
        let app = std::thread::spawn(move || {
            let app = FontInspector::new(path).expect("app");
            app.initialize().expect("init");
            app
        })
        .join()
        .expect("setup thread");

        let state = WebState::new(app);
        let router = app_router(state.clone());
        Self {
            _temp: temp,
            state,
            router,
        }
    }

    /// A project seeded with pending inspections, returning `(project_id, inspection_ids)`.
    pub(super) fn seed_project(&self, name: &str, urls: &[&str]) -> (String, Vec<String>) {
        let urls = urls.iter().map(ToString::to_string).collect::<Vec<_>>();
        let project = self
            .state
            .app
            .create_project(name, &urls)
            .expect("seed project");
        (project.id.clone(), project.inspection_ids)
    }
}

pub(super) async fn decode_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body bytes");
    serde_json::from_slice(&bytes).expect("decode json")
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "tests usually pass temporary `json!` values directly"
)]
pub(super) fn json_request(path: &str, body: serde_json::Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&body).expect("json request body"),
        ))
        .expect("json request")
}

pub(super) fn get_request(path: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("get request")
}
