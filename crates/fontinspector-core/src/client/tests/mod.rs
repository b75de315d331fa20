use tempfile::{TempDir, tempdir};

use crate::FontInspector;

mod crud_lifecycle;
mod queue_visibility;
mod rebuild_lifecycle;

fn test_app() -> (TempDir, FontInspector) {
    let temp = tempdir().expect("tempdir");
    let app = FontInspector::new(temp.path()).expect("app new");
    app.initialize().expect("init failed");
    (temp, app)
}
