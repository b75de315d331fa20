use std::path::{Path, PathBuf};

pub(crate) fn state_db_path(root: &Path) -> PathBuf {
    root.join("fontinspector.sqlite3")
}

pub(crate) fn logs_dir(root: &Path) -> PathBuf {
    root.join("logs")
}

pub(crate) fn request_log_path(root: &Path) -> PathBuf {
    logs_dir(root).join("requests.jsonl")
}
