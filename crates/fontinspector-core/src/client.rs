use std::fs;
use std::path::PathBuf;

use crate::config::InspectorConfig;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::paths;
use crate::state::SqliteStateStore;

mod inspection_service;
mod link_service;
mod project_service;
mod queue_service;
mod rebuild_service;
mod request_log_service;
mod runner_service;
mod runtime_service;

const SCHEMA_VERSION_KEY: &str = "schema_version";
const SCHEMA_VERSION: &str = "1";

#[derive(Clone)]
pub struct FontInspector {
    pub state: SqliteStateStore,
    root: PathBuf,
    config: InspectorConfig,
    fetcher: PageFetcher,
}

impl std::fmt::Debug for FontInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontInspector").finish_non_exhaustive()
    }
}

impl FontInspector {
    pub fn new(root_dir: impl Into<PathBuf>) -> Result<Self> {
        let root = root_dir.into();
        fs::create_dir_all(&root)?;
        let state = SqliteStateStore::open(paths::state_db_path(&root))?;
        let config = InspectorConfig::from_env();
        let fetcher = PageFetcher::new(&config.http)?;

        Ok(Self {
            state,
            root,
            config,
            fetcher,
        })
    }

    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(paths::logs_dir(&self.root))?;
        if self.state.get_system_value(SCHEMA_VERSION_KEY)?.is_none() {
            self.state
                .set_system_value(SCHEMA_VERSION_KEY, SCHEMA_VERSION)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
