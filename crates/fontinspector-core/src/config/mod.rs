mod env;

use self::env::{read_env_u64, read_env_usize, read_non_empty_env};

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 20;
const DEFAULT_USER_AGENT: &str = concat!("fontinspector/", env!("CARGO_PKG_VERSION"));
const DEFAULT_MAX_REDIRECTS: usize = 5;
const DEFAULT_MAX_STYLESHEETS: usize = 8;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl HttpConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            timeout_secs: read_env_u64("FONTINSPECTOR_HTTP_TIMEOUT_SECS")
                .filter(|value| *value >= 1)
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: read_non_empty_env("FONTINSPECTOR_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_redirects: read_env_usize(
                "FONTINSPECTOR_MAX_REDIRECTS",
                DEFAULT_MAX_REDIRECTS,
                0,
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub max_stylesheets: usize,
}

impl RunnerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_stylesheets: read_env_usize(
                "FONTINSPECTOR_MAX_STYLESHEETS",
                DEFAULT_MAX_STYLESHEETS,
                0,
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub http: HttpConfig,
    pub runner: RunnerConfig,
}

impl InspectorConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig::from_env(),
            runner: RunnerConfig::from_env(),
        }
    }
}
