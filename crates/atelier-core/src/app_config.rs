use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Service root, e.g. `https://host/api/v1`.
    pub catalog_base_url: String,
    /// Collection path segment under the base URL, e.g. `tool`.
    pub catalog_resource: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Directory backing the file key-value store.
    pub data_dir: PathBuf,
    /// Key under which the favorites blob is stored.
    pub favorites_key: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog_base_url", &self.catalog_base_url)
            .field("catalog_resource", &self.catalog_resource)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("data_dir", &self.data_dir)
            .field("favorites_key", &self.favorites_key)
            .finish()
    }
}
