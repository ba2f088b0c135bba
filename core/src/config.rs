//! Where the backend lives and how strictly deletes are checked.

pub const DEFAULT_API_HOST: &str = "http://localhost:8000";
pub const TODOS_PATH: &str = "/api/todos";

/// Location of the todos endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub path: String,
}

impl ApiConfig {
    pub fn with_host(host: &str) -> Self {
        Self {
            host: host.to_string(),
            ..Self::default()
        }
    }

    /// `{host}{path}`, without a doubled slash between them.
    pub fn request_url(&self) -> String {
        format!("{}{}", self.host.trim_end_matches('/'), self.path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            path: TODOS_PATH.to_string(),
        }
    }
}

/// How a DELETE response is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteCheck {
    /// Any JSON body counts as success; HTTP status and the body's `status`
    /// field are ignored. Matches the behavior deployed panels rely on.
    #[default]
    Lenient,
    /// Require a 2xx status and `"status": "success"` in the body.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelConfig {
    pub api: ApiConfig,
    pub delete_check: DeleteCheck,
}
