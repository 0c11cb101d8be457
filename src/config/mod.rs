use tracing::warn;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Process configuration, read once at startup.
///
/// Environment variables (a `.env` file is honoured through `dotenvy`):
/// - `GEMINI_API_KEY`: upstream credential. Missing or empty means every relay call answers 500.
/// - `GEMINI_MODEL`: model name used in the `generateContent` path.
/// - `GEMINI_API_BASE`: base URL of the Gemini REST API, without trailing slash.
/// - `BIND_ADDR`: listen address for the HTTP server.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_key = dotenvy::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; generation requests will fail");
        }

        let model = dotenvy::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_base = dotenvy::var("GEMINI_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let bind_addr =
            dotenvy::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            api_key,
            model,
            api_base,
            bind_addr,
        }
    }

    /// `<base>/models/<model>:generateContent`, without the key query parameter.
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_joins_base_and_model() {
        let config = AppConfig {
            api_key: None,
            model: "gemini-2.5-flash".into(),
            api_base: "http://127.0.0.1:9999/v1beta".into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
        };
        assert_eq!(
            config.generate_url(),
            "http://127.0.0.1:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
