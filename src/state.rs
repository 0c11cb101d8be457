use std::sync::Arc;

use axum::body::Bytes;

use crate::{config::AppConfig, gemini::GeminiClient, page};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gemini: GeminiClient,
    pub page_html: Bytes,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let gemini = GeminiClient::new(&config);
        let page_html = Bytes::from(page::render_page()?);

        Ok(Self {
            config: Arc::new(config),
            gemini,
            page_html,
        })
    }
}
