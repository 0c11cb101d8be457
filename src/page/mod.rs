use axum::{body::Bytes, extract::State, response::Html, routing::get, Router};
use minijinja::{context, Environment};

use crate::{api::RELAY_PATH, prompts, state::AppState};

const PAGE_TEMPLATE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/index.html"));

const PAGE_TITLE: &str = "Random Page Generator";
const PAGE_DESCRIPTION: &str = "A serverless random page generator using Gemini AI";

/// Time the loader stays up after content arrives.
pub const REVEAL_DELAY_MS: u64 = 1000;
/// Gap between mounting the frame and fading it in.
pub const FADE_IN_DELAY_MS: u64 = 100;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.page_html.clone())
}

/// Renders the page controller document. Done once at startup; the output never changes.
pub fn render_page() -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

    env.get_template(PAGE_TEMPLATE_NAME)?.render(context! {
        title => PAGE_TITLE,
        description => PAGE_DESCRIPTION,
        relay_path_json => script_json(RELAY_PATH),
        prompt_json => script_json(prompts::page_prompt()),
        reveal_delay_ms => REVEAL_DELAY_MS,
        fade_in_delay_ms => FADE_IN_DELAY_MS,
    })
}

/// JSON string literal that is safe to drop inside an inline `<script>`.
fn script_json(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_cannot_close_the_script_tag() {
        let encoded = script_json("</script><b>&");
        assert!(!encoded.contains("</script>"));
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, "</script><b>&");
    }

    #[test]
    fn rendered_page_embeds_prompt_and_relay_path() {
        let html = render_page().expect("page renders");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Random Page Generator</title>"));
        assert!(html.contains(r#"const RELAY_PATH = "/api/generate";"#));
        assert!(html.contains(&script_json(prompts::page_prompt())));
        assert!(html.contains("const REVEAL_DELAY_MS = 1000;"));
        assert!(html.contains("const FADE_IN_DELAY_MS = 100;"));
    }

    #[test]
    fn rendered_page_sandboxes_generated_content() {
        let html = render_page().expect("page renders");
        assert!(html.contains(r#"frame.setAttribute("sandbox", "allow-scripts");"#));
        assert!(!html.contains("allow-same-origin\""));
        assert!(html.contains("frame.srcdoc = state.html;"));
    }

    #[tokio::test]
    async fn index_serves_rendered_page() {
        use axum::{
            body::{to_bytes, Body},
            http::{header::CONTENT_TYPE, Request, StatusCode},
        };
        use tower::ServiceExt;

        use crate::config::{AppConfig, DEFAULT_API_BASE, DEFAULT_BIND_ADDR, DEFAULT_MODEL};

        let state = AppState::new(AppConfig {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
        })
        .unwrap();
        let expected = state.page_html.clone();

        let response = router()
            .with_state(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn rendered_page_has_three_phases_only() {
        let html = render_page().expect("page renders");
        assert!(html.contains(r#"let state = { phase: "loading" };"#));
        assert!(html.contains(r#"transition({ phase: "ready", html: html });"#));
        assert!(html.contains(r#"transition({ phase: "error", message: err.message });"#));
        assert!(html.contains(r#"if (state.phase !== "loading")"#));
    }
}
