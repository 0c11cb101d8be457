use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::{
    api::{
        error::RelayError,
        types::{GenerateRequest, GenerateResponse},
    },
    markup::strip_code_fence,
    state::AppState,
};

/// `/api/generate`: answers preflight, relays POSTed prompts to Gemini, rejects everything else.
pub async fn generate(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, RelayError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        debug!(%method, "rejecting relay call");
        return Err(RelayError::MethodNotAllowed);
    }

    let request_id = Uuid::new_v4().to_string();

    let Some(api_key) = state.config.api_key.as_deref() else {
        error!(%request_id, "GEMINI_API_KEY is not configured");
        return Err(RelayError::MissingCredential);
    };

    let prompt = parse_prompt(&body).inspect_err(|err| {
        debug!(%request_id, error = %err, "rejecting relay body");
    })?;
    info!(%request_id, prompt_len = prompt.len(), "relaying generation request");

    let raw = state
        .gemini
        .generate(api_key, &prompt)
        .await
        .map_err(|err| {
            error!(%request_id, error = %err, "generation failed");
            RelayError::from(err)
        })?;

    let html_content = strip_code_fence(&raw);
    info!(%request_id, html_len = html_content.len(), "generation complete");

    Ok(Json(GenerateResponse { html_content }).into_response())
}

fn parse_prompt(body: &[u8]) -> Result<String, RelayError> {
    // An empty body is treated like an object without a prompt.
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        GenerateRequest::default()
    } else {
        serde_json::from_slice::<GenerateRequest>(body).map_err(|_| RelayError::InvalidBody)?
    };

    request
        .prompt
        .filter(|prompt| !prompt.is_empty())
        .ok_or(RelayError::PromptRequired)
}
