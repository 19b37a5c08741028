use crate::ai::conversation::RequestId;
use crate::config::AiSettings;
use crate::error::AiError;
use crate::event::AppEvent;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::mpsc;
use std::time::Instant;
use tokio::runtime::Handle;

const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

/// One-shot text generation against the configured model. Results come back
/// to the UI thread as [`AppEvent`]s tagged with the request they answer.
#[derive(Clone)]
pub struct AiClient {
    settings: AiSettings,
    http: reqwest::Client,
    tx: mpsc::Sender<AppEvent>,
    runtime_handle: Handle,
}

impl AiClient {
    pub fn new(settings: AiSettings, tx: mpsc::Sender<AppEvent>) -> Result<Self, AiError> {
        let runtime_handle =
            Handle::try_current().map_err(|err| AiError::Runtime(err.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            settings,
            http,
            tx,
            runtime_handle,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Fires the request in the background. There is no cancellation; a
    /// superseded reply is dropped by the conversation when it arrives.
    pub fn send(&self, request: RequestId, prompt: String) {
        let client = self.clone();
        self.runtime_handle.spawn(async move {
            let started = Instant::now();
            tracing::info!(
                request = request.value(),
                model = %client.settings.model,
                prompt_chars = prompt.chars().count(),
                "sending AI request"
            );

            let event = match client.generate(&prompt).await {
                Ok(text) => {
                    tracing::info!(
                        request = request.value(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        reply_chars = text.chars().count(),
                        "AI request finished"
                    );
                    AppEvent::AiReply { request, text }
                }
                Err(err) => {
                    tracing::warn!(request = request.value(), error = %err, "AI request failed");
                    AppEvent::AiFailed {
                        request,
                        error: err.to_string(),
                    }
                }
            };
            let _ = client.tx.send(event);
        });
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(AiError::NotConfigured)?;

        let response = self
            .http
            .post(endpoint_url(&self.settings.api_base, &self.settings.model))
            .header("x-goog-api-key", api_key)
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AiError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }
        extract_reply_text(&body)
    }
}

fn endpoint_url(api_base: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        api_base.trim_end_matches('/'),
        model
    )
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

fn extract_reply_text(body: &str) -> Result<String, AiError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(AiError::EmptyResponse)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{endpoint_url, extract_reply_text, request_body};
    use crate::error::AiError;

    #[test]
    fn endpoint_url_joins_base_and_model() {
        assert_eq!(
            endpoint_url("https://example.test/v1beta/", "gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_wraps_prompt_as_single_part() {
        let body = request_body("Hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hello");
    }

    #[test]
    fn reply_text_concatenates_parts_of_first_candidate() {
        let body = r#"{
  "candidates": [
    { "content": { "role": "model", "parts": [ { "text": "Focus on " }, { "text": "channels." } ] } },
    { "content": { "parts": [ { "text": "ignored" } ] } }
  ]
}"#;
        let text = extract_reply_text(body).expect("reply should parse");
        assert_eq!(text, "Focus on channels.");
    }

    #[test]
    fn reply_without_text_is_an_error() {
        let blocked = r#"{ "candidates": [], "promptFeedback": { "blockReason": "SAFETY" } }"#;
        assert!(matches!(
            extract_reply_text(blocked),
            Err(AiError::EmptyResponse)
        ));
        assert!(matches!(
            extract_reply_text(r#"{ "candidates": [ { "finishReason": "STOP" } ] }"#),
            Err(AiError::EmptyResponse)
        ));
    }

    #[test]
    fn malformed_reply_is_a_decode_error() {
        assert!(matches!(
            extract_reply_text("<html>bad gateway</html>"),
            Err(AiError::Decode(_))
        ));
    }
}
