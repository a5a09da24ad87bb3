use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::auth::SessionIdentity;

/// The remote collaborator that answers questions.
///
/// The chat controller only depends on this seam, so tests can drive it
/// with an in-process mock instead of a live backend.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Asks a question and returns the answer text.
    ///
    /// Any transport failure, non-2xx status, or malformed response is an
    /// error; callers decide how to surface it.
    async fn ask(&self, question: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    username: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; the server returned the session identity.
    Authenticated(SessionIdentity),
    /// Credentials rejected (HTTP 401).
    Denied,
}

/// Result of a document upload.
///
/// The backend reports success and failure through `message`/`error`
/// fields in the response body; both are surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted(String),
    Rejected(String),
}

/// HTTP client for the chatbox backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Authenticates against `/api/login`.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let url = self.url("/api/login");

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Ok(LoginOutcome::Denied);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Login request failed with status {status}: {body}");
        }

        let body: LoginResponse = response
            .json()
            .await
            .context("Malformed login response")?;

        Ok(LoginOutcome::Authenticated(SessionIdentity::new(
            body.username,
            body.role,
        )))
    }

    /// Uploads a document to `/api/upload` as a multipart form.
    ///
    /// The file travels under the `file` field name, matching what the
    /// backend expects.
    pub async fn upload(&self, path: &Path) -> Result<UploadOutcome> {
        let url = self.url("/api/upload");

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(ToString::to_string)
            .unwrap_or_else(|| "document".to_string());

        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let form = Form::new().part("file", Part::bytes(data).file_name(file_name));

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Upload request failed with status {status}: {body}");
        }

        let body: UploadResponse = response
            .json()
            .await
            .context("Malformed upload response")?;

        match (body.message, body.error) {
            (Some(message), _) => Ok(UploadOutcome::Accepted(message)),
            (None, Some(error)) => Ok(UploadOutcome::Rejected(error)),
            (None, None) => anyhow::bail!("Upload response carried neither message nor error"),
        }
    }
}

#[async_trait]
impl AnswerService for ApiClient {
    async fn ask(&self, question: &str) -> Result<String> {
        let url = self.url("/api/ask");

        let response = self
            .client
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ask request failed with status {status}: {body}");
        }

        let body: AskResponse = response.json().await.context("Malformed ask response")?;

        Ok(body.answer)
    }
}
