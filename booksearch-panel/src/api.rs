use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResult {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub page_count: Option<u32>,
    pub published_date: Option<String>,
    pub info_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
}

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (status {status})")]
    Server { status: u16, message: String },
}

pub struct PanelClient {
    client: Client,
    server: String,
    token: Option<String>,
}

impl PanelClient {
    pub fn new(server: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            server: server.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Only non-empty terms are sent. Results come back already redacted by
    /// the server and are returned untouched.
    pub async fn search(
        &self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> Result<Vec<BookResult>, PanelError> {
        let mut params = Vec::new();
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            params.push(("title", title));
        }
        if let Some(author) = author.filter(|a| !a.is_empty()) {
            params.push(("author", author));
        }

        info!("Searching for {:?}", params);

        let url = format!("{}/api/books/search", self.server);
        let mut request = self
            .client
            .get(&url)
            .query(&params)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(server_error(response, "Failed to fetch books").await);
        }

        Ok(response.json().await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, PanelError> {
        let url = format!("{}/api/auth/login", self.server);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(server_error(response, "Login failed").await);
        }

        let token_response: TokenResponse = response.json().await?;
        Ok(token_response.token)
    }

    pub async fn signup(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<(), PanelError> {
        let url = format!("{}/api/auth/register", self.server);
        let response = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                email,
                username,
                password,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(server_error(response, "Signup failed").await);
        }

        Ok(())
    }
}

/// The server's plain-text message, or `fallback` when the body is empty.
async fn server_error(response: reqwest::Response, fallback: &str) -> PanelError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let message = if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text.trim().to_string()
    };

    error!("Server responded with {}: {}", status, message);
    PanelError::Server { status, message }
}

/// Username the signup form derives when none is given: the email's local part.
pub fn default_username(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
