use crate::login::{decode_login_body, AuthService, LoginError};
use crate::types::{Credentials, ErrorResponse, LoginResult, SignupRequest, UserResponse};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};

async fn handle_response<T: serde::de::DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        res.json::<T>().await.context("Failed to parse success response")
    } else {
        let error_text = res.text().await.unwrap_or_else(|_| format!("HTTP Error: {}", status));
        let error_res: Result<ErrorResponse, _> = serde_json::from_str(&error_text);
        match error_res {
            Ok(parsed_err) => Err(anyhow!(parsed_err.message())),
            Err(_) => Err(anyhow!("HTTP {}: {}", status, error_text)),
        }
    }
}

/// Client for the Todo user service (`/api/users`).
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<UserResponse> {
        let res = self.client.post(self.url("/api/users")).json(req).send().await?;
        handle_response(res).await
    }

    pub async fn me(&self, token: &str) -> Result<UserResponse> {
        let res = self
            .client
            .get(self.url("/api/users/me"))
            .bearer_auth(token)
            .send()
            .await?;
        handle_response(res).await
    }
}

#[async_trait]
impl AuthService for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResult, LoginError> {
        let res = self
            .client
            .post(self.url("/api/users/login"))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(credentials.encode())
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        o_debug!("login answered {}", res.status());
        let body = res
            .text()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;
        decode_login_body(&body)
    }
}
