//! # Sensu HTTP Client
//!
//! Wraps `reqwest::Client` with the Sensu API's authentication and hands back the
//! raw status and body of every call. Status interpretation belongs to the command
//! handlers, since the API's error semantics differ per endpoint.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

use crate::domain::config::SensuConfig;
use crate::domain::traits::SensuApi;
use crate::domain::types::HttpResponse;
use crate::infrastructure::sensu::SensuError;

pub struct SensuClient {
    http: reqwest::Client,
    credentials: Option<(String, String)>,
}

impl SensuClient {
    /// Build a client with the configured timeout and credentials.
    pub fn new(config: &SensuConfig) -> Result<Self, SensuError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("sensubot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client around a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, config: &SensuConfig) -> Self {
        Self {
            http,
            credentials: config.credentials(),
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((user, pass)) => req.basic_auth(user, Some(pass)),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<HttpResponse, SensuError> {
        let resp = self.authorize(req).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse::new(status, body))
    }
}

#[async_trait]
impl SensuApi for SensuClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, SensuError> {
        debug!("GET {}", url);
        self.send(self.http.get(url)).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, SensuError> {
        debug!("DELETE {}", url);
        self.send(self.http.delete(url)).await
    }

    async fn post(&self, url: &str, body: &str) -> Result<HttpResponse, SensuError> {
        debug!("POST {} {}", url, body);
        let req = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        self.send(req).await
    }
}
