//! Thin blocking HTTP client over the server's API surface.

use crate::config::ClientSettings;
use crate::constants::{
    DOWNLOAD_ENDPOINT, LIST_ENDPOINT, MANIFEST_ENDPOINT, REQUEST_TIMEOUT_SECS, TOUCH_ENDPOINT,
    VERSION_ENDPOINT,
};
use crate::error::ClientError;
use anyhow::{Context, Result};
use common::{Manifest, TouchResponse, VersionResponse};
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::time::Duration;

pub struct ApiClient {
    http: Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(!settings.verify_ssl)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base: settings.server.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        })
    }

    /// Request against an unauthenticated probe endpoint.
    fn get_open(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base, path);
        debug!("GET {}", url);
        self.http.get(url)
    }

    /// Request against a token-gated endpoint.
    fn get_authed(&self, path: &str) -> RequestBuilder {
        let mut request = self.get_open(path);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    fn expect_success(response: Response) -> Result<Response, ClientError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::Remote(response.status()))
        }
    }

    pub fn touch(&self) -> Result<TouchResponse, ClientError> {
        let response = Self::expect_success(self.get_open(TOUCH_ENDPOINT).send()?)?;
        Ok(response.json()?)
    }

    pub fn server_version(&self) -> Result<VersionResponse, ClientError> {
        let response = Self::expect_success(self.get_open(VERSION_ENDPOINT).send()?)?;
        Ok(response.json()?)
    }

    pub fn list(&self) -> Result<Vec<String>, ClientError> {
        let response = Self::expect_success(self.get_authed(LIST_ENDPOINT).send()?)?;
        Ok(response.json()?)
    }

    pub fn manifest(&self, package: &str) -> Result<Manifest, ClientError> {
        let path = format!("{}/{}", MANIFEST_ENDPOINT, package);
        let response = Self::expect_success(self.get_authed(&path).send()?)?;
        Ok(response.json()?)
    }

    /// Open the raw download stream for a package. The caller drains the
    /// body; only the status is checked here.
    pub fn download(&self, package: &str) -> Result<Response, ClientError> {
        let path = format!("{}/{}", DOWNLOAD_ENDPOINT, package);
        Self::expect_success(self.get_authed(&path).send()?)
    }
}
