// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! The REST client, backed by reqwest.
//!
//! Credentials always travel with requests: the client owns a cookie jar that
//! is seeded with the stored session cookie and keeps whatever the server sets.
//! Unsuccessful responses are classified into [`Api`] errors; a 401 is reported
//! as [`Api::Unauthorized`] and left to the caller to act on.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use log::debug;
use reqwest::{cookie::Jar, header, RequestBuilder, Response};
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use crate::{
    client,
    config::{api, AppConfig},
    error::{Api, Result},
    model::{AuthUser, CreateUrlRequest, UrlItem},
};

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) struct Client {
    http: reqwest::Client,
    config: AppConfig,
}

impl Client {
    pub(crate) fn new(
        config: AppConfig,
        session: Option<&SecretString>,
        timeout: Duration,
    ) -> Result<Self> {
        let jar = Arc::new(Jar::default());
        if let Some(cookie) = session {
            let base = Url::parse(config.backend_url())?;
            jar.add_cookie_str(cookie.expose_secret(), &base);
        }

        let http = reqwest::Client::builder()
            .cookie_provider(jar)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, config })
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.header(header::ACCEPT, "application/json").send().await?;
        let status = response.status();
        debug!("{} responded with {}", response.url(), status);
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Api::from_status(status, &body).into())
    }
}

#[async_trait]
impl client::Client for Client {
    async fn list_urls(&self) -> Result<Vec<UrlItem>> {
        let response = self
            .send(self.http.get(self.config.api_url(api::URLS)))
            .await?;
        Ok(response.json().await?)
    }

    async fn current_user(&self) -> Result<AuthUser> {
        let response = self
            .send(self.http.get(self.config.api_url(api::AUTH_ME)))
            .await?;
        Ok(response.json().await?)
    }

    async fn create_url(&self, original_url: &str) -> Result<()> {
        _ = self
            .send(
                self.http
                    .post(self.config.api_url(api::URLS))
                    .json(&CreateUrlRequest { original_url }),
            )
            .await?;
        Ok(())
    }

    async fn delete_url(&self, id: &str) -> Result<()> {
        _ = self
            .send(self.http.delete(self.config.api_url(&api::delete_url(id))))
            .await?;
        Ok(())
    }
}
