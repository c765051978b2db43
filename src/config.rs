// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint derivation for the backend and the pages it serves.
//!
//! Everything here is plain string concatenation onto the base URL. Nothing is
//! validated; a malformed base surfaces later as a request error.

pub(crate) const DEFAULT_BACKEND_URL: &str = "http://localhost:7111";

/// Paths of the REST API, relative to the backend URL.
pub(crate) mod api {
    pub(crate) const URLS: &str = "/api/v1/urls";
    pub(crate) const AUTH_ME: &str = "/api/v1/auth/me";

    pub(crate) fn delete_url(id: &str) -> String {
        format!("{URLS}/{id}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AppConfig {
    backend_url: String,
}

impl AppConfig {
    /// An absent or empty base URL falls back to the local development
    /// backend.
    pub(crate) fn new(backend_url: Option<String>) -> Self {
        Self {
            backend_url: backend_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned()),
        }
    }

    pub(crate) fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub(crate) fn about_page_url(&self) -> String {
        format!("{}/About", self.backend_url)
    }

    pub(crate) fn login_page_url(&self) -> String {
        format!("{}/Login", self.backend_url)
    }

    pub(crate) fn info_page_url(&self, id: &str) -> String {
        format!("{}/Info/{id}", self.backend_url)
    }

    pub(crate) fn short_url_redirect(&self, short_code: &str) -> String {
        format!("{}/{short_code}", self.backend_url)
    }

    /// The absolute URL of an API path.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url.trim_end_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
