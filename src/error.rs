// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, result};

use reqwest::StatusCode;
use thiserror::Error;

pub(crate) type Result<T, E = Error> = result::Result<T, E>;

#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("IO operation failed: {0}")]
    Io(#[from] io::Error),
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("JSON format error: {0}")]
    Json(serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API error: {0}")]
    Api(#[from] Api),
    #[error("storage error: {0}")]
    Storage(#[from] Storage),
    #[error("command execution failed")]
    Command,
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Whether the server rejected the request because the session is missing
    /// or has expired.
    pub(crate) const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(Api::Unauthorized))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        // LINT: Deliberate fall-through that should catch future cases added to
        // the enum.
        #[allow(clippy::wildcard_enum_match_arm)]
        match value.classify() {
            serde_json::error::Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Http(value);
        }

        match value.status() {
            Some(status) => Self::Api(Api::from_status(status, "")),
            None => Self::Http(value),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Io(value.into())
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Api {
    #[error("the session is missing or has expired")]
    Unauthorized,
    #[error("the server refused the operation")]
    Forbidden,
    #[error("the requested resource does not exist")]
    NotFound,
    #[error("server responded with status {status}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        message: Option<String>,
    },
}

impl Api {
    const MESSAGE_FIELDS: [&'static str; 4] = ["message", "detail", "title", "error"];
    const MAX_MESSAGE_LEN: usize = 200;

    /// Classifies an unsuccessful response. The body is inspected for a
    /// human-readable message: a JSON object carrying one of the usual message
    /// fields, or failing that, non-empty plain text.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::Status {
                status: status.as_u16(),
                message: Self::extract_message(body),
            },
        }
    }

    /// The message the server supplied, if any.
    pub(crate) fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Unauthorized | Self::Forbidden | Self::NotFound => None,
        }
    }

    fn extract_message(body: &str) -> Option<String> {
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
            return Self::MESSAGE_FIELDS
                .iter()
                .find_map(|name| fields.get(*name).and_then(serde_json::Value::as_str))
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_owned);
        }

        if body.starts_with('<') {
            // An HTML error page tells the user nothing useful.
            return None;
        }

        Some(body.chars().take(Self::MAX_MESSAGE_LEN).collect())
    }
}

#[derive(Error, Debug)]
pub(crate) enum Storage {
    #[error("no project directory is available to store the session in")]
    NoProjectDirectory,
}
