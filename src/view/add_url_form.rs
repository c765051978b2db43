// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::error;

use crate::{client::Client, error::Error};

pub(crate) const EMPTY_URL_MESSAGE: &str = "URL cannot be empty.";
pub(crate) const FALLBACK_ERROR_MESSAGE: &str = "Failed to add URL. Please try again.";

/// What became of a submission.
#[derive(Debug)]
pub(crate) enum Submit {
    /// The URL was created; the owner should refresh and close the form.
    Added,
    /// The input never left the form.
    Invalid,
    /// A submission is already in flight.
    Busy,
    /// The server or the network refused it.
    Failed(Error),
}

/// A single text field for the URL to shorten.
#[derive(Debug, Default)]
pub(crate) struct AddUrlForm {
    original_url: String,
    submitting: bool,
    error: Option<String>,
}

impl AddUrlForm {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_original_url(&mut self, value: impl Into<String>) {
        self.original_url = value.into();
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the form may be dismissed right now.
    pub(crate) const fn can_cancel(&self) -> bool {
        !self.submitting
    }

    pub(crate) async fn submit<C: Client + Sync + ?Sized>(&mut self, client: &C) -> Submit {
        if self.submitting {
            return Submit::Busy;
        }

        if self.original_url.trim().is_empty() {
            self.error = Some(EMPTY_URL_MESSAGE.to_owned());
            return Submit::Invalid;
        }

        self.submitting = true;
        self.error = None;
        let result = client.create_url(&self.original_url).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.original_url.clear();
                Submit::Added
            }
            Err(e) => {
                error!("Failed to add URL: {}", e);
                self.error = Some(Self::describe(&e));
                Submit::Failed(e)
            }
        }
    }

    fn describe(err: &Error) -> String {
        match err {
            Error::Api(api) => api
                .server_message()
                .map_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned(), str::to_owned),
            Error::Io(_) | Error::Http(_) => err.to_string(),
            Error::Json(_)
            | Error::Url(_)
            | Error::Storage(_)
            | Error::Command
            | Error::Cancelled => FALLBACK_ERROR_MESSAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Api, view::tests::Backend};

    #[tokio::test]
    async fn rejects_blank_input_locally() {
        let backend = Backend::default();
        let mut form = AddUrlForm::new();
        form.set_original_url("   \t");

        assert!(matches!(form.submit(&backend).await, Submit::Invalid));
        assert_eq!(form.error(), Some(EMPTY_URL_MESSAGE));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn rejects_empty_input_locally() {
        let backend = Backend::default();
        let mut form = AddUrlForm::new();

        assert!(matches!(form.submit(&backend).await, Submit::Invalid));
        assert_eq!(form.error(), Some(EMPTY_URL_MESSAGE));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn clears_input_after_success() {
        let backend = Backend::default();
        let mut form = AddUrlForm::new();
        form.set_original_url("https://example.com/long");

        assert!(matches!(form.submit(&backend).await, Submit::Added));
        assert_eq!(form.original_url, "");
        assert_eq!(form.error(), None);
        assert!(!form.submitting);
        assert_eq!(
            backend.calls(),
            vec!["create https://example.com/long".to_owned()]
        );
    }

    #[tokio::test]
    async fn keeps_input_after_failure() {
        let backend = Backend::default().failing_create(Api::Status {
            status: 400,
            message: Some("Invalid URL format.".to_owned()),
        });
        let mut form = AddUrlForm::new();
        form.set_original_url("example");

        assert!(matches!(form.submit(&backend).await, Submit::Failed(_)));
        assert_eq!(form.original_url, "example");
        assert_eq!(form.error(), Some("Invalid URL format."));
        assert!(form.can_cancel());
    }

    #[tokio::test]
    async fn falls_back_to_generic_message() {
        let backend = Backend::default().failing_create(Api::Forbidden);
        let mut form = AddUrlForm::new();
        form.set_original_url("https://example.com");

        assert!(matches!(form.submit(&backend).await, Submit::Failed(_)));
        assert_eq!(form.error(), Some(FALLBACK_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn refuses_while_submitting() {
        let backend = Backend::default();
        let mut form = AddUrlForm::new();
        form.set_original_url("https://example.com");
        form.submitting = true;

        assert!(!form.can_cancel());
        assert!(matches!(form.submit(&backend).await, Submit::Busy));
        assert!(backend.calls().is_empty());
    }
}
