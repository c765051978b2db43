// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::mem;

use futures_util::future;
use log::{debug, error, info, warn};
use tabled::{settings::Style, Table};

use crate::{
    client::Client,
    config::AppConfig,
    error::{Api, Error, Result},
    model::{AuthUser, UrlItem},
    prompt::Prompt,
};

use super::{
    add_url_form::{AddUrlForm, Submit},
    row::UrlRow,
};

pub(crate) const TITLE: &str = "All URLs";
pub(crate) const LOADING_MESSAGE: &str = "Loading...";
pub(crate) const LOAD_ERROR_MESSAGE: &str = "Failed to load URL list. The server might be down.";
pub(crate) const EMPTY_LIST_MESSAGE: &str = "No URLs have been created yet.";
pub(crate) const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this URL?";
pub(crate) const DELETE_FAILED_MESSAGE: &str =
    "Failed to delete URL. You may not have permission.";
pub(crate) const DELETE_GONE_MESSAGE: &str = "Failed to delete URL. It no longer exists.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LoadState {
    Loading,
    Loaded,
    /// The list could not be fetched; nothing else is shown.
    Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AddClick {
    FormShown,
    /// Nobody is signed in; the user has to go to the login page first.
    SignIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Delete {
    Deleted,
    Cancelled,
    NotPermitted,
    Failed,
}

/// Every shortened URL, with the actions the current user may take on them.
pub(crate) struct UrlTable<C> {
    client: C,
    config: AppConfig,
    state: LoadState,
    urls: Vec<UrlItem>,
    current_user: Option<AuthUser>,
    form: Option<AddUrlForm>,
    session_expired: bool,
}

impl<C: Client + Send + Sync> UrlTable<C> {
    pub(crate) fn new(client: C, config: AppConfig) -> Self {
        Self {
            client,
            config,
            state: LoadState::Loading,
            urls: vec![],
            current_user: None,
            form: None,
            session_expired: false,
        }
    }

    pub(crate) const fn state(&self) -> &LoadState {
        &self.state
    }

    pub(crate) fn urls(&self) -> &[UrlItem] {
        &self.urls
    }

    pub(crate) const fn form(&self) -> Option<&AddUrlForm> {
        self.form.as_ref()
    }

    pub(crate) fn form_mut(&mut self) -> Option<&mut AddUrlForm> {
        self.form.as_mut()
    }

    /// Whether any request since the last call found the session missing or
    /// expired.
    pub(crate) fn take_session_expired(&mut self) -> bool {
        mem::take(&mut self.session_expired)
    }

    fn note(&mut self, err: &Error) {
        if err.is_unauthorized() {
            self.session_expired = true;
        }
    }

    /// Loads the list and the current identity side by side. The list is
    /// required; the identity is not, and failing to get it just means nobody
    /// is signed in.
    pub(crate) async fn fetch_data(&mut self) {
        self.state = LoadState::Loading;

        let (urls, user) =
            future::join(self.client.list_urls(), self.client.current_user()).await;

        match urls {
            Ok(urls) => {
                debug!("Fetched {} URLs", urls.len());
                self.urls = urls;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                error!("Failed to fetch URLs: {}", e);
                self.note(&e);
                self.urls.clear();
                self.state = LoadState::Failed(LOAD_ERROR_MESSAGE.to_owned());
            }
        }

        self.current_user = match user {
            Ok(user) => Some(user),
            Err(e) => {
                info!("User is not authenticated: {}", e);
                self.note(&e);
                None
            }
        };
    }

    pub(crate) fn add_clicked(&mut self) -> AddClick {
        if self.current_user.is_some() {
            if self.form.is_none() {
                self.form = Some(AddUrlForm::new());
            }
            AddClick::FormShown
        } else {
            AddClick::SignIn
        }
    }

    /// Submits the open form, if there is one. A successful submission closes
    /// the form and reloads everything.
    pub(crate) async fn submit_form(&mut self) -> Option<Submit> {
        let form = self.form.as_mut()?;
        let outcome = form.submit(&self.client).await;

        match &outcome {
            Submit::Added => self.url_added().await,
            Submit::Failed(e) => self.note(e),
            Submit::Invalid | Submit::Busy => {}
        }

        Some(outcome)
    }

    async fn url_added(&mut self) {
        self.form = None;
        self.fetch_data().await;
    }

    /// Closes the form unless it is busy submitting.
    pub(crate) fn cancel_form(&mut self) -> bool {
        match &self.form {
            Some(form) if !form.can_cancel() => false,
            Some(_) | None => {
                self.form = None;
                true
            }
        }
    }

    /// Deletes one URL after the user confirms. Only the deleted entry leaves
    /// the list; nothing is re-fetched.
    pub(crate) async fn delete(&mut self, id: &str, prompt: &dyn Prompt) -> Result<Delete> {
        let permitted = match (
            self.current_user.as_ref(),
            self.urls.iter().find(|url| url.id == id),
        ) {
            (Some(user), Some(url)) => user.can_delete(url),
            (None, _) | (_, None) => false,
        };
        if !permitted {
            warn!("Not deleting {}: it is not listed or not yours to delete", id);
            return Ok(Delete::NotPermitted);
        }

        if !prompt.confirm(CONFIRM_DELETE_MESSAGE).await? {
            return Ok(Delete::Cancelled);
        }

        match self.client.delete_url(id).await {
            Ok(()) => {
                self.urls.retain(|url| url.id != id);
                Ok(Delete::Deleted)
            }
            Err(e) => {
                error!("Failed to delete URL: {}", e);
                self.note(&e);
                let message = if matches!(e, Error::Api(Api::NotFound)) {
                    DELETE_GONE_MESSAGE
                } else {
                    DELETE_FAILED_MESSAGE
                };
                prompt.alert(message).await?;
                Ok(Delete::Failed)
            }
        }
    }

    pub(crate) fn rows(&self) -> Vec<UrlRow> {
        self.urls
            .iter()
            .map(|url| UrlRow::new(url, self.current_user.as_ref(), &self.config))
            .collect()
    }

    pub(crate) fn render(&self) -> String {
        match &self.state {
            LoadState::Loading => LOADING_MESSAGE.to_owned(),
            LoadState::Failed(message) => message.clone(),
            LoadState::Loaded => {
                let rows = self.rows();
                let mut out = format!(
                    "{TITLE}\n{}",
                    Table::new(rows.iter()).with(Style::rounded())
                );
                if rows.is_empty() {
                    out.push('\n');
                    out.push_str(EMPTY_LIST_MESSAGE);
                }
                out
            }
        }
    }
}
