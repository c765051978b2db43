// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tabled::Tabled;

use crate::{
    config::AppConfig,
    model::{AuthUser, UrlItem},
};

pub(crate) const MAX_URL_DISPLAY_CHARS: usize = 60;
pub(crate) const SHORT_URL_DISPLAY_HOST: &str = "short.ly";

/// Shortens long URLs for display only.
pub(crate) fn truncate(url: &str) -> String {
    if url.chars().count() > MAX_URL_DISPLAY_CHARS {
        let mut label = url.chars().take(MAX_URL_DISPLAY_CHARS).collect::<String>();
        label.push_str("...");
        label
    } else {
        url.to_owned()
    }
}

/// Text to show and where it points. Only the label is displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) label: String,
    pub(crate) href: String,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Info { href: String },
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info { .. } => f.write_str("Info"),
            Self::Delete => f.write_str("Delete"),
        }
    }
}

#[derive(Clone, Debug, Tabled)]
pub(crate) struct UrlRow {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Original URL")]
    pub(crate) original: Link,
    #[tabled(rename = "Short URL")]
    pub(crate) short: Link,
    #[tabled(rename = "Actions", display_with = "Self::format_actions")]
    pub(crate) actions: Vec<Action>,
}

impl UrlRow {
    pub(crate) fn new(url: &UrlItem, user: Option<&AuthUser>, config: &AppConfig) -> Self {
        let mut actions = vec![];
        if let Some(user) = user {
            actions.push(Action::Info {
                href: config.info_page_url(&url.id),
            });
            if user.can_delete(url) {
                actions.push(Action::Delete);
            }
        }

        Self {
            id: url.id.clone(),
            original: Link {
                label: truncate(&url.original_url),
                href: url.original_url.clone(),
            },
            short: Link {
                label: format!("{SHORT_URL_DISPLAY_HOST}/{}", url.short_code),
                href: config.short_url_redirect(&url.short_code),
            },
            actions,
        }
    }

    #[cfg(test)]
    pub(crate) fn has_action(&self, label: &str) -> bool {
        self.actions.iter().any(|action| action.to_string() == label)
    }

    #[allow(clippy::ptr_arg)]
    fn format_actions(actions: &Vec<Action>) -> String {
        actions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
