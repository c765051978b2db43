// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// A shortened URL as the backend lists it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UrlItem {
    pub(crate) id: String,
    pub(crate) original_url: String,
    pub(crate) short_code: String,
    pub(crate) created_by_id: String,
}

/// The identity behind the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthUser {
    pub(crate) id: String,
    pub(crate) username: String,
    pub(crate) is_admin: bool,
}

impl AuthUser {
    /// Admins may delete anything; everyone else only what they created.
    pub(crate) fn can_delete(&self, url: &UrlItem) -> bool {
        self.is_admin || self.id == url.created_by_id
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUrlRequest<'a> {
    pub(crate) original_url: &'a str,
}
