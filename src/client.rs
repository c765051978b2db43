// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{
    error::Result,
    model::{AuthUser, UrlItem},
};

/// The operations the backend offers. Implementations report a missing or
/// expired session as [`crate::error::Api::Unauthorized`] and never act on it
/// themselves.
#[async_trait]
pub(crate) trait Client {
    async fn list_urls(&self) -> Result<Vec<UrlItem>>;

    async fn current_user(&self) -> Result<AuthUser>;

    async fn create_url(&self, original_url: &str) -> Result<()>;

    async fn delete_url(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl<'a, T: Client + Send + Sync + ?Sized> Client for &'a T {
    async fn list_urls(&self) -> Result<Vec<UrlItem>> {
        (**self).list_urls().await
    }

    async fn current_user(&self) -> Result<AuthUser> {
        (**self).current_user().await
    }

    async fn create_url(&self, original_url: &str) -> Result<()> {
        (**self).create_url(original_url).await
    }

    async fn delete_url(&self, id: &str) -> Result<()> {
        (**self).delete_url(id).await
    }
}
