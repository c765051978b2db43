// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::error::Result;

use super::Storage;

/// Keeps data for the lifetime of the value only.
pub(crate) struct Memory<T> {
    data: Option<T>,
}

impl<T> Memory<T> {
    pub(crate) const fn new() -> Self {
        Self { data: None }
    }
}

#[async_trait]
impl<T: Send + Sync + Clone> Storage<T> for Memory<T> {
    async fn get(&mut self) -> Result<Option<T>> {
        Ok(self.data.clone())
    }

    async fn update(&mut self, data: &T) -> Result<()> {
        self.data = Some(data.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.data = None;
        Ok(())
    }
}
