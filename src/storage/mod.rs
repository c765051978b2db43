// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

mod file;
#[cfg(test)]
mod memory;

use async_trait::async_trait;

use crate::error::Result;

pub(crate) use file::File;
#[cfg(test)]
pub(crate) use memory::Memory;

#[async_trait]
pub(crate) trait Storage<T>: Send + Sync {
    async fn get(&mut self) -> Result<Option<T>>;
    async fn update(&mut self, data: &T) -> Result<()>;
    async fn clear(&mut self) -> Result<()>;
}
