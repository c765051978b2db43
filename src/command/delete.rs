// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;

use crate::{
    error::{Error, Result},
    prompt::AssumeYes,
    view::{Delete, LoadState},
};

use super::Context;

/// Delete a shortened URL. Admins may delete any URL; everyone else only the
/// ones they created.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Do not ask for confirmation.
    #[arg(long, short)]
    yes: bool,

    /// The ID of the URL to delete, as shown by `list`.
    #[clap()]
    id: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: &Context<'_>) -> Result<()> {
        let mut table = ctx.load_table().await;
        if let LoadState::Failed(_) = table.state() {
            return ctx.show(&table);
        }

        let outcome = if self.yes {
            table.delete(&self.id, &AssumeYes::new(&*ctx.prompt)).await?
        } else {
            table.delete(&self.id, &*ctx.prompt).await?
        };
        _ = ctx.settle(&mut table);

        match outcome {
            Delete::Deleted => ctx.show(&table),
            Delete::Cancelled => Err(Error::Cancelled),
            Delete::NotPermitted => {
                error!("There is no URL with ID {} that you may delete", self.id);
                Err(Error::Command)
            }
            Delete::Failed => Err(Error::Command),
        }
    }
}
