// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{
    client::Client,
    config::AppConfig,
    error::{Error, Result},
    metadata,
    navigation::{self, Navigator},
    prompt::Prompt,
    view::{LoadState, UrlTable},
};

pub(crate) mod about;
pub(crate) mod add;
pub(crate) mod delete;
pub(crate) mod info;
pub(crate) mod list;
pub(crate) mod login;
pub(crate) mod session;

/// Everything a command needs to talk to the backend and to the user.
pub(crate) struct Context<'ctx> {
    pub(crate) client: Box<dyn Client + Send + Sync + 'ctx>,
    pub(crate) config: AppConfig,
    pub(crate) navigator: Box<dyn Navigator + 'ctx>,
    pub(crate) prompt: Box<dyn Prompt + 'ctx>,
}

impl<'ctx> Context<'ctx> {
    pub(crate) fn table(&self) -> UrlTable<&(dyn Client + Send + Sync + 'ctx)> {
        UrlTable::new(&*self.client, self.config.clone())
    }

    pub(crate) fn redirect_to_login(&self) {
        navigation::redirect_to_login(&self.config, &*self.navigator);
    }

    /// Sends the user to sign in if the table ran into an expired session.
    /// Returns whether it did. Every 401 a command meets is handled here;
    /// none of them reach `main`.
    pub(crate) fn settle<C: Client + Send + Sync>(&self, table: &mut UrlTable<C>) -> bool {
        let expired = table.take_session_expired();
        if expired {
            self.redirect_to_login();
        }
        expired
    }

    /// The title line, standing in for the site navigation.
    pub(crate) fn banner(&self) -> String {
        format!(
            "{}  ·  About: {}",
            *metadata::CLIENT_DISPLAY_NAME,
            self.config.about_page_url()
        )
    }

    /// Loads a fresh table.
    pub(crate) async fn load_table(&self) -> UrlTable<&(dyn Client + Send + Sync + 'ctx)> {
        let mut table = self.table();
        table.fetch_data().await;
        _ = self.settle(&mut table);
        table
    }

    /// Prints the table, or fails with its error if it could not be loaded.
    pub(crate) fn show<C: Client + Send + Sync>(&self, table: &UrlTable<C>) -> Result<()> {
        match table.state() {
            LoadState::Failed(_) => {
                eprintln!("{}", table.render());
                Err(Error::Command)
            }
            LoadState::Loading | LoadState::Loaded => {
                println!("{}\n", self.banner());
                println!("{}", table.render());
                Ok(())
            }
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: &Context<'_>) -> Result<()>;
}
