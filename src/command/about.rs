// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

use super::Context;

/// Print the address of the about page.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: &Context<'_>) -> Result<()> {
        println!("{}", ctx.config.about_page_url());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::{
            tests::{context, PAGE_URL},
            Command as _,
        },
        navigation::tests::Recorder,
        prompt::tests::Scripted,
        view::tests::Backend,
    };

    #[tokio::test]
    async fn needs_no_backend() {
        let backend = Backend::default();
        let (prompt, navigator) = (Scripted::default(), Recorder::new(PAGE_URL));

        Command {}
            .execute(&context(&backend, &prompt, &navigator))
            .await
            .unwrap();

        assert!(backend.calls().is_empty());
        assert!(navigator.visited().is_empty());
    }
}
