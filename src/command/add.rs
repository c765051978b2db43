// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::{error, info};

use crate::{
    error::{Error, Result},
    view::{add_url_form::AddUrlForm, AddClick, LoadState, Submit},
};

use super::Context;

pub(crate) const INPUT_LABEL: &str = "URL to shorten";

/// Shorten a URL. You need to be signed in.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The URL to shorten. When omitted, it is asked for, and asked for again
    /// until it is accepted or the input ends.
    #[clap()]
    url: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: &Context<'_>) -> Result<()> {
        let mut table = ctx.table();
        table.fetch_data().await;
        let redirected = ctx.settle(&mut table);
        if let LoadState::Failed(_) = table.state() {
            return ctx.show(&table);
        }

        match table.add_clicked() {
            AddClick::SignIn => {
                if !redirected {
                    ctx.redirect_to_login();
                }
                error!("You need to sign in to add a URL");
                return Err(Error::Command);
            }
            AddClick::FormShown => {}
        }

        let interactive = self.url.is_none();
        let mut candidate = self.url;
        loop {
            let input = match candidate.take() {
                Some(url) => url,
                None => match ctx.prompt.input(INPUT_LABEL).await? {
                    Some(url) => url,
                    None => {
                        _ = table.cancel_form();
                        info!("Not adding a URL");
                        return Err(Error::Cancelled);
                    }
                },
            };
            if let Some(form) = table.form_mut() {
                form.set_original_url(input);
            }

            match table.submit_form().await {
                Some(Submit::Added) => {
                    _ = ctx.settle(&mut table);
                    return ctx.show(&table);
                }
                Some(Submit::Invalid | Submit::Failed(_)) => {
                    if let Some(message) = table.form().and_then(AddUrlForm::error) {
                        eprintln!("Error: {message}");
                    }
                    if ctx.settle(&mut table) || !interactive {
                        return Err(Error::Command);
                    }
                }
                Some(Submit::Busy) | None => return Err(Error::Command),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::{
            tests::{context, LOGIN_REDIRECT, PAGE_URL},
            Command as _,
        },
        error::Api,
        navigation::tests::Recorder,
        prompt::tests::Scripted,
        view::tests::{user, Backend},
    };

    #[tokio::test]
    async fn anonymous_users_are_sent_to_sign_in() {
        let backend = Backend::default().failing_identity(Api::Status {
            status: 500,
            message: None,
        });
        let (prompt, navigator) = (Scripted::default(), Recorder::new(PAGE_URL));

        let result = Command {
            url: Some("https://example.com".to_owned()),
        }
        .execute(&context(&backend, &prompt, &navigator))
        .await;

        assert!(matches!(result, Err(Error::Command)));
        assert_eq!(navigator.visited(), vec![LOGIN_REDIRECT.to_owned()]);
        assert_eq!(backend.calls(), vec!["list", "me"]);
    }

    #[tokio::test]
    async fn expired_sessions_redirect_once() {
        let backend = Backend::default();
        let (prompt, navigator) = (Scripted::default(), Recorder::new(PAGE_URL));

        let result = Command {
            url: Some("https://example.com".to_owned()),
        }
        .execute(&context(&backend, &prompt, &navigator))
        .await;

        assert!(result.is_err());
        assert_eq!(navigator.visited(), vec![LOGIN_REDIRECT.to_owned()]);
    }

    #[tokio::test]
    async fn adds_and_refetches() {
        let backend = Backend::default().signed_in(user("u1"));
        let (prompt, navigator) = (Scripted::default(), Recorder::new(PAGE_URL));

        Command {
            url: Some("https://example.com/long".to_owned()),
        }
        .execute(&context(&backend, &prompt, &navigator))
        .await
        .unwrap();

        assert_eq!(
            backend.calls(),
            vec!["list", "me", "create https://example.com/long", "list", "me"]
        );
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn asks_for_url_when_omitted() {
        let backend = Backend::default().signed_in(user("u1"));
        let (prompt, navigator) = (
            Scripted::answering(Some("https://example.com/asked")),
            Recorder::new(PAGE_URL),
        );

        Command { url: None }
            .execute(&context(&backend, &prompt, &navigator))
            .await
            .unwrap();

        assert_eq!(prompt.shown(), vec![INPUT_LABEL.to_owned()]);
        assert!(backend
            .calls()
            .contains(&"create https://example.com/asked".to_owned()));
    }

    #[tokio::test]
    async fn end_of_input_cancels() {
        let backend = Backend::default().signed_in(user("u1"));
        let (prompt, navigator) = (Scripted::answering(None), Recorder::new(PAGE_URL));

        let result = Command { url: None }
            .execute(&context(&backend, &prompt, &navigator))
            .await;

        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(backend.calls(), vec!["list", "me"]);
    }

    #[tokio::test]
    async fn blank_argument_never_reaches_server() {
        let backend = Backend::default().signed_in(user("u1"));
        let (prompt, navigator) = (Scripted::default(), Recorder::new(PAGE_URL));

        let result = Command {
            url: Some("   ".to_owned()),
        }
        .execute(&context(&backend, &prompt, &navigator))
        .await;

        assert!(matches!(result, Err(Error::Command)));
        assert_eq!(backend.calls(), vec!["list", "me"]);
    }

    #[tokio::test]
    async fn rejected_create_fails() {
        let backend = Backend::default()
            .signed_in(user("u1"))
            .failing_create(Api::Status {
                status: 400,
                message: Some("Invalid URL format.".to_owned()),
            });
        let (prompt, navigator) = (Scripted::default(), Recorder::new(PAGE_URL));

        let result = Command {
            url: Some("nope".to_owned()),
        }
        .execute(&context(&backend, &prompt, &navigator))
        .await;

        assert!(matches!(result, Err(Error::Command)));
        assert_eq!(backend.calls(), vec!["list", "me", "create nope"]);
    }
}
