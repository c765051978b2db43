// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead as _, Write as _};

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::task;

use crate::error::{self, Result};

/// Blocking dialogs: the user has to answer before anything else happens.
#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn confirm(&self, message: &str) -> Result<bool>;

    async fn alert(&self, message: &str) -> Result<()>;

    /// Asks for a line of text. `None` means the user backed out.
    async fn input(&self, label: &str) -> Result<Option<String>>;
}

#[async_trait]
impl<'a, T: Prompt + ?Sized> Prompt for &'a T {
    async fn confirm(&self, message: &str) -> Result<bool> {
        (**self).confirm(message).await
    }

    async fn alert(&self, message: &str) -> Result<()> {
        (**self).alert(message).await
    }

    async fn input(&self, label: &str) -> Result<Option<String>> {
        (**self).input(label).await
    }
}

fn read_line(label: String) -> io::Result<Option<String>> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{label}")?;
    stderr.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

pub(crate) struct Terminal;

#[async_trait]
impl Prompt for Terminal {
    async fn confirm(&self, message: &str) -> Result<bool> {
        let label = format!("{message} [y/N] ");
        let answer = task::spawn_blocking(move || read_line(label)).await??;
        Ok(answer.map_or(false, |answer| {
            matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
        }))
    }

    async fn alert(&self, message: &str) -> Result<()> {
        eprintln!("{message}");
        Ok(())
    }

    async fn input(&self, label: &str) -> Result<Option<String>> {
        let label = format!("{label}: ");
        Ok(task::spawn_blocking(move || read_line(label)).await??)
    }
}

/// Answers every confirmation with yes and defers everything else.
pub(crate) struct AssumeYes<P> {
    inner: P,
}

impl<P> AssumeYes<P> {
    pub(crate) const fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: Prompt> Prompt for AssumeYes<P> {
    async fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(true)
    }

    async fn alert(&self, message: &str) -> Result<()> {
        self.inner.alert(message).await
    }

    async fn input(&self, label: &str) -> Result<Option<String>> {
        self.inner.input(label).await
    }
}

/// Reads a secret without echoing it.
pub(crate) async fn secret(label: &str) -> Result<SecretString> {
    let label = format!("{label}: ");
    let value = task::spawn_blocking(move || rpassword::prompt_password(label)).await??;
    if value.is_empty() {
        return Err(error::Error::Cancelled);
    }
    Ok(SecretString::new(value))
}
