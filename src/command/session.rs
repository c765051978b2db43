// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use clap::Subcommand;
use log::info;
use secrecy::SecretString;

use crate::{error::Result, prompt, session, storage::Storage};

/// Manage the session cookie sent with every request.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Store a session cookie, copied from a signed-in browser.
    Set {
        /// The cookie as NAME=VALUE. When omitted, it is read from the terminal
        /// without echoing.
        #[clap()]
        cookie: Option<String>,
    },
    /// Forget the stored session cookie.
    Clear,
    /// Tell whether a session cookie is stored.
    Show,
}

impl Command {
    pub(crate) async fn execute(
        self,
        storage: &mut (dyn Storage<session::Data> + '_),
    ) -> Result<()> {
        match self {
            Self::Set { cookie } => {
                let cookie = match cookie {
                    Some(cookie) => SecretString::new(cookie),
                    None => prompt::secret("Session cookie").await?,
                };
                let data = session::Data::new(cookie);
                storage.update(&data).await?;
                info!("Stored session cookie {}", data.cookie_name());
            }
            Self::Clear => {
                storage.clear().await?;
                info!("Cleared the stored session");
            }
            Self::Show => match storage.get().await? {
                Some(data) => println!("A session cookie named {} is stored.", data.cookie_name()),
                None => println!("No session is stored."),
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret as _;

    use super::*;
    use crate::storage::Memory;

    #[tokio::test]
    async fn sets_and_clears() {
        let mut storage = Memory::<session::Data>::new();

        Command::Set {
            cookie: Some("sid=abc".to_owned()),
        }
        .execute(&mut storage)
        .await
        .unwrap();
        assert_eq!(
            storage.get().await.unwrap().unwrap().cookie().expose_secret(),
            "sid=abc"
        );

        Command::Show.execute(&mut storage).await.unwrap();

        Command::Clear.execute(&mut storage).await.unwrap();
        assert!(storage.get().await.unwrap().is_none());
    }
}
