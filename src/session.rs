// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize, Serializer};

pub(crate) const STORAGE_FILE: &str = "session.json";

/// The session cookie sent with every request, as `name=value`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct Data {
    #[serde(serialize_with = "serialize_secret")]
    cookie: SecretString,
}

impl Data {
    pub(crate) fn new(cookie: SecretString) -> Self {
        Self { cookie }
    }

    pub(crate) const fn cookie(&self) -> &SecretString {
        &self.cookie
    }

    /// The cookie's name, which is safe to show.
    pub(crate) fn cookie_name(&self) -> &str {
        let cookie = self.cookie.expose_secret();
        cookie.split_once('=').map_or(cookie.as_str(), |(name, _)| name.trim())
    }
}

fn serialize_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Memory, Storage};

    #[tokio::test]
    async fn stores_in_memory() {
        let mut storage = Memory::<Data>::new();
        assert!(storage.get().await.unwrap().is_none());

        storage
            .update(&Data::new(SecretString::new("sid=s3cr3t".to_owned())))
            .await
            .unwrap();
        let data = storage.get().await.unwrap().unwrap();
        assert_eq!(data.cookie().expose_secret(), "sid=s3cr3t");
        assert_eq!(data.cookie_name(), "sid");

        storage.clear().await.unwrap();
        assert!(storage.get().await.unwrap().is_none());
    }

    #[test]
    fn serializes_cookie() {
        let data = Data::new(SecretString::new("sid=s3cr3t".to_owned()));
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"cookie":"sid=s3cr3t"}"#
        );
        let parsed: Data = serde_json::from_str(r#"{"cookie":"sid=other"}"#).unwrap();
        assert_eq!(parsed.cookie().expose_secret(), "sid=other");
    }
}
