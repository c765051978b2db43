// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::info;

use crate::config::AppConfig;

/// Where the user is and how to send them somewhere else.
pub(crate) trait Navigator: Send + Sync {
    /// The full URL of the page the user is on.
    fn current_url(&self) -> &str;

    fn navigate(&self, target: &str);
}

impl<'a, T: Navigator + ?Sized> Navigator for &'a T {
    fn current_url(&self) -> &str {
        (**self).current_url()
    }

    fn navigate(&self, target: &str) {
        (**self).navigate(target);
    }
}

/// Hands targets to the user on the terminal.
pub(crate) struct Terminal {
    current_url: String,
}

impl Terminal {
    pub(crate) fn new(current_url: String) -> Self {
        Self { current_url }
    }
}

impl Navigator for Terminal {
    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn navigate(&self, target: &str) {
        info!("Navigating to {}", target);
        eprintln!("Continue in your browser: {target}");
    }
}

/// The login page, asking it to bring the user back to `current_url`.
pub(crate) fn login_redirect_url(config: &AppConfig, current_url: &str) -> String {
    format!(
        "{}?returnUrl={}",
        config.login_page_url(),
        urlencoding::encode(current_url)
    )
}

/// Sends the user to sign in again. Every expired or missing session ends up
/// here, whichever request noticed it.
pub(crate) fn redirect_to_login(config: &AppConfig, navigator: &dyn Navigator) {
    navigator.navigate(&login_redirect_url(config, navigator.current_url()));
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Remembers where it was sent instead of going there.
    pub(crate) struct Recorder {
        current_url: String,
        visited: Mutex<Vec<String>>,
    }

    impl Recorder {
        pub(crate) fn new(current_url: &str) -> Self {
            Self {
                current_url: current_url.to_owned(),
                visited: Mutex::new(vec![]),
            }
        }

        pub(crate) fn visited(&self) -> Vec<String> {
            self.visited.lock().unwrap().clone()
        }
    }

    impl Navigator for Recorder {
        fn current_url(&self) -> &str {
            &self.current_url
        }

        fn navigate(&self, target: &str) {
            self.visited.lock().unwrap().push(target.to_owned());
        }
    }

    #[test]
    fn encodes_return_url() {
        let config = AppConfig::new(Some("https://sho.rt".to_owned()));
        assert_eq!(
            login_redirect_url(&config, "https://app.sho.rt/urls?page=2&sort=asc"),
            "https://sho.rt/Login?returnUrl=https%3A%2F%2Fapp.sho.rt%2Furls%3Fpage%3D2%26sort%3Dasc"
        );
    }

    #[test]
    fn percent_encodes_spaces() {
        let config = AppConfig::new(Some("https://sho.rt".to_owned()));
        assert_eq!(
            login_redirect_url(&config, "http://localhost:5173/my page?q=a b~"),
            "https://sho.rt/Login?returnUrl=http%3A%2F%2Flocalhost%3A5173%2Fmy%20page%3Fq%3Da%20b~"
        );
    }

    #[test]
    fn redirects_to_login_with_current_page() {
        let config = AppConfig::new(Some("https://sho.rt".to_owned()));
        let navigator = Recorder::new("http://localhost:5173/");

        redirect_to_login(&config, &navigator);

        assert_eq!(
            navigator.visited(),
            vec!["https://sho.rt/Login?returnUrl=http%3A%2F%2Flocalhost%3A5173%2F".to_owned()]
        );
    }
}
