// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_doc_code_examples,
    private_doc_tests,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod client;
mod command;
mod config;
mod error;
mod http;
mod metadata;
mod model;
mod navigation;
mod prompt;
mod session;
mod storage;
mod view;

use std::{process, time::Duration};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use command::{Command as _, Context};
use config::AppConfig;
use error::Result;
use log::{error, warn};
use secrecy::SecretString;
use storage::Storage;

#[derive(Debug, Subcommand)]
enum PageCommand {
    List(command::list::Command),
    Add(command::add::Command),
    Delete(command::delete::Command),
    Info(command::info::Command),
    About(command::about::Command),
    Login(command::login::Command),
}

#[async_trait]
impl command::Command for PageCommand {
    async fn execute(self, ctx: &Context<'_>) -> Result<()> {
        match self {
            Self::List(cmd) => cmd.execute(ctx).await,
            Self::Add(cmd) => cmd.execute(ctx).await,
            Self::Delete(cmd) => cmd.execute(ctx).await,
            Self::Info(cmd) => cmd.execute(ctx).await,
            Self::About(cmd) => cmd.execute(ctx).await,
            Self::Login(cmd) => cmd.execute(ctx).await,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Page(PageCommand),
    /// Manage the stored session cookie.
    #[command(subcommand)]
    Session(command::session::Command),
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The base URL of the URL shortener backend. Pages such as the login page
    /// are served from here too.
    #[arg(long, env = "SHORTLY_API_BASE_URL")]
    api_base_url: Option<String>,

    /// The page to return to after signing in. Defaults to the backend's home
    /// page.
    #[arg(long, env = "SHORTLY_PAGE_URL")]
    page_url: Option<String>,

    /// The session cookie to send, as NAME=VALUE. Takes precedence over the
    /// stored session.
    #[arg(long, env = "SHORTLY_SESSION", hide_env_values = true)]
    session: Option<String>,

    /// Turn off reading the stored session.
    #[arg(long)]
    no_store_session: bool,

    /// How long to wait for each request, in seconds.
    #[arg(long, env = "SHORTLY_TIMEOUT", default_value_t = http::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    #[clap(subcommand)]
    command: Command,
}

fn session_storage() -> Result<storage::File> {
    storage::File::new(session::STORAGE_FILE)
        .ok_or_else(|| error::Storage::NoProjectDirectory.into())
}

async fn stored_session() -> Option<SecretString> {
    let mut storage = match session_storage() {
        Ok(storage) => storage,
        Err(e) => {
            warn!("Continuing without a stored session: {}", e);
            return None;
        }
    };

    match Storage::<session::Data>::get(&mut storage).await {
        Ok(data) => data.map(|data| data.cookie().clone()),
        Err(e) => {
            warn!("We could not read the stored session, so we will continue without it: {}", e);
            None
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let page = match args.command {
        Command::Session(cmd) => return cmd.execute(&mut session_storage()?).await,
        Command::Page(cmd) => cmd,
    };

    let config = AppConfig::new(args.api_base_url);
    let session = match args.session {
        Some(cookie) => Some(SecretString::new(cookie)),
        None if args.no_store_session => None,
        None => stored_session().await,
    };
    let page_url = args
        .page_url
        .unwrap_or_else(|| format!("{}/", config.backend_url()));

    let client = http::Client::new(
        config.clone(),
        session.as_ref(),
        Duration::from_secs(args.timeout),
    )?;
    let ctx = Context {
        client: Box::new(client),
        config,
        navigator: Box::new(navigation::Terminal::new(page_url)),
        prompt: Box::new(prompt::Terminal),
    };

    page.execute(&ctx).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("SHORTLY_LOG", "warn")
        .write_style("SHORTLY_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
