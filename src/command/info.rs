// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;
use tabled::{settings::Style, Table, Tabled};

use crate::{
    error::{Error, Result},
    view::{row::Action, LoadState},
};

use super::Context;

/// Show the full details of one shortened URL.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The ID of the URL, as shown by `list`.
    #[clap()]
    id: String,
}

#[derive(Clone, Debug, Tabled)]
struct Field {
    #[tabled(rename = "Field")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, ctx: &Context<'_>) -> Result<()> {
        let table = ctx.load_table().await;
        if let LoadState::Failed(_) = table.state() {
            return ctx.show(&table);
        }

        let Some(row) = table.rows().into_iter().find(|row| row.id == self.id) else {
            error!("No URL with ID {}", self.id);
            return Err(Error::Command);
        };
        let created_by = table
            .urls()
            .iter()
            .find(|url| url.id == self.id)
            .map(|url| url.created_by_id.clone())
            .unwrap_or_default();

        let mut fields = vec![
            Field {
                name: "ID",
                value: row.id,
            },
            Field {
                name: "Original URL",
                value: row.original.href,
            },
            Field {
                name: "Short URL",
                value: row.short.href,
            },
            Field {
                name: "Created By",
                value: created_by,
            },
        ];
        // Only signed-in users get a link to the info page.
        fields.extend(row.actions.into_iter().filter_map(|action| match action {
            Action::Info { href } => Some(Field {
                name: "Info Page",
                value: href,
            }),
            Action::Delete => None,
        }));

        println!("{}", Table::new(fields).with(Style::rounded()));
        Ok(())
    }
}
