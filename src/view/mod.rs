// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendition of the URL list page: the table of shortened URLs and the
//! form for adding one.

pub(crate) mod add_url_form;
pub(crate) mod row;
mod url_table;

pub(crate) use add_url_form::Submit;
pub(crate) use url_table::{AddClick, Delete, LoadState, UrlTable};
