//! Command handlers.

use anyhow::{Context, Result};
use byline_core::api::ArticlesClient;
use byline_core::session::SessionStore;
use byline_core::workspace::ArticleWorkspace;

pub mod articles;
pub mod auth;
pub mod config;

/// Opens a workspace against the given API, with the persisted session.
fn open_workspace(base_url: &str) -> Result<ArticleWorkspace> {
    let store = SessionStore::load().context("load session store")?;
    Ok(ArticleWorkspace::new(ArticlesClient::new(base_url), store))
}
