//! Login and logout command handlers.

use anyhow::Result;
use byline_core::api::Credentials;
use byline_core::workspace::{Destination, Outcome};

pub async fn login(base_url: &str, username: String, password: String) -> Result<()> {
    let mut workspace = super::open_workspace(base_url)?;

    let credentials = Credentials { username, password };
    match workspace.login(&credentials).await {
        Outcome::Redirect(Destination::Articles) => {
            println!("{}", workspace.message());
            Ok(())
        }
        _ => anyhow::bail!("{}", workspace.message()),
    }
}

pub fn logout(base_url: &str) -> Result<()> {
    let mut workspace = super::open_workspace(base_url)?;
    workspace.logout();
    println!("{}", workspace.message());
    Ok(())
}
