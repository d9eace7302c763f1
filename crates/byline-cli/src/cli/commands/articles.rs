//! Article command handlers.
//!
//! Update and delete enter the articles view before acting (list first, then
//! the mutation), so the printed state reflects the local edit.

use anyhow::Result;
use byline_core::api::{ArticleDraft, ArticlePatch};
use byline_core::workspace::{ArticleWorkspace, Outcome};

pub async fn list(base_url: &str) -> Result<()> {
    let mut workspace = super::open_workspace(base_url)?;
    enter(&mut workspace).await?;
    print_message(&workspace);
    print_articles(&workspace);
    Ok(())
}

pub async fn create(base_url: &str, title: String, text: String, topic: String) -> Result<()> {
    let mut workspace = super::open_workspace(base_url)?;

    let draft = ArticleDraft { title, text, topic };
    match workspace.create(&draft).await {
        Outcome::Done => {
            print_message(&workspace);
            Ok(())
        }
        Outcome::Redirect(_) => bail_no_session(),
        Outcome::Failed => anyhow::bail!("{}", workspace.message()),
    }
}

pub async fn update(
    base_url: &str,
    id: i64,
    title: Option<String>,
    text: Option<String>,
    topic: Option<String>,
) -> Result<()> {
    let patch = ArticlePatch { title, text, topic };
    if patch.is_empty() {
        anyhow::bail!("Nothing to update; pass at least one of --title, --text, --topic");
    }

    let mut workspace = super::open_workspace(base_url)?;
    enter(&mut workspace).await?;

    if !workspace.articles().iter().any(|a| a.article_id == id) {
        anyhow::bail!("No article with id {id}");
    }
    workspace.set_current_article_id(Some(id));

    match workspace.update(id, &patch).await {
        Outcome::Done => {
            // The edit target is released once the submit goes through.
            workspace.set_current_article_id(None);
            print_message(&workspace);
            print_articles(&workspace);
            Ok(())
        }
        Outcome::Redirect(_) => bail_no_session(),
        Outcome::Failed => anyhow::bail!("{}", workspace.message()),
    }
}

pub async fn delete(base_url: &str, id: i64) -> Result<()> {
    let mut workspace = super::open_workspace(base_url)?;
    enter(&mut workspace).await?;

    if !workspace.articles().iter().any(|a| a.article_id == id) {
        anyhow::bail!("No article with id {id}");
    }

    match workspace.delete(id).await {
        Outcome::Done => {
            print_message(&workspace);
            print_articles(&workspace);
            Ok(())
        }
        Outcome::Redirect(_) => bail_no_session(),
        Outcome::Failed => anyhow::bail!("{}", workspace.message()),
    }
}

/// Entry to the articles view: resync the collection, mapping the redirect
/// outcome (no token, or a stale one) to a login hint.
async fn enter(workspace: &mut ArticleWorkspace) -> Result<()> {
    match workspace.list().await {
        Outcome::Done => Ok(()),
        Outcome::Redirect(_) => bail_no_session(),
        Outcome::Failed => anyhow::bail!("{}", workspace.message()),
    }
}

fn bail_no_session() -> Result<()> {
    anyhow::bail!("No active session. Log in with `byline login` first.")
}

fn print_message(workspace: &ArticleWorkspace) {
    if !workspace.message().is_empty() {
        println!("{}", workspace.message());
    }
}

fn print_articles(workspace: &ArticleWorkspace) {
    if workspace.articles().is_empty() {
        println!("No articles yet");
        return;
    }
    for article in workspace.articles() {
        println!(
            "#{}  {}  [{}]",
            article.article_id, article.title, article.topic
        );
        println!("    {}", article.text);
    }
}
