//! The session-gated article workspace.
//!
//! Owns the token lifecycle, the in-flight flag, the status message, and the
//! local article cache, and keeps all four consistent across the six
//! operations. The presentation layer only ever sees the read-only accessors;
//! every mutation goes through an operation.

use crate::api::{ApiError, Article, ArticleDraft, ArticlePatch, ArticlesClient, Credentials};
use crate::session::SessionStore;

/// Where the caller should route next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Articles,
}

/// Result of one workspace operation.
///
/// Operations never return raw errors: a failure lands in
/// [`ArticleWorkspace::message`] and surfaces here as `Failed` so callers can
/// still branch on it (exit codes, form resets) without parsing the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded; state and message reflect the server response.
    Done,
    /// The operation failed; the message carries the human-readable reason.
    Failed,
    /// The caller should route to the given destination before anything else.
    Redirect(Destination),
}

/// Transient per-operation bookkeeping: the spinner flag and the banner text.
#[derive(Debug, Default)]
struct RequestState {
    in_flight: bool,
    message: String,
}

/// One authenticated view onto a remote articles collection.
///
/// Operations take `&mut self`, so two of them can never overlap on the same
/// workspace; each runs its full request lifecycle to completion.
pub struct ArticleWorkspace {
    client: ArticlesClient,
    store: SessionStore,
    articles: Vec<Article>,
    request: RequestState,
    current_article_id: Option<i64>,
}

impl ArticleWorkspace {
    pub fn new(client: ArticlesClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            articles: Vec::new(),
            request: RequestState::default(),
            current_article_id: None,
        }
    }

    /// Read-only view of the local article cache, insertion-ordered on create.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Outcome text of the most recently completed operation.
    pub fn message(&self) -> &str {
        &self.request.message
    }

    /// True exactly while an operation's request is outstanding.
    pub fn spinner_on(&self) -> bool {
        self.request.in_flight
    }

    /// The article currently being edited, if any. Owned by the form/list
    /// side of the boundary; only threaded through here.
    pub fn current_article_id(&self) -> Option<i64> {
        self.current_article_id
    }

    pub fn set_current_article_id(&mut self, article_id: Option<i64>) {
        self.current_article_id = article_id;
    }

    /// Authenticates and persists the returned token.
    ///
    /// Success redirects to the articles view. On failure the credential
    /// store is left untouched; there is no partial session.
    pub async fn login(&mut self, credentials: &Credentials) -> Outcome {
        self.begin();
        let outcome = match self.client.login(credentials).await {
            Ok(response) => match self.store.set_token(response.token) {
                Ok(()) => {
                    self.request.message = response.message;
                    Outcome::Redirect(Destination::Articles)
                }
                Err(err) => {
                    tracing::warn!("failed to persist session token: {err:#}");
                    self.request.message = format!("Login failed: {err:#}");
                    Outcome::Failed
                }
            },
            Err(err) => {
                self.request.message = format!("Login failed: {err}");
                Outcome::Failed
            }
        };
        self.finish();
        outcome
    }

    /// Drops the stored token unconditionally and routes back to login.
    /// No network call.
    pub fn logout(&mut self) -> Outcome {
        if let Err(err) = self.store.clear() {
            tracing::warn!("failed to clear session: {err:#}");
        }
        self.request.message = "Goodbye!".to_string();
        Outcome::Redirect(Destination::Login)
    }

    /// Full resync: replaces the local collection wholesale with the server's.
    pub async fn list(&mut self) -> Outcome {
        self.begin();
        let outcome = match self.token_guard() {
            Err(redirect) => redirect,
            Ok(token) => match self.client.list_articles(&token).await {
                Ok(response) => {
                    self.articles = response.articles;
                    self.request.message = response.message;
                    Outcome::Done
                }
                Err(ApiError::AuthRejected) => self.auth_rejected(),
                Err(err) => {
                    self.request.message = format!("Failed to fetch articles: {err}");
                    Outcome::Failed
                }
            },
        };
        self.finish();
        outcome
    }

    /// Creates an article and appends the server's copy to the cache,
    /// preserving prior order. `Done` is the signal for the caller to reset
    /// its input form.
    pub async fn create(&mut self, draft: &ArticleDraft) -> Outcome {
        self.begin();
        let outcome = match self.token_guard() {
            Err(redirect) => redirect,
            Ok(token) => match self.client.create_article(&token, draft).await {
                Ok(response) => {
                    self.articles.push(response.article);
                    self.request.message = response.message;
                    Outcome::Done
                }
                Err(ApiError::AuthRejected) => self.auth_rejected(),
                Err(err) => {
                    self.request.message = err.to_string();
                    Outcome::Failed
                }
            },
        };
        self.finish();
        outcome
    }

    /// Partial patch: merges the server's updated fields into the matching
    /// cache entry. Entries with a different id are untouched. Deliberately
    /// asymmetric with [`Self::list`], which replaces wholesale.
    pub async fn update(&mut self, article_id: i64, patch: &ArticlePatch) -> Outcome {
        self.begin();
        let outcome = match self.token_guard() {
            Err(redirect) => redirect,
            Ok(token) => match self.client.update_article(&token, article_id, patch).await {
                Ok(response) => {
                    if let Some(entry) = self
                        .articles
                        .iter_mut()
                        .find(|article| article.article_id == article_id)
                    {
                        entry.merge_from(response.article);
                    }
                    self.request.message = response.message;
                    Outcome::Done
                }
                Err(ApiError::AuthRejected) => self.auth_rejected(),
                Err(err) => {
                    self.request.message = err.to_string();
                    Outcome::Failed
                }
            },
        };
        self.finish();
        outcome
    }

    /// Removes exactly the matching cache entry; relative order of the rest
    /// is preserved.
    pub async fn delete(&mut self, article_id: i64) -> Outcome {
        self.begin();
        let outcome = match self.token_guard() {
            Err(redirect) => redirect,
            Ok(token) => match self.client.delete_article(&token, article_id).await {
                Ok(response) => {
                    self.articles.retain(|article| article.article_id != article_id);
                    self.request.message = response.message;
                    Outcome::Done
                }
                Err(ApiError::AuthRejected) => self.auth_rejected(),
                Err(err) => {
                    self.request.message = err.to_string();
                    Outcome::Failed
                }
            },
        };
        self.finish();
        outcome
    }

    /// Entry to the in-flight state: flush the previous outcome's message and
    /// raise the spinner flag.
    fn begin(&mut self) {
        self.request.message.clear();
        self.request.in_flight = true;
    }

    /// Every exit path lowers the flag, success or failure.
    fn finish(&mut self) {
        self.request.in_flight = false;
    }

    /// Session guard: no authenticated request is ever issued without a
    /// stored token.
    fn token_guard(&self) -> Result<String, Outcome> {
        match self.store.token() {
            Some(token) => Ok(token.to_string()),
            None => Err(Outcome::Redirect(Destination::Login)),
        }
    }

    /// Uniform handling for HTTP 401 on any authenticated call: the stored
    /// token is stale, so drop it and route back to login. No error message;
    /// the redirect itself is the signal. The collection is never mutated on
    /// this path.
    fn auth_rejected(&mut self) -> Outcome {
        if let Err(err) = self.store.clear() {
            tracing::warn!("failed to drop stale session token: {err:#}");
        }
        Outcome::Redirect(Destination::Login)
    }
}
