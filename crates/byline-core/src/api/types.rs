//! Wire types for the login and articles endpoints.

use serde::{Deserialize, Serialize};

/// A single article record as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned, unique.
    pub article_id: i64,
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl Article {
    /// Overwrites this record's fields with the server's updated copy.
    ///
    /// The locally known id stays authoritative; matching happened on it.
    pub fn merge_from(&mut self, updated: Article) {
        let Article {
            article_id: _,
            title,
            text,
            topic,
        } = updated;
        self.title = title;
        self.text = text;
        self.topic = topic;
    }
}

/// Payload for creating an article.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: String,
}

/// Partial update payload; unset fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl ArticlePatch {
    /// True when no field is set, i.e. the patch would be a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.topic.is_none()
    }
}

/// Login payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// Success body of POST /login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Success body of GET /articles.
#[derive(Debug, Deserialize)]
pub struct ArticleListResponse {
    pub message: String,
    pub articles: Vec<Article>,
}

/// Success body of POST /articles and PUT /articles/{id}.
#[derive(Debug, Deserialize)]
pub struct ArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Success body of DELETE /articles/{id}, and the usual shape of error bodies.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
