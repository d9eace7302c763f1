//! HTTP client for the login and articles endpoints.
//!
//! One outbound request per call, no retries, no timeout beyond the transport
//! default. All failures map into the [`ApiError`] taxonomy.

mod error;
mod types;

pub use error::ApiError;
pub use types::{
    Article, ArticleDraft, ArticleListResponse, ArticlePatch, ArticleResponse, Credentials,
    LoginResponse, MessageResponse,
};

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Client for a single articles API deployment.
pub struct ArticlesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ArticlesClient {
    /// Creates a client for the API rooted at `base_url` (the segment before
    /// `/login` and `/articles`, e.g. `http://localhost:9000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST /login with the credentials. The only unauthenticated call.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/login", self.base_url);
        tracing::debug!(%url, username = %credentials.username, "sending login request");

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        read_json(response, |status| status.is_success()).await
    }

    /// GET /articles, authenticated.
    pub async fn list_articles(&self, token: &str) -> Result<ArticleListResponse, ApiError> {
        let url = format!("{}/articles", self.base_url);
        tracing::debug!(%url, "fetching articles");

        let response = self
            .http
            .get(&url)
            .header("Authorization", token)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        read_json(response, |status| status.is_success()).await
    }

    /// POST /articles, authenticated.
    pub async fn create_article(
        &self,
        token: &str,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse, ApiError> {
        let url = format!("{}/articles", self.base_url);
        tracing::debug!(%url, "creating article");

        let response = self
            .http
            .post(&url)
            .header("Authorization", token)
            .json(draft)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        read_json(response, |status| status.is_success()).await
    }

    /// PUT /articles/{id}, authenticated. Acts only on HTTP 200 exactly; any
    /// other status surfaces as an error so the caller's mutating branch is
    /// precisely the 200 one.
    pub async fn update_article(
        &self,
        token: &str,
        article_id: i64,
        patch: &ArticlePatch,
    ) -> Result<ArticleResponse, ApiError> {
        let url = format!("{}/articles/{article_id}", self.base_url);
        tracing::debug!(%url, article_id, "updating article");

        let response = self
            .http
            .put(&url)
            .header("Authorization", token)
            .json(patch)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        read_json(response, |status| status == StatusCode::OK).await
    }

    /// DELETE /articles/{id}, authenticated. Acts only on HTTP 200 exactly.
    pub async fn delete_article(
        &self,
        token: &str,
        article_id: i64,
    ) -> Result<MessageResponse, ApiError> {
        let url = format!("{}/articles/{article_id}", self.base_url);
        tracing::debug!(%url, article_id, "deleting article");

        let response = self
            .http
            .delete(&url)
            .header("Authorization", token)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        read_json(response, |status| status == StatusCode::OK).await
    }
}

/// Maps a response into the taxonomy, then parses the typed success body.
///
/// `acts_on` decides which statuses count as success for this operation.
async fn read_json<T: DeserializeOwned>(
    response: Response,
    acts_on: fn(StatusCode) -> bool,
) -> Result<T, ApiError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::AuthRejected);
    }
    if !acts_on(status) {
        let detail = error_detail(response).await;
        return Err(ApiError::Server { status, detail });
    }

    response.json().await.map_err(ApiError::Transport)
}

/// Pulls the human-readable `message` out of an error body, falling back to
/// the raw body text.
async fn error_detail(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<MessageResponse>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_parses_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "username": "a",
                "password": "b"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Welcome",
                "token": "xyz"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ArticlesClient::new(server.uri());
        let response = client
            .login(&Credentials {
                username: "a".to_string(),
                password: "b".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.message, "Welcome");
        assert_eq!(response.token, "xyz");
    }

    #[tokio::test]
    async fn test_401_maps_to_auth_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/articles"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ArticlesClient::new(server.uri());
        let err = client.list_articles("stale").await.unwrap_err();
        assert!(matches!(err, ApiError::AuthRejected));
    }

    #[tokio::test]
    async fn test_error_body_message_becomes_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/articles"))
            .and(header("Authorization", "tok"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "title is required"
            })))
            .mount(&server)
            .await;

        let client = ArticlesClient::new(server.uri());
        let err = client
            .create_article(
                "tok",
                &ArticleDraft {
                    title: String::new(),
                    text: "x".to_string(),
                    topic: "t".to_string(),
                },
            )
            .await
            .unwrap_err();

        match err {
            ApiError::Server { status, detail } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(detail, "title is required");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_requires_exactly_200() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/articles/3"))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "message": "accepted",
                "article": { "article_id": 3, "title": "t", "text": "x", "topic": "p" }
            })))
            .mount(&server)
            .await;

        let client = ArticlesClient::new(server.uri());
        let err = client
            .update_article("tok", 3, &ArticlePatch::default())
            .await
            .unwrap_err();

        match err {
            ApiError::Server { status, .. } => assert_eq!(status, StatusCode::ACCEPTED),
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport() {
        // Port 1 is essentially never listening.
        let client = ArticlesClient::new("http://127.0.0.1:1");
        let err = client.list_articles("tok").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
