// src/board/client.rs

//! Nirvana API client for the source board.
//!
//! Both calls are form POSTs against the wiki's `wikia.php` endpoint with
//! the controller/method/format triple in the query string.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::board::BoardSource;
use crate::error::{AppError, Result};
use crate::models::{BoardConfig, Config};
use crate::utils::http;

/// Listing payload of `ForumExternal.getCommentsPage`.
#[derive(Debug, Deserialize)]
struct ForumResponse {
    html: String,
}

/// Thread payload of `WallExternal.editMessage`.
#[derive(Debug, Deserialize)]
struct ThreadResponse {
    #[serde(default)]
    htmlorwikitext: String,
    status: bool,
}

/// HTTP client for the board's remote API.
pub struct BoardClient {
    client: Client,
    board: BoardConfig,
}

impl BoardClient {
    /// Create a client configured from application settings.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: http::create_client(&config.poller)?,
            board: config.board.clone(),
        })
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        controller: &str,
        method: &str,
        form: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .post(&self.board.api_url)
            .query(&[
                ("controller", controller),
                ("format", "json"),
                ("method", method),
            ])
            .form(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BoardSource for BoardClient {
    /// Fetch the raw listing fragment for the configured forum page.
    async fn fetch_listing(&self) -> Result<String> {
        let response: ForumResponse = self
            .call(
                "ForumExternal",
                "getCommentsPage",
                &[
                    ("page", "1".to_string()),
                    ("pagetitle", self.board.page_title.clone()),
                    ("pagenamespace", self.board.page_namespace.to_string()),
                ],
            )
            .await?;
        Ok(response.html)
    }

    /// Fetch the raw wikitext body of a thread.
    ///
    /// A `status: false` response is a fetch failure, not empty content.
    async fn fetch_thread_body(&self, id: u64) -> Result<String> {
        // The API echoes the id in all three fields.
        let id_field = id.to_string();
        let response: ThreadResponse = self
            .call(
                "WallExternal",
                "editMessage",
                &[
                    ("msgid", id_field.clone()),
                    ("pagetitle", id_field.clone()),
                    ("pagenamespace", id_field),
                ],
            )
            .await?;

        if !response.status {
            return Err(AppError::board(
                "fetch_thread_body",
                format!("board reported failure for thread {id}"),
            ));
        }
        Ok(response.htmlorwikitext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_response_parsing() {
        let parsed: ThreadResponse =
            serde_json::from_str(r#"{"htmlorwikitext": "*line", "status": true}"#).unwrap();
        assert!(parsed.status);
        assert_eq!(parsed.htmlorwikitext, "*line");
    }

    #[test]
    fn test_thread_response_failure_flag() {
        let parsed: ThreadResponse = serde_json::from_str(r#"{"status": false}"#).unwrap();
        assert!(!parsed.status);
        assert!(parsed.htmlorwikitext.is_empty());
    }

    #[test]
    fn test_forum_response_parsing() {
        let parsed: ForumResponse = serde_json::from_str(r#"{"html": "<h4></h4>"}"#).unwrap();
        assert_eq!(parsed.html, "<h4></h4>");
    }
}
