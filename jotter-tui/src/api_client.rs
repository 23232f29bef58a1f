//! API client layer for the notes service REST endpoints.

use crate::config::TuiConfig;
use jotter_core::{ListKey, Note, NoteDraft, NoteId, NotePage, Tag};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Server error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// Error body the service returns on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Query string for the list endpoint. Empty search and absent tag are
/// omitted entirely rather than sent as empty parameters.
#[derive(Debug, Clone, Serialize)]
struct ListNotesQuery<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    search: &'a str,
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<Tag>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of notes for the given key.
    pub async fn list_notes(&self, key: &ListKey) -> Result<NotePage, ApiClientError> {
        let query = ListNotesQuery {
            search: &key.query,
            page: key.page,
            tag: key.tag,
        };
        self.get_json("/notes", Some(&query)).await
    }

    /// Fetch a single note by id. A missing id surfaces as whatever
    /// error the service raises for the lookup.
    pub async fn get_note(&self, id: NoteId) -> Result<Note, ApiClientError> {
        let path = format!("/notes/{}", id);
        self.get_json::<Note, ()>(&path, None).await
    }

    /// Create a note. The caller validates the draft beforehand; no
    /// client-side checks happen here.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiClientError> {
        self.post_json("/notes", draft).await
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.parse_response(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(url).json(body).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let text = response.text().await?;
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                return Err(ApiClientError::Api {
                    status: status.as_u16(),
                    message: body.message,
                });
            }
            Err(ApiClientError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}
