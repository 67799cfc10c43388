//! HTTP-backed document store
//!
//! Reference connector for a document-storage provider exposing a
//! minimal JSON API: `GET {base_url}/documents/{id}` returns either a
//! single file object or a folder listing. File content travels
//! base64-encoded inside the JSON body.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{DocumentStore, NamedFile, StoreEntry, StoreError};

/// Default timeout for storage requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent for texdraft requests
pub const USER_AGENT: &str = "texdraft";

/// Single file as it appears on the wire
#[derive(Debug, Deserialize)]
struct WireFile {
    name: String,
    /// Base64-encoded raw content
    content: String,
}

/// Response body for a document fetch
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum WireEntry {
    File(WireFile),
    Folder { entries: Vec<WireFile> },
}

/// Blocking HTTP document store
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
}

impl HttpDocumentStore {
    /// Build a store against `base_url` with the default timeout
    ///
    /// # Errors
    ///
    /// Returns error if client construction fails
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build a store against `base_url` with an explicit timeout
    ///
    /// # Errors
    ///
    /// Returns error if client construction fails
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/documents/{}", self.base_url.trim_end_matches('/'), id)
    }
}

impl DocumentStore for HttpDocumentStore {
    fn fetch(&self, id: &str) -> Result<StoreEntry, StoreError> {
        let url = self.document_url(id);
        debug!(id, url = url.as_str(), "fetching document entry");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| StoreError::Transport {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(StoreError::NotFound { id: id.to_string() });
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(StoreError::AccessDenied { id: id.to_string() });
            }
            _ => {}
        }

        let response = response
            .error_for_status()
            .map_err(|e| StoreError::Transport {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        let body = response.text().map_err(|e| StoreError::Transport {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

        let entry: WireEntry =
            serde_json::from_str(&body).map_err(|e| StoreError::Transport {
                id: id.to_string(),
                reason: format!("invalid response body: {}", e),
            })?;

        decode_entry(id, entry)
    }
}

/// Decode base64 file content out of a wire entry
fn decode_entry(id: &str, entry: WireEntry) -> Result<StoreEntry, StoreError> {
    match entry {
        WireEntry::File(file) => Ok(StoreEntry::File(decode_file(id, file)?)),
        WireEntry::Folder { entries } => {
            let files = entries
                .into_iter()
                .map(|f| decode_file(id, f))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(StoreEntry::Folder(files))
        }
    }
}

fn decode_file(id: &str, file: WireFile) -> Result<NamedFile, StoreError> {
    let content = BASE64
        .decode(file.content.as_bytes())
        .map_err(|e| StoreError::Transport {
            id: id.to_string(),
            reason: format!("invalid base64 content for '{}': {}", file.name, e),
        })?;

    Ok(NamedFile {
        name: file.name,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use texdraft_testkit::get_shared_mock_server;

    fn store_for(url: String) -> HttpDocumentStore {
        HttpDocumentStore::new(url).expect("client construction should succeed")
    }

    #[test]
    fn test_fetch_single_file() {
        let (url, _mock) = {
            let mut server = get_shared_mock_server();
            let mock = server
                .mock("GET", "/documents/http-file-1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"kind":"file","name":"notes.tex","content":"SGVsbG8gXFRJVExF"}"#)
                .create();
            (server.url(), mock)
        };

        let store = store_for(url);
        let entry = store.fetch("http-file-1").unwrap();

        match entry {
            StoreEntry::File(file) => {
                assert_eq!(file.name, "notes.tex");
                assert_eq!(file.content, b"Hello \\TITLE");
            }
            other => panic!("Expected File, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_folder_listing() {
        let (url, _mock) = {
            let mut server = get_shared_mock_server();
            let mock = server
                .mock("GET", "/documents/http-folder-1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    r#"{"kind":"folder","entries":[
                        {"name":"main.tex","content":"VGl0bGU6IFxUSVRMRQ=="},
                        {"name":"fig.png","content":"ZmlnLWJ5dGVz"}
                    ]}"#,
                )
                .create();
            (server.url(), mock)
        };

        let store = store_for(url);
        let entry = store.fetch("http-folder-1").unwrap();

        match entry {
            StoreEntry::Folder(files) => {
                assert_eq!(files.len(), 2);
                assert_eq!(files[0].name, "main.tex");
                assert_eq!(files[0].content, b"Title: \\TITLE");
                assert_eq!(files[1].name, "fig.png");
                assert_eq!(files[1].content, b"fig-bytes");
            }
            other => panic!("Expected Folder, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_not_found() {
        let (url, _mock) = {
            let mut server = get_shared_mock_server();
            let mock = server
                .mock("GET", "/documents/http-missing-1")
                .with_status(404)
                .create();
            (server.url(), mock)
        };

        let store = store_for(url);
        let err = store.fetch("http-missing-1").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.id(), "http-missing-1");
    }

    #[test]
    fn test_fetch_access_denied() {
        let (url, _mock) = {
            let mut server = get_shared_mock_server();
            let mock = server
                .mock("GET", "/documents/http-denied-1")
                .with_status(403)
                .create();
            (server.url(), mock)
        };

        let store = store_for(url);
        let err = store.fetch("http-denied-1").unwrap_err();
        assert!(matches!(err, StoreError::AccessDenied { .. }));
    }

    #[test]
    fn test_fetch_invalid_base64_is_transport_error() {
        let (url, _mock) = {
            let mut server = get_shared_mock_server();
            let mock = server
                .mock("GET", "/documents/http-bad-b64-1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"kind":"file","name":"notes.tex","content":"%%%not-base64%%%"}"#)
                .create();
            (server.url(), mock)
        };

        let store = store_for(url);
        let err = store.fetch("http-bad-b64-1").unwrap_err();
        assert!(matches!(err, StoreError::Transport { .. }));
    }

    #[test]
    fn test_fetch_malformed_json_is_transport_error() {
        let (url, _mock) = {
            let mut server = get_shared_mock_server();
            let mock = server
                .mock("GET", "/documents/http-bad-json-1")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("not json")
                .create();
            (server.url(), mock)
        };

        let store = store_for(url);
        let err = store.fetch("http-bad-json-1").unwrap_err();
        assert!(matches!(err, StoreError::Transport { .. }));
        assert!(err.to_string().contains("invalid response body"));
    }

    #[test]
    fn test_document_url_trims_trailing_slash() {
        let store = store_for("http://localhost:1234/".to_string());
        assert_eq!(
            store.document_url("abc"),
            "http://localhost:1234/documents/abc"
        );
    }
}
