use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::LoadError;

/// Predictions document; the page cannot render without it
pub const PRIMARY_DOCUMENT: &str = "data/picks_complete.json";
/// Modern combined bets for the league competitions
pub const COMBINADAS_DOCUMENT: &str = "data/combinadas.json";
/// Modern combined bets for the Champions track
pub const CHAMPIONS_COMBINADAS_DOCUMENT: &str = "data/combinadas_champions.json";
/// Match list for the Champions track
pub const CHAMPIONS_DATA_DOCUMENT: &str = "data/champions_data.json";
/// Period-grouped history
pub const HISTORIAL_DOCUMENT: &str = "data/historial.json";

pub const OPTIONAL_DOCUMENTS: [&str; 4] = [
    COMBINADAS_DOCUMENT,
    CHAMPIONS_COMBINADAS_DOCUMENT,
    CHAMPIONS_DATA_DOCUMENT,
    HISTORIAL_DOCUMENT,
];

/// Where the static documents are read from
enum DocumentSource {
    Http { client: Client, base_url: String },
    Directory(PathBuf),
}

/// Client for the dashboard's static JSON documents
pub struct DocumentClient {
    source: DocumentSource,
}

/// Raw documents of one load; optional ones are `None` when unavailable
#[derive(Debug, Clone)]
pub struct RawDocuments {
    pub primary: Value,
    pub combinadas: Option<Value>,
    pub combinadas_champions: Option<Value>,
    pub champions_data: Option<Value>,
    pub historial: Option<Value>,
}

impl DocumentClient {
    /// Serve documents from `<base_url>/data/...`
    pub fn http(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`DocumentClient::http`] over a preconfigured client
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            source: DocumentSource::Http {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            },
        }
    }

    /// Read documents from `<dir>/data/...` on disk
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: DocumentSource::Directory(dir.into()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.data_dir {
            Some(dir) => Self::directory(dir.clone()),
            None => Self::http(&config.data_base_url),
        }
    }

    /// Fetch every document concurrently and wait for all of them.
    ///
    /// Optional documents degrade to `None`; only the primary one is fatal.
    pub async fn load_all(&self) -> Result<RawDocuments, LoadError> {
        let (primary, combinadas, combinadas_champions, champions_data, historial) = tokio::join!(
            self.fetch(PRIMARY_DOCUMENT),
            self.fetch_optional(COMBINADAS_DOCUMENT),
            self.fetch_optional(CHAMPIONS_COMBINADAS_DOCUMENT),
            self.fetch_optional(CHAMPIONS_DATA_DOCUMENT),
            self.fetch_optional(HISTORIAL_DOCUMENT),
        );

        let primary = primary.map_err(|e| LoadError::primary(format!("{:#}", e)))?;

        let available = [&combinadas, &combinadas_champions, &champions_data, &historial]
            .iter()
            .filter(|d| d.is_some())
            .count();
        info!(
            "Loaded {} plus {}/{} optional documents",
            PRIMARY_DOCUMENT,
            available,
            OPTIONAL_DOCUMENTS.len()
        );

        Ok(RawDocuments {
            primary,
            combinadas,
            combinadas_champions,
            champions_data,
            historial,
        })
    }

    /// Fetch a document that the page can render without
    pub async fn fetch_optional(&self, name: &str) -> Option<Value> {
        match self.fetch(name).await {
            Ok(doc) => Some(doc),
            Err(e) => {
                warn!("Optional document {} unavailable: {:#}", name, e);
                None
            }
        }
    }

    /// Fetch and parse a single document
    pub async fn fetch(&self, name: &str) -> Result<Value> {
        let text = match &self.source {
            DocumentSource::Http { client, base_url } => {
                let url = format!("{}/{}", base_url, name);
                debug!("Fetching document: {}", url);

                let response = client
                    .get(&url)
                    .header("Accept", "application/json")
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch {}", name))?;

                if !response.status().is_success() {
                    anyhow::bail!("{} returned {}", name, response.status());
                }

                response
                    .text()
                    .await
                    .with_context(|| format!("Failed to read {}", name))?
            }
            DocumentSource::Directory(dir) => {
                let path = dir.join(name);
                debug!("Reading document: {}", path.display());

                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?
            }
        };

        parse_document(&text).with_context(|| format!("Failed to parse {}", name))
    }
}

/// Parse a JSON document, tolerating a leading byte-order mark
pub fn parse_document(text: &str) -> Result<Value> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn write_doc(root: &std::path::Path, name: &str, content: &str) {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_parse_document_strips_bom() {
        let doc = parse_document("\u{feff}{\"modelo_version\": \"2.1\"}").unwrap();
        assert_eq!(doc["modelo_version"], "2.1");
        assert!(parse_document("{\"broken\": ").is_err());
    }

    #[tokio::test]
    async fn test_load_all_tolerates_missing_optionals() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), PRIMARY_DOCUMENT, r#"{"jornada": {}}"#);
        write_doc(dir.path(), HISTORIAL_DOCUMENT, r#"{"jornadas": []}"#);
        write_doc(dir.path(), COMBINADAS_DOCUMENT, "not json");

        let docs = DocumentClient::directory(dir.path()).load_all().await.unwrap();

        assert!(docs.primary.get("jornada").is_some());
        assert!(docs.historial.is_some());
        assert!(docs.combinadas.is_none());
        assert!(docs.combinadas_champions.is_none());
        assert!(docs.champions_data.is_none());
    }

    #[tokio::test]
    async fn test_missing_primary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), COMBINADAS_DOCUMENT, r#"{"combinadas": []}"#);

        let err = DocumentClient::directory(dir.path()).load_all().await.unwrap_err();

        let LoadError::PrimaryUnavailable { path, .. } = &err;
        assert_eq!(*path, PRIMARY_DOCUMENT);
        assert_eq!(err.optional_documents().len(), 4);
    }

    #[tokio::test]
    async fn test_unparseable_primary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_doc(dir.path(), PRIMARY_DOCUMENT, "diff --git a/x b/x");

        assert!(DocumentClient::directory(dir.path()).load_all().await.is_err());
    }

    /// Serve `(path, status, body)` routes on a local port; anything else is 404
    async fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut buf = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => request.extend_from_slice(&buf[..n]),
                        }
                    }

                    let request = String::from_utf8_lossy(&request);
                    let target = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|(path, _, _)| format!("/{}", path) == target)
                        .map(|(_, status, body)| (*status, *body))
                        .unwrap_or((404, "not found"));

                    let response = format!(
                        "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}/", addr)
    }

    fn local_client(base_url: &str) -> DocumentClient {
        let client = Client::builder().no_proxy().build().unwrap();
        DocumentClient::with_client(client, base_url)
    }

    #[tokio::test]
    async fn test_http_missing_optional_is_none() {
        let base_url = serve(vec![
            (PRIMARY_DOCUMENT, 200, r#"{"modelo_version": "2.1"}"#),
            (HISTORIAL_DOCUMENT, 200, r#"{"jornadas": []}"#),
            (COMBINADAS_DOCUMENT, 500, "boom"),
        ])
        .await;

        let docs = local_client(&base_url).load_all().await.unwrap();

        assert_eq!(docs.primary["modelo_version"], "2.1");
        assert!(docs.historial.is_some());
        assert!(docs.combinadas.is_none());
        assert!(docs.champions_data.is_none());
    }

    #[tokio::test]
    async fn test_http_primary_error_status_is_fatal() {
        let base_url = serve(vec![
            (PRIMARY_DOCUMENT, 500, "internal error"),
            (COMBINADAS_DOCUMENT, 200, r#"{"combinadas": []}"#),
        ])
        .await;

        let err = local_client(&base_url).load_all().await.unwrap_err();

        let LoadError::PrimaryUnavailable { path, reason } = &err;
        assert_eq!(*path, PRIMARY_DOCUMENT);
        assert!(reason.contains("500"));
    }

    #[tokio::test]
    async fn test_http_connection_refused_is_fatal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = local_client(&format!("http://{}", addr));
        assert!(client.fetch_optional(HISTORIAL_DOCUMENT).await.is_none());
        assert!(client.load_all().await.is_err());
    }
}
