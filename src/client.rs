//! HTTP client implementation for next-gen-db

use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::types::DeleteStatus;

/// Characters allowed unencoded in URI path segments per RFC 3986.
/// Everything else (including spaces, `/`, `#`, `?`, `%`, non-ASCII) gets
/// percent-encoded, so a key or node id always occupies exactly one segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// Percent-encode a key or node id for use in a URI path.
fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Message used for a 404 whose body carries no `detail` field.
const NOT_FOUND_FALLBACK: &str = "Resource not found";
/// Message used for an error body that is JSON but carries no `detail` field.
const ERROR_FALLBACK: &str = "An error occurred";
/// Message used for an error body that is not decodable JSON at all.
const UNDECODABLE_FALLBACK: &str = "An error occurred and no additional details were provided";

/// Configuration options for the next-gen-db client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server endpoint URL (default: http://localhost:8047)
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8047".to_string(),
        }
    }
}

/// Build a rustls ClientConfig with standard CA verification.
fn build_tls_config() -> Result<rustls::ClientConfig> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());

    let mut roots = rustls::RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    Ok(rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| Error::Connection(e.to_string()))?
        .with_root_certificates(roots)
        .with_no_client_auth())
}

type HttpsConnector = hyper_rustls::HttpsConnector<HttpConnector>;

/// HTTP client for a next-gen-db server
///
/// Holds the server's base address and exposes the document and graph API as
/// method calls. Every call issues a single HTTP request and maps the
/// response status onto the typed error taxonomy; the client itself keeps no
/// state beyond the endpoint, so one instance can be reused (and cloned)
/// freely across sequential calls.
///
/// When the endpoint uses `https://`, TLS with standard CA verification is
/// used automatically.
///
/// # Example
/// ```rust,no_run
/// use next_gen_db_client::Client;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), next_gen_db_client::Error> {
///     let client = Client::new("http://localhost:8047")?;
///
///     client.create_document("inventory:42", &json!({"qty": 7})).await?;
///     let doc = client.get_document("inventory:42").await?;
///     println!("{}", doc);
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    config: Arc<ClientConfig>,
    http_client: HttpClient<HttpsConnector, Full<Bytes>>,
}

impl Client {
    /// Create a new next-gen-db client
    ///
    /// # Arguments
    /// * `endpoint` - Server endpoint URL (e.g., "http://localhost:8047");
    ///   trailing slashes are stripped
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_config(ClientConfig {
            endpoint: endpoint.to_string(),
        })
    }

    /// Create a new client with custom configuration
    pub fn with_config(mut config: ClientConfig) -> Result<Self> {
        let trimmed = config.endpoint.trim_end_matches('/').len();
        config.endpoint.truncate(trimmed);

        // Validate the endpoint URL early
        let _: Uri = config
            .endpoint
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("Invalid endpoint URL: {}", e)))?;

        let tls_config = build_tls_config()?;

        let https_connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_tls_config(tls_config)
            .https_or_http()
            .enable_http1()
            .build();

        let http_client = HttpClient::builder(TokioExecutor::new()).build(https_connector);

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Internal request method
    async fn request(
        &self,
        path_and_query: &str,
        method: Method,
        body: Option<Bytes>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.endpoint, path_and_query);
        let uri: Uri = url
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("Invalid request URL: {}", e)))?;

        let mut builder = Request::builder()
            .method(method.clone())
            .uri(uri)
            .header("accept", "application/json");

        if body.is_some() {
            builder = builder.header("content-type", "application/json");
        }

        let req = builder
            .body(Full::new(body.unwrap_or_default()))
            .map_err(|e| Error::InvalidRequest(format!("Failed to build request: {}", e)))?;

        debug!("Sending request: {} {}", method, path_and_query);

        let response = self
            .http_client
            .request(req)
            .await
            .map_err(|e| Error::Connection(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body_bytes = read_body_to_bytes(response.into_body()).await?;
        interpret(status, &body_bytes)
    }

    /// Create a new document stored under `key`
    ///
    /// # Arguments
    /// * `key` - The key to store the document under
    /// * `document` - Any serializable payload, sent verbatim as the JSON body
    ///
    /// # Returns
    /// The server's decoded JSON response
    ///
    /// # Example
    /// ```rust,no_run
    /// # use next_gen_db_client::Client;
    /// # use serde_json::json;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), next_gen_db_client::Error> {
    /// # let client = Client::new("http://localhost:8047")?;
    /// let response = client
    ///     .create_document("user:123", &json!({"name": "John"}))
    ///     .await?;
    /// println!("Server said: {}", response);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_document<T>(&self, key: &str, document: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let path = format!("/document/{}", encode_segment(key));
        let body = Bytes::from(serde_json::to_vec(document)?);
        self.request(&path, Method::POST, Some(body)).await
    }

    /// Retrieve the document stored under `key`
    ///
    /// # Errors
    /// [`Error::NotFound`] if no document exists under the key
    pub async fn get_document(&self, key: &str) -> Result<Value> {
        let path = format!("/document/{}", encode_segment(key));
        self.request(&path, Method::GET, None).await
    }

    /// Replace the document stored under `key`
    pub async fn update_document<T>(&self, key: &str, document: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let path = format!("/document/{}", encode_segment(key));
        let body = Bytes::from(serde_json::to_vec(document)?);
        self.request(&path, Method::PUT, Some(body)).await
    }

    /// Delete the document stored under `key`
    ///
    /// # Returns
    /// The fixed [`DeleteStatus`] indicator on any non-error status,
    /// regardless of the response body
    pub async fn delete_document(&self, key: &str) -> Result<DeleteStatus> {
        let path = format!("/document/{}", encode_segment(key));
        self.request(&path, Method::DELETE, None).await?;
        Ok(DeleteStatus::deleted())
    }

    /// Add a node to the graph
    ///
    /// # Arguments
    /// * `node_id` - The node's string identifier
    /// * `properties` - Any serializable property map, sent as the JSON body
    pub async fn add_node<T>(&self, node_id: &str, properties: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let path = format!("/graph/node/{}", encode_segment(node_id));
        let body = Bytes::from(serde_json::to_vec(properties)?);
        self.request(&path, Method::POST, Some(body)).await
    }

    /// Retrieve a node from the graph
    ///
    /// # Errors
    /// [`Error::NotFound`] if the node does not exist
    pub async fn get_node(&self, node_id: &str) -> Result<Value> {
        let path = format!("/graph/node/{}", encode_segment(node_id));
        self.request(&path, Method::GET, None).await
    }

    /// Add a labeled edge between two nodes
    ///
    /// The node ids and relation label travel as query parameters, not as a
    /// request body.
    pub async fn add_edge(&self, node1: &str, node2: &str, relation: &str) -> Result<Value> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("node1", node1)
            .append_pair("node2", node2)
            .append_pair("relation", relation)
            .finish();
        let path = format!("/graph/edge?{}", query);
        self.request(&path, Method::POST, None).await
    }

    /// Retrieve the edge between two nodes
    ///
    /// # Errors
    /// [`Error::NotFound`] if no edge connects the two nodes
    pub async fn get_edge(&self, node1: &str, node2: &str) -> Result<Value> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("node1", node1)
            .append_pair("node2", node2)
            .finish();
        let path = format!("/graph/edge?{}", query);
        self.request(&path, Method::GET, None).await
    }
}

/// Read response body to bytes
async fn read_body_to_bytes(body: Incoming) -> Result<Bytes> {
    let collected = body
        .collect()
        .await
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    Ok(collected.to_bytes())
}

/// Map a response status and collected body onto the client's result contract.
///
/// Shared by every operation: 404 and other error statuses become typed
/// errors carrying the server's `detail` message when one is present, 204
/// yields `Value::Null` without touching the body, anything else decodes as
/// JSON and is returned as-is.
fn interpret(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status == StatusCode::NOT_FOUND {
        let message = detail_message(body).unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string());
        return Err(Error::NotFound(message));
    }

    if status.is_client_error() || status.is_server_error() {
        let message = match serde_json::from_slice::<Value>(body) {
            Ok(decoded) => decoded
                .get("detail")
                .and_then(Value::as_str)
                .unwrap_or(ERROR_FALLBACK)
                .to_string(),
            Err(_) => UNDECODABLE_FALLBACK.to_string(),
        };
        return Err(Error::Server {
            status: status.as_u16(),
            message,
        });
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(body)?)
}

/// Extract the `detail` field from a JSON error body, if there is one.
fn detail_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()?
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}
