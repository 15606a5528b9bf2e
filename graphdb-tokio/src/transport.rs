use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::builder::Config;
use crate::errors::{ClientConnectionError, ClientError, Error, ErrorKind};

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

/// A single request to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,
    /// Full URL of the endpoint.
    pub url: Url,
    /// JSON body, if any.
    pub body: Option<Bytes>,
}

/// The status and body of a response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body.
    pub body: Bytes,
}

/// Sends requests to the server.
///
/// [`Client`](crate::Client) does all encoding, decoding and status
/// handling. A transport only moves bytes and reports failures to deliver
/// them as [`ClientConnectionError`].
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Perform one round trip.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Default transport, a [`reqwest`] client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        })
    }
}

impl HttpRequest {
    /// A request without body.
    pub fn new(method: Method, url: Url) -> HttpRequest {
        HttpRequest {
            method,
            url,
            body: None,
        }
    }

    /// A `POST` request with a JSON body.
    pub fn post(url: Url, body: Bytes) -> HttpRequest {
        HttpRequest {
            method: Method::Post,
            url,
            body: Some(body),
        }
    }
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpTransport {
    /// Create a transport for the given configuration.
    pub fn new(config: &Config) -> Result<HttpTransport, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::with_source(e).context("cannot create HTTP client"))?;
        Ok(HttpTransport { http })
    }
}

fn connection_error(e: reqwest::Error) -> Error {
    let timed_out = e.is_timeout();
    let err = ClientConnectionError::with_source(e);
    if timed_out {
        err.context("request timed out")
    } else {
        err
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.http.request(method, request.url).header(ACCEPT, "*/*");
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        let response = builder.send().await.map_err(connection_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(connection_error)?;
        Ok(HttpResponse { status, body })
    }
}
