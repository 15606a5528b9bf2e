use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use url::Url;

use graphdb_protocol::client_message::{CreateDatabase, CypherQuery};
use graphdb_protocol::query_arg::QueryArgs;
use graphdb_protocol::server_message::{decode_database_list, decode_query_response};

use crate::builder::Config;
use crate::errors::fields::{QueryText, ResponseBody, StatusCode};
use crate::errors::{ClientConnectionError, Error, ErrorKind, ResultExt};
use crate::errors::{HttpStatusError, InvalidArgumentError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};

/// A row of a query result without a fixed shape.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

/// Graph database client
///
/// Every method performs a single HTTP round trip. The client is cheap to
/// clone, clones share the underlying transport.
///
/// To create client, use [`create_client`](crate::create_client) function (it
/// gets configuration from environment). You can also use
/// [`Builder`](crate::Builder) to [`build`](`crate::Builder::build`) custom
/// [`Config`] and [create a client](Client::new) using that config.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    transport: Arc<dyn Transport>,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Read,
    Write,
}

impl Mode {
    fn endpoint(self) -> &'static str {
        match self {
            Mode::Read => "read",
            Mode::Write => "write",
        }
    }
}

fn status_error(response: &HttpResponse) -> Error {
    HttpStatusError::with_message(format!("unexpected status code: {}", response.status))
        .set::<StatusCode>(response.status)
}

fn query_status_error(response: &HttpResponse, cypher: &str) -> Error {
    let body = String::from_utf8_lossy(&response.body).into_owned();
    HttpStatusError::with_message(format!(
        "unexpected status code: {} {:?}",
        response.status, body
    ))
    .set::<StatusCode>(response.status)
    .set::<ResponseBody>(body)
    .set::<QueryText>(cypher)
}

impl Client {
    /// Create a client talking HTTP to the configured address.
    ///
    /// Note this does not contact the server. Use
    /// [`health()`][Client::health] to check that the server is reachable.
    pub fn new(config: &Config) -> Result<Client, Error> {
        let transport = HttpTransport::new(config)?;
        Ok(Client::with_transport(config, Arc::new(transport)))
    }

    /// Create a client sending requests through `transport`.
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Client {
        Client {
            config: config.clone(),
            transport,
        }
    }

    /// Configuration this client was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that the server is up.
    ///
    /// Returns `true` when the server answers with a 2xx status, an
    /// [`HttpStatusError`] otherwise.
    pub async fn health(&self) -> Result<bool, Error> {
        let url = self.endpoint(&["health"])?;
        let response = self.send(HttpRequest::new(Method::Get, url)).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        Ok(true)
    }

    /// Names of all databases on the server.
    pub async fn databases(&self) -> Result<Vec<String>, Error> {
        let url = self.endpoint(&["databases"])?;
        let response = self.send(HttpRequest::new(Method::Get, url)).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        decode_database_list(&response.body).context("cannot decode database list")
    }

    /// Create an on-disk database.
    pub async fn create_database(&self, name: &str) -> Result<(), Error> {
        check_name(name)?;
        let body = CreateDatabase::new(name).encode()?;
        let url = self.endpoint(&["databases"])?;
        let response = self.send(HttpRequest::post(url, body)).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        Ok(())
    }

    /// Drop a database with all its data.
    pub async fn delete_database(&self, name: &str) -> Result<(), Error> {
        check_name(name)?;
        let url = self.endpoint(&["databases", name])?;
        let response = self.send(HttpRequest::new(Method::Delete, url)).await?;
        if !response.is_success() {
            return Err(status_error(&response));
        }
        Ok(())
    }

    /// Run a read-only query and return its rows.
    ///
    /// You will usually have to specify the row type for the query:
    ///
    /// ```rust,ignore
    /// #[derive(serde::Deserialize)]
    /// struct Person { name: String }
    ///
    /// let people = client.query_read::<Person, _>(
    ///     "movies",
    ///     "MATCH (p:Person) RETURN p.name AS name",
    ///     &(),
    /// ).await?;
    /// ```
    ///
    /// Rows are decoded by field name. Use
    /// [`query_read_json`][Client::query_read_json] to get untyped rows.
    pub async fn query_read<R, A>(
        &self,
        database: &str,
        cypher: &str,
        arguments: &A,
    ) -> Result<Vec<R>, Error>
    where
        A: QueryArgs,
        R: DeserializeOwned,
    {
        self.query(Mode::Read, database, cypher, arguments).await
    }

    /// Run a query that may modify the database and return its rows.
    ///
    /// Same as [`query_read`][Client::query_read] otherwise.
    pub async fn query_write<R, A>(
        &self,
        database: &str,
        cypher: &str,
        arguments: &A,
    ) -> Result<Vec<R>, Error>
    where
        A: QueryArgs,
        R: DeserializeOwned,
    {
        self.query(Mode::Write, database, cypher, arguments).await
    }

    /// Run a read-only query and return its rows as JSON objects.
    pub async fn query_read_json<A>(
        &self,
        database: &str,
        cypher: &str,
        arguments: &A,
    ) -> Result<Vec<JsonRow>, Error>
    where
        A: QueryArgs,
    {
        self.query(Mode::Read, database, cypher, arguments).await
    }

    /// Run a query that may modify the database and return its rows as
    /// JSON objects.
    pub async fn query_write_json<A>(
        &self,
        database: &str,
        cypher: &str,
        arguments: &A,
    ) -> Result<Vec<JsonRow>, Error>
    where
        A: QueryArgs,
    {
        self.query(Mode::Write, database, cypher, arguments).await
    }

    async fn query<R, A>(
        &self,
        mode: Mode,
        database: &str,
        cypher: &str,
        arguments: &A,
    ) -> Result<Vec<R>, Error>
    where
        A: QueryArgs,
        R: DeserializeOwned,
    {
        check_name(database)?;
        let body = encode_query(cypher, arguments)?;
        let url = self.endpoint(&["databases", database, mode.endpoint()])?;
        let response = self.send(HttpRequest::post(url, body)).await?;
        if !response.is_success() {
            return Err(query_status_error(&response, cypher));
        }
        decode_query_response(&response.body)
            .with_context(|| format!("cannot decode result of query on database {:?}", database))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.config.address().clone();
        url.path_segments_mut()
            .map_err(|()| InvalidArgumentError::with_message("address cannot be a base url"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let method = request.method;
        let url = request.url.clone();
        log::debug!("{} {}", method, url);
        if let Some(body) = &request.body {
            log::trace!("Request body: {}", String::from_utf8_lossy(body));
        }
        let timeout = self.config.timeout();
        let response = tokio::time::timeout(timeout, self.transport.send(request))
            .await
            .map_err(|_| {
                ClientConnectionError::with_message(format!(
                    "request timed out after {:?}",
                    timeout
                ))
            })??;
        if !response.is_success() {
            log::warn!("{} {} returned status {}", method, url, response.status);
        }
        Ok(response)
    }
}

fn check_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(InvalidArgumentError::with_message(
            "database name must not be empty",
        ));
    }
    Ok(())
}

fn encode_query<A: QueryArgs>(cypher: &str, arguments: &A) -> Result<Bytes, Error> {
    let parameters = arguments.to_parameters()?;
    let body = CypherQuery::new(cypher, parameters.as_ref()).encode()?;
    Ok(body)
}
