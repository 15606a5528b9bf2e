//! Graph database client for Tokio
//!
//! Main way to use the bindings is to use [`Client`]. Each method on the
//! client is a single HTTP request to the server: Cypher queries go to the
//! `read` or `write` endpoint of a database, and there are a few
//! administrative calls to list, create and delete databases.
//!
//! To create client, use [`create_client`] function (it gets configuration
//! from environment). You can also use [`Builder`] to
//! [`build`](`Builder::build`) custom [`Config`] and [create a
//! client](Client::new) using that config.
//!
//! # Example
//!
//! ```rust,no_run
//! use graphdb_tokio::params;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), graphdb_tokio::Error> {
//!     let client = graphdb_tokio::create_client().await?;
//!     let rows = client.query_read_json(
//!         "movies",
//!         "MATCH (p:Person {name: $name}) RETURN p.age AS age",
//!         &params! { "name" => "Adam" },
//!     ).await?;
//!     println!("{:?}", rows);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, missing_debug_implementations)]

mod builder;
mod client;
mod errors;
mod transport;

pub use graphdb_protocol::params;

pub use builder::{Builder, Config, DEFAULT_ADDRESS, DEFAULT_TIMEOUT};
pub use client::{Client, JsonRow};
pub use errors::Error;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};

/// Create a client with configuration from the environment
///
/// Settings are read by [`Builder::from_env`]. This function contacts the
/// server once to ensure that the configuration is valid and errors out
/// otherwise.
///
/// For more fine-grained setup see [`Client`] and [`Builder`] documentation
/// and the source of this function.
pub async fn create_client() -> Result<Client, Error> {
    let client = Client::new(&Builder::from_env()?.build()?)?;
    client.health().await?;
    Ok(client)
}
