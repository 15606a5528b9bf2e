//! Request bodies sent to the server.
use bytes::Bytes;
use serde::Serialize;
use snafu::ResultExt;

use crate::errors::{self, EncodeError};
use crate::query_arg::Parameters;

/// Body of the `read` and `write` query endpoints.
///
/// `parameters` is written as `null` when the query has none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CypherQuery<'a> {
    pub cypher: &'a str,
    pub parameters: Option<&'a Parameters>,
}

/// Body of the database creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDatabase {
    pub name: String,
    pub in_memory: bool,
}

impl<'a> CypherQuery<'a> {
    pub fn new(cypher: &'a str, parameters: Option<&'a Parameters>) -> CypherQuery<'a> {
        CypherQuery { cypher, parameters }
    }

    pub fn encode(&self) -> Result<Bytes, EncodeError> {
        encode_body("query", self)
    }
}

impl CreateDatabase {
    pub fn new(name: impl Into<String>) -> CreateDatabase {
        CreateDatabase {
            name: name.into(),
            in_memory: false,
        }
    }

    pub fn encode(&self) -> Result<Bytes, EncodeError> {
        encode_body("database definition", self)
    }
}

fn encode_body<T: Serialize>(what: &'static str, body: &T) -> Result<Bytes, EncodeError> {
    serde_json::to_vec(body)
        .map(Bytes::from)
        .context(errors::JsonSnafu { what })
}
