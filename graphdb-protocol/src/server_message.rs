//! Response bodies received from the server.
//!
//! Query results are decoded straight into the caller's type by field
//! name. They never go through [`Value`](crate::value::Value).
use serde::de::DeserializeOwned;
use serde::Deserialize;
use snafu::ResultExt;

use graphdb_errors::Error;

use crate::errors::{self, DecodeError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseList {
    pub databases: Vec<String>,
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).context(errors::InvalidJsonSnafu)
}

/// Decode the rows of a query response.
pub fn decode_query_response<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, Error> {
    let response: QueryResponse<T> = decode(body)?;
    Ok(response.result)
}

pub fn decode_database_list(body: &[u8]) -> Result<Vec<String>, Error> {
    let list: DatabaseList = decode(body)?;
    Ok(list.databases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphdb_errors::ProtocolError;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Person {
        name: String,
        age: i64,
    }

    #[test]
    fn typed_rows() {
        let rows: Vec<Person> =
            decode_query_response(br#"{"result": [{"name": "Adam", "age": 30}]}"#).unwrap();
        assert_eq!(
            rows,
            vec![Person {
                name: "Adam".into(),
                age: 30
            }]
        );
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let err = decode_query_response::<Person>(br#"{"result": [{"name": "Adam"}]}"#)
            .unwrap_err();
        assert!(err.is::<ProtocolError>());
    }

    #[test]
    fn missing_result_is_an_error() {
        let err = decode_query_response::<Person>(b"{}").unwrap_err();
        assert!(err.is::<ProtocolError>());
    }

    #[test]
    fn database_list() {
        let names = decode_database_list(br#"{"databases": ["a", "b"]}"#).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }
}
