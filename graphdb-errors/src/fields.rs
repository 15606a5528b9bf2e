use crate::traits::Field;

/// HTTP status returned by the server alongside an error.
pub struct StatusCode;

impl Field for StatusCode {
    const NAME: &'static str = "status_code";
    type Value = u16;
}

/// Verbatim body of a failed response.
pub struct ResponseBody;

impl Field for ResponseBody {
    const NAME: &'static str = "response_body";
    type Value = String;
}

/// Cypher text of the query that failed.
pub struct QueryText;

impl Field for QueryText {
    const NAME: &'static str = "query_text";
    type Value = String;
}
