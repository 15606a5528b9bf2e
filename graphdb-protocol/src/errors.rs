use snafu::{Backtrace, Snafu};

use graphdb_errors::{ClientEncodingError, Error, ErrorKind, ProtocolError};

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum EncodeError {
    #[snafu(display("cannot encode {} as json: {}", what, source))]
    Json {
        backtrace: Backtrace,
        what: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum DecodeError {
    #[snafu(display("invalid response json: {}", source))]
    InvalidJson {
        backtrace: Backtrace,
        source: serde_json::Error,
    },
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Error {
        ClientEncodingError::with_source(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Error {
        ProtocolError::with_source(e)
    }
}
