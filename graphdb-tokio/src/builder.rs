use std::env;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::errors::{ClientError, Error, ErrorKind, InvalidArgumentError};

/// Address used when neither the builder nor the environment sets one.
pub const DEFAULT_ADDRESS: &str = "http://localhost:8080";
/// Upper bound on a single request round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A builder used to create connections.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    address: Option<String>,
    timeout: Option<Duration>,
}

/// Configuration of the client
///
/// Use [`Builder`][] to create an instance
#[derive(Clone)]
pub struct Config(pub(crate) Arc<ConfigInner>);

#[derive(Debug)]
pub(crate) struct ConfigInner {
    pub address: Url,
    pub timeout: Duration,
}

fn get_env(name: &str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(v) if v.is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ClientError::with_source(e)
            .context(format!("Cannot decode environment variable {:?}", name))),
    }
}

impl Builder {
    /// Create an empty builder, every setting at its default.
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Create a builder with settings read from the environment.
    ///
    /// `GRAPHDB_ADDRESS` sets the server address and `GRAPHDB_TIMEOUT` the
    /// request timeout in whole seconds. Unset or empty variables are
    /// ignored.
    pub fn from_env() -> Result<Builder, Error> {
        let mut builder = Builder::new();
        builder.read_vars(get_env)?;
        Ok(builder)
    }

    fn read_vars<F>(&mut self, get: F) -> Result<&mut Self, Error>
    where
        F: Fn(&str) -> Result<Option<String>, Error>,
    {
        if let Some(address) = get("GRAPHDB_ADDRESS")? {
            self.address(address);
        }
        if let Some(timeout) = get("GRAPHDB_TIMEOUT")? {
            let secs: u64 = timeout.parse().map_err(|e| {
                InvalidArgumentError::with_source(e).context("cannot parse env var GRAPHDB_TIMEOUT")
            })?;
            self.timeout(Duration::from_secs(secs));
        }
        Ok(self)
    }

    /// Set the base URL of the server, e.g. `http://localhost:8080`.
    pub fn address(&mut self, address: impl Into<String>) -> &mut Self {
        self.address = Some(address.into());
        self
    }

    /// Set the maximum duration of a single request.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the settings and build the configuration object.
    pub fn build(&self) -> Result<Config, Error> {
        let raw = self.address.as_deref().unwrap_or(DEFAULT_ADDRESS);
        let address = Url::parse(raw).map_err(|e| {
            InvalidArgumentError::with_source(e).context(format!("invalid address {:?}", raw))
        })?;
        if !matches!(address.scheme(), "http" | "https") {
            return Err(InvalidArgumentError::with_message(format!(
                "unsupported address scheme {:?}, expected http or https",
                address.scheme()
            )));
        }
        if address.cannot_be_a_base() {
            return Err(InvalidArgumentError::with_message(format!(
                "address {:?} cannot be used as a base url",
                raw
            )));
        }
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(InvalidArgumentError::with_message(
                "timeout must be greater than zero",
            ));
        }
        Ok(Config(Arc::new(ConfigInner { address, timeout })))
    }
}

impl Config {
    /// Base URL of the server.
    pub fn address(&self) -> &Url {
        &self.0.address
    }

    /// Maximum duration of a single request.
    pub fn timeout(&self) -> Duration {
        self.0.timeout
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.0.address.as_str())
            .field("timeout", &self.0.timeout)
            .finish()
    }
}
