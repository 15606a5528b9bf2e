/*!
Binding of query parameters.

Parameters travel as a JSON object mapping each name to its tagged
[`Value`]. Anything that can produce such a mapping implements
[`QueryArgs`], so callers can bind their own types as well.
*/
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use graphdb_errors::{Error, ErrorKind, InvalidArgumentError};

use crate::value::Value;

/// A set of named query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Parameters(HashMap<String, Value>);

pub trait QueryArgs {
    /// Parameters to send with the query, `None` for a query without any.
    fn to_parameters(&self) -> Result<Option<Parameters>, Error>;
}

impl Parameters {
    pub fn new() -> Parameters {
        Parameters(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Parameters {
        Parameters(HashMap::with_capacity(capacity))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

impl Deref for Parameters {
    type Target = HashMap<String, Value>;
    fn deref(&self) -> &HashMap<String, Value> {
        &self.0
    }
}

impl DerefMut for Parameters {
    fn deref_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.0
    }
}

impl From<HashMap<String, Value>> for Parameters {
    fn from(map: HashMap<String, Value>) -> Parameters {
        Parameters(map)
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Parameters {
        Parameters(
            iter.into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }
}

fn check_names<'a>(mut names: impl Iterator<Item = &'a str>) -> Result<(), Error> {
    if names.any(|n| n.is_empty()) {
        return Err(InvalidArgumentError::with_message(
            "query parameter name must not be empty",
        ));
    }
    Ok(())
}

impl QueryArgs for () {
    fn to_parameters(&self) -> Result<Option<Parameters>, Error> {
        Ok(None)
    }
}

impl QueryArgs for Parameters {
    fn to_parameters(&self) -> Result<Option<Parameters>, Error> {
        check_names(self.0.keys().map(|k| k.as_str()))?;
        Ok(Some(self.clone()))
    }
}

impl QueryArgs for HashMap<String, Value> {
    fn to_parameters(&self) -> Result<Option<Parameters>, Error> {
        check_names(self.keys().map(|k| k.as_str()))?;
        Ok(Some(Parameters(self.clone())))
    }
}

impl QueryArgs for HashMap<&str, Value> {
    fn to_parameters(&self) -> Result<Option<Parameters>, Error> {
        check_names(self.keys().copied())?;
        Ok(Some(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        ))
    }
}

impl<T: QueryArgs> QueryArgs for Option<T> {
    fn to_parameters(&self) -> Result<Option<Parameters>, Error> {
        match self {
            Some(args) => args.to_parameters(),
            None => Ok(None),
        }
    }
}

impl<T: QueryArgs + ?Sized> QueryArgs for &T {
    fn to_parameters(&self) -> Result<Option<Parameters>, Error> {
        (**self).to_parameters()
    }
}

/// Constructs named query parameters that can be passed to any query
/// method.
/// ```
/// use graphdb_protocol::value::Value;
///
/// let params = graphdb_protocol::params! {
///     "name" => "Adam",
///     "age" => Value::Int64(30),
/// };
/// assert_eq!(params["age"], Value::Int64(30));
/// ```
///
/// The value side of a parameter must be `impl Into<Value>`.
/// The type of the returned object is [`Parameters`].
#[macro_export]
macro_rules! params {
    ($($key:expr => $value:expr,)+) => { $crate::params!($($key => $value),+) };
    ($($key:expr => $value:expr),*) => {
        {
            const CAP: usize = <[()]>::len(&[$({ stringify!($key); }),*]);
            let mut params = $crate::query_arg::Parameters::with_capacity(CAP);
            $(
                params.insert($key, $crate::value::Value::from($value));
            )*
            params
        }
    };
}
