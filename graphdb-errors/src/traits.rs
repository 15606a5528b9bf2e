use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;

use crate::Error;

/// Trait that marks graph database errors
///
/// Currently sealed, because the set of error kinds is fixed by the client
pub trait ErrorKind: Sealed {
    fn with_message<S: Into<Cow<'static, str>>>(s: S) -> Error {
        Self::build().context(s)
    }
    fn with_source<E: StdError + Send + Sync + 'static>(src: E) -> Error {
        Self::build().with_source_box(Box::new(src))
    }
    fn with_source_box(src: Box<dyn StdError + Send + Sync>) -> Error {
        Self::build().with_source_box(src)
    }
    fn build() -> Error {
        Error::from_code(Self::CODE)
    }
}

pub trait Sealed {
    const CODE: u32;
    const NAME: &'static str;
    const TAGS: u32;
    fn is_superclass_of(code: u32) -> bool;
}

/// A typed piece of data attached to an [`Error`]
pub trait Field {
    const NAME: &'static str;
    type Value: Any + Send + Sync;
}

/// Adds context to errors already converted into [`Error`]
pub trait ResultExt<T> {
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Into<Cow<'static, str>>;
    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Into<Cow<'static, str>>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn context<C>(self, context: C) -> Result<T, Error>
    where
        C: Into<Cow<'static, str>>,
    {
        self.map_err(|e| e.context(context))
    }
    fn with_context<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Into<Cow<'static, str>>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}
