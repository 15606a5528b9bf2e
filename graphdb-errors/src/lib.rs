/*!
# Error Handling for the graph database client

All errors that the client produces are encapsulated into the [`Error`]
structure. The structure is a bit like `Box<dyn Error>`, except it carries a
kind code, so callers can tell apart a server rejecting a query from a request
that never reached it.

Each error kind is represented as a separate type that implements the
[`ErrorKind`] trait. Error kinds are used like marker structs; use
[`Error::is`] to check the kind and the kind's constructors to create
instances:

```rust
# use std::io;
# use graphdb_errors::{ClientConnectionError, ErrorKind};
let err = ClientConnectionError::with_source(io::Error::from(io::ErrorKind::NotFound));
assert!(err.is::<ClientConnectionError>());
```

Since errors are hierarchical, [`Error::is`] works with any ancestor:

```rust
# use graphdb_errors::*;
let err = ClientEncodingError::with_message("test error");
assert!(err.is::<ClientEncodingError>());
assert!(err.is::<InterfaceError>());  // implied by the assertion above
assert!(err.is::<ClientError>());  // and this one
```

Non-2xx responses from the server are reported as [`HttpStatusError`]. The
status code and the verbatim response body are attached as
[fields](crate::fields):

```rust
# use graphdb_errors::*;
# use graphdb_errors::fields::StatusCode;
let err = HttpStatusError::with_message("unexpected status code: 500")
    .set::<StatusCode>(500u16);
assert_eq!(err.get::<StatusCode>(), Some(&500));
```
*/
mod error;
mod traits;

pub mod display;
pub mod fields;
pub mod kinds;

pub use error::{Error, Tag};
pub use kinds::*;
pub use traits::{ErrorKind, Field, ResultExt};
