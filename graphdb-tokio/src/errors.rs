pub use graphdb_errors::*;
