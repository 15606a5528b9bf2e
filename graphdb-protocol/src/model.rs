//! Data types carried by [`Value`](crate::value::Value) variants.
mod graph;
pub mod time;

pub use self::graph::{InternalId, Node, RecursiveRel, Rel};
pub use bigdecimal::BigDecimal;
pub use bytes::Bytes;
pub use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
pub use uuid::Uuid;
