/*!
Value model and JSON wire encoding for the graph database HTTP protocol.

Queries are Cypher text plus named parameters. Each parameter is a
[`Value`](crate::value::Value), and every value and
[`LogicalType`](crate::logical_type::LogicalType) is written in serde's
externally tagged form (see [`encoding`]):

```rust
use graphdb_protocol::logical_type::LogicalType;
use graphdb_protocol::value::Value;

let v = Value::list(LogicalType::Int64, [Value::Int64(1), Value::Int64(2)]);
assert_eq!(
    serde_json::to_string(&v).unwrap(),
    r#"{"List":["Int64",[{"Int64":1},{"Int64":2}]]}"#,
);
```

The remaining modules cover the rest of the protocol:

* [query_arg]: named parameters ([`QueryArgs`](crate::query_arg::QueryArgs),
  [`params!`])
* [client_message]: request bodies
* [server_message]: response bodies, decoded straight into caller types
* [model]: graph and temporal payload types
*/

pub mod client_message;
pub mod encoding;
pub mod errors;
pub mod logical_type;
pub mod model;
#[macro_use]
pub mod query_arg;
pub mod server_message;
pub mod value;
