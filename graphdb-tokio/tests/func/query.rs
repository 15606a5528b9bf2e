use std::collections::HashMap;
use std::time::Duration;

use graphdb_errors::fields::{QueryText, ResponseBody, StatusCode};
use graphdb_errors::{ClientConnectionError, ClientEncodingError, HttpStatusError, ProtocolError};
use graphdb_errors::InvalidArgumentError;
use graphdb_protocol::logical_type::LogicalType;
use graphdb_protocol::value::Value;
use graphdb_tokio::{params, Builder, Client, Method};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mock::{client, MockTransport};

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Person {
    name: String,
    age: i64,
}

#[test_log::test(tokio::test)]
async fn read_with_parameters() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"result": [{"name": "Adam", "age": 30}]}"#);

    let mut args = HashMap::new();
    args.insert("name", Value::from("Adam"));
    args.insert("age", Value::Int64(30));
    let rows: Vec<Person> = client(&transport)
        .query_read(
            "people",
            "MATCH (p:Person {name: $name, age: $age}) RETURN p.name AS name, p.age AS age",
            &args,
        )
        .await
        .unwrap();
    assert_eq!(
        rows,
        vec![Person {
            name: "Adam".into(),
            age: 30
        }]
    );

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.url.as_str(),
        "http://graph.test:8080/databases/people/read"
    );
    assert_eq!(
        transport.last_body()["parameters"],
        json!({"name": {"String": "Adam"}, "age": {"Int64": 30}})
    );
}

#[test_log::test(tokio::test)]
async fn write_without_parameters() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"result": []}"#);
    let rows = client(&transport)
        .query_write_json("people", "CREATE (:Person {name: 'Eve'})", &())
        .await
        .unwrap();
    assert!(rows.is_empty());

    assert_eq!(
        transport.requests()[0].url.as_str(),
        "http://graph.test:8080/databases/people/write"
    );
    assert_eq!(
        transport.last_body(),
        json!({"cypher": "CREATE (:Person {name: 'Eve'})", "parameters": null})
    );
}

#[test_log::test(tokio::test)]
async fn untyped_rows() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"result": [{"n": 1}, {"n": 2}]}"#);
    let rows = client(&transport)
        .query_read_json("db", "UNWIND [1, 2] AS n RETURN n", &())
        .await
        .unwrap();
    let values: Vec<_> = rows.iter().map(|r| r["n"].clone()).collect();
    assert_eq!(values, vec![json!(1), json!(2)]);
}

#[test_log::test(tokio::test)]
async fn typed_container_parameters() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"result": []}"#);
    let args = params! {
        "tags" => Value::list(LogicalType::String, [Value::from("a")]),
        "missing" => Value::null(LogicalType::Int64),
    };
    client(&transport)
        .query_write_json("db", "RETURN $tags, $missing", &args)
        .await
        .unwrap();
    assert_eq!(
        transport.last_body()["parameters"],
        json!({
            "tags": {"List": ["String", [{"String": "a"}]]},
            "missing": {"Null": "Int64"},
        })
    );
}

#[test_log::test(tokio::test)]
async fn malformed_query() {
    let transport = MockTransport::new();
    let server_text = concat!(
        "Parser exception: Invalid input <MATCH (n RETURN>: ",
        "expected rule oC_SingleQuery",
    );
    transport.respond(500, server_text);
    let err = client(&transport)
        .query_read_json("db", "MATCH (n RETURN n", &())
        .await
        .unwrap_err();

    assert!(err.is::<HttpStatusError>());
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains(server_text), "{message}");
    assert_eq!(
        err.initial_message(),
        Some(format!("unexpected status code: 500 {:?}", server_text).as_str())
    );
    assert_eq!(err.get::<StatusCode>(), Some(&500));
    assert_eq!(
        err.get::<ResponseBody>().map(|s| s.as_str()),
        Some(server_text)
    );
    assert_eq!(
        err.get::<QueryText>().map(|s| s.as_str()),
        Some("MATCH (n RETURN n")
    );
}

#[test_log::test(tokio::test)]
async fn result_shape_mismatch() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"result": [{"name": "Adam"}]}"#);
    let err = client(&transport)
        .query_read::<Person, _>("db", "MATCH (p) RETURN p.name AS name", &())
        .await
        .unwrap_err();
    assert!(err.is::<ProtocolError>());
    assert!(
        err.to_string()
            .contains(r#"cannot decode result of query on database "db""#),
        "{err}"
    );
}

#[test_log::test(tokio::test)]
async fn invalid_parameter_name() {
    let transport = MockTransport::new();
    let args = params! { "" => 1i64 };
    let err = client(&transport)
        .query_read_json("db", "RETURN 1", &args)
        .await
        .unwrap_err();
    assert!(err.is::<InvalidArgumentError>());
    assert!(!err.is::<ClientEncodingError>());
    assert!(transport.requests().is_empty());
}

#[test_log::test(tokio::test)]
async fn non_finite_parameter() {
    let transport = MockTransport::new();
    let args = params! { "x" => f64::INFINITY };
    let err = client(&transport)
        .query_write_json("db", "CREATE (:N {x: $x})", &args)
        .await
        .unwrap_err();
    assert!(err.is::<ClientEncodingError>());
    assert!(transport.requests().is_empty());
}

#[test_log::test(tokio::test)]
async fn timeout() {
    let transport = MockTransport::slow(Duration::from_millis(500));
    transport.respond(200, r#"{"result": []}"#);
    let config = Builder::new()
        .timeout(Duration::from_millis(20))
        .build()
        .unwrap();
    let client = Client::with_transport(&config, transport.clone());
    let err = client
        .query_read_json("db", "RETURN 1", &())
        .await
        .unwrap_err();
    assert!(err.is::<ClientConnectionError>());
}
