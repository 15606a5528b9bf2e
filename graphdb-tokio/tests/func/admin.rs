use graphdb_errors::fields::StatusCode;
use graphdb_errors::{ClientConnectionError, ErrorKind, HttpStatusError, InvalidArgumentError};
use graphdb_errors::{ProtocolError, SHOULD_RETRY};
use graphdb_tokio::Method;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mock::{client, MockTransport};

#[test_log::test(tokio::test)]
async fn health() {
    let transport = MockTransport::new();
    transport.respond(200, "");
    assert!(client(&transport).health().await.unwrap());

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url.as_str(), "http://graph.test:8080/health");
    assert_eq!(requests[0].body, None);
}

#[test_log::test(tokio::test)]
async fn unhealthy() {
    let transport = MockTransport::new();
    transport.respond(503, "starting up");
    let err = client(&transport).health().await.unwrap_err();
    assert!(err.is::<HttpStatusError>());
    assert_eq!(err.initial_message(), Some("unexpected status code: 503"));
    assert_eq!(err.get::<StatusCode>(), Some(&503));
}

#[test_log::test(tokio::test)]
async fn connection_failure() {
    let transport = MockTransport::new();
    transport.fail(ClientConnectionError::with_message("connection refused"));
    let err = client(&transport).health().await.unwrap_err();
    assert!(err.is::<ClientConnectionError>());
    assert!(err.has_tag(SHOULD_RETRY));
}

#[test_log::test(tokio::test)]
async fn databases() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"databases": ["movies", "people"]}"#);
    let names = client(&transport).databases().await.unwrap();
    assert_eq!(names, vec!["movies", "people"]);
    assert_eq!(
        transport.requests()[0].url.as_str(),
        "http://graph.test:8080/databases"
    );
}

#[test_log::test(tokio::test)]
async fn databases_bad_json() {
    let transport = MockTransport::new();
    transport.respond(200, r#"{"dbs": []}"#);
    let err = client(&transport).databases().await.unwrap_err();
    assert!(err.is::<ProtocolError>());
}

#[test_log::test(tokio::test)]
async fn create_database() {
    let transport = MockTransport::new();
    transport.respond(201, "");
    client(&transport).create_database("movies").await.unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url.as_str(), "http://graph.test:8080/databases");
    assert_eq!(
        transport.last_body(),
        json!({"name": "movies", "in_memory": false})
    );
}

#[test_log::test(tokio::test)]
async fn create_database_conflict() {
    let transport = MockTransport::new();
    transport.respond(409, "already exists");
    let err = client(&transport)
        .create_database("movies")
        .await
        .unwrap_err();
    assert!(err.is::<HttpStatusError>());
    assert_eq!(err.initial_message(), Some("unexpected status code: 409"));
}

#[test_log::test(tokio::test)]
async fn delete_database_escapes_name() {
    let transport = MockTransport::new();
    transport.respond(200, "");
    client(&transport)
        .delete_database("my db/1")
        .await
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(
        request.url.as_str(),
        "http://graph.test:8080/databases/my%20db%2F1"
    );
}

#[test_log::test(tokio::test)]
async fn empty_database_name() {
    let transport = MockTransport::new();
    let err = client(&transport).delete_database("").await.unwrap_err();
    assert!(err.is::<InvalidArgumentError>());
    assert!(transport.requests().is_empty());
}
