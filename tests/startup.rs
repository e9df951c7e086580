mod common;

use common::{release_version_rows, FakeSession};
use cql_demo::schema::{ColumnDef, RowSet, Value};
use cql_demo::startup::{check_release_version, RELEASE_VERSION_QUERY};
use cql_demo::ShellError;

#[tokio::test]
async fn release_version_is_returned() {
    let session =
        FakeSession::new().with_result(RELEASE_VERSION_QUERY, release_version_rows("5.0.2"));
    let version = check_release_version(&session).await.unwrap();
    assert_eq!(version, "5.0.2");
    assert_eq!(session.executed(), vec![RELEASE_VERSION_QUERY.to_string()]);
}

#[tokio::test]
async fn failing_sanity_query_is_fatal() {
    let err = check_release_version(&FakeSession::new()).await.unwrap_err();
    assert!(matches!(err, ShellError::Execution(_)));
}

#[tokio::test]
async fn empty_or_null_version_is_fatal() {
    let empty = RowSet::new(vec![ColumnDef::new("release_version", "Text")]);
    let session = FakeSession::new().with_result(RELEASE_VERSION_QUERY, empty);
    let err = check_release_version(&session).await.unwrap_err();
    assert!(matches!(err, ShellError::MissingReleaseVersion));
    assert!(!err.is_recoverable());

    let mut null = RowSet::new(vec![ColumnDef::new("release_version", "Text")]);
    null.push_row(vec![Value::Null]);
    let session = FakeSession::new().with_result(RELEASE_VERSION_QUERY, null);
    assert!(matches!(
        check_release_version(&session).await,
        Err(ShellError::MissingReleaseVersion)
    ));
}

