#![cfg(feature = "driver")]

use cql_demo::{db, startup, Config, CqlSession, Dispatcher};

async fn live_session() -> Option<scylla::Session> {
    if std::env::var("SCYLLA_URI").is_err() {
        eprintln!("SCYLLA_URI not set; skipping live integration test");
        return None;
    }
    let config = Config::from_env().expect("bad SCYLLA_URI");
    Some(db::connect(&config).await.expect("connect failed"))
}

#[tokio::test]
#[ignore]
async fn release_version_live() {
    let Some(session) = live_session().await else { return };
    let version = startup::check_release_version(&session)
        .await
        .expect("sanity query failed");
    assert!(!version.is_empty());
}

#[tokio::test]
#[ignore]
async fn metadata_lists_system_keyspaces_live() {
    let Some(session) = live_session().await else { return };
    let meta = session.metadata().await.expect("metadata failed");
    assert!(meta.keyspace("system").is_some());
    assert!(meta.keyspace("system_schema").is_some());
}

#[tokio::test]
#[ignore]
async fn use_sets_current_keyspace_live() {
    let Some(session) = live_session().await else { return };
    let mut d = Dispatcher::new(session, Vec::new());
    d.dispatch_line("USE system_schema").await.unwrap();
    assert_eq!(d.session().current_keyspace().as_deref(), Some("system_schema"));
    d.dispatch_line("describe tables").await.unwrap();
    let (_, out) = d.into_parts();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Keyspace system_schema"));
    assert!(out.contains("\ntables\n"));
}

#[tokio::test]
#[ignore]
async fn bad_query_reports_error_live() {
    let Some(session) = live_session().await else { return };
    let mut d = Dispatcher::new(session, Vec::new());
    d.dispatch_line("SELEC nope").await.unwrap();
    let (_, out) = d.into_parts();
    assert!(String::from_utf8(out).unwrap().starts_with("query execution failed"));
}
