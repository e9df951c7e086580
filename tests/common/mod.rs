#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cql_demo::schema::{ClusterMetadata, ColumnDef, KeyspaceMetadata, RowSet, Value};
use cql_demo::{CqlSession, Result, ShellError};

/// In-memory stand-in for a cluster session.
#[derive(Default)]
pub struct FakeSession {
    pub metadata: ClusterMetadata,
    pub keyspace: Option<String>,
    pub results: HashMap<String, RowSet>,
    pub executed: Mutex<Vec<String>>,
    pub metadata_calls: Mutex<usize>,
    pub fail_metadata: bool,
}

impl FakeSession {
    pub fn new() -> Self {
        Self {
            metadata: demo_metadata(),
            ..Default::default()
        }
    }

    pub fn with_keyspace(mut self, ks: &str) -> Self {
        self.keyspace = Some(ks.to_string());
        self
    }

    pub fn with_result(mut self, query: &str, rows: RowSet) -> Self {
        self.results.insert(query.to_string(), rows);
        self
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl CqlSession for FakeSession {
    async fn execute(&self, query: &str) -> Result<RowSet> {
        self.executed.lock().unwrap().push(query.to_string());
        self.results
            .get(query)
            .cloned()
            .ok_or_else(|| ShellError::Execution(format!("line 1:0 no viable alternative at input '{query}'")))
    }

    async fn metadata(&self) -> Result<ClusterMetadata> {
        *self.metadata_calls.lock().unwrap() += 1;
        if self.fail_metadata {
            return Err(ShellError::Metadata("control connection unavailable".into()));
        }
        Ok(self.metadata.clone())
    }

    fn current_keyspace(&self) -> Option<String> {
        self.keyspace.clone()
    }
}

pub fn demo_metadata() -> ClusterMetadata {
    [
        KeyspaceMetadata::new("system", ["local", "peers"]),
        KeyspaceMetadata::new("demo", ["users", "events"]),
    ]
    .into_iter()
    .collect()
}

pub fn release_version_rows(version: &str) -> RowSet {
    let mut rows = RowSet::new(vec![ColumnDef::new("release_version", "Text")]);
    rows.push_row(vec![Value::Text(version.to_string())]);
    rows
}
