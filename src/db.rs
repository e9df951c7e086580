use async_trait::async_trait;
use scylla::{Session, SessionBuilder};
use scylla_cql::frame::response::result::{CqlValue, Row};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, ShellError};
use crate::schema::{ClusterMetadata, ColumnDef, KeyspaceMetadata, RowSet, Value};
use crate::session::CqlSession;

pub async fn connect(config: &Config) -> Result<Session> {
    let uri = config.contact_point();
    info!(%uri, "connecting to cluster");
    SessionBuilder::new()
        .known_node(&uri)
        .build()
        .await
        .map_err(|e| ShellError::Connect {
            contact_point: uri,
            message: e.to_string(),
        })
}

pub fn cql_value_to_value(v: &CqlValue) -> Value {
    match v {
        CqlValue::Boolean(b) => Value::Bool(*b),
        CqlValue::Int(i) => Value::Int(*i),
        CqlValue::BigInt(i) => Value::BigInt(*i),
        CqlValue::SmallInt(i) => Value::Int(i32::from(*i)),
        CqlValue::TinyInt(i) => Value::Int(i32::from(*i)),
        CqlValue::Counter(c) => Value::BigInt(c.0),
        CqlValue::Float(f) => Value::Float(*f),
        CqlValue::Double(f) => Value::Double(*f),
        CqlValue::Ascii(s) | CqlValue::Text(s) => Value::Text(s.clone()),
        CqlValue::Uuid(u) => Value::Text(u.to_string()),
        CqlValue::Timeuuid(u) => Value::Text(u.to_string()),
        CqlValue::Inet(addr) => Value::Text(addr.to_string()),
        CqlValue::Blob(bytes) => Value::Blob(bytes.clone()),
        CqlValue::List(items) => Value::List(items.iter().map(cql_value_to_value).collect()),
        CqlValue::Set(items) => Value::Set(items.iter().map(cql_value_to_value).collect()),
        CqlValue::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, v)| (cql_value_to_value(k), cql_value_to_value(v)))
                .collect(),
        ),
        CqlValue::Tuple(values) => Value::Tuple(values.iter().map(cell_to_value).collect()),
        _ => Value::Other(format!("{:?}", v)),
    }
}

fn cell_to_value(cell: &Option<CqlValue>) -> Value {
    cell.as_ref().map(cql_value_to_value).unwrap_or(Value::Null)
}

fn row_to_values(row: &Row, width: usize) -> Vec<Value> {
    (0..width)
        .map(|i| row.columns.get(i).map(cell_to_value).unwrap_or(Value::Null))
        .collect()
}

#[async_trait]
impl CqlSession for Session {
    async fn execute(&self, query: &str) -> Result<RowSet> {
        debug!(%query, "executing");
        let result = self
            .query_unpaged(query, &[])
            .await
            .map_err(|e| ShellError::Execution(e.to_string()))?;
        let columns: Vec<ColumnDef> = result
            .col_specs()
            .iter()
            .map(|spec| ColumnDef::new(spec.name.clone(), format!("{:?}", spec.typ)))
            .collect();
        let width = columns.len();
        let mut rows = RowSet::new(columns);
        for row in result.rows_or_empty().iter() {
            rows.push_row(row_to_values(row, width));
        }
        Ok(rows)
    }

    async fn metadata(&self) -> Result<ClusterMetadata> {
        self.refresh_metadata()
            .await
            .map_err(|e| ShellError::Metadata(e.to_string()))?;
        let cluster = self.get_cluster_data();
        Ok(cluster
            .get_keyspace_info()
            .iter()
            .map(|(name, ks)| KeyspaceMetadata::new(name.clone(), ks.tables.keys().cloned()))
            .collect())
    }

    fn current_keyspace(&self) -> Option<String> {
        self.get_keyspace().map(|ks| ks.as_str().to_string())
    }
}
