use async_trait::async_trait;

use crate::error::Result;
use crate::schema::{ClusterMetadata, RowSet};

/// Live connection to the cluster. The shell only ever needs these three calls;
/// everything below them (protocol, pooling, retries) is the driver's business.
#[async_trait]
pub trait CqlSession: Send + Sync {
    /// Runs `query` exactly as typed. Failures come back as `ShellError::Execution`.
    async fn execute(&self, query: &str) -> Result<RowSet>;

    /// Fresh snapshot of keyspaces and their tables.
    async fn metadata(&self) -> Result<ClusterMetadata>;

    /// Keyspace selected by the last `USE`, if any.
    fn current_keyspace(&self) -> Option<String>;
}
