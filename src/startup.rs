use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::error::{Result, ShellError};
use crate::schema::Value;
use crate::session::CqlSession;

pub const RELEASE_VERSION_QUERY: &str = "SELECT release_version FROM system.local";

/// Logs go to stderr so they never interleave with the shell's own output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Sanity query run once before the prompt; any failure here is fatal.
pub async fn check_release_version<S: CqlSession>(session: &S) -> Result<String> {
    let rows = session.execute(RELEASE_VERSION_QUERY).await?;
    let version = match rows.first_value() {
        Some(Value::Null) | None => return Err(ShellError::MissingReleaseVersion),
        Some(v) => v.to_string(),
    };
    info!(%version, "cluster release version");
    Ok(version)
}
