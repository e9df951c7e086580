use anyhow::Context;
use cql_demo::{db, startup, Config, Repl};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    startup::init_tracing();
    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let config = Config::from_env().context("invalid cluster contact point")?;
    let session = db::connect(&config)
        .await
        .context("failed to create cluster session")?;
    startup::check_release_version(&session)
        .await
        .context("startup sanity query failed")?;

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout().lock();
    let mut repl = Repl::new(session, stdout);
    repl.run(stdin).await?;
    Ok(())
}
