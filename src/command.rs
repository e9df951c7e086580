use std::io::Write;

use tracing::{debug, info_span, warn, Instrument};

use crate::error::Result;
use crate::render;
use crate::session::CqlSession;

pub const HELP: &str = "\
Available commands:

DESCRIBE KEYSPACES
\t-List of all keyspace names on the cluster.

DESCRIBE TABLES
\t-List of tables in the current keyspace or all tables in the cluster when no keyspace is selected.

SELECT <args>
\t-Retrieve data from a Cassandra table

See https://docs.datastax.com/en/cql/3.3/cql/cql_reference/cqlSelect.html for details on SELECT.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    DescribeKeyspaces,
    DescribeTables,
    DescribeUnknown(String),
    Help,
    Query(String),
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

impl Command {
    /// Classifies on the trimmed line; queries keep the line exactly as typed.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            Command::Exit
        } else if starts_with_ignore_case(trimmed, "describe") {
            let target = trimmed["describe".len()..].trim();
            if starts_with_ignore_case(target, "keyspaces") {
                Command::DescribeKeyspaces
            } else if starts_with_ignore_case(target, "tables") {
                Command::DescribeTables
            } else {
                Command::DescribeUnknown(target.to_string())
            }
        } else if starts_with_ignore_case(trimmed, "help") {
            Command::Help
        } else {
            Command::Query(line.to_string())
        }
    }
}

/// What the loop should do after a command has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Routes commands to the session and writes their results to `out`.
pub struct Dispatcher<S, W> {
    session: S,
    out: W,
}

impl<S: CqlSession, W: Write> Dispatcher<S, W> {
    pub fn new(session: S, out: W) -> Self {
        Self { session, out }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_parts(self) -> (S, W) {
        (self.session, self.out)
    }

    pub async fn dispatch_line(&mut self, line: &str) -> Result<Flow> {
        self.dispatch(Command::parse(line)).await
    }

    /// Only I/O failures on `out` escape; session errors are printed and swallowed.
    pub async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "dispatching");
        let outcome = match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Help => {
                writeln!(self.out)?;
                writeln!(self.out, "{HELP}")?;
                Ok(())
            }
            Command::DescribeKeyspaces => self.describe_keyspaces().await,
            Command::DescribeTables => self.describe_tables().await,
            Command::DescribeUnknown(target) => {
                writeln!(self.out)?;
                writeln!(self.out, "Describe target not implemented: '{target}'")?;
                Ok(())
            }
            Command::Query(query) => self.execute(&query).await,
        };
        match outcome {
            Err(err) if err.is_recoverable() => {
                warn!(error = %err, "command failed");
                writeln!(self.out, "{err}")?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err),
            Ok(()) => Ok(Flow::Continue),
        }
    }

    async fn describe_keyspaces(&mut self) -> Result<()> {
        let meta = self.session.metadata().await?;
        render::render_keyspaces(&mut self.out, &meta)?;
        Ok(())
    }

    async fn describe_tables(&mut self) -> Result<()> {
        let meta = self.session.metadata().await?;
        match self.session.current_keyspace() {
            Some(current) => match meta.keyspace(&current) {
                Some(keyspace) => render::render_keyspace_tables(&mut self.out, keyspace)?,
                None => {
                    writeln!(self.out)?;
                    writeln!(self.out, "Keyspace '{current}' not found in cluster metadata")?;
                }
            },
            None => render::render_all_tables(&mut self.out, &meta)?,
        }
        Ok(())
    }

    async fn execute(&mut self, query: &str) -> Result<()> {
        let rows = self
            .session
            .execute(query)
            .instrument(info_span!("query", %query))
            .await?;
        debug!(rows = rows.rows.len(), "query returned");
        render::render_rows(&mut self.out, &rows)?;
        Ok(())
    }
}
