//! Read-eval-print loop.
//!
//! ```text
//! Prompting -> AwaitingInput -> Dispatching -> Prompting ...
//!                   |
//!                   +-- "exit" / end of input --> Terminated
//! ```

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::command::{Dispatcher, Flow};
use crate::error::Result;
use crate::session::CqlSession;

pub const PROMPT: &str = "cql-demo> ";
pub const FAREWELL: &str = "Good Bye!";
pub const WELCOME: &str = "This is a CQL demo. \
See https://docs.datastax.com/en/cql/3.3/cql/cql_reference/cqlCommandsTOC.html \
for more info on CQL commands.\nType 'EXIT' to quit. Type 'HELP' to see available commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Prompting,
    AwaitingInput,
    Dispatching,
    Terminated,
}

pub struct Repl<S, W> {
    dispatcher: Dispatcher<S, W>,
    state: State,
}

impl<S: CqlSession, W: Write> Repl<S, W> {
    pub fn new(session: S, out: W) -> Self {
        Self {
            dispatcher: Dispatcher::new(session, out),
            state: State::Prompting,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_parts(self) -> (S, W) {
        self.dispatcher.into_parts()
    }

    fn prompt(&mut self, banner: Option<&str>) -> Result<()> {
        let out = self.dispatcher.out();
        if let Some(msg) = banner {
            writeln!(out)?;
            writeln!(out, "{msg}")?;
        }
        writeln!(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
        Ok(())
    }

    /// Drives the loop until `exit` or end of input. Read errors are returned
    /// as-is; the caller drops the session on the way out.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.prompt(Some(WELCOME))?;
        loop {
            self.state = State::AwaitingInput;
            let Some(line) = lines.next_line().await? else {
                debug!("end of input");
                break;
            };
            self.state = State::Dispatching;
            if self.dispatcher.dispatch_line(&line).await? == Flow::Exit {
                break;
            }
            self.state = State::Prompting;
            self.prompt(None)?;
        }
        self.state = State::Terminated;
        info!("session finished");
        let out = self.dispatcher.out();
        writeln!(out)?;
        writeln!(out, "{FAREWELL}")?;
        out.flush()?;
        Ok(())
    }
}
