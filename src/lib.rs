pub mod command;
pub mod config;
#[cfg(feature = "driver")]
pub mod db;
pub mod error;
pub mod render;
pub mod repl;
pub mod schema;
pub mod session;
pub mod startup;

pub use command::{Command, Dispatcher, Flow};
pub use config::Config;
pub use error::{Result, ShellError};
pub use repl::Repl;
pub use session::CqlSession;

