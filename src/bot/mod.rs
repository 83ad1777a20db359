//! Chat command front-end.
//!
//! A line of chat goes through four steps:
//!
//! 1. [`Command::parse`] tokenizes it (double quotes group words) and
//!    checks the argument count.
//! 2. [`Dispatcher`] rejects state-changing commands from anyone without
//!    the moderator role.
//! 3. The dispatcher opens a [`Connection`] for this command only and runs
//!    the matching [`League`](crate::league::League) operation.
//! 4. The result, or the error, is rendered into a [`Reply`].
//!
//! The [`Repl`] drives the same dispatcher from a terminal.

mod command;
mod connection;
mod dispatch;
mod error;
mod render;
mod reply;
mod repl;
mod tokenize;

pub use command::{Command, CommandInfo, COMMANDS};
pub use connection::{Connection, Connector, GitConnector};
pub use dispatch::{Dispatcher, Invoker};
pub use error::{CommandError, CommandResult};
pub use reply::{Embed, Field, Reply};
pub use repl::{format_change, AuditLog, Repl, ReplConfig};
pub use tokenize::{split_command, tokenize};
