//! Per-command store connections.
//!
//! Every command opens its own connection and drops it when the reply is
//! built. No workbook handle outlives a command.

use std::time::Instant;

use ulid::Ulid;

use crate::bot::error::{CommandError, CommandResult};
use crate::config::LeagueConfig;
use crate::league::League;
use crate::sheet::Workbook;
use crate::storage::{GitWorkbook, StorageResult};

/// An open workbook handle scoped to one command.
pub struct Connection {
    id: Ulid,
    book: Box<dyn Workbook>,
    opened: Instant,
}

impl Connection {
    pub fn new(book: Box<dyn Workbook>) -> Self {
        let id = Ulid::new();
        tracing::debug!(connection = %id, "connection opened");
        Self {
            id,
            book,
            opened: Instant::now(),
        }
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn workbook(&self) -> &dyn Workbook {
        self.book.as_ref()
    }

    pub fn league(&self) -> League<'_> {
        League::new(self.book.as_ref())
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        tracing::debug!(
            connection = %self.id,
            elapsed_ms = self.opened.elapsed().as_millis() as u64,
            "connection closed"
        );
    }
}

/// Opens a fresh [`Connection`] for each command.
pub trait Connector {
    fn connect(&self) -> CommandResult<Connection>;
}

/// Opens the git-backed workbook named in the configuration.
#[derive(Debug, Clone)]
pub struct GitConnector {
    config: LeagueConfig,
}

impl GitConnector {
    pub fn new(config: LeagueConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// Open the workbook directly, outside any command.
    pub fn open(&self) -> StorageResult<GitWorkbook> {
        if self.config.create_if_missing {
            GitWorkbook::open_or_init(&self.config.path)
        } else {
            GitWorkbook::open(&self.config.path)
        }
    }
}

impl Connector for GitConnector {
    fn connect(&self) -> CommandResult<Connection> {
        let book = self.open().map_err(CommandError::Connect)?;
        Ok(Connection::new(Box::new(book)))
    }
}
