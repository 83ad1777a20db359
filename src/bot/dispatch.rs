//! Command dispatch: permission gate, per-command connection, replies.

use ulid::Ulid;

use crate::bot::command::Command;
use crate::bot::connection::Connector;
use crate::bot::error::{CommandError, CommandResult};
use crate::bot::render;
use crate::bot::reply::Reply;
use crate::config::LeagueConfig;

/// Whoever issued a command, with the roles they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub name: String,
    pub roles: Vec<String>,
}

impl Invoker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Routes chat lines to league operations.
pub struct Dispatcher<C> {
    connector: C,
    prefix: char,
    moderator: String,
}

impl<C: Connector> Dispatcher<C> {
    pub fn new(connector: C, prefix: char, moderator: impl Into<String>) -> Self {
        Self {
            connector,
            prefix,
            moderator: moderator.into(),
        }
    }

    pub fn from_config(connector: C, config: &LeagueConfig) -> Self {
        Self::new(connector, config.prefix, config.moderator.clone())
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Handle one chat line.
    ///
    /// Returns `None` for lines that are not commands. Every failure is
    /// logged and turned into a `❌` reply here; nothing propagates.
    pub fn handle(&self, invoker: &Invoker, line: &str) -> Option<Reply> {
        let span = tracing::info_span!("command", id = %Ulid::new(), user = %invoker.name);
        let _guard = span.enter();

        match self.try_handle(invoker, line) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(kind = e.kind(), error = ?e, line, "command failed");
                Some(Reply::text(e.reply()))
            }
        }
    }

    fn try_handle(&self, invoker: &Invoker, line: &str) -> CommandResult<Option<Reply>> {
        let Some(command) = Command::parse(line, self.prefix)? else {
            return Ok(None);
        };

        if command.requires_moderator() && !invoker.has_role(&self.moderator) {
            return Err(CommandError::PermissionDenied {
                command: format!("{}{}", self.prefix, command.name()),
                role: self.moderator.clone(),
            });
        }

        tracing::debug!(command = command.name(), "dispatching");
        self.execute(&command).map(Some)
    }

    /// Run an already-authorized command.
    pub fn execute(&self, command: &Command) -> CommandResult<Reply> {
        match command {
            Command::Ping => Ok(render::pong()),
            Command::Help => Ok(render::help(self.prefix, &self.moderator)),
            _ => self.execute_with_store(command),
        }
    }

    fn execute_with_store(&self, command: &Command) -> CommandResult<Reply> {
        let connection = self.connector.connect()?;
        let league = connection.league();

        let reply = match command {
            Command::Champions => render::champions(&league.champion_board()?),
            Command::Roster { team } => {
                let (team, wrestlers) = league.roster_listing(team)?;
                render::roster(team, &wrestlers)
            }
            Command::FreeAgents => render::free_agents(&league.free_agent_listing()?),
            Command::Stats { wrestler } => render::stats(wrestler, &league.wrestler_history(wrestler)?),
            Command::NewChamp { title, winner, team } => {
                render::title_change(&league.crown(title, winner, team)?)
            }
            Command::AddDays { days } => render::days_added(*days, league.add_days(*days)?),
            Command::AddWrestler {
                name,
                team,
                show,
                gender,
            } => render::signing(&league.assign(name, team, show, gender)?),
            Command::RemoveWrestler { name, team } => render::release(&league.release(name, team)?),
            Command::AddFreeAgent { name, gender } => {
                render::free_agent_added(&league.add_free_agent(name, gender)?, gender)
            }
            Command::RemoveFreeAgent { name } => {
                render::free_agent_removed(&league.remove_free_agent(name)?)
            }
            Command::Sheets => render::sheets(&connection.workbook().title(), &league.sheet_names()?),
            Command::Ping => render::pong(),
            Command::Help => render::help(self.prefix, &self.moderator),
        };
        Ok(reply)
    }
}
