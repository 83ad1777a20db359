//! Interactive REPL (Read-Eval-Print Loop) for beltkeeper.
//!
//! Lines starting with the command prefix are handled exactly as chat
//! messages would be. Lines starting with `.` are REPL meta commands.

use std::io::{self, BufRead, Write};

use crate::bot::connection::{Connector, GitConnector};
use crate::bot::dispatch::{Dispatcher, Invoker};
use crate::storage::{CommitInfo, StorageResult};

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string.
    pub prompt: String,
    /// Show timing information.
    pub timing: bool,
    /// Default number of entries shown by `.log`.
    pub log_limit: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "beltkeeper> ".into(),
            timing: false,
            log_limit: 10,
        }
    }
}

/// Source of the store audit trail shown by `.log`.
pub trait AuditLog {
    fn recent_changes(&self, limit: usize) -> StorageResult<Vec<CommitInfo>>;
}

impl AuditLog for GitConnector {
    fn recent_changes(&self, limit: usize) -> StorageResult<Vec<CommitInfo>> {
        self.open()?.recent_changes(limit)
    }
}

/// The interactive REPL.
pub struct Repl<C> {
    dispatcher: Dispatcher<C>,
    invoker: Invoker,
    config: ReplConfig,
    history: Vec<String>,
}

impl<C: Connector + AuditLog> Repl<C> {
    /// Create a new REPL acting as `invoker`.
    pub fn new(dispatcher: Dispatcher<C>, invoker: Invoker) -> Self {
        Self::with_config(dispatcher, invoker, ReplConfig::default())
    }

    /// Create a REPL with custom configuration.
    pub fn with_config(dispatcher: Dispatcher<C>, invoker: Invoker, config: ReplConfig) -> Self {
        Self {
            dispatcher,
            invoker,
            config,
            history: Vec::new(),
        }
    }

    /// Run the REPL on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the REPL over arbitrary input and output.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        self.print_banner(&mut out)?;

        loop {
            write!(out, "{}", self.config.prompt)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF.
                writeln!(out, "\nGoodbye!")?;
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            self.history.push(line.to_string());

            if line.starts_with('.') {
                if self.handle_meta(line, &mut out)? {
                    break;
                }
                continue;
            }

            let start = std::time::Instant::now();
            match self.dispatcher.handle(&self.invoker, line) {
                Some(reply) => writeln!(out, "{}", reply)?,
                None => writeln!(
                    out,
                    "Commands start with '{}'. Type .help for help.",
                    self.dispatcher.prefix()
                )?,
            }
            if self.config.timing {
                writeln!(out, "Time: {:.3}ms", start.elapsed().as_secs_f64() * 1000.0)?;
            }
        }

        Ok(())
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "beltkeeper {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(
            out,
            "Acting as {} ({}). Type .help for help.",
            self.invoker.name,
            if self.invoker.roles.is_empty() {
                "no roles".to_string()
            } else {
                self.invoker.roles.join(", ")
            }
        )?;
        writeln!(out)
    }

    /// Returns `true` when the REPL should exit.
    fn handle_meta<W: Write>(&mut self, cmd: &str, out: &mut W) -> io::Result<bool> {
        let parts: Vec<&str> = cmd.trim_start_matches('.').split_whitespace().collect();
        let command = parts.first().map(|s| s.to_lowercase());

        match command.as_deref() {
            Some("help") | Some("h") | Some("?") => self.print_help(out)?,
            Some("quit") | Some("exit") | Some("q") => return Ok(true),
            Some("log") => {
                let limit = match parts.get(1).map(|n| n.parse::<usize>()) {
                    Some(Ok(n)) => n,
                    Some(Err(_)) => {
                        writeln!(out, "Usage: .log [count]")?;
                        return Ok(false);
                    }
                    None => self.config.log_limit,
                };
                self.print_log(limit, out)?;
            }
            Some("history") => {
                writeln!(out, "Command History:")?;
                for (i, cmd) in self.history.iter().enumerate() {
                    writeln!(out, "  {}: {}", i + 1, cmd)?;
                }
            }
            Some("timing") => {
                self.config.timing = !self.config.timing;
                writeln!(out, "Timing: {}", if self.config.timing { "on" } else { "off" })?;
            }
            Some(other) => {
                writeln!(out, "Unknown command: .{}", other)?;
                writeln!(out, "Type .help for available commands")?;
            }
            None => {}
        }

        Ok(false)
    }

    fn print_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  .help, .h, .?           Show this help message")?;
        writeln!(out, "  .quit, .exit, .q        Exit the REPL")?;
        writeln!(out, "  .log [count]            Show recent store changes")?;
        writeln!(out, "  .history                Show command history")?;
        writeln!(out, "  .timing                 Toggle timing display")?;
        writeln!(out)?;
        writeln!(out, "League commands: type {}help", self.dispatcher.prefix())?;
        writeln!(out)
    }

    fn print_log<W: Write>(&self, limit: usize, out: &mut W) -> io::Result<()> {
        match self.dispatcher.connector().recent_changes(limit) {
            Ok(changes) => {
                for change in changes {
                    writeln!(out, "{}", format_change(&change))?;
                }
            }
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        Ok(())
    }
}

/// One audit-log line: short id, timestamp, summary.
pub fn format_change(change: &CommitInfo) -> String {
    format!(
        "{}  {}  {}",
        change.id.short(),
        change.timestamp.format("%Y-%m-%d %H:%M:%S"),
        change.summary()
    )
}
