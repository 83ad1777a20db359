//! Beltkeeper command-line interface.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use beltkeeper::bot::{format_change, Dispatcher, GitConnector, Invoker, Repl};
use beltkeeper::config::LeagueConfig;
use beltkeeper::league::{initialize, SeedTitle};

/// Championship and roster bookkeeping for a fantasy wrestling league
#[derive(Parser, Debug)]
#[command(name = "beltkeeper")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the league repository
    #[arg(short = 'd', long, global = true)]
    repo: Option<PathBuf>,

    /// Character that starts a command
    #[arg(long, global = true)]
    prefix: Option<char>,

    /// Role required for commands that change league state
    #[arg(long, global = true)]
    moderator: Option<String>,

    /// Role held by the operator (repeatable)
    #[arg(long = "role", global = true)]
    roles: Vec<String>,

    /// Name commands are issued under
    #[arg(long = "as", global = true, default_value = "operator")]
    user: String,

    /// Create the repository if it doesn't exist
    #[arg(long, global = true)]
    create: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Create the league worksheets that are missing
    Init {
        /// JSON file of `{"title", "show"}` objects for a new tracker
        #[arg(long)]
        titles: Option<PathBuf>,
    },

    /// Start an interactive session (default)
    Repl,

    /// Run a single command line and exit
    Exec {
        /// The command, e.g. `!newchamp wwe "Cody Rhodes" austin`
        line: String,
    },

    /// Show recent changes to the league store
    Log {
        /// Number of changes to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = configure(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Cmd::Repl) {
        Cmd::Init { titles } => init(&config, titles),
        Cmd::Repl => {
            let mut repl = Repl::new(dispatcher(&config), invoker(&cli.user, &config));
            repl.run().context("REPL failed")
        }
        Cmd::Exec { line } => {
            match dispatcher(&config).handle(&invoker(&cli.user, &config), &line) {
                Some(reply) => println!("{}", reply),
                None => bail!("'{}' is not a command; commands start with '{}'", line, config.prefix),
            }
            Ok(())
        }
        Cmd::Log { count } => {
            let book = GitConnector::new(config.clone())
                .open()
                .with_context(|| format!("opening {}", config.path.display()))?;
            for change in book.recent_changes(count)? {
                println!("{}", format_change(&change));
            }
            Ok(())
        }
    }
}

/// Environment first, then command-line overrides.
fn configure(cli: &Cli) -> LeagueConfig {
    let mut config = LeagueConfig::from_env()
        .create_if_missing(cli.create)
        .verbose(cli.verbose);
    if let Some(path) = &cli.repo {
        config = config.path(path);
    }
    if let Some(prefix) = cli.prefix {
        config = config.prefix(prefix);
    }
    if let Some(role) = &cli.moderator {
        config = config.moderator(role);
    }
    for role in &cli.roles {
        config = config.role(role);
    }
    config
}

fn dispatcher(config: &LeagueConfig) -> Dispatcher<GitConnector> {
    Dispatcher::from_config(GitConnector::new(config.clone()), config)
}

fn invoker(name: &str, config: &LeagueConfig) -> Invoker {
    Invoker {
        name: name.to_string(),
        roles: config.roles.clone(),
    }
}

fn init(config: &LeagueConfig, titles: Option<PathBuf>) -> Result<()> {
    let titles = match titles {
        Some(file) => {
            let json = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            SeedTitle::from_json(&json).with_context(|| format!("parsing {}", file.display()))?
        }
        None => SeedTitle::defaults(),
    };

    let book = GitConnector::new(config.clone().create_if_missing(true))
        .open()
        .with_context(|| format!("opening {}", config.path.display()))?;
    let report = initialize(&book, &titles)?;

    for sheet in &report.created {
        println!("created  {}", sheet);
    }
    for sheet in &report.existing {
        println!("exists   {}", sheet);
    }
    if !config.operator_is_moderator() {
        println!(
            "note: the operator lacks the '{}' role; pass --role to run moderator commands",
            config.moderator
        );
    }
    Ok(())
}
