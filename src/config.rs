//! Runtime configuration.

use std::path::PathBuf;

pub const ENV_REPO: &str = "BELTKEEPER_REPO";
pub const ENV_PREFIX: &str = "BELTKEEPER_PREFIX";
pub const ENV_MODERATOR: &str = "BELTKEEPER_MODERATOR";
pub const ENV_ROLES: &str = "BELTKEEPER_ROLES";

/// League configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueConfig {
    /// Path to the git repository holding the workbook.
    pub path: PathBuf,
    /// Create the repository if it doesn't exist.
    pub create_if_missing: bool,
    /// Character that starts a chat command.
    pub prefix: char,
    /// Role required for commands that change league state.
    pub moderator: String,
    /// Roles held by the local operator (REPL and `exec`).
    pub roles: Vec<String>,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".beltkeeper"),
            create_if_missing: false,
            prefix: '!',
            moderator: "WWE League".into(),
            roles: Vec::new(),
            verbose: false,
        }
    }
}

impl LeagueConfig {
    /// Create a new configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `BELTKEEPER_*` environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_REPO).filter(|p| !p.is_empty()) {
            config.path = PathBuf::from(path);
        }
        if let Some(prefix) = lookup(ENV_PREFIX).and_then(|p| p.chars().next()) {
            config.prefix = prefix;
        }
        if let Some(role) = lookup(ENV_MODERATOR).filter(|r| !r.trim().is_empty()) {
            config.moderator = role.trim().to_string();
        }
        if let Some(roles) = lookup(ENV_ROLES) {
            config.roles = roles
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect();
        }

        config
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set create_if_missing flag.
    pub fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    pub fn prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn moderator(mut self, role: impl Into<String>) -> Self {
        self.moderator = role.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Set verbose flag.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Whether the local operator may run moderator commands.
    pub fn operator_is_moderator(&self) -> bool {
        self.roles.iter().any(|r| r == &self.moderator)
    }

    /// Default log level: DEBUG when verbose, INFO otherwise.
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = LeagueConfig::default();
        assert_eq!(config.prefix, '!');
        assert_eq!(config.moderator, "WWE League");
        assert!(!config.operator_is_moderator());
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_REPO, "/srv/league"),
            (ENV_PREFIX, "?"),
            (ENV_MODERATOR, " Commissioner "),
            (ENV_ROLES, "Commissioner, Fans,,"),
        ]);
        let config = LeagueConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.path, PathBuf::from("/srv/league"));
        assert_eq!(config.prefix, '?');
        assert_eq!(config.moderator, "Commissioner");
        assert_eq!(config.roles, vec!["Commissioner".to_string(), "Fans".to_string()]);
        assert!(config.operator_is_moderator());
    }

    #[test]
    fn test_builder() {
        let config = LeagueConfig::new("league")
            .create_if_missing(true)
            .prefix('$')
            .moderator("Booker")
            .role("Booker")
            .verbose(true);
        assert!(config.create_if_missing);
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert_eq!(LeagueConfig::default().log_level(), tracing::Level::INFO);
        assert!(config.operator_is_moderator());
    }
}
