//! Chat command parsing.

use crate::bot::error::{CommandError, CommandResult};
use crate::bot::tokenize::{split_command, tokenize};

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Champions,
    Roster { team: String },
    FreeAgents,
    Stats { wrestler: String },
    NewChamp { title: String, winner: String, team: String },
    AddDays { days: u64 },
    AddWrestler { name: String, team: String, show: String, gender: String },
    RemoveWrestler { name: String, team: String },
    AddFreeAgent { name: String, gender: String },
    RemoveFreeAgent { name: String },
    Sheets,
    Ping,
    Help,
}

/// Static description of one command, used for usage errors and help.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub args: &'static str,
    pub about: &'static str,
    pub moderator_only: bool,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo { name: "champions", args: "", about: "Shows all current champions", moderator_only: false },
    CommandInfo { name: "roster", args: "<team>", about: "Shows a team's roster", moderator_only: false },
    CommandInfo { name: "freeagents", args: "", about: "Shows available NXT free agents", moderator_only: false },
    CommandInfo { name: "stats", args: "<wrestler name>", about: "Shows a wrestler's championship history", moderator_only: false },
    CommandInfo { name: "newchamp", args: "\"<title>\" \"<winner>\" <team>", about: "Updates a championship holder", moderator_only: true },
    CommandInfo { name: "adddays", args: "<days>", about: "Adds days to every held championship", moderator_only: true },
    CommandInfo { name: "addwrestler", args: "\"<name>\" <team> <raw|smackdown> <M|F>", about: "Adds a wrestler to a team roster", moderator_only: true },
    CommandInfo { name: "removewrestler", args: "\"<name>\" <team>", about: "Moves a wrestler from a roster back to free agency", moderator_only: true },
    CommandInfo { name: "addfreeagent", args: "\"<name>\" <M|F>", about: "Adds a wrestler to NXT free agents", moderator_only: true },
    CommandInfo { name: "removefreeagent", args: "\"<name>\"", about: "Removes a wrestler from NXT free agents", moderator_only: true },
    CommandInfo { name: "sheets", args: "", about: "Lists the worksheets in the league store", moderator_only: false },
    CommandInfo { name: "ping", args: "", about: "Checks that the bot is alive", moderator_only: false },
    CommandInfo { name: "help", args: "", about: "Lists commands", moderator_only: false },
];

pub fn info(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|c| c.name == name)
}

impl CommandInfo {
    pub fn usage(&self, prefix: char) -> String {
        if self.args.is_empty() {
            format!("{}{}", prefix, self.name)
        } else {
            format!("{}{} {}", prefix, self.name, self.args)
        }
    }
}

impl Command {
    /// Parse a chat line.
    ///
    /// Returns `Ok(None)` for lines that are not commands at all, so chatter
    /// is ignored rather than answered with an error.
    pub fn parse(line: &str, prefix: char) -> CommandResult<Option<Command>> {
        let Some((name, rest)) = split_command(line, prefix) else {
            return Ok(None);
        };
        let info = info(&name).ok_or_else(|| CommandError::UnknownCommand(format!("{}{}", prefix, name)))?;

        // stats takes the rest of the line verbatim
        if info.name == "stats" {
            let wrestler = rest.trim_matches('"').trim();
            if wrestler.is_empty() {
                return Err(CommandError::Usage(info.usage(prefix)));
            }
            return Ok(Some(Command::Stats {
                wrestler: wrestler.to_string(),
            }));
        }

        let args = tokenize(rest)?;
        let expected = info.args.split_whitespace().count();
        if args.len() != expected || args.iter().any(|a| a.trim().is_empty()) {
            return Err(CommandError::Usage(info.usage(prefix)));
        }
        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let command = match info.name {
            "champions" => Command::Champions,
            "roster" => Command::Roster { team: next() },
            "freeagents" => Command::FreeAgents,
            "newchamp" => Command::NewChamp {
                title: next(),
                winner: next(),
                team: next(),
            },
            "adddays" => {
                let raw = next();
                let days = raw.parse::<u64>().map_err(|_| {
                    CommandError::BadArgument(format!("days must be a whole number, got '{}'", raw))
                })?;
                Command::AddDays { days }
            }
            "addwrestler" => Command::AddWrestler {
                name: next(),
                team: next(),
                show: next(),
                gender: next(),
            },
            "removewrestler" => Command::RemoveWrestler {
                name: next(),
                team: next(),
            },
            "addfreeagent" => Command::AddFreeAgent {
                name: next(),
                gender: next(),
            },
            "removefreeagent" => Command::RemoveFreeAgent { name: next() },
            "sheets" => Command::Sheets,
            "ping" => Command::Ping,
            _ => Command::Help,
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Champions => "champions",
            Command::Roster { .. } => "roster",
            Command::FreeAgents => "freeagents",
            Command::Stats { .. } => "stats",
            Command::NewChamp { .. } => "newchamp",
            Command::AddDays { .. } => "adddays",
            Command::AddWrestler { .. } => "addwrestler",
            Command::RemoveWrestler { .. } => "removewrestler",
            Command::AddFreeAgent { .. } => "addfreeagent",
            Command::RemoveFreeAgent { .. } => "removefreeagent",
            Command::Sheets => "sheets",
            Command::Ping => "ping",
            Command::Help => "help",
        }
    }

    /// Commands that change league state need the moderator role.
    pub fn requires_moderator(&self) -> bool {
        info(self.name()).is_some_and(|i| i.moderator_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CommandResult<Option<Command>> {
        Command::parse(line, '!')
    }

    #[test]
    fn test_newchamp() {
        let cmd = parse(r#"!newchamp "RAW World Championship" "ROMAN REIGNS" austin"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            Command::NewChamp {
                title: "RAW World Championship".into(),
                winner: "ROMAN REIGNS".into(),
                team: "austin".into(),
            }
        );
        assert!(cmd.requires_moderator());
    }

    #[test]
    fn test_stats_takes_rest_of_line() {
        assert_eq!(
            parse("!stats Cody Rhodes").unwrap(),
            Some(Command::Stats {
                wrestler: "Cody Rhodes".into()
            })
        );
        assert_eq!(
            parse(r#"!stats "Cody""#).unwrap(),
            Some(Command::Stats { wrestler: "Cody".into() })
        );
        assert!(matches!(parse("!stats"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_argument_count_and_blanks() {
        assert!(matches!(parse("!roster"), Err(CommandError::Usage(_))));
        assert!(matches!(parse("!roster austin devin"), Err(CommandError::Usage(_))));
        assert!(matches!(parse(r#"!removefreeagent """#), Err(CommandError::Usage(_))));
        assert_eq!(
            parse("!addfreeagent \"Solo Sikoa\" M").unwrap(),
            Some(Command::AddFreeAgent {
                name: "Solo Sikoa".into(),
                gender: "M".into()
            })
        );
    }

    #[test]
    fn test_adddays() {
        assert_eq!(parse("!adddays 7").unwrap(), Some(Command::AddDays { days: 7 }));
        assert!(matches!(parse("!adddays -1"), Err(CommandError::BadArgument(_))));
        assert!(matches!(parse("!adddays week"), Err(CommandError::BadArgument(_))));
    }

    #[test]
    fn test_non_commands_and_unknown() {
        assert_eq!(parse("gg everyone").unwrap(), None);
        assert!(matches!(parse("!smackdown"), Err(CommandError::UnknownCommand(_))));
        assert_eq!(Command::parse("?ping", '?').unwrap(), Some(Command::Ping));
        assert!(!Command::Ping.requires_moderator());
    }

    #[test]
    fn test_usage_text() {
        let usage = info("addwrestler").unwrap().usage('!');
        assert_eq!(usage, "!addwrestler \"<name>\" <team> <raw|smackdown> <M|F>");
        // every usage placeholder is one argument
        assert_eq!(info("newchamp").unwrap().args.split_whitespace().count(), 3);
    }
}
