//! Turning league results into chat replies.

use crate::bot::command::COMMANDS;
use crate::bot::reply::{Embed, Reply};
use crate::league::{ChampionGroup, FreeAgentListing, ListedWrestler, Reign, Release, Signing, Team, TitleChange};

/// Roster listings are split into fields of this many wrestlers.
pub const ROSTER_CHUNK: usize = 20;

/// Character budget for one free-agent field, counting a newline per line.
pub const FIELD_BUDGET: usize = 900;

pub fn champions(groups: &[ChampionGroup]) -> Reply {
    let mut embed = Embed::new("Current Champions");
    if groups.is_empty() {
        embed = embed.description("No championships are currently held.");
    }
    for group in groups {
        let lines: Vec<String> = group
            .titles
            .iter()
            .map(|c| format!("**{}**\n{} ({}) - {} days\n", c.title, c.champion, c.team, c.days_held))
            .collect();
        embed = embed.field(group.show.as_str(), lines.join("\n"));
    }
    embed.into()
}

pub fn roster(team: Team, wrestlers: &[ListedWrestler]) -> Reply {
    let mut embed = Embed::new(format!("{}'S ROSTER", team.name().to_uppercase()));
    if wrestlers.is_empty() {
        return embed.description("No wrestlers found on this roster.").into();
    }

    for (i, chunk) in wrestlers.chunks(ROSTER_CHUNK).enumerate() {
        let first = i * ROSTER_CHUNK + 1;
        let last = first + chunk.len() - 1;
        embed = embed.field(format!("Wrestlers ({}-{})", first, last), listing_lines(chunk).join("\n"));
    }
    embed.into()
}

pub fn free_agents(listing: &FreeAgentListing) -> Reply {
    let mut embed = Embed::new("NXT FREE AGENTS");
    if listing.is_empty() {
        return embed.description("No free agents available").into();
    }

    for (label, group) in [("Male Superstars", &listing.male), ("Female Superstars", &listing.female)] {
        for (i, chunk) in pack_lines(listing_lines(group), FIELD_BUDGET).into_iter().enumerate() {
            let name = if i == 0 {
                label.to_string()
            } else {
                format!("{} (cont.)", label)
            };
            embed = embed.field(name, chunk.join("\n"));
        }
    }
    embed.into()
}

pub fn stats(query: &str, reigns: &[Reign]) -> Reply {
    if reigns.is_empty() {
        return Reply::text(format!("No championship history found for '{}'", query));
    }

    let mut embed = Embed::new(format!("{} - Championship History", query.to_uppercase()))
        .description(format!("Total Reigns: {}", reigns.len()));
    for (i, reign) in reigns.iter().enumerate() {
        embed = embed.field(
            format!("Championship #{}", i + 1),
            format!(
                "**{}** (Reign #{})\nTeam: {}\nStatus: {}\nDays Held: {}",
                reign.title, reign.reign_number, reign.team, reign.status, reign.days_held
            ),
        );
    }
    embed.into()
}

pub fn title_change(change: &TitleChange) -> Reply {
    let previous = match &change.previous {
        Some(p) => format!("{} - {} days", p.champion, p.days_held),
        None => "Vacant".to_string(),
    };
    Reply::text(format!(
        "✅ **{}** championship updated!\n**New Champion:** {} ({})\n**Previous Champion:** {}",
        change.title, change.new_champion, change.team, previous
    ))
}

pub fn days_added(days: u64, updated: usize) -> Reply {
    Reply::text(format!("✅ Added {} days to {} championships", days, updated))
}

pub fn signing(signing: &Signing) -> Reply {
    let mut text = format!(
        "✅ Added {} to {}'s roster ({})",
        signing.name, signing.team, signing.show
    );
    if signing.released_from_pool {
        text.push_str(" and removed from free agents");
    }
    Reply::text(text)
}

pub fn release(release: &Release) -> Reply {
    Reply::text(format!(
        "✅ Removed {} from {}'s roster and added back to NXT free agents",
        release.name, release.team
    ))
}

pub fn free_agent_added(name: &str, gender: &str) -> Reply {
    Reply::text(format!("✅ Added {} to NXT free agents ({})", name, gender.trim().to_uppercase()))
}

pub fn free_agent_removed(name: &str) -> Reply {
    Reply::text(format!("✅ Removed {} from NXT free agents", name))
}

pub fn sheets(title: &str, names: &[String]) -> Reply {
    Reply::text(format!(
        "Connected to store: {}\nFound {} worksheets: {}",
        title,
        names.len(),
        names.join(", ")
    ))
}

pub fn pong() -> Reply {
    Reply::text("Pong! Bot is working!")
}

pub fn help(prefix: char, moderator: &str) -> Reply {
    let lines = |moderator_only: bool| -> String {
        COMMANDS
            .iter()
            .filter(|c| c.moderator_only == moderator_only)
            .map(|c| format!("`{}` - {}", c.usage(prefix), c.about))
            .collect::<Vec<_>>()
            .join("\n")
    };
    Embed::new("Commands")
        .field("Everyone", lines(false))
        .field(format!("Moderators ({} role)", moderator), lines(true))
        .into()
}

fn listing_lines(wrestlers: &[ListedWrestler]) -> Vec<String> {
    wrestlers
        .iter()
        .map(|w| format!("{} ({})", w.name, w.show))
        .collect()
}

/// Greedily pack lines into chunks whose size (each line plus a newline)
/// stays within `budget`. A single line over budget gets a chunk of its
/// own; no chunk is ever empty.
pub fn pack_lines(lines: Vec<String>, budget: usize) -> Vec<Vec<String>> {
    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut used = 0;

    for line in lines {
        let cost = line.chars().count() + 1;
        if used + cost > budget && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        used += cost;
        current.push(line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{Championship, PreviousReign, ReignStatus, Show};

    fn wrestlers(n: usize) -> Vec<ListedWrestler> {
        (1..=n)
            .map(|i| ListedWrestler {
                name: format!("WRESTLER {}", i),
                show: "RAW".into(),
            })
            .collect()
    }

    #[test]
    fn test_roster_chunks_of_twenty() {
        let reply = roster(Team::Devin, &wrestlers(45));
        let embed = reply.as_embed().unwrap();
        assert_eq!(embed.title, "DEVIN'S ROSTER");
        assert_eq!(
            embed.field_names(),
            vec!["Wrestlers (1-20)", "Wrestlers (21-40)", "Wrestlers (41-45)"]
        );
        assert_eq!(embed.fields[2].value.lines().count(), 5);

        let empty = roster(Team::Austin, &[]);
        assert_eq!(
            empty.as_embed().unwrap().description.as_deref(),
            Some("No wrestlers found on this roster.")
        );
    }

    #[test]
    fn test_pack_lines_respects_budget() {
        // 9 chars + newline = 10 per line
        let lines: Vec<String> = (0..25).map(|i| format!("LINE {:04}", i)).collect();
        let chunks = pack_lines(lines, 100);
        assert_eq!(chunks.iter().map(Vec::len).collect::<Vec<_>>(), vec![10, 10, 5]);

        let chunks = pack_lines(vec!["X".repeat(150), "short".into()], 100);
        assert_eq!(chunks.len(), 2);
        assert!(pack_lines(Vec::new(), 100).is_empty());
    }

    #[test]
    fn test_free_agents_continuation_labels() {
        let listing = FreeAgentListing {
            male: (0..60)
                .map(|i| ListedWrestler {
                    name: format!("NXT HOPEFUL NUMBER {:03}", i),
                    show: "NXT".into(),
                })
                .collect(),
            female: vec![ListedWrestler {
                name: "GIULIA".into(),
                show: "NXT".into(),
            }],
        };
        let reply = free_agents(&listing);
        let embed = reply.as_embed().unwrap();
        assert_eq!(
            embed.field_names(),
            vec![
                "Male Superstars",
                "Male Superstars (cont.)",
                "Female Superstars"
            ]
        );
        assert!(embed.fields.iter().all(|f| f.value.chars().count() < FIELD_BUDGET));
    }

    #[test]
    fn test_champions_and_title_change() {
        let groups = vec![ChampionGroup {
            show: Show::Nxt,
            titles: vec![Championship {
                row: 12,
                title: "NXT Championship".into(),
                champion: "OBA FEMI".into(),
                team: "Devin".into(),
                days_held: 33,
                show_label: "NXT".into(),
            }],
        }];
        let embed = champions(&groups).as_embed().cloned().unwrap();
        assert_eq!(embed.field_names(), vec!["NXT"]);
        assert_eq!(embed.fields[0].value, "**NXT Championship**\nOBA FEMI (Devin) - 33 days\n");

        let change = TitleChange {
            title: "NXT Championship".into(),
            new_champion: "TRICK WILLIAMS".into(),
            team: Team::Pacelli,
            previous: Some(PreviousReign {
                champion: "OBA FEMI".into(),
                days_held: 33,
                reign_number: 1,
            }),
        };
        assert_eq!(
            title_change(&change).to_string(),
            "✅ **NXT Championship** championship updated!\n**New Champion:** TRICK WILLIAMS (Pacelli)\n**Previous Champion:** OBA FEMI - 33 days"
        );
    }

    #[test]
    fn test_stats_reply() {
        assert_eq!(
            stats("becky", &[]).to_string(),
            "No championship history found for 'becky'"
        );

        let reigns = vec![Reign {
            row: 4,
            title: "WWE Championship".into(),
            champion: "CODY RHODES".into(),
            team: "Austin".into(),
            reign_number: 2,
            status: ReignStatus::Lost,
            days_held: 400,
        }];
        let reply = stats("cody", &reigns);
        let embed = reply.as_embed().unwrap();
        assert_eq!(embed.title, "CODY - Championship History");
        assert_eq!(embed.description.as_deref(), Some("Total Reigns: 1"));
        assert!(embed.fields[0].value.contains("(Reign #2)"));
    }

    #[test]
    fn test_help_splits_by_role() {
        let reply = help('!', "WWE League");
        let embed = reply.as_embed().unwrap();
        assert_eq!(embed.field_names(), vec!["Everyone", "Moderators (WWE League role)"]);
        assert!(embed.fields[1].value.contains("`!adddays <days>`"));
        assert!(!embed.fields[0].value.contains("newchamp"));
    }
}
