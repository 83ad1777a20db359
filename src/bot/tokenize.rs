//! Splitting a chat line into arguments.

use crate::bot::error::{CommandError, CommandResult};

/// Split on whitespace, keeping double-quoted runs together.
///
/// `!newchamp "WWE Championship" "Roman Reigns" pacelli` yields four
/// tokens. Quotes may appear mid-token (`a"b c"d` is one token `ab cd`);
/// `""` yields an empty token.
pub fn tokenize(line: &str) -> CommandResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Split a prefixed line into the command name and the raw remainder.
///
/// Returns `None` when the line does not start with `prefix` followed by a
/// name.
pub fn split_command(line: &str, prefix: char) -> Option<(String, &str)> {
    let body = line.trim_start().strip_prefix(prefix)?;
    let end = body.find(char::is_whitespace).unwrap_or(body.len());
    let (name, rest) = body.split_at(end);
    if name.is_empty() {
        return None;
    }
    Some((name.to_lowercase(), rest.trim()))
}
