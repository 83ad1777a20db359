//! Replies sent back to the chat.

use std::fmt;

use chrono::{DateTime, Utc};

/// A named block inside an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

/// A titled card with optional description and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<Field>,
    pub timestamp: DateTime<Utc>,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(text) => Some(text),
            Reply::Embed(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            Reply::Embed(embed) => Some(embed),
            Reply::Text(_) => None,
        }
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Reply::Embed(embed)
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        for field in &self.fields {
            writeln!(f)?;
            writeln!(f, "[{}]", field.name)?;
            writeln!(f, "{}", field.value)?;
        }
        write!(f, "({})", self.timestamp.format("%Y-%m-%d %H:%M UTC"))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => f.write_str(text),
            Reply::Embed(embed) => embed.fmt(f),
        }
    }
}
