use super::Entry;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A catalog value: a template string or a nested group of messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Nested(MessageCatalog),
}

impl Message {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            Message::Nested(_) => None,
        }
    }
}

/// Nested message catalog for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: BTreeMap<String, Message>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(entries: &[(&str, Entry)]) -> Self {
        let entries = entries
            .iter()
            .map(|(key, entry)| {
                let message = match entry {
                    Entry::Text(text) => Message::Text((*text).to_string()),
                    Entry::Group(children) => Message::Nested(Self::from_static(children)),
                };
                ((*key).to_string(), message)
            })
            .collect();
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Looks up a dotted key such as `message.auth.required`.
    pub fn get(&self, key: &str) -> Option<&Message> {
        let mut segments = key.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            match current {
                Message::Nested(group) => current = group.entries.get(segment)?,
                Message::Text(_) => return None,
            }
        }
        Some(current)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Message::as_text)
    }

    pub fn group(&self, key: &str) -> Option<&MessageCatalog> {
        match self.get(key)? {
            Message::Nested(group) => Some(group),
            Message::Text(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.text(key).is_some()
    }

    /// Adds or replaces one entry at the top level of this catalog.
    pub fn insert(&mut self, key: impl Into<String>, message: Message) {
        self.entries.insert(key.into(), message);
    }

    /// Direct children of this catalog, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every leaf key in dotted form, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_keys("", &mut keys);
        keys
    }

    fn collect_keys(&self, prefix: &str, keys: &mut Vec<String>) {
        for (key, message) in &self.entries {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match message {
                Message::Text(_) => keys.push(path),
                Message::Nested(group) => group.collect_keys(&path, keys),
            }
        }
    }

    /// Number of leaf messages.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .map(|message| match message {
                Message::Text(_) => 1,
                Message::Nested(group) => group.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deep merge; entries of `other` win on conflict.
    pub fn merge(&mut self, other: MessageCatalog) {
        for (key, incoming) in other.entries {
            if let Message::Nested(group) = incoming {
                if let Some(Message::Nested(existing)) = self.entries.get_mut(&key) {
                    existing.merge(group);
                    continue;
                }
                self.entries.insert(key, Message::Nested(group));
            } else {
                self.entries.insert(key, incoming);
            }
        }
    }
}
