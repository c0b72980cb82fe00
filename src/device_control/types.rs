//! Shared types for frontend control. Defines the raw device actions returned by
//! discovery, the normalized command table, and the wire formats of the Frontend
//! service endpoints.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A native action as reported by the frontend's action list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAction {
    pub name: String,
    pub description: String,
}

impl DeviceAction {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A dispatchable command exposed to the hub under its canonical name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalCommand {
    pub canonical_name: String,
    pub action: String,
    pub key_alias: Option<String>,
    pub description: String,
}

/// Two device actions that normalized to the same canonical name.
/// The earlier action keeps the name, the later one is left out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub canonical_name: String,
    pub kept: String,
    pub dropped: String,
}

/// Canonical name to command mapping, in the frontend's action-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    commands: IndexMap<String, CanonicalCommand>,
    collisions: Vec<Collision>,
}

impl CommandTable {
    /// Insert a command unless its canonical name is already taken
    pub(super) fn insert(&mut self, command: CanonicalCommand) {
        if let Some(existing) = self.commands.get(&command.canonical_name) {
            self.collisions.push(Collision {
                canonical_name: command.canonical_name.clone(),
                kept: existing.action.clone(),
                dropped: command.action,
            });
            return;
        }
        self.commands.insert(command.canonical_name.clone(), command);
    }

    pub fn get(&self, canonical_name: &str) -> Option<&CanonicalCommand> {
        self.commands.get(canonical_name)
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.commands.contains_key(canonical_name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalCommand> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Actions that lost their canonical name to an earlier action
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}

/// Body of `GET /Frontend/GetActionList`
#[derive(Debug, Deserialize)]
pub(super) struct ActionListResponse {
    #[serde(rename = "FrontendActionList")]
    pub action_list: FrontendActionList,
}

#[derive(Debug, Deserialize)]
pub(super) struct FrontendActionList {
    #[serde(rename = "ActionList", default)]
    pub actions: IndexMap<String, Option<String>>,
}

impl ActionListResponse {
    pub fn into_actions(self) -> Vec<DeviceAction> {
        self.action_list
            .actions
            .into_iter()
            .map(|(name, description)| DeviceAction::new(name, description.unwrap_or_default()))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SendKeyRequest<'a> {
    pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct SendActionRequest<'a> {
    pub action: &'a str,
}

/// Body returned by `SendKey` and `SendAction`
#[derive(Debug, Deserialize)]
pub(super) struct SendResponse {
    #[serde(rename = "bool")]
    pub result: BoolValue,
}

/// Older frontends encode the result as `"true"`/`"false"`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum BoolValue {
    Bool(bool),
    Text(String),
}

impl BoolValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BoolValue::Bool(b) => Some(*b),
            BoolValue::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
            BoolValue::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
            BoolValue::Text(_) => None,
        }
    }
}
