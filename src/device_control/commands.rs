//! Command normalization. Maps MythTV action names onto the hub's simple-command
//! namespace (uppercase, at most 20 characters) and attaches SendKey aliases for the
//! navigation keys.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use super::types::{CanonicalCommand, CommandTable, DeviceAction};

/// Longest simple-command name the hub accepts
pub const MAX_COMMAND_LEN: usize = 20;

/// Candidate name to canonical name.
/// Covers the hub's standard remote vocabulary and hand-picked abbreviations for
/// actions whose derived name would be too long.
const COMMAND_OVERRIDES: &[(&str, &str)] = &[
    ("0", "DIGIT_0"),
    ("1", "DIGIT_1"),
    ("2", "DIGIT_2"),
    ("3", "DIGIT_3"),
    ("4", "DIGIT_4"),
    ("5", "DIGIT_5"),
    ("6", "DIGIT_6"),
    ("7", "DIGIT_7"),
    ("8", "DIGIT_8"),
    ("9", "DIGIT_9"),
    ("UP", "CURSOR_UP"),
    ("DOWN", "CURSOR_DOWN"),
    ("LEFT", "CURSOR_LEFT"),
    ("RIGHT", "CURSOR_RIGHT"),
    ("SELECT", "CURSOR_ENTER"),
    ("BACK", "BACK"),
    ("VOLUMEDOWN", "VOLUME_DOWN"),
    ("VOLUMEUP", "VOLUME_UP"),
    ("MUTE", "MUTE_TOGGLE"),
    ("STOP", "STOP"),
    ("SEEKFFWD", "FAST_FORWARD"),
    ("SEEKRWND", "REWIND"),
    // Too long
    ("3DTOPANDBOTTOMDISCARD", "3DTOPANDBOTTOMDISCAR"),
    ("CHANNEL_RECORDING_PRIORITIES", "RECORDING_PRIOS"),
    ("MANAGE_RECORDING_RULES", "MANAGE_REC_RULES"),
    ("MANAGE_RECORDINGS___FIX_CONFLICTS", "MANAGE_RECSCONFLICTS"),
    ("PROGRAM_RECORDING_PRIORITIES", "MANAGE_REC_PRIOS"),
    ("SWITCHTOPLAYLISTEDITORGALLERY", "PLIST_ED_GALLERY"),
    ("SWITCHTOPLAYLISTEDITORTREE", "PLIST_ED_TREE"),
    ("SELECT_MUSIC_PLAYLISTS", "SELECT_MUSIC_PLIST"),
    ("SHOW_MUSIC_MINIPLAYER", "SHOW_MUSIC_MINI"),
    ("TV_RECORDING_DELETION", "RECORDING_DELETE"),
    ("TV_RECORDING_PLAYBACK", "RECORDING_PLAYBACK"),
    ("TOGGLE_SHOW_WIDGET_BORDERS", "SHOW_WIDGET_BORDERS"),
    ("TOGGLE_SHOW_WIDGET_NAMES", "SHOW_WIDGET_NAMES"),
];

/// Actions that are sent through `Frontend/SendKey` instead of `Frontend/SendAction`
const KEY_ALIASES: &[(&str, &str)] = &[
    ("UP", "Up"),
    ("DOWN", "Down"),
    ("LEFT", "Left"),
    ("RIGHT", "Right"),
    ("SELECT", "Enter"),
    ("ESCAPE", "Escape"),
];

static OVERRIDE_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static KEY_ALIAS_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn override_index() -> &'static HashMap<&'static str, &'static str> {
    OVERRIDE_INDEX.get_or_init(|| COMMAND_OVERRIDES.iter().copied().collect())
}

fn key_alias_index() -> &'static HashMap<&'static str, &'static str> {
    KEY_ALIAS_INDEX.get_or_init(|| KEY_ALIASES.iter().copied().collect())
}

/// Uppercase an action name and replace spaces and slashes with underscores
fn candidate_name(action: &str) -> String {
    action.to_uppercase().replace([' ', '/'], "_")
}

/// Canonical simple-command name for a MythTV action
pub fn canonical_name(action: &str) -> String {
    let candidate = candidate_name(action);

    if let Some(mapped) = override_index().get(candidate.as_str()) {
        return (*mapped).to_string();
    }

    if candidate.chars().count() > MAX_COMMAND_LEN {
        warn!("Command {} truncated", candidate);
        return candidate.chars().take(MAX_COMMAND_LEN).collect();
    }

    candidate
}

/// SendKey key name for an action, if it has one
pub fn key_alias(action: &str) -> Option<&'static str> {
    key_alias_index().get(action).copied()
}

/// Build the command table for a frontend's action list
pub fn normalize(actions: Vec<DeviceAction>) -> CommandTable {
    let mut table = CommandTable::default();

    for action in actions {
        table.insert(CanonicalCommand {
            canonical_name: canonical_name(&action.name),
            key_alias: key_alias(&action.name).map(str::to_string),
            action: action.name,
            description: action.description,
        });
    }

    for collision in table.collisions() {
        warn!(
            "Action {} dropped: command {} already maps to action {}",
            collision.dropped, collision.canonical_name, collision.kept
        );
    }

    table
}
