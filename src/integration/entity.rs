//! Remote entity definition handed to the hub: simple commands, UI pages and the
//! physical button mapping, all derived from a frontend's command table.

use serde::Serialize;

use crate::device_control::{CommandTable, canonical_name};

/// Commands shown per UI page
pub const ITEMS_PER_PAGE: usize = 6;

/// Physical buttons on the hub's remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Button {
    Back,
    Home,
    VolumeUp,
    VolumeDown,
    Mute,
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    DpadMiddle,
    Green,
    Yellow,
    Red,
    Blue,
    ChannelUp,
    ChannelDown,
    Prev,
    Play,
    Next,
}

/// Button, frontend action on short press, frontend action on long press
const BUTTON_BINDINGS: &[(Button, &str, Option<&str>)] = &[
    (Button::Back, "ESCAPE", None),
    (Button::Home, "Main Menu", None),
    (Button::VolumeUp, "VOLUMEUP", None),
    (Button::VolumeDown, "VOLUMEDOWN", None),
    (Button::Mute, "MUTE", None),
    (Button::DpadUp, "UP", None),
    (Button::DpadDown, "DOWN", None),
    (Button::DpadLeft, "LEFT", None),
    (Button::DpadRight, "RIGHT", None),
    (Button::DpadMiddle, "SELECT", None),
    (Button::Green, "MENUGREEN", None),
    (Button::Yellow, "MENUYELLOW", None),
    (Button::Red, "MENURED", None),
    (Button::Blue, "MENUBLUE", None),
    (Button::ChannelUp, "CHANNELUP", None),
    (Button::ChannelDown, "CHANNELDOWN", None),
    (Button::Prev, "SEEKRWND", Some("PREVTRACK")),
    (Button::Play, "PLAY", None),
    (Button::Next, "SEEKFFWD", Some("NEXTTRACK")),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCommand {
    pub cmd_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl EntityCommand {
    pub fn new(cmd_id: impl Into<String>) -> Self {
        Self {
            cmd_id: cmd_id.into(),
            params: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonMapping {
    pub button: Button,
    pub short_press: Option<EntityCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_press: Option<EntityCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u8,
    pub height: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub location: Location,
    pub size: Size,
    pub text: String,
    pub command: EntityCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiPage {
    pub page_id: String,
    pub name: String,
    pub grid: Size,
    pub items: Vec<UiItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInterface {
    pub pages: Vec<UiPage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteOptions {
    pub simple_commands: Vec<String>,
    pub button_mapping: Vec<ButtonMapping>,
    pub user_interface: UserInterface,
}

/// The remote entity registered with the hub for one frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteEntity {
    pub entity_id: String,
    pub entity_type: &'static str,
    pub name: String,
    pub features: Vec<String>,
    pub options: RemoteOptions,
}

impl RemoteEntity {
    pub fn new(id: &str, name: &str, commands: &CommandTable) -> Self {
        Self {
            entity_id: id.to_string(),
            entity_type: "remote",
            name: name.to_string(),
            features: Vec::new(),
            options: RemoteOptions {
                simple_commands: commands.names().map(str::to_string).collect(),
                button_mapping: create_button_mapping(commands),
                user_interface: UserInterface {
                    pages: create_ui_pages(commands),
                },
            },
        }
    }

    pub fn simple_commands(&self) -> &[String] {
        &self.options.simple_commands
    }
}

/// One text item per command, six to a page, in table order
pub fn create_ui_pages(commands: &CommandTable) -> Vec<UiPage> {
    let all: Vec<_> = commands.iter().collect();

    all.chunks(ITEMS_PER_PAGE)
        .enumerate()
        .map(|(index, chunk)| UiPage {
            page_id: format!("page{}", index),
            name: format!("Page {}", index),
            grid: Size {
                width: 1,
                height: ITEMS_PER_PAGE as u8,
            },
            items: chunk
                .iter()
                .enumerate()
                .map(|(row, command)| UiItem {
                    kind: "text",
                    location: Location { x: 0, y: row as u8 },
                    size: Size {
                        width: 1,
                        height: 1,
                    },
                    text: command.description.clone(),
                    command: EntityCommand::new(command.canonical_name.clone()),
                })
                .collect(),
        })
        .collect()
}

/// Map the remote's buttons onto whichever of their preferred actions the frontend has
pub fn create_button_mapping(commands: &CommandTable) -> Vec<ButtonMapping> {
    BUTTON_BINDINGS
        .iter()
        .filter_map(|(button, short_action, long_action)| {
            let short_cmd = canonical_name(short_action);
            if !commands.contains(&short_cmd) {
                return None;
            }

            let long_press = long_action
                .map(canonical_name)
                .filter(|long_cmd| commands.contains(long_cmd))
                .map(EntityCommand::new);

            Some(ButtonMapping {
                button: *button,
                short_press: Some(EntityCommand::new(short_cmd)),
                long_press,
            })
        })
        .collect()
}
