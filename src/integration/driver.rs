//! Hub-facing driver. Answers the hub's connect notification and remote-entity
//! commands by dispatching simple commands to the frontend session.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::entity::RemoteEntity;
use crate::device_control::{CommandTable, FrontendError, FrontendSession};

/// The remote entity command carrying a single simple command
pub const SEND_CMD: &str = "send_cmd";

/// Result codes returned to the hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
}

impl StatusCode {
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceState {
    Connected,
}

/// Parameters of a remote entity command
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandParams {
    pub command: Option<String>,
}

/// Something that can run a simple command on a device
pub trait CommandRunner: Send + Sync {
    fn commands(&self) -> &CommandTable;
    fn run(&self, command: &str) -> Result<bool, FrontendError>;
}

impl CommandRunner for FrontendSession {
    fn commands(&self) -> &CommandTable {
        FrontendSession::commands(self)
    }

    fn run(&self, command: &str) -> Result<bool, FrontendError> {
        FrontendSession::run(self, command)
    }
}

/// Driver for one remote entity backed by one frontend
pub struct RemoteDriver<R = FrontendSession> {
    runner: R,
    entity: RemoteEntity,
}

impl<R: CommandRunner> RemoteDriver<R> {
    pub fn new(id: &str, name: &str, runner: R) -> Self {
        let entity = RemoteEntity::new(id, name, runner.commands());
        Self { runner, entity }
    }

    pub fn entity(&self) -> &RemoteEntity {
        &self.entity
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn on_connect(&self) -> DeviceState {
        info!("Hub connected to {}", self.entity.entity_id);
        DeviceState::Connected
    }

    /// Handle a command sent to the remote entity
    pub fn handle_command(
        &self,
        entity_id: &str,
        cmd_id: &str,
        params: Option<&CommandParams>,
    ) -> StatusCode {
        info!(
            "Got {} command request: {} {:?}",
            entity_id,
            cmd_id,
            params.and_then(|p| p.command.as_deref())
        );

        if cmd_id != SEND_CMD {
            warn!("Unsupported command: {}", cmd_id);
            return StatusCode::BadRequest;
        }

        let Some(command) = params.and_then(|p| p.command.as_deref()) else {
            warn!("{} without a command parameter", SEND_CMD);
            return StatusCode::BadRequest;
        };

        match self.runner.run(command) {
            Ok(true) => StatusCode::Ok,
            Ok(false) => {
                error!("command: {} failed", command);
                StatusCode::BadRequest
            }
            Err(e) => {
                error!("command: {} rejected: {}", command, e);
                StatusCode::BadRequest
            }
        }
    }
}
