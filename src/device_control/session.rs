//! A connection to one MythTV frontend: the command table discovered at connect time
//! and dispatch of simple commands through SendKey or SendAction.

use tracing::{debug, error, info, warn};

use super::client::FrontendClient;
use super::commands::normalize;
use super::discovery::fetch_actions;
use super::error::FrontendError;
use super::retry::RetryPolicy;
use super::types::{
    CanonicalCommand, CommandTable, SendActionRequest, SendKeyRequest, SendResponse,
};

const SEND_KEY_ENDPOINT: &str = "Frontend/SendKey";
const SEND_ACTION_ENDPOINT: &str = "Frontend/SendAction";

/// Control session for a single frontend
#[derive(Debug)]
pub struct FrontendSession {
    client: FrontendClient,
    commands: CommandTable,
}

impl FrontendSession {
    /// Connect to a frontend, waiting for it to come up if needed
    pub fn connect(host: &str, port: u16) -> Result<Self, FrontendError> {
        let client = FrontendClient::new(host, port)?;
        Self::connect_with(client, &RetryPolicy::default())
    }

    /// Discover the frontend's actions and build its command table
    pub fn connect_with(
        client: FrontendClient,
        policy: &RetryPolicy,
    ) -> Result<Self, FrontendError> {
        let actions = fetch_actions(&client, policy)?;
        let commands = normalize(actions);
        if commands.is_empty() {
            warn!("Frontend {} reported no actions", client.base_url());
        }
        info!(
            "Frontend {} ready with {} commands",
            client.base_url(),
            commands.len()
        );

        Ok(Self { client, commands })
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    /// Run a simple command.
    ///
    /// Returns whether the frontend executed it. Only an unknown command is an error;
    /// network and protocol failures are logged and reported as `false`.
    pub fn run(&self, name: &str) -> Result<bool, FrontendError> {
        let Some(command) = self.commands.get(name) else {
            error!("command: {} not found", name);
            return Err(FrontendError::CommandNotFound(name.to_string()));
        };

        match self.dispatch(command) {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("command {} failed: {}", name, e);
                Ok(false)
            }
        }
    }

    fn dispatch(&self, command: &CanonicalCommand) -> Result<bool, FrontendError> {
        let (endpoint, response): (&str, SendResponse) = match &command.key_alias {
            Some(key) => {
                debug!(
                    "command {} mapped to key {} (action: {})",
                    command.canonical_name, key, command.action
                );
                let body = SendKeyRequest { key };
                (SEND_KEY_ENDPOINT, self.client.post(SEND_KEY_ENDPOINT, &body)?)
            }
            None => {
                debug!(
                    "command {} mapped to action {}",
                    command.canonical_name, command.action
                );
                let body = SendActionRequest {
                    action: &command.action,
                };
                (
                    SEND_ACTION_ENDPOINT,
                    self.client.post(SEND_ACTION_ENDPOINT, &body)?,
                )
            }
        };

        response
            .result
            .as_bool()
            .ok_or_else(|| FrontendError::InvalidResponse {
                endpoint: endpoint.to_string(),
                reason: "bool field is not a boolean".to_string(),
            })
    }
}
