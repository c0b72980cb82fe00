//! Action discovery. Fetches the actions a frontend supports, waiting for the
//! Frontend service to come up if the device was only just switched on.

use tracing::{debug, info};

use super::client::FrontendClient;
use super::error::FrontendError;
use super::retry::{RetryFailure, RetryPolicy, retry};
use super::types::{ActionListResponse, DeviceAction};

const ACTION_LIST_ENDPOINT: &str = "Frontend/GetActionList";

fn fetch_action_list(client: &FrontendClient) -> Result<Vec<DeviceAction>, FrontendError> {
    let response: ActionListResponse = client.get(ACTION_LIST_ENDPOINT)?;
    Ok(response.into_actions())
}

/// Fetch every action the frontend supports, retrying transient failures
pub fn fetch_actions(
    client: &FrontendClient,
    policy: &RetryPolicy,
) -> Result<Vec<DeviceAction>, FrontendError> {
    let result = retry(policy, FrontendError::is_transient, |attempt| {
        debug!(
            "Fetching action list from {} (attempt {})",
            client.base_url(),
            attempt
        );
        fetch_action_list(client)
    });

    match result {
        Ok(actions) => {
            info!(
                "Discovered {} actions on {}",
                actions.len(),
                client.base_url()
            );
            Ok(actions)
        }
        Err(RetryFailure {
            attempts,
            last_error,
        }) => Err(FrontendError::DiscoveryExhausted {
            attempts,
            last_error: Box::new(last_error),
        }),
    }
}
