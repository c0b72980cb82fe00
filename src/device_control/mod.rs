mod client;
mod commands;
mod discovery;
mod error;
mod retry;
mod session;
mod types;

pub use client::FrontendClient;
#[allow(unused_imports)]
pub use commands::{MAX_COMMAND_LEN, canonical_name, key_alias, normalize};
#[allow(unused_imports)]
pub use discovery::fetch_actions;
pub use error::FrontendError;
#[allow(unused_imports)]
pub use retry::{RetryFailure, RetryPolicy, retry};
pub use session::FrontendSession;
#[allow(unused_imports)]
pub use types::{CanonicalCommand, Collision, CommandTable, DeviceAction};
