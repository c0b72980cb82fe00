mod driver;
mod entity;

#[allow(unused_imports)]
pub use driver::{CommandParams, CommandRunner, DeviceState, RemoteDriver, SEND_CMD, StatusCode};
#[allow(unused_imports)]
pub use entity::{Button, ButtonMapping, EntityCommand, ITEMS_PER_PAGE, RemoteEntity, UiPage};

#[cfg(test)]
pub(crate) use driver::tests::FakeRunner;
