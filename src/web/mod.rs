//! Local HTTP surface through which a hub-side bridge registers the remote entity
//! and forwards its commands.

pub mod api;

use actix_web::{App, HttpServer, web::Data};
use tracing::info;

use crate::device_control::FrontendSession;
use crate::integration::RemoteDriver;

/// Serve the driver until the process receives SIGINT or SIGTERM
pub fn serve(driver: Data<RemoteDriver>, bind: &str) -> std::io::Result<()> {
    info!("Starting web server on {}", bind);
    let sys = actix_rt::System::new();
    sys.block_on(async move {
        HttpServer::new(move || {
            App::new()
                .app_data(driver.clone())
                .configure(api::configure::<FrontendSession>)
        })
        .bind(bind)?
        .run()
        .await
    })?;
    info!("Web server stopped");
    Ok(())
}
