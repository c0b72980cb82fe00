use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError},
    http::StatusCode as HttpStatus,
    web::{self, Data, Json, JsonConfig, ServiceConfig},
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::integration::{CommandParams, CommandRunner, RemoteDriver, StatusCode};

#[derive(Deserialize)]
pub struct EntityCommandRequest {
    entity_id: String,
    cmd_id: String,
    #[serde(default)]
    params: Option<CommandParams>,
}

pub async fn connect<R: CommandRunner + 'static>(driver: Data<RemoteDriver<R>>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "state": driver.on_connect() }))
}

pub async fn get_entity<R: CommandRunner + 'static>(driver: Data<RemoteDriver<R>>) -> HttpResponse {
    HttpResponse::Ok().json(driver.entity())
}

pub async fn entity_command<R: CommandRunner + 'static>(
    driver: Data<RemoteDriver<R>>,
    body: Json<EntityCommandRequest>,
) -> HttpResponse {
    let request = body.into_inner();

    // Dispatch blocks on the frontend's HTTP reply
    let result = web::block(move || {
        driver.handle_command(&request.entity_id, &request.cmd_id, request.params.as_ref())
    })
    .await;

    match result {
        Ok(status) => {
            let http_status =
                HttpStatus::from_u16(status.code()).unwrap_or(HttpStatus::INTERNAL_SERVER_ERROR);
            HttpResponse::build(http_status).json(json!({ "code": status.code() }))
        }
        Err(_) => HttpResponse::InternalServerError().body("Command failed"),
    }
}

/// Malformed command bodies get the same `{"code":N}` reply as rejected commands
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("Invalid command request: {}", err);
    let code = StatusCode::BadRequest.code();
    let response = HttpResponse::BadRequest().json(json!({ "code": code }));
    InternalError::from_response(err, response).into()
}

/// Register the hub-facing routes for a driver of type `R`
pub fn configure<R: CommandRunner + 'static>(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(json_error))
        .route("/api/connect", web::post().to(connect::<R>))
        .route("/api/entity", web::get().to(get_entity::<R>))
        .route("/api/entity/command", web::post().to(entity_command::<R>));
}
