use std::sync::Arc;

use rocket::{http::Status, post, serde::json::Json, State};
use rocket_okapi::openapi;

use crate::models::auth::{Credentials, TokenResponse};
use crate::repo::config::ConfigRepo;
use crate::services::jwt::JwtService;
use crate::util::controllers::{ResponseError, ResponseResult};

#[openapi(tag = "Auth")]
#[post("/token", format = "json", data = "<credentials>")]
pub fn post_token(
    credentials: Json<Credentials>,
    jwt_service: &State<Arc<JwtService>>,
    config_repo: &State<ConfigRepo>,
) -> ResponseResult<TokenResponse> {
    let credentials = credentials.into_inner();
    if credentials.username != config_repo.admin_username
        || credentials.password != config_repo.admin_password
    {
        return Err(ResponseError {
            error: "Bad username or password".to_owned(),
            status: Status::Unauthorized,
        });
    }

    let access_token = jwt_service.sign(&credentials.username).map_err(|err| {
        log::error!("failed to sign access token: {err}");
        ResponseError {
            error: "Internal error".to_owned(),
            status: Status::InternalServerError,
        }
    })?;

    Ok(Json(TokenResponse { access_token }))
}
