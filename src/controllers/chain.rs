use std::sync::Arc;

use log::info;
use rocket::{delete, get, http::Status, serde::json::Json, State};
use rocket_okapi::openapi;

use crate::models::auth::AuthUser;
use crate::models::{Chain, ChainInfo};
use crate::services::registry::RegistryService;
use crate::util::controllers::{ResponseError, ResponseMessage, ResponseResult};
use crate::util::validate::compose_url;

#[openapi(tag = "Chains")]
#[get("/get_chain_by_name/<name>")]
pub async fn get_chain_by_name(
    name: &str,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<Chain> {
    registry_service
        .get_chain_by_name(name)
        .await
        .map(Json)
        .map_err(ResponseError::from)
}

/// Resolve a chain from one of its urls, given as the 'protocol' and
/// 'address' query parameters:
///
/// `GET /get_chain_by_url?protocol=http&address=chain5.com`
#[openapi(tag = "Chains")]
#[get("/get_chain_by_url?<protocol>&<address>")]
pub async fn get_chain_by_url(
    protocol: Option<&str>,
    address: Option<&str>,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<Chain> {
    let url = compose_url(protocol, address)?;
    registry_service
        .get_chain_by_url(&url)
        .await
        .map(Json)
        .map_err(ResponseError::from)
}

#[openapi(tag = "Chains")]
#[get("/chain_info?<name>")]
pub async fn get_chain_info(
    name: Option<&str>,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<ChainInfo> {
    let Some(name) = name else {
        return Err(ResponseError {
            error: "Missing required parameter \"name\"".to_owned(),
            status: Status::BadRequest,
        });
    };
    registry_service
        .get_chain_info(name)
        .await
        .map(Json)
        .map_err(ResponseError::from)
}

/// Deleting a chain never fails on a missing name and does not cascade to
/// its url rows.
#[openapi(tag = "Chains")]
#[delete("/delete_chain/<name>")]
pub async fn delete_chain(
    _user: AuthUser,
    name: &str,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<ResponseMessage> {
    let deleted = registry_service.delete_chain(name).await?;
    info!("deleted {deleted} chain record(s) for name {name}");
    Ok(ResponseMessage::build("Record deleted successfully"))
}
