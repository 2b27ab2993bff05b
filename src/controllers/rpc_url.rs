use std::sync::Arc;

use log::info;
use rocket::{delete, get, http::Status, put, serde::json::Json, State};
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::error::RegistryError;
use crate::models::auth::AuthUser;
use crate::models::{NewRpcUrl, RpcUrl};
use crate::services::registry::RegistryService;
use crate::util::controllers::{ResponseError, ResponseMessage, ResponseResult};
use crate::util::validate::compose_url;

#[derive(Debug, Serialize, JsonSchema)]
pub struct BulkDeleted {
    pub message: String,
    pub deleted: u64,
}

#[openapi(tag = "RpcUrls")]
#[get("/get_urls/<chain_name>")]
pub async fn get_urls(
    chain_name: &str,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<Vec<String>> {
    registry_service
        .get_urls_for_chain(chain_name)
        .await
        .map(Json)
        .map_err(|err| match err {
            RegistryError::NotFound => ResponseError {
                error: format!("No urls found for chain {chain_name}"),
                status: Status::NotFound,
            },
            other => ResponseError::from(other),
        })
}

/// Rewrite the url record keyed by the composed old url:
///
/// `PUT /update_url?protocol=http&address=chain4.com` with body
/// `{"url": "http://chain6.com", "chain_name": "chain6"}`
#[openapi(tag = "RpcUrls")]
#[put("/update_url?<protocol>&<address>", format = "json", data = "<update>")]
pub async fn put_update_url(
    _user: AuthUser,
    protocol: Option<&str>,
    address: Option<&str>,
    update: Json<Value>,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<RpcUrl> {
    let old_url = compose_url(protocol, address)?;
    let update: NewRpcUrl =
        serde_json::from_value(update.into_inner()).map_err(|_| ResponseError {
            error: "Missing required parameters".to_owned(),
            status: Status::BadRequest,
        })?;

    registry_service
        .update_rpc_url(&old_url, &update)
        .await
        .map(Json)
        .map_err(ResponseError::from)
}

/// `DELETE /delete_url?protocol=http&address=chain5.com`
#[openapi(tag = "RpcUrls")]
#[delete("/delete_url?<protocol>&<address>")]
pub async fn delete_url(
    _user: AuthUser,
    protocol: Option<&str>,
    address: Option<&str>,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<ResponseMessage> {
    let url = compose_url(protocol, address)?;
    registry_service.delete_rpc_url(&url).await?;
    Ok(ResponseMessage::build("Record deleted successfully"))
}

/// Bulk cleanup of every url registered for a chain. Zero matches is a
/// success, not an error.
#[openapi(tag = "RpcUrls")]
#[delete("/delete_url/<chain_name>")]
pub async fn delete_urls_by_chain(
    _user: AuthUser,
    chain_name: &str,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<BulkDeleted> {
    let deleted = registry_service.delete_rpc_urls_by_chain(chain_name).await?;
    info!("deleted {deleted} url record(s) for chain {chain_name}");
    Ok(Json(BulkDeleted {
        message: "Records deleted successfully".to_owned(),
        deleted,
    }))
}
