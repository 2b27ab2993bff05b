use std::sync::Arc;

use log::info;
use rocket::{get, http::Status, post, serde::json::Json, State};
use rocket_okapi::openapi;
use serde_json::Value;

use crate::models::auth::AuthUser;
use crate::models::{NewChain, NewRpcUrl, Records, Table};
use crate::services::registry::RegistryService;
use crate::util::controllers::{CreatedResult, ResponseCreated, ResponseError, ResponseResult};

fn parse_table(table: &str) -> Result<Table, ResponseError> {
    table.parse().map_err(|_| ResponseError {
        error: format!("unknown table {table}"),
        status: Status::BadRequest,
    })
}

/// Insert one record into the named table. The body shape depends on the
/// table, so it is decoded after the table segment is resolved.
#[openapi(tag = "Records")]
#[post("/create/<table>", format = "json", data = "<record>")]
pub async fn post_create(
    _user: AuthUser,
    table: &str,
    record: Json<Value>,
    registry_service: &State<Arc<RegistryService>>,
) -> CreatedResult {
    let table = parse_table(table)?;
    let record = record.into_inner();
    info!("create record in {table:?} from data: {record}");

    match table {
        Table::Chains => {
            let new_chain: NewChain =
                serde_json::from_value(record).map_err(|_| ResponseError {
                    error: "Both name and api_class entries are required".to_owned(),
                    status: Status::BadRequest,
                })?;
            registry_service.create_chain(&new_chain).await?;
            Ok(ResponseCreated::build(new_chain.name))
        }
        Table::RpcUrls => {
            let new_rpc_url: NewRpcUrl =
                serde_json::from_value(record).map_err(|_| ResponseError {
                    error: "Both url and chain_name entries are required".to_owned(),
                    status: Status::BadRequest,
                })?;
            registry_service.create_rpc_url(&new_rpc_url).await?;
            Ok(ResponseCreated::build(new_rpc_url.url))
        }
    }
}

#[openapi(tag = "Records")]
#[get("/all/<table>")]
pub async fn get_all(
    table: &str,
    registry_service: &State<Arc<RegistryService>>,
) -> ResponseResult<Records> {
    let table = parse_table(table)?;
    registry_service
        .list(table)
        .await
        .map(Json)
        .map_err(ResponseError::from)
}
