#![warn(missing_debug_implementations, rust_2018_idioms)]
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

mod controllers;
mod error;
mod guards;
mod models;
mod repo;
mod services;
mod setup;
mod util;

use repo::config::ConfigRepo;
use repo::storage::StorageRepo;
use services::jwt::JwtService;
use services::registry::RegistryService;
use setup::setup_app;

const MAX_DB_CONNECTIONS: u32 = 5;

#[rocket::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config_repo =
        ConfigRepo::new().map_err(|err| anyhow!("failed to inititate config repo: {err}"))?;

    let storage_repo = StorageRepo::new(&config_repo.database_url, MAX_DB_CONNECTIONS)
        .await
        .context("failed to initiate storage repo")?;

    let registry_service = Arc::new(RegistryService::new(Arc::new(storage_repo)));
    let jwt_service = Arc::new(JwtService::new(
        config_repo.jwt_secret_key.clone(),
        config_repo.jwt_expiration,
    ));

    setup_app(registry_service, jwt_service, config_repo)
        .launch()
        .await
        .map(|_| {})
        .map_err(|err| anyhow!("Cant run application: {err}"))
}
