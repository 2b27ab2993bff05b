use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::error::RegistryError;
use crate::models::{Chain, NewChain, NewRpcUrl, Records, RpcUrl, Table};

/// Read/write access to the two registry tables. Every mutation is a single
/// statement, so a uniqueness violation rolls back atomically and leaves the
/// store unchanged.
pub struct StorageRepo {
    pool: Pool<Sqlite>,
}

/// Map a driver error on a keyed insert/update to the registry taxonomy.
fn conflict_or_internal(err: sqlx::Error, key: &str) -> RegistryError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => RegistryError::Conflict(key.to_owned()),
        _ => RegistryError::Internal(err),
    }
}

impl StorageRepo {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, RegistryError> {
        // sqlx enables SQLite's foreign_keys pragma by default; the schema
        // declares the key without enforcing it (see DESIGN.md).
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let repo = Self { pool };
        repo.create_tables_if_not_exist().await?;
        Ok(repo)
    }

    async fn create_tables_if_not_exist(&self) -> Result<(), RegistryError> {
        info!("creating registry tables if they do not exist");
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS chains
             (name TEXT PRIMARY KEY UNIQUE NOT NULL,
              api_class TEXT NOT NULL)",
        )
        .execute(&self.pool)
        .await?;
        // The foreign key is declared but not enforced: deleting a chain
        // leaves its url rows behind (see DESIGN.md).
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS rpc_urls
             (url TEXT PRIMARY KEY UNIQUE NOT NULL,
              chain_name TEXT NOT NULL,
              FOREIGN KEY(chain_name) REFERENCES chains(name))",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn create_chain(&self, new_chain: &NewChain) -> Result<(), RegistryError> {
        sqlx::query("INSERT INTO chains (name, api_class) VALUES (?, ?)")
            .bind(&new_chain.name)
            .bind(&new_chain.api_class)
            .execute(&self.pool)
            .await
            .map_err(|err| conflict_or_internal(err, &new_chain.name))?;
        Ok(())
    }

    pub async fn create_rpc_url(&self, new_rpc_url: &NewRpcUrl) -> Result<(), RegistryError> {
        sqlx::query("INSERT INTO rpc_urls (url, chain_name) VALUES (?, ?)")
            .bind(&new_rpc_url.url)
            .bind(&new_rpc_url.chain_name)
            .execute(&self.pool)
            .await
            .map_err(|err| conflict_or_internal(err, &new_rpc_url.url))?;
        Ok(())
    }

    /// Full listing of one table in its canonical projection, order
    /// unspecified.
    pub async fn list(&self, table: Table) -> Result<Records, RegistryError> {
        match table {
            Table::Chains => sqlx::query_as::<_, Chain>("SELECT name, api_class FROM chains")
                .fetch_all(&self.pool)
                .await
                .map(Records::Chains),
            Table::RpcUrls => sqlx::query_as::<_, RpcUrl>("SELECT url, chain_name FROM rpc_urls")
                .fetch_all(&self.pool)
                .await
                .map(Records::RpcUrls),
        }
        .map_err(RegistryError::from)
    }

    pub async fn get_chain_by_name(&self, name: &str) -> Result<Option<Chain>, RegistryError> {
        sqlx::query_as::<_, Chain>("SELECT name, api_class FROM chains WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(RegistryError::from)
    }

    pub async fn get_rpc_url_by_url(&self, url: &str) -> Result<Option<RpcUrl>, RegistryError> {
        sqlx::query_as::<_, RpcUrl>("SELECT url, chain_name FROM rpc_urls WHERE url = ?")
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(RegistryError::from)
    }

    pub async fn get_urls_for_chain(&self, chain_name: &str) -> Result<Vec<String>, RegistryError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM rpc_urls WHERE chain_name = ?")
            .bind(chain_name)
            .fetch_all(&self.pool)
            .await
            .map_err(RegistryError::from)
    }

    /// Rewrite the row keyed by `old_url`. Returns the affected row count;
    /// zero means no such row existed.
    pub async fn update_rpc_url(
        &self,
        old_url: &str,
        new_url: &str,
        new_chain_name: &str,
    ) -> Result<u64, RegistryError> {
        sqlx::query("UPDATE rpc_urls SET url = ?, chain_name = ? WHERE url = ?")
            .bind(new_url)
            .bind(new_chain_name)
            .bind(old_url)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|err| conflict_or_internal(err, new_url))
    }

    pub async fn delete_chain(&self, name: &str) -> Result<u64, RegistryError> {
        sqlx::query("DELETE FROM chains WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(RegistryError::from)
    }

    pub async fn delete_rpc_url(&self, url: &str) -> Result<u64, RegistryError> {
        sqlx::query("DELETE FROM rpc_urls WHERE url = ?")
            .bind(url)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(RegistryError::from)
    }

    pub async fn delete_rpc_urls_by_chain(&self, chain_name: &str) -> Result<u64, RegistryError> {
        sqlx::query("DELETE FROM rpc_urls WHERE chain_name = ?")
            .bind(chain_name)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(RegistryError::from)
    }
}
