pub mod auth;

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered chain. `api_class` is lowercase text from the fixed set
/// checked by the validators.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, sqlx::FromRow)]
pub struct Chain {
    pub name: String,
    pub api_class: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct NewChain {
    pub name: String,
    pub api_class: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, sqlx::FromRow)]
pub struct RpcUrl {
    pub url: String,
    pub chain_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct NewRpcUrl {
    pub url: String,
    pub chain_name: String,
}

/// Aggregate view of a chain together with all of its registered urls.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain_name: String,
    pub api_class: String,
    pub urls: Vec<String>,
}

/// Closed set of registry tables. All store dispatch goes through this enum;
/// table names are never interpolated into SQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Chains,
    RpcUrls,
}

impl FromStr for Table {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "chains" => Ok(Table::Chains),
            "rpc_urls" => Ok(Table::RpcUrls),
            _ => Err(()),
        }
    }
}

/// Canonical projection of a full table listing.
#[derive(Clone, Debug, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Records {
    Chains(Vec<Chain>),
    RpcUrls(Vec<RpcUrl>),
}
