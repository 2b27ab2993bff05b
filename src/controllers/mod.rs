pub mod auth;
pub mod catchers;
pub mod chain;
pub mod records;
pub mod rpc_url;
pub mod status;
