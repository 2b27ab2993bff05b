pub mod jwt;
pub mod registry;
