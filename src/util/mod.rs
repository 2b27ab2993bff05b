pub mod controllers;
pub mod validate;
