use rocket::catch;
use rocket::serde::json::{json, Value};

#[catch(401)]
pub fn unauthorized() -> Value {
    json!({"error": "Missing or invalid access token"})
}

#[catch(404)]
pub fn not_found() -> Value {
    json!({"error": "Record not found"})
}

#[catch(422)]
pub fn unprocessable_entity() -> Value {
    json!({"error": "Malformed request body"})
}

#[catch(500)]
pub fn internal_error() -> Value {
    json!({"error": "Internal error"})
}
