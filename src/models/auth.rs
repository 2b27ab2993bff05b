use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity extracted from a verified access token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct TokenResponse {
    pub access_token: String,
}
