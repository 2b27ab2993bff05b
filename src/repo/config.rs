use anyhow::{anyhow, Result};

pub struct ConfigRepo {
    pub port: i32,
    pub database_url: String,
    pub jwt_secret_key: String,
    pub jwt_expiration: u64,
    pub admin_username: String,
    pub admin_password: String,
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name).map_err(|err| anyhow!("failed to access \"{name}\" var: {err}"))
}

impl ConfigRepo {
    pub fn new() -> Result<Self> {
        let port = required_var("PORT").and_then(|p| {
            p.parse::<i32>()
                .map_err(|err| anyhow!("failed to parse port: {err}"))
        })?;
        let database_url = required_var("DATABASE_URL")?;
        let jwt_secret_key = required_var("JWT_SECRET_KEY")?;
        let jwt_expiration = required_var("JWT_EXPIRATION").and_then(|e| {
            e.parse::<u64>()
                .map_err(|err| anyhow!("failed to parse jwt expiration: {err}"))
        })?;
        let admin_username = required_var("ADMIN_USERNAME")?;
        let admin_password = required_var("ADMIN_PASSWORD")?;

        Ok(Self {
            port,
            database_url,
            jwt_secret_key,
            jwt_expiration,
            admin_username,
            admin_password,
        })
    }
}
