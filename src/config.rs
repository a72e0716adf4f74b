use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // DATABASE_URL wins; otherwise compose it from the individual parts.
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = env::var("DB_DATABASE").unwrap_or_else(|_| "roadlog".to_string());
            let db_user = env::var("DB_USER").unwrap_or_else(|_| "roadlog".to_string());
            let db_pwd = env::var("DB_PWD").unwrap_or_else(|_| "roadlog".to_string());

            format!(
                "postgres://{}:{}@{}:{}/{}",
                db_user, db_pwd, db_host, db_port, db_name
            )
        });

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "roadlog-dev-secret".to_string());
        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            listen_addr,
            database_url,
            jwt_secret,
            token_ttl_hours,
            log_level,
        })
    }
}
