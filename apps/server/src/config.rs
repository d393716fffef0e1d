//! Server configuration sourced from the environment.

const DEV_JWT_SECRET: &str = "devsecret";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("FOLIO_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        let listen_addr =
            std::env::var("FOLIO_LISTEN_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
        let db_path = std::env::var("FOLIO_DB_PATH").unwrap_or_else(|_| "folio.db".to_string());
        let jwt_secret =
            std::env::var("FOLIO_JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string());
        let token_ttl_hours = std::env::var("FOLIO_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24 * 7);

        Config {
            listen_addr,
            db_path,
            jwt_secret,
            token_ttl_hours,
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
