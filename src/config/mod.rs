use std::env;
use std::time::Duration;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_base_uri: String,
    pub jwt_secret: String,
    pub jwt_expiration_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let jwt_expiration = env::var("JWT_EXPIRATION")?
            .trim_end_matches('h')
            .parse::<u64>()
            .unwrap_or(24);

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            server_host: env::var("SERVER_HOST")?,
            server_port: env::var("SERVER_PORT")?.parse().unwrap_or(3000),
            api_base_uri: env::var("API_BASE_URI").unwrap_or_else(|_| "/api".into()),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_secs: jwt_expiration * 3600,
        })
    }

    pub fn jwt_expiration(&self) -> Duration {
        Duration::from_secs(self.jwt_expiration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_required_vars_and_defaults() {
        // Single test touching process env, so no interleaving with other tests.
        unsafe {
            env::set_var("DATABASE_URL", "postgres://localhost/contacts");
            env::set_var("SERVER_HOST", "0.0.0.0");
            env::set_var("SERVER_PORT", "not-a-port");
            env::set_var("JWT_SECRET", "secret");
            env::set_var("JWT_EXPIRATION", "12h");
            env::remove_var("API_BASE_URI");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.api_base_uri, "/api");
        assert_eq!(config.jwt_expiration_secs, 12 * 3600);
        assert_eq!(config.jwt_expiration(), Duration::from_secs(12 * 3600));
    }
}
