use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, Map};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub server_url: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_pool_size: usize,
    pub stripe_secret_key: String,
    pub stripe_webhook_secret: String,
    pub stripe_api_base: String,
    /// Maximum age of a signed webhook, in seconds. Zero disables the check.
    pub stripe_webhook_tolerance_secs: i64,
    pub checkout_currency: String,
    pub checkout_success_url: String,
    pub checkout_cancel_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(None)
    }

    /// Builds settings from `APP_*` variables. Passing a map replaces the
    /// process environment as the source.
    pub fn from_env(source: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .set_default("server_url", "0.0.0.0")?
            .set_default("server_port", 8080_i64)?
            .set_default("db_host", "localhost")?
            .set_default("db_port", 5432_i64)?
            .set_default("db_name", "course_market")?
            .set_default("db_user", "postgres")?
            .set_default("db_password", "postgres")?
            .set_default("db_pool_size", 16_i64)?
            .set_default("stripe_api_base", "https://api.stripe.com")?
            .set_default("stripe_webhook_tolerance_secs", 300_i64)?
            .set_default("checkout_currency", "inr")?
            .set_default("checkout_success_url", "http://localhost:3000/success")?
            .set_default("checkout_cancel_url", "http://localhost:3000/cancel")?
            .add_source(Environment::with_prefix("APP")
                .try_parsing(true)
                .source(source)
            )
            .build()?;

        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_fill_everything_but_secrets() {
        let settings = Settings::from_env(Some(env(&[
            ("APP_STRIPE_SECRET_KEY", "sk_test_123"),
            ("APP_STRIPE_WEBHOOK_SECRET", "whsec_abc"),
        ])))
        .expect("settings should load");

        assert_eq!(settings.server_port, 8080);
        assert_eq!(settings.db_port, 5432);
        assert_eq!(settings.stripe_api_base, "https://api.stripe.com");
        assert_eq!(settings.stripe_webhook_tolerance_secs, 300);
        assert_eq!(settings.checkout_currency, "inr");
        assert_eq!(settings.stripe_webhook_secret, "whsec_abc");
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_env(Some(env(&[
            ("APP_STRIPE_SECRET_KEY", "sk_test_123"),
            ("APP_STRIPE_WEBHOOK_SECRET", "whsec_abc"),
            ("APP_SERVER_PORT", "9090"),
            ("APP_DB_HOST", "db.internal"),
            ("APP_STRIPE_WEBHOOK_TOLERANCE_SECS", "0"),
        ])))
        .expect("settings should load");

        assert_eq!(settings.server_port, 9090);
        assert_eq!(settings.db_host, "db.internal");
        assert_eq!(settings.stripe_webhook_tolerance_secs, 0);
    }

    #[test]
    fn missing_webhook_secret_is_an_error() {
        let result = Settings::from_env(Some(env(&[("APP_STRIPE_SECRET_KEY", "sk_test_123")])));

        assert!(result.is_err());
    }
}
