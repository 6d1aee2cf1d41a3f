use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the forecast API computing the temperatures
    pub forecast_api_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            forecast_api_url: env::var("FORECAST_API_URL")
                .unwrap_or_else(|_| "http://service-b:3001".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }
}
