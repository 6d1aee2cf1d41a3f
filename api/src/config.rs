use std::env;

#[derive(Clone)]
pub struct Config {
    /// Publication mode flag, logged at startup
    pub ambiente_publicacao: String,
    /// API key for the weather upstream
    pub weather_api_key: String,
    /// Base URL of the postal-code upstream
    pub viacep_url: String,
    /// Full URL of the weather upstream's current-conditions endpoint
    pub weather_api_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            ambiente_publicacao: env::var("AMBIENTE_PUBLICACAO")
                .expect("AMBIENTE_PUBLICACAO must be set"),
            weather_api_key: env::var("WEATHER_API_KEY").expect("WEATHER_API_KEY must be set"),
            viacep_url: env::var("VIACEP_URL")
                .unwrap_or_else(|_| "https://viacep.com.br/ws".to_string()),
            weather_api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| "https://api.weatherapi.com/v1/current.json".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        }
    }
}
