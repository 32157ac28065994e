use serde::{Deserialize, Serialize};

use crate::services::assembly::{
    AssemblyConfig, FOLLOWED_WEIGHT, MAX_PAGE_SIZE, OWN_PACING_DIVISOR, OWN_PAGE_CAP, OWN_WEIGHT,
    RECOMMENDED_WEIGHT,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub assembly: AssemblyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            assembly: AssemblyConfig {
                own_pacing_divisor: std::env::var("FEED_OWN_PACING_DIVISOR")
                    .unwrap_or_else(|_| OWN_PACING_DIVISOR.to_string())
                    .parse()?,
                own_page_cap: std::env::var("FEED_OWN_PAGE_CAP")
                    .unwrap_or_else(|_| OWN_PAGE_CAP.to_string())
                    .parse()?,
                own_weight: std::env::var("FEED_OWN_WEIGHT")
                    .unwrap_or_else(|_| OWN_WEIGHT.to_string())
                    .parse()?,
                followed_weight: std::env::var("FEED_FOLLOWED_WEIGHT")
                    .unwrap_or_else(|_| FOLLOWED_WEIGHT.to_string())
                    .parse()?,
                recommended_weight: std::env::var("FEED_RECOMMENDED_WEIGHT")
                    .unwrap_or_else(|_| RECOMMENDED_WEIGHT.to_string())
                    .parse()?,
                max_page_size: std::env::var("FEED_MAX_PAGE_SIZE")
                    .unwrap_or_else(|_| MAX_PAGE_SIZE.to_string())
                    .parse()?,
            },
        })
    }
}
