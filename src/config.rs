use serde::{Deserialize, Serialize};
use crate::models::Pricing;
use crate::utils::constants::{API_BASE_URL, DELIVERY_FEE, TAX_RATE_PERCENT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url_development: String,
    pub api_base_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub cart_config: CartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url_development: API_BASE_URL.to_string(),
            api_base_url_production: API_BASE_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            cart_config: CartConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    pub delivery_fee: u64,
    pub tax_rate_percent: f64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            delivery_fee: DELIVERY_FEE,
            tax_rate_percent: TAX_RATE_PERCENT,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url_development: option_env!("API_BASE_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url_development),
            api_base_url_production: option_env!("API_BASE_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.api_base_url_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            cart_config: CartConfig {
                delivery_fee: option_env!("DELIVERY_FEE")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DELIVERY_FEE),
                tax_rate_percent: option_env!("TAX_RATE_PERCENT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(TAX_RATE_PERCENT),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn api_base_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_url_production,
            _ => &self.api_base_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Timeout de red en milisegundos (0 = sin timeout)
    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds.saturating_mul(1000)
    }

    pub fn pricing(&self) -> Pricing {
        Pricing {
            delivery_fee: self.cart_config.delivery_fee,
            tax_rate_percent: self.cart_config.tax_rate_percent,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_base_url() {
        let mut config = AppConfig {
            api_base_url_development: "http://dev".to_string(),
            api_base_url_production: "https://prod".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "http://dev");
        config.environment = "production".to_string();
        assert_eq!(config.api_base_url(), "https://prod");
    }

    #[test]
    fn default_pricing_matches_cart_constants() {
        let pricing = AppConfig::default().pricing();
        assert_eq!(pricing.delivery_fee, 200);
        assert_eq!(pricing.tax_rate_percent, 5.0);
        assert_eq!(AppConfig::default().network_timeout_ms(), 30_000);
    }
}
