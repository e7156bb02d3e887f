use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

/// Where persisted store slices live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory (default: platform data dir + `amarshop`).
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

/// HTTP storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the storefront server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

/// Checkout and simulated payment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Flat shipping fee in taka (default: 60).
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: u64,
    /// Artificial wallet payment delay in milliseconds (default: 2000).
    #[serde(default = "default_payment_delay_ms")]
    pub payment_delay_ms: u64,
    /// City prefilled on the checkout form (default: "Dhaka").
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("amarshop")
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_shipping_fee() -> u64 {
    60
}

fn default_payment_delay_ms() -> u64 {
    2000
}

fn default_city() -> String {
    "Dhaka".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            shipping_fee: default_shipping_fee(),
            payment_delay_ms: default_payment_delay_ms(),
            default_city: default_city(),
        }
    }
}
