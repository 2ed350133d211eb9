// src/config.rs
use crate::domain::{PricingTable, RoomCategory};
use crate::errors::ServerError;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub schema_path: String,
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// Prepended to every booking id, e.g. "DDI".
    pub id_prefix: String,
    pub hotel_name: String,
    pub pricing: PricingTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "drizzle.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            id_prefix: "DDI".to_string(),
            hotel_name: "Drizzle Drop Inn".to_string(),
            pricing: PricingTable::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `BOOKING_*` variables (a `.env` file is read first).
    pub fn from_env() -> Result<Self, ServerError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("BOOKING_DB_PATH") {
            cfg.db_path = v;
        }
        if let Some(v) = lookup("BOOKING_SCHEMA_PATH") {
            cfg.schema_path = v;
        }
        if let Some(v) = lookup("BOOKING_ADDR") {
            cfg.addr = parse_var("BOOKING_ADDR", &v)?;
        }
        if let Some(v) = lookup("BOOKING_MAX_WORKERS") {
            cfg.max_workers = parse_var("BOOKING_MAX_WORKERS", &v)?;
        }
        if let Some(v) = lookup("BOOKING_ID_PREFIX") {
            cfg.id_prefix = v;
        }
        if let Some(v) = lookup("BOOKING_HOTEL_NAME") {
            cfg.hotel_name = v;
        }

        for category in RoomCategory::ALL {
            let key = format!("BOOKING_PRICE_{}", category.as_str().to_ascii_uppercase());
            if let Some(v) = lookup(&key) {
                let price: i64 = parse_var(&key, &v)?;
                if price <= 0 {
                    return Err(ServerError::Config(format!(
                        "{key} must be a positive amount, got {price}"
                    )));
                }
                cfg.pricing = cfg.pricing.with_price(category, price);
            }
        }

        Ok(cfg)
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, ServerError>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid {key}={raw:?}: {e}")))
}
