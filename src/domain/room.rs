// src/domain/room.rs

use crate::domain::booking_error::BookingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Standard,
    Family,
    Deluxe,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 3] = [
        RoomCategory::Standard,
        RoomCategory::Family,
        RoomCategory::Deluxe,
    ];

    /// Lowercase name used in URLs and in the stored document.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Standard => "standard",
            RoomCategory::Family => "family",
            RoomCategory::Deluxe => "deluxe",
        }
    }

    /// "Deluxe Room", as shown on the confirmation and receipt.
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{} Room", first.to_ascii_uppercase(), chars.as_str()),
            None => "Room".to_string(),
        }
    }

    pub fn path(&self) -> String {
        format!("/rooms/{}", self.as_str())
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomCategory {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomCategory::Standard),
            "family" => Ok(RoomCategory::Family),
            "deluxe" => Ok(RoomCategory::Deluxe),
            other => Err(BookingError::UnknownCategory(other.to_string())),
        }
    }
}

/// Nightly price per room category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTable {
    prices: BTreeMap<RoomCategory, i64>,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::empty()
            .with_price(RoomCategory::Standard, 1953)
            .with_price(RoomCategory::Family, 1964)
            .with_price(RoomCategory::Deluxe, 1718)
    }
}

impl PricingTable {
    pub fn empty() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    pub fn with_price(mut self, category: RoomCategory, nightly: i64) -> Self {
        self.prices.insert(category, nightly);
        self
    }

    pub fn price(&self, category: RoomCategory) -> Result<i64, BookingError> {
        self.prices
            .get(&category)
            .copied()
            .ok_or_else(|| BookingError::UnknownCategory(category.as_str().to_string()))
    }

    /// Priced categories in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (RoomCategory, i64)> + '_ {
        self.prices.iter().map(|(c, p)| (*c, *p))
    }
}
