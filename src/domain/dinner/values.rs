//! Value objects describing where a dinner takes place and what it costs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{bounded_text, ValidationError, MAX_NAME_LENGTH};

const MAX_ADDRESS_LENGTH: usize = 200;

/// Venue of a dinner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location.
    ///
    /// # Errors
    ///
    /// - `EmptyField` / `TooLong` for a blank or overlong name or address
    /// - `InvalidFormat` if coordinates are outside WGS84 bounds
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ValidationError> {
        let name = bounded_text("location.name", name.into(), MAX_NAME_LENGTH)?;
        let address = bounded_text("location.address", address.into(), MAX_ADDRESS_LENGTH)?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::invalid_format(
                "location.latitude",
                "must be between -90 and 90",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::invalid_format(
                "location.longitude",
                "must be between -180 and 180",
            ));
        }
        Ok(Self {
            name,
            address,
            latitude,
            longitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Price per guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    amount: f64,
    currency: String,
}

impl Price {
    /// Creates a price; `currency` is an ISO 4217 code and is upper-cased.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` for a negative or non-finite amount or a malformed currency
    pub fn new(amount: f64, currency: impl Into<String>) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::invalid_format(
                "price.amount",
                "must be a non-negative number",
            ));
        }
        let currency = currency.into().to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "price.currency",
                "must be a three letter code",
            ));
        }
        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
