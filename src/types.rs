//! Core data types for the storefront catalog

use serde::{Deserialize, Serialize};

/// One rentable vehicle offering as shown on the storefront.
///
/// `price_per_day` and `is_favorite` are optional at the data layer;
/// rendering resolves them against [`CardDefaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    pub name: String,
    /// Free-text category label ("Sport", "SUV", "Sedan", ...)
    pub category: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl CarListing {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image_url: image_url.into(),
            price_per_day: None,
            is_favorite: None,
        }
    }

    /// Marks the listing as a customer favorite.
    pub fn favorite(mut self) -> Self {
        self.is_favorite = Some(true);
        self
    }

    /// Sets an explicit daily rate instead of the storefront default.
    pub fn priced(mut self, price_per_day: f64) -> Self {
        self.price_per_day = Some(price_per_day);
        self
    }

    /// Daily rate with the storefront default applied.
    pub fn resolved_price(&self, defaults: &CardDefaults) -> f64 {
        self.price_per_day.unwrap_or(defaults.price_per_day)
    }

    /// Favorite state with the storefront default applied.
    pub fn resolved_favorite(&self, defaults: &CardDefaults) -> bool {
        self.is_favorite.unwrap_or(defaults.is_favorite)
    }

    /// Checks the authoring invariants: non-empty name and category, and a
    /// non-negative finite daily rate when one is set.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.name.trim().is_empty() {
            return Err(ListingError::EmptyName);
        }
        if self.category.trim().is_empty() {
            return Err(ListingError::EmptyCategory(self.name.clone()));
        }
        if let Some(price) = self.price_per_day {
            if !price.is_finite() || price < 0.0 {
                return Err(ListingError::InvalidPrice(self.name.clone()));
            }
        }
        Ok(())
    }
}

/// Rendering defaults for listings that omit optional fields, resolved once
/// at composition time rather than at each call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDefaults {
    /// Daily rate used when a listing carries no price.
    pub price_per_day: f64,
    /// Favorite state used when a listing carries none.
    pub is_favorite: bool,
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            price_per_day: 99.00,
            is_favorite: false,
        }
    }
}

/// Authoring errors in catalog data. These are reported through logging at
/// catalog construction; rendering itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingError {
    #[error("listing has an empty name")]
    EmptyName,

    #[error("listing `{0}` has an empty category")]
    EmptyCategory(String),

    #[error("listing `{0}` has a negative or non-finite daily price")]
    InvalidPrice(String),
}

/// Formats a currency amount with a dollar sign and exactly two decimals.
pub fn dollars(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_always_shows_two_decimals() {
        assert_eq!(dollars(99.0), "$99.00");
        assert_eq!(dollars(12.5), "$12.50");
        assert_eq!(dollars(0.0), "$0.00");
        assert_eq!(dollars(120.125), "$120.12");
    }

    #[test]
    fn omitted_fields_resolve_to_storefront_defaults() {
        let listing = CarListing::new("Koenigsegg", "Sport", "/car.png");
        let defaults = CardDefaults::default();

        assert_eq!(listing.resolved_price(&defaults), 99.00);
        assert!(!listing.resolved_favorite(&defaults));
    }

    #[test]
    fn explicit_fields_win_over_defaults() {
        let listing = CarListing::new("CR-V", "SUV", "/suv.png")
            .priced(12.5)
            .favorite();
        let defaults = CardDefaults::default();

        assert_eq!(listing.resolved_price(&defaults), 12.5);
        assert!(listing.resolved_favorite(&defaults));
    }

    #[test]
    fn validate_accepts_wellformed_listings() {
        assert_eq!(CarListing::new("Porsche 911", "Sport", "/car.png").validate(), Ok(()));
        assert_eq!(
            CarListing::new("CR-V", "SUV", "/suv.png").priced(0.0).validate(),
            Ok(())
        );
    }

    #[test]
    fn validate_rejects_bad_prices() {
        let negative = CarListing::new("CR-V", "SUV", "/suv.png").priced(-1.0);
        assert_eq!(
            negative.validate(),
            Err(ListingError::InvalidPrice("CR-V".to_string()))
        );

        let nan = CarListing::new("CR-V", "SUV", "/suv.png").priced(f64::NAN);
        assert_eq!(
            nan.validate(),
            Err(ListingError::InvalidPrice("CR-V".to_string()))
        );
    }

    #[test]
    fn validate_rejects_blank_display_fields() {
        assert_eq!(
            CarListing::new("", "Sport", "/car.png").validate(),
            Err(ListingError::EmptyName)
        );
        assert_eq!(
            CarListing::new("Koenigsegg", "  ", "/car.png").validate(),
            Err(ListingError::EmptyCategory("Koenigsegg".to_string()))
        );
    }
}
