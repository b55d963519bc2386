//! Pricing engine module for hall bookings.
//!
//! Computes official prices, the negotiation floor and the split-the-difference
//! settlement for a host's offer. The calculators are pure; routes expose them
//! over HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, NEGOTIATION_FLOOR_RATIO, SETTLEMENT_MIDPOINT};
pub use models::{FoodCatalog, FoodItem, Hall, OfferInput, OfferMode, PricingResult};
pub use routes::router;
pub use services::{booking_pricing, price_booking, PricingError};
