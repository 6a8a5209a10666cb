//! Algorithms implemented directly on feature collections.

mod filter;

pub use filter::RISK_LEVEL_PROPERTY;
