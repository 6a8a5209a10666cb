//! Algorithms implemented on decoded geometries and feature collections.

pub mod geo;
pub mod native;
