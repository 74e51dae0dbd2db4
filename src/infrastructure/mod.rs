//! Infrastructure layer: storage backends and external lookups.

pub mod geoip;
pub mod persistence;
