//! Request and response types for the HTTP API.

pub mod clicks;
pub mod health;
pub mod shorten;
pub mod stats;
