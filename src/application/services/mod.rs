//! Application services orchestrating domain logic.

pub mod stats_service;
pub mod url_service;

pub use stats_service::StatsService;
pub use url_service::UrlService;
