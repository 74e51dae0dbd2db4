//! Offline IP geolocation via a local MaxMind database.

use std::net::IpAddr;

use maxminddb::Reader;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum GeoIpError {
    #[error("failed to open GeoIP database: {0}")]
    Open(#[from] maxminddb::MaxMindDbError),
}

/// Resolves a client IP to an ISO country code.
///
/// Implementations must be cheap and purely local; the click worker calls
/// this on its hot path.
#[cfg_attr(test, mockall::automock)]
pub trait GeoIpResolver: Send + Sync {
    /// Returns the two-letter ISO country code for an IP, if known.
    fn country_code(&self, ip: &str) -> Option<String>;
}

/// Resolver backed by a MaxMind GeoLite2 database file.
pub struct MaxMindResolver {
    reader: Reader<Vec<u8>>,
}

impl MaxMindResolver {
    /// Opens the database at the given path, reading it fully into memory.
    pub fn open(path: &str) -> Result<Self, GeoIpError> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self { reader })
    }
}

impl GeoIpResolver for MaxMindResolver {
    fn country_code(&self, ip: &str) -> Option<String> {
        let ip_addr: IpAddr = ip.parse().ok()?;
        if ip_addr.is_loopback() {
            return None;
        }

        let result = self.reader.lookup(ip_addr).ok()?;
        let city: maxminddb::geoip2::City = result.decode().ok()??;
        let country = city.country.iso_code.map(String::from);

        trace!(%ip, country = ?country, "geoip lookup");
        country
    }
}

/// Resolver used when no GeoIP database is configured. Always answers
/// "unknown", so clicks fall back to the sentinel country.
pub struct NullResolver;

impl GeoIpResolver for NullResolver {
    fn country_code(&self, _ip: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_resolver_returns_none() {
        assert_eq!(NullResolver.country_code("203.0.113.1"), None);
    }

    #[test]
    fn test_open_missing_database_fails() {
        assert!(MaxMindResolver::open("/nonexistent/GeoLite2-City.mmdb").is_err());
    }
}
