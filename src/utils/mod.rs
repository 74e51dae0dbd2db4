//! Shared utilities.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Original URL validation
//! - [`client_ip`] - Best-effort client IP extraction
//! - [`extract_host`] - Host extraction for short link construction

pub mod client_ip;
pub mod code_generator;
pub mod extract_host;
pub mod url_validator;
