//! Core business entities.

pub mod click;
pub mod short_url;

pub use click::{Click, NewClick};
pub use short_url::{NewShortUrl, ShortUrl};
