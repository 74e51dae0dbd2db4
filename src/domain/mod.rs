//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//! - [`reaper`] - Background removal of expired records
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves the code and replies immediately
//! 2. A [`click_event::ClickEvent`] is sent to a bounded channel
//! 3. [`click_worker::run_click_worker`] derives the geo origin and appends
//!    the click via [`repositories::UrlRepository`] with retry
//!
//! Click persistence is fire-and-forget relative to the HTTP response.

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod reaper;
pub mod repositories;
