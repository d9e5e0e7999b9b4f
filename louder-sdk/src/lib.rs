//! Wire types and HTTP client for the Louder event listing backend.
//!
//! The `objects` module is always available. The typed HTTP client lives in
//! `client` and is gated behind the `client` cargo feature.

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
