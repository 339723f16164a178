//! Concrete lookup client implementations.
//!
//! Each submodule wraps a single external API and implements the
//! [`LookupClient`](super::LookupClient) trait.

pub mod imdb;

pub use imdb::{ImdbClient, IMDB_BASE_URL};
