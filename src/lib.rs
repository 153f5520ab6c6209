//! JShort - terminal client for the JShort URL-shortening service
//!
//! The backend owns code generation, redirection and access counting; this
//! crate owns the client side: a local collection of shortened links, its
//! persisted snapshot, lifecycle classification against expiry dates, and
//! filtering/search over the collection.
//!
//! # Architecture
//! - `store`: the link collection and its mutation entry points
//! - `storage`: link records and snapshot persistence backends
//! - `classify`: expiry bucket computation (active / expiring / expired)
//! - `filter`: status + free-text filtering over the collection
//! - `api`: HTTP client for the shortening service
//! - `interfaces`: user interfaces (CLI)
//! - `config`: configuration management

pub mod api;
pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod filter;
pub mod interfaces;
pub mod storage;
pub mod store;
pub mod utils;
