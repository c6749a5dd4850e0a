//! Route descriptors for the lepre HTTP router.
//!
//! This crate provides the value object a router is configured with:
//!
//! - [`Route`]: path pattern, opaque handler, allowed methods and name
//! - [`AllowedMethods`]: the effective allow list of a route
//! - [`Method`] and [`SUPPORTED_METHODS`]: the accepted method vocabulary
//! - [`RouteConfig`]: serde form of a route for configuration files
//!
//! Matching requests against routes, building URLs and compiling path
//! patterns are the router's job, not this crate's.
//!
//! # Logging
//!
//! Mutations emit `tracing` events at `TRACE` level and rejected methods at
//! `DEBUG`. Install a subscriber in the application to see them.

#![forbid(unsafe_code)]

mod allowed;
pub mod config;
mod error;
pub mod method;
mod route;

pub use allowed::{AllowedMethods, Iter};
pub use config::{ConfigError, RouteConfig};
pub use error::RouteError;
pub use method::{Method, SUPPORTED_METHODS, is_supported};
pub use route::{Route, RouteName};
