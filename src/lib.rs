//! Arithmetic mean and exponentially weighted moving average over explicit
//! numeric series, served as stateless request/response operations.
//!
//! The core ([`series`], [`algo`], [`response`], [`ops`]) is pure and
//! synchronous. [`server`] maps it onto HTTP with axum.

pub mod algo;
pub mod config;
pub mod error;
pub mod metrics;
pub mod ops;
pub mod response;
pub mod series;
pub mod server;

pub use error::InvalidInput;
pub use ops::{compute_average_operation, compute_ewma_operation};
pub use series::{NumericSeries, SmoothingFactor, validate};
