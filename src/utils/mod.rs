//! The `utils` module provides shared pieces used across `ordercast`: the
//! error types and the logging setup.

pub mod error;
pub mod logging;
