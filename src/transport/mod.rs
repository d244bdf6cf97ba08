//! The `transport` module handles communication with clients over HTTP.
//!
//! It exposes the order API, implements the Server-Sent Events adapter that
//! turns a broker subscription into a live event stream, and runs the server
//! with a shutdown signal that also ends open streams.

pub mod error;
pub mod message;
pub mod routes;
pub mod server;
pub mod shutdown;
pub mod sse;

pub use routes::{AppState, router};
pub use server::{run, serve};
