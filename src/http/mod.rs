//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs (prefix dispatch: /reverse, /delayed, echo)
//!     → Send response to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
