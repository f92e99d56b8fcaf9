//! Minimal HTTP fixture server for exercising URL-request clients.
//!
//! The server listens on a fixed port and exposes three behaviors a client
//! under test can poke at:
//!
//! - `/reverse` — echoes the request body with its characters reversed
//! - `/delayed` — waits a fixed interval before answering `Delayed`
//! - anything else — echoes the method and the raw request text
//!
//! It is test scaffolding, not a product: no TLS, no auth, no validation
//! beyond path matching. Requests whose path merely starts with `/reverse`
//! or `/delayed` without being exactly that route (trailing slash allowed)
//! still get the full body, but with a 404 status, so clients can be tested
//! against body-carrying error responses.

pub mod config;
pub mod http;
pub mod lifecycle;

pub use config::FixtureConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
