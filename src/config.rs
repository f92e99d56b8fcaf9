//! Configuration schema for the fixture server.
//!
//! There is no config file, environment lookup, or CLI surface: the binary
//! always runs with the defaults below (port 38212, 2 second delay). The
//! typed structure exists so integration tests can construct a server on an
//! ephemeral port with a shortened delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the fixture server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FixtureConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Delay applied by the `/delayed` route.
    pub delay: DelayConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. 38212 is the fixture's well-known port.
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:38212".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall per-request timeout in seconds. Must stay comfortably above
    /// the `/delayed` interval or that route would be clipped.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}

/// Delay configuration for the `/delayed` route.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Milliseconds to sleep before responding.
    pub response_ms: u64,
}

impl DelayConfig {
    /// The configured delay as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.response_ms)
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self { response_ms: 2_000 }
    }
}
