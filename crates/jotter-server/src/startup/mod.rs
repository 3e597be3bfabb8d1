//! Application startup utilities module.
//!
//! This module contains initialization code for the HTTP server, logging,
//! and graceful shutdown.

mod http;
mod logging;
mod shutdown;

pub use http::api_server;
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{GracefulShutdown, ShutdownSignal, wait_for_shutdown_signal};
