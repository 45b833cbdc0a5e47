//! # Enhanced Errors
//!
//! Error values that carry two messages, one for each side of a trust
//! boundary, plus an integer classification code.
//!
//! ## Design Philosophy
//!
//! 1. **Private messages contain full detail** for internal diagnostics
//! 2. **Public messages are what untrusted callers see**, chosen per instance
//! 3. **Codes classify errors** without parsing message text
//! 4. **The compatible path is the internal one**: `Display` writes the
//!    private message, so asking for the public one is always explicit
//!
//! A missing error (`Ok`, `None`) means success. There is no "zero" error.
//!
//! The crate never rewrites or scrubs messages. Keeping the public message
//! free of internal detail is up to whoever builds the error.
//!
//! ## Quick Start
//!
//! ```rust
//! use enhanced_errors::{EnhancedError, Result};
//!
//! fn connect(host: &str) -> Result<()> {
//!     Err(EnhancedError::with_code(
//!         format!("db connection refused at {host}"),
//!         "service temporarily unavailable",
//!         503,
//!     ))
//! }
//!
//! let err = connect("10.0.0.5:5432").unwrap_err();
//!
//! // Internal log: full detail
//! assert_eq!(err.to_string(), "db connection refused at 10.0.0.5:5432");
//!
//! // External response: safe text and a code to map to a status
//! assert_eq!(err.public(), "service temporarily unavailable");
//! assert_eq!(err.code(), 503);
//! ```
//!
//! ## Default Code
//!
//! ```rust
//! use enhanced_errors::{EnhancedError, ErrorConfig};
//!
//! // Injected configuration, no global state involved
//! let config = ErrorConfig::new(500);
//! assert_eq!(config.simple("worker pool closed").code(), 500);
//!
//! // Process-wide default, set once at startup
//! ErrorConfig::new(500).install();
//! assert_eq!(EnhancedError::simple("worker pool closed").code(), 500);
//! # enhanced_errors::reset_default_code();
//! ```
//!
//! ## Features
//!
//! - `trusted_debug`: `InternalLog::format_for_trusted_debug` (debug builds only)

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod config;
pub mod convenience;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;

/// Type alias for Results using our error type.
pub type Result<T> = result::Result<T, EnhancedError>;
