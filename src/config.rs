//! Default classification code.
//!
//! Constructors that do not take an explicit code fall back to a default.
//! Two ways to supply it:
//!
//! - **Process-wide**: an atomic set once at startup with [`set_default_code`]
//!   (or [`ErrorConfig::install`]). Read by [`EnhancedError::with_default_code`]
//!   and [`EnhancedError::simple`].
//! - **Injected**: an [`ErrorConfig`] value owned by the application and passed
//!   to whatever builds errors. Its constructors never touch global state, which
//!   keeps tests independent of one another.
//!
//! Changing the default only affects errors built afterwards. Existing values
//! keep the code they were created with.
//!
//! # Example
//!
//! ```rust
//! use enhanced_errors::ErrorConfig;
//!
//! let config = ErrorConfig::new(500);
//! let err = config.error("pool exhausted after 32 waiters", "please retry later");
//! assert_eq!(err.code(), 500);
//! ```

use crate::EnhancedError;
use std::borrow::Cow;
use std::sync::atomic::{AtomicI64, Ordering};

/// Default code in effect before the application configures one.
pub const INITIAL_DEFAULT_CODE: i64 = 0;

static DEFAULT_CODE: AtomicI64 = AtomicI64::new(INITIAL_DEFAULT_CODE);

/// Current process-wide default code.
#[inline]
pub fn default_code() -> i64 {
    DEFAULT_CODE.load(Ordering::Acquire)
}

/// Set the process-wide default code.
///
/// Intended to be called once during startup, before errors are built.
/// The store is atomic, but callers are still responsible for ordering it
/// relative to constructions on other threads.
#[inline]
pub fn set_default_code(code: i64) {
    DEFAULT_CODE.store(code, Ordering::Release);
}

/// Restore the process-wide default code to [`INITIAL_DEFAULT_CODE`].
#[inline]
pub fn reset_default_code() {
    set_default_code(INITIAL_DEFAULT_CODE);
}

/// Explicit error configuration owned by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorConfig {
    default_code: i64,
}

impl ErrorConfig {
    /// Configuration with the given default code.
    #[inline]
    pub const fn new(default_code: i64) -> Self {
        Self { default_code }
    }

    /// Snapshot of the process-wide configuration.
    #[inline]
    pub fn current() -> Self {
        Self::new(default_code())
    }

    /// Code used by constructors built from this configuration.
    #[inline]
    pub const fn default_code(&self) -> i64 {
        self.default_code
    }

    /// Publish this configuration as the process-wide default.
    #[inline]
    pub fn install(self) {
        set_default_code(self.default_code);
    }

    /// Build an error with this configuration's default code.
    #[inline]
    pub fn error(
        &self,
        private: impl Into<Cow<'static, str>>,
        public: impl Into<Cow<'static, str>>,
    ) -> EnhancedError {
        EnhancedError::with_code(private, public, self.default_code)
    }

    /// Build an error whose private and public messages are both `message`.
    #[inline]
    pub fn simple(&self, message: impl Into<Cow<'static, str>>) -> EnhancedError {
        let message = message.into();
        EnhancedError::with_code(message.clone(), message, self.default_code)
    }
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self::new(INITIAL_DEFAULT_CODE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_initial_code() {
        assert_eq!(ErrorConfig::default().default_code(), INITIAL_DEFAULT_CODE);
    }

    #[test]
    fn config_error_uses_config_code() {
        let config = ErrorConfig::new(418);
        let err = config.error("teapot sensor offline", "unavailable");

        assert_eq!(err.code(), 418);
        assert_eq!(err.private(), "teapot sensor offline");
        assert_eq!(err.public(), "unavailable");
    }

    #[test]
    fn config_simple_duplicates_message() {
        let config = ErrorConfig::new(-7);
        let err = config.simple(String::from("disk full"));

        assert_eq!(err.code(), -7);
        assert_eq!(err.private(), "disk full");
        assert_eq!(err.public(), "disk full");
    }

    #[test]
    fn configs_are_independent() {
        let a = ErrorConfig::new(1);
        let b = ErrorConfig::new(2);

        assert_eq!(a.simple("x").code(), 1);
        assert_eq!(b.simple("x").code(), 2);
    }
}
