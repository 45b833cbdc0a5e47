//! The enhanced error value and its capability trait.
//!
//! An [`EnhancedError`] carries two messages aimed at two audiences:
//!
//! - `private`: full detail for internal diagnostics. May name hosts, paths,
//!   query text, or anything else about the system's internals.
//! - `public`: what an untrusted caller is allowed to see.
//!
//! plus a caller-defined integer `code` for classifying the error without
//! parsing either message.
//!
//! # Trust Boundary
//!
//! `Display` writes the private message. That lets the type slot into every
//! place a conventional error goes (`?`, `Box<dyn Error>`, `to_string()`)
//! without changing behavior for internal paths. Code that talks to an
//! untrusted party must ask for [`EnhancedError::public`] by name, so the
//! choice is visible at each call site.
//!
//! The crate does not inspect the public message. Keeping it free of
//! sensitive text is the caller's job.
//!
//! # Memory
//!
//! Owned message buffers are zeroized on drop. Borrowed `'static` messages
//! live in the binary and are left alone.

use crate::config;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use zeroize::Zeroize;

/// Capability shared by errors that expose a code and two audience-specific
/// messages.
///
/// Anything implementing `Enhanced` is also a `std::error::Error`, and its
/// `Display` output is expected to match [`Enhanced::private`].
pub trait Enhanced: Error {
    /// Integer value representing the error class.
    ///
    /// Lets callers tell classes apart when every instance carries its own
    /// message text.
    fn code(&self) -> i64;

    /// Message for trusted, internal consumers.
    fn private(&self) -> &str;

    /// Message safe to show untrusted consumers.
    fn public(&self) -> &str;
}

/// Immutable error value with a classification code and separate private
/// and public messages.
///
/// "No error" is the absence of a value (`Ok`, `None`), so there is no
/// `Default` implementation.
///
/// # Example
///
/// ```rust
/// use enhanced_errors::EnhancedError;
///
/// let err = EnhancedError::with_code(
///     "db connection refused at 10.0.0.5:5432",
///     "service temporarily unavailable",
///     503,
/// );
///
/// assert_eq!(err.code(), 503);
/// assert_eq!(err.to_string(), err.private());
/// assert!(!err.public().contains("10.0.0.5"));
/// ```
#[must_use = "errors should be handled or logged"]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnhancedError {
    code: i64,
    private: Cow<'static, str>,
    public: Cow<'static, str>,
}

impl EnhancedError {
    /// Build an error with the process-wide default code.
    ///
    /// The default is read at call time; see [`config::set_default_code`].
    #[inline]
    pub fn with_default_code(
        private: impl Into<Cow<'static, str>>,
        public: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::with_code(private, public, config::default_code())
    }

    /// Build an error with an explicit code.
    #[inline]
    pub fn with_code(
        private: impl Into<Cow<'static, str>>,
        public: impl Into<Cow<'static, str>>,
        code: i64,
    ) -> Self {
        Self {
            code,
            private: private.into(),
            public: public.into(),
        }
    }

    /// Build an error whose private and public messages are both `message`,
    /// using the process-wide default code.
    ///
    /// A drop-in for "make an error from a string" in code that has not yet
    /// split its messages. Whatever goes in here is shown to untrusted
    /// callers too.
    #[inline]
    pub fn simple(message: impl Into<Cow<'static, str>>) -> Self {
        let message = message.into();
        Self::with_default_code(message.clone(), message)
    }

    /// Classification code.
    #[inline]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Internal-detail message.
    #[inline]
    pub fn private(&self) -> &str {
        self.private.as_ref()
    }

    /// Message safe for untrusted viewers.
    #[inline]
    pub fn public(&self) -> &str {
        self.public.as_ref()
    }
}

impl Enhanced for EnhancedError {
    #[inline]
    fn code(&self) -> i64 {
        self.code
    }

    #[inline]
    fn private(&self) -> &str {
        self.private.as_ref()
    }

    #[inline]
    fn public(&self) -> &str {
        self.public.as_ref()
    }
}

impl Zeroize for EnhancedError {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.private {
            s.zeroize();
        }
        if let Cow::Owned(ref mut s) = self.public {
            s.zeroize();
        }
    }
}

impl Drop for EnhancedError {
    #[inline(never)]
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Display for EnhancedError {
    /// Writes the private message, matching the single-message error contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.private())
    }
}

impl Error for EnhancedError {}

impl From<&'static str> for EnhancedError {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::simple(message)
    }
}

impl From<String> for EnhancedError {
    #[inline]
    fn from(message: String) -> Self {
        Self::simple(message)
    }
}

impl From<Cow<'static, str>> for EnhancedError {
    #[inline]
    fn from(message: Cow<'static, str>) -> Self {
        Self::simple(message)
    }
}

/// Find the first `EnhancedError` in `err` or its source chain.
fn find_enhanced<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a EnhancedError> {
    std::iter::successors(Some(err), |&e| e.source()).find_map(|e| e.downcast_ref::<EnhancedError>())
}

/// Public message to send across a trust boundary.
///
/// Returns the public message of the first [`EnhancedError`] in `err`'s
/// source chain, or `fallback` if there is none. The `Display` text of other
/// error types is never returned.
///
/// ```rust
/// use enhanced_errors::{EnhancedError, public_message_or};
/// use std::error::Error;
///
/// let err: Box<dyn Error + Send + Sync> =
///     Box::new(EnhancedError::with_code("redis timeout on shard 3", "try again", 503));
/// assert_eq!(public_message_or(err.as_ref(), "internal error"), "try again");
///
/// let io: Box<dyn Error + Send + Sync> = Box::new(std::io::Error::other("/var/lib/app: EACCES"));
/// assert_eq!(public_message_or(io.as_ref(), "internal error"), "internal error");
/// ```
pub fn public_message_or<'a>(err: &'a (dyn Error + 'static), fallback: &'a str) -> &'a str {
    find_enhanced(err).map_or(fallback, EnhancedError::public)
}

/// Code of the first [`EnhancedError`] in `err`'s source chain.
pub fn code_of(err: &(dyn Error + 'static)) -> Option<i64> {
    find_enhanced(err).map(EnhancedError::code)
}
