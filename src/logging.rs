//! Structured log view for internal diagnostics.
//!
//! # Properties
//!
//! - Borrows from `EnhancedError` with an explicit lifetime
//! - Cannot outlive the error that created it
//! - Accessors return the messages untouched, no allocation
//! - `write_to` and `emit` bound every message field
//!
//! The view carries the private message, so it belongs on internal paths
//! only: log files, trusted aggregation, operator consoles. Responses to
//! untrusted callers should use `EnhancedError::public` instead.

use crate::EnhancedError;
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output (DoS prevention)
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Structured log entry borrowing from an [`EnhancedError`].
///
/// # Example
///
/// ```rust
/// # use enhanced_errors::EnhancedError;
/// let err = EnhancedError::with_code("cache miss storm on node-7", "slow down", 429);
/// let log = err.internal_log();
///
/// let mut line = String::new();
/// log.write_to(&mut line).unwrap();
/// assert_eq!(line, "[code=429] private='cache miss storm on node-7' public='slow down'");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InternalLog<'a> {
    code: i64,
    private: &'a str,
    public: &'a str,
}

impl<'a> InternalLog<'a> {
    /// Classification code.
    #[inline]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Private message, untruncated.
    #[inline]
    pub const fn private(&self) -> &'a str {
        self.private
    }

    /// Public message, untruncated.
    #[inline]
    pub const fn public(&self) -> &'a str {
        self.public
    }

    /// Write the entry to a formatter without intermediate allocation,
    /// except when a field needs truncating.
    ///
    /// Format: `[code=<code>] private='<private>' public='<public>'`
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[code={}] private='{}' public='{}'",
            self.code,
            bound_field(self.private),
            bound_field(self.public)
        )
    }

    /// Emit the entry as a `tracing` event at `ERROR` level.
    ///
    /// Fields: `code`, `private`, `public`. Message fields are truncated
    /// like [`InternalLog::write_to`]. Does nothing without a subscriber.
    pub fn emit(&self) {
        tracing::error!(
            target: "enhanced_errors",
            code = self.code,
            private = %bound_field(self.private),
            public = %bound_field(self.public),
            "enhanced error"
        );
    }

    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// WARNING: This materializes the private message into a String.
    /// Only available with BOTH the `trusted_debug` feature flag AND
    /// debug assertions enabled.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }
}

impl fmt::Display for InternalLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl EnhancedError {
    /// Create a structured internal log view with an explicit lifetime.
    ///
    /// The returned `InternalLog` borrows from `self` and cannot outlive it,
    /// so the private message is consumed by the logger and not retained.
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        InternalLog {
            code: self.code(),
            private: self.private(),
            public: self.public(),
        }
    }

    /// Callback-style access to the internal log view.
    ///
    /// ```rust
    /// # use enhanced_errors::EnhancedError;
    /// # let err = EnhancedError::simple("boom");
    /// let code = err.with_internal_log(|log| log.code());
    /// # assert_eq!(code, err.code());
    /// ```
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }

    /// Emit this error's internal log view as a `tracing` event.
    #[inline]
    pub fn log_internal(&self) {
        self.internal_log().emit();
    }
}

/// Bound a message field to `MAX_FIELD_OUTPUT_LEN` bytes.
///
/// Oversized fields keep as many whole characters as fit alongside
/// `TRUNCATION_INDICATOR`. Fields within the limit are borrowed as-is.
fn bound_field(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let budget = MAX_FIELD_OUTPUT_LEN - TRUNCATION_INDICATOR.len();
    let cut = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);

    let mut bounded = String::with_capacity(cut + TRUNCATION_INDICATOR.len());
    bounded.push_str(&s[..cut]);
    bounded.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(bounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN + 10);
        let truncated = bound_field(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let truncated = bound_field("short string");

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, "short string");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = bound_field(&s);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), MAX_FIELD_OUTPUT_LEN);
    }

    #[test]
    fn truncate_utf8_boundary() {
        // 'й' is 2 bytes
        let s = "й".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = bound_field(&s);

        assert!(truncated.len() <= MAX_FIELD_OUTPUT_LEN);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn bound_keeps_whole_characters() {
        // 3-byte characters do not divide the budget evenly
        let s = "€".repeat(MAX_FIELD_OUTPUT_LEN);
        let bounded = bound_field(&s);
        let kept = bounded.strip_suffix(TRUNCATION_INDICATOR).unwrap();

        assert!(kept.chars().all(|c| c == '€'));
        assert_eq!(kept.len(), (MAX_FIELD_OUTPUT_LEN - TRUNCATION_INDICATOR.len()) / 3 * 3);
    }

    #[test]
    fn truncate_emoji() {
        let s = "🔥".repeat(MAX_FIELD_OUTPUT_LEN);
        let truncated = bound_field(&s);

        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn internal_log_borrows_messages() {
        let err = EnhancedError::with_code("stack overflow in parser", "bad request", 400);
        let log = err.internal_log();

        assert_eq!(log.code(), 400);
        assert_eq!(log.private(), "stack overflow in parser");
        assert_eq!(log.public(), "bad request");
    }

    #[test]
    fn accessors_are_never_truncated() {
        let long = "x".repeat(MAX_FIELD_OUTPUT_LEN * 2);
        let err = EnhancedError::with_code(long.clone(), "short", 1);

        assert_eq!(err.internal_log().private(), long);
    }

    #[test]
    fn write_to_bounds_long_fields() {
        let err = EnhancedError::with_code("p".repeat(5000), "q".repeat(5000), 1);
        let mut out = String::new();
        err.internal_log().write_to(&mut out).unwrap();

        assert!(out.len() < 2 * MAX_FIELD_OUTPUT_LEN + 64);
        assert_eq!(out.matches(TRUNCATION_INDICATOR).count(), 2);
    }

    #[test]
    fn display_matches_write_to() {
        let err = EnhancedError::with_code("a", "b", 2);
        let log = err.internal_log();
        let mut out = String::new();
        log.write_to(&mut out).unwrap();

        assert_eq!(log.to_string(), out);
    }

    #[test]
    fn emit_writes_tracing_event() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let err = EnhancedError::with_code(
            "db connection refused at 10.0.0.5:5432",
            "service temporarily unavailable",
            503,
        );
        tracing::subscriber::with_default(subscriber, || err.log_internal());

        let output = capture.contents();
        assert!(output.contains("ERROR"));
        assert!(output.contains("enhanced error"));
        assert!(output.contains("code=503"));
        assert!(output.contains("10.0.0.5:5432"));
        assert!(output.contains("service temporarily unavailable"));
    }

    #[test]
    fn emit_without_subscriber_is_silent() {
        EnhancedError::simple("nobody listening").log_internal();
    }

    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    #[test]
    fn trusted_debug_format_matches_write_to() {
        let err = EnhancedError::with_code("detail", "safe", 5);
        let log = err.internal_log();

        assert_eq!(log.format_for_trusted_debug(), log.to_string());
    }
}
