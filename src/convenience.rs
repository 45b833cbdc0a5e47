//! Format-string macro for building enhanced errors.
//!
//! The private message is produced with `format!`. The public message is
//! passed through as given, so dynamic values only reach it when the caller
//! puts them there on purpose.
//!
//! # Usage
//!
//! ```rust
//! # use enhanced_errors::enhanced;
//! let host = "10.0.0.5";
//! let port = 5432;
//!
//! let err = enhanced!(
//!     code = 503,
//!     public = "service temporarily unavailable",
//!     "db connection refused at {}:{}",
//!     host,
//!     port
//! );
//! assert_eq!(err.private(), "db connection refused at 10.0.0.5:5432");
//! assert_eq!(err.public(), "service temporarily unavailable");
//! ```

/// Create an [`EnhancedError`](crate::EnhancedError) with a formatted private message.
///
/// # Forms
///
/// - `enhanced!(code = C, public = P, "fmt", args..)`: explicit code
/// - `enhanced!(public = P, "fmt", args..)`: process-wide default code
/// - `enhanced!("fmt", args..)`: both messages are the formatted text,
///   default code
///
/// # Example
///
/// ```rust
/// # use enhanced_errors::enhanced;
/// let id = 17;
/// let err = enhanced!("handler {} panicked", id);
/// assert_eq!(err.private(), err.public());
/// ```
#[macro_export]
macro_rules! enhanced {
    (code = $code:expr, public = $public:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::EnhancedError::with_code(format!($fmt $(, $arg)*), $public, $code)
    };
    (public = $public:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::EnhancedError::with_default_code(format!($fmt $(, $arg)*), $public)
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::EnhancedError::simple(format!($fmt $(, $arg)*))
    };
}
