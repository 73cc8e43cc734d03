// ============================================================================
// Decimal Strings Library
// Exact arbitrary-precision decimal addition on digit strings
// ============================================================================

//! # Decimal Strings
//!
//! Exact addition of signed decimal numerals of any length, computed on their
//! digit strings instead of through binary floating point.
//!
//! ## Features
//!
//! - **Validation** of signed decimal literals with a precise rejection reason
//! - **Canonical form** for numerals (no `-0`, no redundant zeros)
//! - **Exact sums** via digit-wise carry and borrow passes
//! - **`DecimalString`** value type with operator and ordering impls
//! - **Line driver** that sums every line of a file with a fixed addend
//!
//! ## Example
//!
//! ```rust
//! use decimal_strings::prelude::*;
//!
//! assert!(is_valid(".5"));
//! assert!(!is_valid("5."));
//!
//! assert_eq!(add("0.1", "0.2"), "0.3");
//! assert_eq!(add("-5", "3"), "-2");
//! assert_eq!(normalize("-000.000"), "0");
//!
//! let total: DecimalString = ["19.99", "0.01", "-20"]
//!     .iter()
//!     .map(|s| s.parse::<DecimalString>().unwrap())
//!     .sum();
//! assert!(total.is_zero());
//! ```

pub mod domain;
pub mod driver;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DriverConfig, EchoMode, DEFAULT_ADDEND};
    pub use crate::driver::{LineProcessor, ProcessSummary};
    pub use crate::interfaces::{
        CollectingEventHandler, EventHandler, LineEvent, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{
        add, compare_absolute, is_valid, normalize, validate, DecimalString, NumericError,
        NumericResult,
    };
}
