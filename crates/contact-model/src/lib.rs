//! Contact record data model.
//!
//! Shared types for the normalization pipeline:
//!
//! - **row**: [`Row`], an ordered column-name to value mapping
//! - **error**: [`NormalizationError`], the single failure kind raised by strategies
//! - **output**: [`SkippedRecord`] and [`NormalizationOutput`]
//! - **redact**: PII-safe rendering of row values in log output

pub mod error;
pub mod output;
pub mod redact;
pub mod row;

pub use error::{NormalizationError, Result};
pub use output::{ErrorMap, NormalizationOutput, SkippedRecord};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
pub use row::Row;
