//! Contact record normalization.
//!
//! Normalizes the two semantically tricky contact columns, phone numbers and
//! dates of birth, and partitions rows into normalized and skipped sets.
//!
//! # Overview
//!
//! This crate provides:
//! - **Strategies**: [`E164PhoneNormalizer`] and [`DateNormalizer`], both
//!   implementing the single-operation [`ColumnNormalizer`] trait
//! - **Registry**: [`NormalizerRegistry`], column name to strategy, owned per run
//! - **Orchestration**: [`Normalizer::normalize_data`], the per-row policy
//!
//! # Example
//!
//! ```ignore
//! use contact_model::Row;
//! use contact_normalization::Normalizer;
//!
//! let rows = vec![Row::new().with("phone", "0585108603").with("dob", "13/02/2001")];
//! let output = Normalizer::new().normalize_data(rows);
//!
//! assert_eq!(output.normalized[0].get("phone"), Some("+971585108603"));
//! assert_eq!(output.normalized[0].get("dob"), Some("2001-02-13"));
//! ```
//!
//! # Design Principles
//!
//! - **Pure strategies**: `normalize` is a deterministic function of input and options
//! - **Per-field errors**: one failing field never aborts siblings or later rows
//! - **All or nothing rows**: a row is emitted normalized or skipped, never partially

mod orchestrator;
mod registry;
mod strategy;

pub mod date;
pub mod options;
pub mod phone;

// Core trait
pub use strategy::{ColumnNormalizer, FnNormalizer};

// Strategies
pub use date::DateNormalizer;
pub use phone::E164PhoneNormalizer;

// Configuration
pub use options::{
    ApplyMode, DOB_COLUMN, DateOptions, NormalizerOptions, PHONE_COLUMN, PhoneOptions,
};

// Registry and orchestration
pub use orchestrator::Normalizer;
pub use registry::NormalizerRegistry;

// Re-export model types used in the public API
pub use contact_model::{NormalizationError, NormalizationOutput, Row, SkippedRecord};
