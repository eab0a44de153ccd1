//! Row-level normalization policy.
//!
//! For each row: `phone`, then `dob`, then every remaining column copied
//! verbatim. A failing field is recorded in the row's error map and never
//! aborts its siblings or later rows. Rows with any error are skipped in
//! their original form.

use contact_model::{ErrorMap, NormalizationOutput, Row, SkippedRecord};

use crate::options::{ApplyMode, DOB_COLUMN, NormalizerOptions, PHONE_COLUMN};
use crate::registry::NormalizerRegistry;
use crate::strategy::ColumnNormalizer;

/// Applies registered column strategies to rows and partitions the results.
#[derive(Debug, Default)]
pub struct Normalizer {
    registry: NormalizerRegistry,
    apply_mode: ApplyMode,
}

impl Normalizer {
    /// Normalizer with the built-in `phone` and `dob` strategies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer with the built-in strategies configured from `options`.
    pub fn with_options(options: &NormalizerOptions) -> Self {
        Self {
            registry: NormalizerRegistry::with_defaults(options),
            apply_mode: options.apply_mode,
        }
    }

    /// Normalizer over an explicit registry.
    pub fn with_registry(registry: NormalizerRegistry) -> Self {
        Self {
            registry,
            apply_mode: ApplyMode::default(),
        }
    }

    #[must_use]
    pub fn with_apply_mode(mut self, apply_mode: ApplyMode) -> Self {
        self.apply_mode = apply_mode;
        self
    }

    /// Binds a strategy to a column, replacing any existing one.
    pub fn register_normalizer(
        &mut self,
        column: impl Into<String>,
        normalizer: impl ColumnNormalizer + 'static,
    ) {
        self.registry.register(column, Box::new(normalizer));
    }

    pub fn registry(&self) -> &NormalizerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut NormalizerRegistry {
        &mut self.registry
    }

    pub fn apply_mode(&self) -> ApplyMode {
        self.apply_mode
    }

    /// Normalize a batch of rows.
    ///
    /// Both output collections preserve input order.
    pub fn normalize_data(&self, rows: impl IntoIterator<Item = Row>) -> NormalizationOutput {
        let mut output = NormalizationOutput::default();

        for (index, row) in rows.into_iter().enumerate() {
            match self.normalize_row(&row) {
                Ok(normalized) => {
                    tracing::debug!(row = index, "Row normalized");
                    output.normalized.push(normalized);
                }
                Err(errors) => {
                    tracing::debug!(
                        row = index,
                        failed_columns = ?errors.keys().collect::<Vec<_>>(),
                        "Row skipped"
                    );
                    output.skipped.push(SkippedRecord::new(row, errors));
                }
            }
        }

        tracing::info!(
            processed = output.processed(),
            normalized = output.normalized_count(),
            skipped = output.skipped_count(),
            "Normalization complete"
        );
        output
    }

    /// Normalize one row.
    ///
    /// Returns the assembled row (`phone` and `dob` first, then the other
    /// columns in their original order) or the per-column error map.
    /// `phone` and `dob` are always present in a normalized row, with no
    /// value when the input lacked the column.
    pub fn normalize_row(&self, row: &Row) -> Result<Row, ErrorMap> {
        let mut errors = ErrorMap::new();
        let mut normalized = Row::with_capacity(row.len() + 2);

        for column in [PHONE_COLUMN, DOB_COLUMN] {
            match self.apply(row, column) {
                Some(Ok(value)) => normalized.insert(column, Some(value)),
                Some(Err(reason)) => {
                    errors.insert(column, reason);
                }
                None => normalized.insert(column, row.get(column).map(str::to_string)),
            }
        }

        for (column, value) in row.iter() {
            if column == PHONE_COLUMN || column == DOB_COLUMN {
                continue;
            }
            let applied = match self.apply_mode {
                ApplyMode::PhoneAndDob => None,
                ApplyMode::AllRegistered => self.apply(row, column),
            };
            match applied {
                Some(Ok(value)) => normalized.insert(column, Some(value)),
                Some(Err(reason)) => {
                    errors.insert(column, reason);
                }
                None => normalized.insert(column, value.map(str::to_string)),
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            Err(errors)
        }
    }

    /// Runs the strategy for `column` if one is registered and the column is
    /// present. A present column without a value is normalized as `""`.
    fn apply(&self, row: &Row, column: &str) -> Option<Result<String, String>> {
        let normalizer = self.registry.get(column)?;
        if !row.contains(column) {
            return None;
        }
        let raw = row.get(column).unwrap_or_default();
        Some(normalizer.normalize(raw).map_err(|e| e.to_string()))
    }
}
