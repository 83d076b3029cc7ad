//! Normalization orchestrator.
//!
//! Two entry points cover the two kinds of source properties. Date
//! properties ("dcterms:created") are expected to hold a date, so the
//! orchestrator tries hard: extraction on the raw value, then again after
//! each of two cleaning passes. Generic properties ("dc:subject") mostly
//! hold other text, so only one conservative cleaning pass runs and a match
//! must be a complete date (day precision, or a closed interval) to count.
//!
//! A value that matches but fails chronological validation goes through two
//! repair attempts: swapping interval endpoints, then transposing day and
//! month. A repaired result records which fix was applied.

use crate::cleaning::{CleanOperation, Cleaner};
use crate::edtf::{validate, EdtfDate};
use crate::extraction::bc_ad::BcAdExtractor;
use crate::extraction::brief_range::BriefRangeExtractor;
use crate::extraction::century::CenturyExtractor;
use crate::extraction::dcmi_period::DcmiPeriodExtractor;
use crate::extraction::decade::DecadeExtractor;
use crate::extraction::edtf_literal::EdtfLiteralExtractor;
use crate::extraction::extractor::{DateExtractor, ExtractedDate, MatchId};
use crate::extraction::formatted_full_date::FormattedFullDateExtractor;
use crate::extraction::long_year::LongYearExtractor;
use crate::extraction::month_name::MonthNameExtractor;
use crate::extraction::numeric::{NumericExtractor, NumericXxExtractor};
use crate::extraction::numeric_range::{NumericRangeExtractor, NumericRangeXxExtractor};
use crate::extraction::ymd_spaces::YmdSpacesExtractor;
use serde::{Serialize, Serializer};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Whether a usable EDTF value came out of normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NormalizationStatus {
    Matched,
    NoMatch,
}

/// A repair applied to a value that initially failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixOperation {
    SwappedStartAndEnd,
    SwitchedDayAndMonth,
}

impl fmt::Display for FixOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FixOperation::SwappedStartAndEnd => "SWAPPED_START_AND_END",
            FixOperation::SwitchedDayAndMonth => "SWITCHED_DAY_AND_MONTH",
        };
        f.write_str(name)
    }
}

/// The complete outcome of normalizing one property value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizationResult {
    pub status: NormalizationStatus,
    pub match_id: MatchId,
    pub clean_operation: Option<CleanOperation>,
    pub fix: Option<FixOperation>,
    pub original_input: String,
    #[serde(serialize_with = "serialize_edtf")]
    pub value: Option<EdtfDate>,
    pub label: Option<String>,
}

fn serialize_edtf<S>(value: &Option<EdtfDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_some(&date.to_string()),
        None => serializer.serialize_none(),
    }
}

impl NormalizationResult {
    fn no_match(input: &str) -> NormalizationResult {
        NormalizationResult {
            status: NormalizationStatus::NoMatch,
            match_id: MatchId::NoMatch,
            clean_operation: None,
            fix: None,
            original_input: input.to_string(),
            value: None,
            label: None,
        }
    }

    fn invalid(input: &str, clean_operation: Option<CleanOperation>) -> NormalizationResult {
        NormalizationResult {
            status: NormalizationStatus::NoMatch,
            match_id: MatchId::Invalid,
            clean_operation,
            fix: None,
            original_input: input.to_string(),
            value: None,
            label: None,
        }
    }

    /// The normalized EDTF serialization, when one was produced.
    pub fn edtf_string(&self) -> Option<String> {
        self.value.as_ref().map(EdtfDate::to_string)
    }
}

// Cleaning rules that carry an approximate signal ("circa").
const DATE_APPROXIMATE_OPERATIONS: &[CleanOperation] = &[
    CleanOperation::Circa,
    CleanOperation::SquareBracketsAndCirca,
    CleanOperation::ParenthesesFullValueAndCirca,
];
const GENERIC_APPROXIMATE_OPERATIONS: &[CleanOperation] = &[
    CleanOperation::Circa,
    CleanOperation::SquareBracketsAndCirca,
];

/// The normalization engine. Construction compiles nothing (all patterns
/// are process-wide statics), so it is cheap and the value is freely
/// shareable across threads.
pub struct DatesNormalizer {
    // The brief-range extractor must stay first: most values it accepts
    // also match the EDTF literal pattern but would produce an invalid
    // date there. It is also the one extractor skipped for generic
    // properties.
    extractors: Vec<Box<dyn DateExtractor>>,
    cleaner: Cleaner,
}

impl Default for DatesNormalizer {
    fn default() -> DatesNormalizer {
        DatesNormalizer::new()
    }
}

impl DatesNormalizer {
    pub fn new() -> DatesNormalizer {
        DatesNormalizer {
            extractors: vec![
                Box::new(BriefRangeExtractor),
                Box::new(EdtfLiteralExtractor),
                Box::new(CenturyExtractor),
                Box::new(DecadeExtractor),
                Box::new(NumericRangeExtractor),
                Box::new(NumericRangeXxExtractor),
                Box::new(NumericExtractor),
                Box::new(NumericXxExtractor),
                Box::new(YmdSpacesExtractor),
                Box::new(DcmiPeriodExtractor),
                Box::new(MonthNameExtractor),
                Box::new(FormattedFullDateExtractor),
                Box::new(BcAdExtractor),
                Box::new(LongYearExtractor),
            ],
            cleaner: Cleaner::new(),
        }
    }

    /// Normalizes the value of a property expected to hold a date.
    pub fn normalize_date_property(&self, input: &str) -> NormalizationResult {
        self.guarded(input, || self.normalize_date_inner(input))
    }

    /// Normalizes the value of a property that may hold dates among other
    /// text. Only complete dates are reported.
    pub fn normalize_generic_property(&self, input: &str) -> NormalizationResult {
        self.guarded(input, || self.normalize_generic_inner(input))
    }

    fn guarded(
        &self,
        input: &str,
        normalize: impl FnOnce() -> NormalizationResult,
    ) -> NormalizationResult {
        match panic::catch_unwind(AssertUnwindSafe(normalize)) {
            Ok(result) => result,
            Err(_) => {
                warn!(input, "normalization panicked, reporting no match");
                NormalizationResult::no_match(input)
            }
        }
    }

    fn normalize_date_inner(&self, input: &str) -> NormalizationResult {
        let sanitized = sanitize(input);
        let attempt = self
            .extract(&sanitized, false)
            .map(|extracted| (extracted, None))
            .or_else(|| self.extract_cleaned(self.cleaner.clean_first_pass(&sanitized), false))
            .or_else(|| self.extract_cleaned(self.cleaner.clean_second_pass(&sanitized), false));
        match attempt {
            Some((extracted, clean_operation)) => self.qualify_and_validate(
                input,
                extracted,
                clean_operation,
                DATE_APPROXIMATE_OPERATIONS,
            ),
            None => NormalizationResult::no_match(input),
        }
    }

    fn normalize_generic_inner(&self, input: &str) -> NormalizationResult {
        let sanitized = sanitize(input);
        let attempt = self
            .extract(&sanitized, true)
            .map(|extracted| (extracted, None))
            .or_else(|| {
                self.extract_cleaned(self.cleaner.clean_generic_property(&sanitized), true)
            });
        let Some((extracted, clean_operation)) = attempt else {
            return NormalizationResult::no_match(input);
        };
        if !is_complete_date(&extracted.date) {
            debug!(input, "match discarded, not a complete date");
            return NormalizationResult::no_match(input);
        }
        self.qualify_and_validate(input, extracted, clean_operation, GENERIC_APPROXIMATE_OPERATIONS)
    }

    fn extract(&self, value: &str, generic: bool) -> Option<ExtractedDate> {
        let extractors = if generic {
            &self.extractors[1..]
        } else {
            &self.extractors[..]
        };
        extractors.iter().find_map(|extractor| extractor.extract(value))
    }

    fn extract_cleaned(
        &self,
        cleaned: Option<crate::cleaning::CleanResult>,
        generic: bool,
    ) -> Option<(ExtractedDate, Option<CleanOperation>)> {
        let cleaned = cleaned?;
        debug!(operation = %cleaned.operation, value = %cleaned.value, "retrying after cleaning");
        self.extract(&cleaned.value, generic)
            .map(|extracted| (extracted, Some(cleaned.operation)))
    }

    fn qualify_and_validate(
        &self,
        input: &str,
        extracted: ExtractedDate,
        clean_operation: Option<CleanOperation>,
        approximate_operations: &[CleanOperation],
    ) -> NormalizationResult {
        let ExtractedDate {
            mut match_id,
            mut date,
            label,
        } = extracted;
        if clean_operation.is_some_and(|op| approximate_operations.contains(&op)) {
            date = date.with_approximate(true);
        }
        let mut fix = None;
        if !validate(&date) {
            let swapped = date.swap_start_and_end();
            let switched = date.switch_day_and_month();
            let repaired = if matches!(date, EdtfDate::Interval(_)) && validate(&swapped) {
                Some((swapped, FixOperation::SwappedStartAndEnd))
            } else if validate(&switched) {
                Some((switched, FixOperation::SwitchedDayAndMonth))
            } else {
                None
            };
            let Some((repaired_date, operation)) = repaired else {
                return NormalizationResult::invalid(input, clean_operation);
            };
            debug!(input, fix = %operation, value = %repaired_date, "repaired invalid date");
            date = repaired_date;
            fix = Some(operation);
        }
        if match_id == MatchId::Edtf && clean_operation.is_some() {
            match_id = MatchId::EdtfCleaned;
        }
        if date.is_time_only() {
            return NormalizationResult::no_match(input);
        }
        NormalizationResult {
            status: NormalizationStatus::Matched,
            match_id,
            clean_operation,
            fix,
            original_input: input.to_string(),
            value: Some(date),
            label,
        }
    }
}

fn sanitize(input: &str) -> String {
    // non-breaking spaces and en dashes are the two non-ASCII characters
    // that show up systematically in harvested date fields
    input.trim().replace('\u{a0}', " ").replace('\u{2013}', "-")
}

/// A generic-property match counts only when it pins down actual days:
/// a single date needs day precision, an interval needs two closed
/// endpoints at least month-precise, one of them day-precise or both
/// month-precise.
fn is_complete_date(date: &EdtfDate) -> bool {
    match date {
        EdtfDate::Instant(instant) => {
            instant.date_part().is_some_and(|date| date.day().is_some())
        }
        EdtfDate::Interval(interval) => {
            let (Some(start), Some(end)) =
                (interval.start().date_part(), interval.end().date_part())
            else {
                return false;
            };
            if start.year_precision().is_some() || end.year_precision().is_some() {
                return false;
            }
            start.day().is_some()
                || end.day().is_some()
                || (start.month().is_some() && end.month().is_some())
        }
    }
}
