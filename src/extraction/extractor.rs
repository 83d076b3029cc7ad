//! Extraction interface shared by all date pattern extractors.

use crate::edtf::EdtfDate;
use serde::Serialize;
use std::fmt;

/// Identifies the pattern convention behind a normalization outcome.
///
/// Most variants name an extractor; `Invalid` and `NoMatch` classify the
/// terminal failure outcomes of the orchestrator, and `EdtfCleaned`
/// distinguishes EDTF literals that needed cleaning from those that were
/// already well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchId {
    BriefDateRange,
    Edtf,
    EdtfCleaned,
    CenturyNumeric,
    CenturyRoman,
    CenturyRangeRoman,
    Decade,
    NumericAllVariants,
    NumericAllVariantsXx,
    NumericRangeAllVariants,
    NumericRangeAllVariantsXx,
    YyyyMmDdSpaces,
    DcmiPeriod,
    MonthName,
    FormattedFullDate,
    BcAd,
    LongYear,
    Invalid,
    NoMatch,
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchId::BriefDateRange => "BRIEF_DATE_RANGE",
            MatchId::Edtf => "EDTF",
            MatchId::EdtfCleaned => "EDTF_CLEANED",
            MatchId::CenturyNumeric => "CENTURY_NUMERIC",
            MatchId::CenturyRoman => "CENTURY_ROMAN",
            MatchId::CenturyRangeRoman => "CENTURY_RANGE_ROMAN",
            MatchId::Decade => "DECADE",
            MatchId::NumericAllVariants => "NUMERIC_ALL_VARIANTS",
            MatchId::NumericAllVariantsXx => "NUMERIC_ALL_VARIANTS_XX",
            MatchId::NumericRangeAllVariants => "NUMERIC_RANGE_ALL_VARIANTS",
            MatchId::NumericRangeAllVariantsXx => "NUMERIC_RANGE_ALL_VARIANTS_XX",
            MatchId::YyyyMmDdSpaces => "YYYY_MM_DD_SPACES",
            MatchId::DcmiPeriod => "DCMI_PERIOD",
            MatchId::MonthName => "MONTH_NAME",
            MatchId::FormattedFullDate => "FORMATTED_FULL_DATE",
            MatchId::BcAd => "BC_AD",
            MatchId::LongYear => "LONG_YEAR",
            MatchId::Invalid => "INVALID",
            MatchId::NoMatch => "NO_MATCH",
        };
        f.write_str(name)
    }
}

/// A successful extraction: the convention that matched, the parsed value,
/// and an optional label carried by the convention (DCMI period names).
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDate {
    pub match_id: MatchId,
    pub date: EdtfDate,
    pub label: Option<String>,
}

impl ExtractedDate {
    pub fn new(match_id: MatchId, date: EdtfDate) -> ExtractedDate {
        ExtractedDate {
            match_id,
            date,
            label: None,
        }
    }

    pub fn with_label(mut self, label: Option<String>) -> ExtractedDate {
        self.label = label;
        self
    }
}

/// A stateless recognizer for one textual date convention.
///
/// Implementations must be safe to invoke concurrently: all pattern state
/// is compiled once into process-wide statics.
pub trait DateExtractor: Send + Sync {
    fn extract(&self, input: &str) -> Option<ExtractedDate>;
}
