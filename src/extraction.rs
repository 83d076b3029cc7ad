//! Pattern extractor library
//!
//! One module per textual date convention. Every extractor is stateless and
//! side-effect-free: it either recognizes its convention in the full input
//! string and produces a date value, or declines. Extractors do not judge
//! calendrical validity: a syntactically matching month 13 is still
//! returned, so the orchestrator's validation and fix-up stage gets a
//! chance to run.

pub mod bc_ad;
pub mod brief_range;
pub mod century;
pub mod dcmi_period;
pub mod decade;
pub mod edtf_literal;
pub mod extractor;
pub mod formatted_full_date;
pub mod long_year;
pub mod month_name;
pub mod numeric;
pub mod numeric_range;
pub mod roman;
pub mod ymd_spaces;

pub use extractor::{DateExtractor, ExtractedDate, MatchId};
