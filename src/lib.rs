//! datenorm: normalization of free-text date values into EDTF
//!
//! Cultural heritage metadata carries dates in wildly inconsistent shapes:
//! "circa 1990", "18th century", "[1850?]", "23.02.[18--]", "Jan. 3, 1920".
//! This crate recognizes those conventions and normalizes them into a small
//! EDTF-profile value model: a single temporal point or an interval of two
//! points, with unknown/unspecified markers, year precision (decade/century)
//! and approximate/uncertain flags.
//!
//! The engine is organized in four layers:
//!
//! - [`edtf`]: the immutable date value model and its chronological validator
//! - [`cleaning`]: ordered text-rewrite rules that strip decorative notation
//! - [`extraction`]: one stateless recognizer per textual date convention
//! - [`normalizer`]: the orchestrator driving the clean/retry/validate loop
//!
//! # Examples
//!
//! ```no_run
//! use datenorm::normalizer::DatesNormalizer;
//!
//! let normalizer = DatesNormalizer::new();
//! let result = normalizer.normalize_date_property("circa 1920");
//! assert_eq!(result.edtf_string().as_deref(), Some("1920~"));
//! ```

pub mod cleaning;
pub mod edtf;
pub mod extraction;
pub mod normalizer;

pub use cleaning::{CleanOperation, CleanResult, Cleaner};
pub use edtf::{DatePart, EdtfDate, Instant, Interval, TimePart, YearPrecision};
pub use extraction::{DateExtractor, ExtractedDate, MatchId};
pub use normalizer::{
    DatesNormalizer, FixOperation, NormalizationResult, NormalizationStatus,
};
