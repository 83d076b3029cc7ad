//! End-to-end coverage of the date-property normalization flow: raw
//! extraction, the two cleaning passes, qualification, validation and the
//! two repair heuristics.

use datenorm::cleaning::CleanOperation;
use datenorm::extraction::MatchId;
use datenorm::normalizer::{DatesNormalizer, FixOperation, NormalizationStatus};
use once_cell::sync::Lazy;
use rstest::rstest;

static NORMALIZER: Lazy<DatesNormalizer> = Lazy::new(DatesNormalizer::new);

fn normalize(input: &str) -> Option<String> {
    NORMALIZER.normalize_date_property(input).edtf_string()
}

#[rstest]
// already well-formed EDTF
#[case("1989", Some("1989"))]
#[case("1942-03-12", Some("1942-03-12"))]
#[case("-0005", Some("-0005"))]
#[case("1872-06-01/1872-06-30", Some("1872-06-01/1872-06-30"))]
#[case("1942?/1943~", Some("1942?/1943~"))]
#[case("1907/", Some("1907/.."))]
#[case("1907/?", Some("1907/.."))]
#[case("?/1907", Some("../1907"))]
#[case("unknown/1907", Some("/1907"))]
// brief ranges
#[case("2014/15", Some("2014/2015"))]
#[case("?1942/43", Some("1942?/1943?"))]
// centuries and decades
#[case("18..", Some("18XX"))]
#[case("18th century", Some("17XX"))]
#[case("XIV", Some("13XX"))]
#[case("S. XVI-XVIII", Some("15XX/17XX"))]
#[case("197x", Some("197X"))]
#[case("1970s", Some("197X"))]
// numeric variants
#[case("?1943", Some("1943?"))]
#[case("11-1989", Some("1989-11"))]
#[case("22.6.1941", Some("1941-06-22"))]
#[case("19XX", Some("19XX"))]
#[case("23.02.[18--]", Some("18XX-02-23"))]
#[case("0 2 1980", Some("1980-02"))]
#[case("21 2 1980", Some("1980-02-21"))]
// numeric ranges
#[case("1941-1942", Some("1941/1942"))]
#[case("192?-1958", Some("0192?/1958"))]
#[case("1871 - 191-", Some("1871/191X"))]
#[case("1918 / 1919", Some("1918/1919"))]
// repairs
#[case("1941-22-06", Some("1941-06-22"))]
#[case("1941-22.6/1942-25.9", Some("1941-06-22/1942-09-25"))]
#[case("1999/1990", Some("1990/1999"))]
#[case("1910/05/31 | 1910/05/01", Some("1910-05-01/1910-05-31"))]
// an impossible month with no day to transpose stays unfixable
#[case("1941-13", None)]
// month names and formatted timestamps
#[case("18. September 1914", Some("1914-09-18"))]
#[case("January 1945", Some("1945-01"))]
#[case("c.6 Nov 1902", Some("1902-11-06~"))]
#[case("Sat Jan 01 01:00:00 CET 1701", Some("1701-01-01"))]
#[case("2013-09-07 09:31:51 UTC", Some("2013-09-07"))]
// eras and long years
#[case("75 B.C.", Some("-0075"))]
#[case("337 BC - 283 BC", Some("-0337/-0283"))]
#[case("168 B.C.-135 A.D.", Some("-0168/0135"))]
#[case("400 BC - 400 AD", Some("-0400/0400"))]
#[case("235 AD \u{2013} 236 AD", Some("0235/0236"))]
#[case("-500000", Some("Y-500000"))]
#[case("-123456/-12345", Some("Y-123456/Y-12345"))]
// cleaning
#[case("circa 1920", Some("1920~"))]
#[case("[1942]", Some("1942"))]
#[case("[1851?]", Some("1851?"))]
#[case("[ca. 1920-1930]", Some("1920~/1930~"))]
#[case("1651 [ca. 1656]", Some("1651~/1656~"))]
#[case("(1920)", Some("1920"))]
#[case("(circa 1920)", Some("1920~"))]
#[case("Copper plate: 1751", Some("1751"))]
#[case("1920.", Some("1920"))]
// unrecognizable or ambiguous
#[case("riproduzione", None)]
#[case("14:27", None)]
#[case("192?", None)]
#[case("1937--1938", None)]
#[case("187-?]", None)]
#[case("1990-02-30", None)]
fn test_normalize_date_property(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(normalize(input).as_deref(), expected, "input {input:?}");
}

#[rstest]
#[case("2014/15", MatchId::BriefDateRange)]
#[case("1942-03-12", MatchId::Edtf)]
#[case("[1851?]", MatchId::EdtfCleaned)]
#[case("18..", MatchId::CenturyNumeric)]
#[case("XIV", MatchId::CenturyRoman)]
#[case("S. XVI-XVIII", MatchId::CenturyRangeRoman)]
#[case("197x", MatchId::Decade)]
#[case("192?-1958", MatchId::NumericRangeAllVariants)]
#[case("1871 - 191-", MatchId::NumericRangeAllVariantsXx)]
#[case("?1943", MatchId::NumericAllVariants)]
#[case("23.02.[18--]", MatchId::NumericAllVariantsXx)]
#[case("21 2 1980", MatchId::YyyyMmDdSpaces)]
#[case("start=1929; end=1939;", MatchId::DcmiPeriod)]
#[case("January 1945", MatchId::MonthName)]
#[case("2013-09-07 09:31:51 UTC", MatchId::FormattedFullDate)]
#[case("75 B.C.", MatchId::BcAd)]
#[case("-500000", MatchId::LongYear)]
#[case("1990-02-30", MatchId::Invalid)]
#[case("1941-13", MatchId::Invalid)]
#[case("riproduzione", MatchId::NoMatch)]
fn test_match_ids(#[case] input: &str, #[case] expected: MatchId) {
    assert_eq!(
        NORMALIZER.normalize_date_property(input).match_id,
        expected,
        "input {input:?}"
    );
}

#[rstest]
#[case("1999/1990", Some(FixOperation::SwappedStartAndEnd))]
#[case("1910/05/31 | 1910/05/01", Some(FixOperation::SwappedStartAndEnd))]
#[case("1941-22-06", Some(FixOperation::SwitchedDayAndMonth))]
#[case("1941-22.6/1942-25.9", Some(FixOperation::SwitchedDayAndMonth))]
#[case("1942-03-12", None)]
#[case("1941/1942", None)]
fn test_fix_operations(#[case] input: &str, #[case] expected: Option<FixOperation>) {
    assert_eq!(
        NORMALIZER.normalize_date_property(input).fix,
        expected,
        "input {input:?}"
    );
}

#[rstest]
#[case("circa 1920", Some(CleanOperation::Circa))]
#[case("[1942]", Some(CleanOperation::SquareBrackets))]
#[case("[ca. 1920-1930]", Some(CleanOperation::SquareBracketsAndCirca))]
#[case("(circa 1920)", Some(CleanOperation::ParenthesesFullValueAndCirca))]
#[case("(1920)", Some(CleanOperation::ParenthesesFullValue))]
#[case("Copper plate: 1751", Some(CleanOperation::InitialText))]
#[case("1920.", Some(CleanOperation::EndingText))]
#[case("1942-03-12", None)]
fn test_clean_operations(#[case] input: &str, #[case] expected: Option<CleanOperation>) {
    assert_eq!(
        NORMALIZER.normalize_date_property(input).clean_operation,
        expected,
        "input {input:?}"
    );
}

#[test]
fn test_no_match_preserves_original_input() {
    let result = NORMALIZER.normalize_date_property("  riproduzione ");
    assert_eq!(result.status, NormalizationStatus::NoMatch);
    assert_eq!(result.original_input, "  riproduzione ");
    assert_eq!(result.value, None);
}

#[test]
fn test_invalid_result_has_no_value() {
    let result = NORMALIZER.normalize_date_property("1990-02-30");
    assert_eq!(result.status, NormalizationStatus::NoMatch);
    assert_eq!(result.match_id, MatchId::Invalid);
    assert_eq!(result.edtf_string(), None);
}

#[test]
fn test_dcmi_period_label() {
    let result = NORMALIZER
        .normalize_date_property("name=The Great Depression; start=1929; end=1939;");
    assert_eq!(result.edtf_string().as_deref(), Some("1929/1939"));
    assert_eq!(result.label.as_deref(), Some("The Great Depression"));
}

#[test]
fn test_time_only_value_is_no_match() {
    let result = NORMALIZER.normalize_date_property("14:27");
    assert_eq!(result.status, NormalizationStatus::NoMatch);
    assert_eq!(result.match_id, MatchId::NoMatch);
}

#[test]
fn test_serialized_result_uses_edtf_string() {
    let result = NORMALIZER.normalize_date_property("circa 1920");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["value"], "1920~");
    assert_eq!(json["status"], "MATCHED");
    // a cleaned bare year is an EDTF literal match, retagged as cleaned
    assert_eq!(json["match_id"], "EDTF_CLEANED");
    assert_eq!(json["clean_operation"], "CIRCA");
}
