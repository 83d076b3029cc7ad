//! Removal of decorative notation around date values.
//!
//! Free-text date fields wrap their payload in labels, brackets, parentheses
//! and "circa" markers: "Copper plate: 1751", "[1850?]", "(ca. 1920)". Each
//! cleaning pass is an ordered rule list; the first rule whose pattern
//! matches *and* whose rewritten string is non-empty wins. A rule that
//! matches but rewrites to nothing is skipped so a later rule still gets a
//! chance. A pass with no winning rule yields `None`.
//!
//! Order matters within a pass: the combined bracket+circa and
//! parenthesis+circa rules run before their single-token fallbacks so the
//! approximate signal carried by the circa marker is never lost.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Identifies which rewrite rule produced a cleaned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CleanOperation {
    InitialText,
    EndingText,
    SquareBrackets,
    Circa,
    SquareBracketsAndCirca,
    SquareBracketEnd,
    ParenthesesFullValue,
    ParenthesesFullValueAndCirca,
}

impl fmt::Display for CleanOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CleanOperation::InitialText => "INITIAL_TEXT",
            CleanOperation::EndingText => "ENDING_TEXT",
            CleanOperation::SquareBrackets => "SQUARE_BRACKETS",
            CleanOperation::Circa => "CIRCA",
            CleanOperation::SquareBracketsAndCirca => "SQUARE_BRACKETS_AND_CIRCA",
            CleanOperation::SquareBracketEnd => "SQUARE_BRACKET_END",
            CleanOperation::ParenthesesFullValue => "PARENTHESES_FULL_VALUE",
            CleanOperation::ParenthesesFullValueAndCirca => "PARENTHESES_FULL_VALUE_AND_CIRCA",
        };
        f.write_str(name)
    }
}

/// The outcome of one cleaning pass: the rewritten text and the rule that
/// produced it. Produced fresh on every attempt, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    pub operation: CleanOperation,
    pub value: String,
}

struct CleanRule {
    operation: CleanOperation,
    pattern: Regex,
    replacement: &'static str,
    replace_all: bool,
}

impl CleanRule {
    fn strip(operation: CleanOperation, pattern: &str) -> CleanRule {
        CleanRule::rewrite(operation, pattern, "", false)
    }

    fn rewrite(
        operation: CleanOperation,
        pattern: &str,
        replacement: &'static str,
        replace_all: bool,
    ) -> CleanRule {
        CleanRule {
            operation,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
            replace_all,
        }
    }
}

// A leading "label:" prefix. Greedy through the last colon, which keeps the
// pass idempotent: the rewritten text cannot contain a colon anymore.
const INITIAL_TEXT_COLON: &str = r"^\s*.*:\s*";
const INITIAL_TEXT_PARENTHESES: &str = r"^\s*(?:\([^)]*\)\s*)+";
const ENDING_PARENTHESES: &str = r"\s*\(.*\)\s*$";
const ENDING_DOT: &str = r"\s*\.\s*$";
const SQUARE_BRACKETS_AND_CIRCA: &str = r"(?i)\[\s*(?:circa|ca|c)(?:\.\s*|\s+)([^\]]+)\]";
const SQUARE_BRACKETS: &str = r"\[([^\]]+)\]";
const STARTING_CIRCA: &str = r"(?i)^\s*(?:circa|ca|c)(?:\.\s*|\s+)";
const SQUARE_BRACKET_END: &str = r"\s*\]\s*$";
const ENDING_SQUARE_BRACKETS: &str = r"\s*\[.*\]\s*$";
const PARENTHESES_FULL_VALUE_AND_CIRCA: &str =
    r"(?i)^\s*\(\s*(?:circa|ca|c)(?:\.\s*|\s+)(.*)\)\s*$";
const PARENTHESES_FULL_VALUE: &str = r"^\s*\((.*)\)\s*$";

static FIRST_PASS_RULES: Lazy<Vec<CleanRule>> = Lazy::new(|| {
    vec![
        CleanRule::strip(CleanOperation::InitialText, INITIAL_TEXT_COLON),
        CleanRule::strip(CleanOperation::InitialText, INITIAL_TEXT_PARENTHESES),
        CleanRule::strip(CleanOperation::EndingText, ENDING_PARENTHESES),
        CleanRule::rewrite(
            CleanOperation::SquareBracketsAndCirca,
            SQUARE_BRACKETS_AND_CIRCA,
            "$1",
            true,
        ),
        CleanRule::rewrite(CleanOperation::SquareBrackets, SQUARE_BRACKETS, "$1", true),
        CleanRule::strip(CleanOperation::Circa, STARTING_CIRCA),
        CleanRule::strip(CleanOperation::SquareBracketEnd, SQUARE_BRACKET_END),
        CleanRule::strip(CleanOperation::EndingText, ENDING_DOT),
    ]
});

static SECOND_PASS_RULES: Lazy<Vec<CleanRule>> = Lazy::new(|| {
    vec![
        CleanRule::strip(CleanOperation::EndingText, ENDING_SQUARE_BRACKETS),
        CleanRule::rewrite(
            CleanOperation::ParenthesesFullValueAndCirca,
            PARENTHESES_FULL_VALUE_AND_CIRCA,
            "$1",
            false,
        ),
        CleanRule::rewrite(
            CleanOperation::ParenthesesFullValue,
            PARENTHESES_FULL_VALUE,
            "$1",
            false,
        ),
    ]
});

static GENERIC_PASS_RULES: Lazy<Vec<CleanRule>> = Lazy::new(|| {
    vec![
        CleanRule::rewrite(
            CleanOperation::SquareBracketsAndCirca,
            SQUARE_BRACKETS_AND_CIRCA,
            "$1",
            true,
        ),
        CleanRule::rewrite(CleanOperation::SquareBrackets, SQUARE_BRACKETS, "$1", true),
        CleanRule::strip(CleanOperation::Circa, STARTING_CIRCA),
        CleanRule::strip(CleanOperation::EndingText, ENDING_PARENTHESES),
    ]
});

fn apply(rules: &[CleanRule], value: &str) -> Option<CleanResult> {
    for rule in rules {
        if !rule.pattern.is_match(value) {
            continue;
        }
        let rewritten = if rule.replace_all {
            rule.pattern.replace_all(value, rule.replacement)
        } else {
            rule.pattern.replace(value, rule.replacement)
        };
        let cleaned = rewritten.trim_start();
        if cleaned.is_empty() {
            continue;
        }
        return Some(CleanResult {
            operation: rule.operation,
            value: cleaned.to_string(),
        });
    }
    None
}

/// Holds the three cleaning passes. The rule set is process-wide, compiled
/// once and read-only, so a `Cleaner` is freely shareable across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cleaner;

impl Cleaner {
    pub fn new() -> Cleaner {
        Cleaner
    }

    /// First date-property pass: label prefixes, surrounding annotations,
    /// bracket unwrapping, circa markers.
    pub fn clean_first_pass(&self, value: &str) -> Option<CleanResult> {
        apply(&FIRST_PASS_RULES, value)
    }

    /// Second date-property pass: trailing square-bracket annotations and
    /// fully parenthesized values.
    pub fn clean_second_pass(&self, value: &str) -> Option<CleanResult> {
        apply(&SECOND_PASS_RULES, value)
    }

    /// Single cleaning pass for generic properties: only the conservative
    /// rules that cannot eat legitimate free text.
    pub fn clean_generic_property(&self, value: &str) -> Option<CleanResult> {
        apply(&GENERIC_PASS_RULES, value)
    }
}

#[cfg(test)]
mod tests {
    use super::CleanOperation::*;
    use super::*;
    use rstest::rstest;

    const CLEANER: Cleaner = Cleaner;

    #[rstest]
    #[case(InitialText, "textA:textB", Some("textB"))]
    #[case(InitialText, "textA: ", None)]
    #[case(InitialText, "   :textB", Some("textB"))]
    #[case(InitialText, "(textA)textB", Some("textB"))]
    #[case(InitialText, "( textA )textB", Some("textB"))]
    #[case(InitialText, "(textA) textB", Some("textB"))]
    #[case(InitialText, "(textA)(textB)textC", Some("textC"))]
    #[case(InitialText, "(textA)(textB)", None)]
    #[case(EndingText, "text(1942-1943)", Some("text"))]
    #[case(EndingText, "text(1942-1943)(1950)", Some("text"))]
    #[case(EndingText, "text( 1942-1943 )", Some("text"))]
    #[case(EndingText, "text(1942-1943 ) (1928)", Some("text"))]
    #[case(SquareBracketsAndCirca, "[circa 2000]", Some("2000"))]
    #[case(SquareBracketsAndCirca, "[ca 2000]", Some("2000"))]
    #[case(SquareBracketsAndCirca, "[ca xyz]", Some("xyz"))]
    #[case(SquareBracketsAndCirca, "[ca. 123]", Some("123"))]
    #[case(SquareBracketsAndCirca, "[c. 123]", Some("123"))]
    #[case(SquareBracketsAndCirca, "[circa ad][c. 123]", Some("ad123"))]
    #[case(SquareBrackets, "textA[1942-1943]textB", Some("textA1942-1943textB"))]
    #[case(SquareBrackets, "[textA]-[textB]", Some("textA-textB"))]
    #[case(SquareBrackets, "text[1942-1943][1950]", Some("text1942-19431950"))]
    #[case(SquareBrackets, "text[ 1942-1943 ]", Some("text 1942-1943 "))]
    #[case(SquareBrackets, "text[1942-1943 ] [1928]", Some("text1942-1943  1928"))]
    #[case(SquareBrackets, " [textA]", Some("textA"))]
    #[case(SquareBrackets, " [textA][ textB ]", Some("textA textB "))]
    #[case(SquareBrackets, " [textA][ [textB] ]", Some("textA [textB ]"))]
    #[case(SquareBrackets, "text[[1942-1943]]", Some("text[1942-1943]"))]
    #[case(Circa, "circa 2000", Some("2000"))]
    #[case(Circa, "ca 2000", Some("2000"))]
    #[case(Circa, "c 2000", Some("2000"))]
    #[case(Circa, "ca. 2000", Some("2000"))]
    #[case(Circa, "ca.2000", Some("2000"))]
    #[case(Circa, "c.2000", Some("2000"))]
    #[case(Circa, " circa 2000", Some("2000"))]
    #[case(SquareBracketEnd, "text ]", Some("text"))]
    #[case(SquareBracketEnd, "textA]textB ]", Some("textA]textB"))]
    #[case(EndingText, "text.", Some("text"))]
    #[case(EndingText, "text...", Some("text.."))]
    #[case(EndingText, ".text...", Some(".text.."))]
    #[case(InitialText, "textA", None)]
    #[case(InitialText, "textA:", None)]
    #[case(EndingText, "(1942-1943", None)]
    #[case(EndingText, "(1942-1943)", None)]
    #[case(SquareBracketsAndCirca, "[circa2000", None)]
    #[case(SquareBrackets, "1942-1943", None)]
    #[case(Circa, "circa2000", None)]
    #[case(SquareBracketEnd, "no bracket", None)]
    #[case(EndingText, "text", None)]
    #[case(EndingText, ".", None)]
    fn test_first_pass(
        #[case] expected_operation: CleanOperation,
        #[case] input: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_pass(CLEANER.clean_first_pass(input), expected_operation, expected);
    }

    #[rstest]
    #[case(EndingText, "text[1942-1943]", Some("text"))]
    #[case(ParenthesesFullValueAndCirca, "(circa 2000)", Some("2000"))]
    #[case(ParenthesesFullValueAndCirca, "(ca xyz)", Some("xyz"))]
    #[case(ParenthesesFullValueAndCirca, "(ca. 123)", Some("123"))]
    #[case(ParenthesesFullValueAndCirca, "(c. 123)", Some("123"))]
    #[case(ParenthesesFullValueAndCirca, "(circa ad)(c. 123)", Some("ad)(c. 123"))]
    #[case(ParenthesesFullValue, "(1942-1943)", Some("1942-1943"))]
    #[case(ParenthesesFullValue, "(textA) (textB)", Some("textA) (textB"))]
    #[case(ParenthesesFullValue, " (textA)", Some("textA"))]
    #[case(ParenthesesFullValue, " (textA)( textB )", Some("textA)( textB "))]
    #[case(EndingText, "text[1942-1943textB", None)]
    #[case(ParenthesesFullValueAndCirca, "(circa2000", None)]
    #[case(ParenthesesFullValue, "no parenthesis", None)]
    fn test_second_pass(
        #[case] expected_operation: CleanOperation,
        #[case] input: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_pass(CLEANER.clean_second_pass(input), expected_operation, expected);
    }

    // The orchestrator runs pass 2 on the original sanitized value, but the
    // passes also compose when chained manually.
    #[rstest]
    #[case(Some(EndingText), "textA[[textB]]]", Some("textA"))]
    #[case(Some(EndingText), "textA:1500[textB]", Some("1500"))]
    #[case(Some(EndingText), "(1500textB)2000[textC]", Some("2000"))]
    #[case(Some(EndingText), "(circa 1720)circa 2000[textC]", Some("circa 2000"))]
    #[case(Some(EndingText), "(circa 1720)2700[info]2000[textC]", Some("2700"))]
    #[case(Some(ParenthesesFullValueAndCirca), "(circa 2000)", Some("2000"))]
    #[case(Some(ParenthesesFullValue), "(textA)", Some("textA"))]
    #[case(Some(ParenthesesFullValue), "textA:(textB)", Some("textB"))]
    #[case(Some(ParenthesesFullValueAndCirca), "(circa [circa 2000])", Some("2000"))]
    #[case(Some(ParenthesesFullValue), "(textA-[textB]-textC)", Some("textA-textB-textC"))]
    #[case(None, "circa 2000", None)]
    #[case(None, "text ]", None)]
    #[case(None, "text.", None)]
    fn test_first_then_second_pass(
        #[case] expected_operation: Option<CleanOperation>,
        #[case] input: &str,
        #[case] expected: Option<&str>,
    ) {
        let first = CLEANER.clean_first_pass(input);
        let second_input = first.as_ref().map_or(input, |result| result.value.as_str());
        let second = CLEANER.clean_second_pass(second_input);
        match expected {
            None => assert!(second.is_none(), "expected no match for {input:?}"),
            Some(expected_value) => {
                let result = second.expect("expected a clean result");
                assert_eq!(result.value, expected_value);
                assert_eq!(Some(result.operation), expected_operation);
            }
        }
    }

    #[rstest]
    #[case(SquareBracketsAndCirca, "[circa 2000]", Some("2000"))]
    #[case(SquareBracketsAndCirca, "[circa ad][c. 123]", Some("ad123"))]
    #[case(SquareBrackets, "textA[1942-1943]textB", Some("textA1942-1943textB"))]
    #[case(SquareBrackets, " [textA][ [textB] ]", Some("textA [textB ]"))]
    #[case(Circa, "circa 2000", Some("2000"))]
    #[case(Circa, "ca.2000", Some("2000"))]
    #[case(EndingText, "text(1942-1943)", Some("text"))]
    #[case(SquareBracketsAndCirca, "[circa2000", None)]
    #[case(SquareBrackets, "textA[1942-1943textB", None)]
    #[case(Circa, "circa2000", None)]
    #[case(EndingText, "(1942-1943)", None)]
    #[case(EndingText, "(1942-1943", None)]
    fn test_generic_pass(
        #[case] expected_operation: CleanOperation,
        #[case] input: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_pass(
            CLEANER.clean_generic_property(input),
            expected_operation,
            expected,
        );
    }

    // A cleaned value passed through the same pass again fires no rule.
    #[rstest]
    #[case("circa 1920")]
    #[case("[1851]")]
    #[case("[ca. 1920]")]
    #[case("OK. Circa: 1920")]
    fn test_first_pass_idempotent(#[case] input: &str) {
        let cleaned = CLEANER.clean_first_pass(input).expect("should clean");
        assert_eq!(CLEANER.clean_first_pass(&cleaned.value), None);
    }

    fn assert_pass(
        result: Option<CleanResult>,
        expected_operation: CleanOperation,
        expected: Option<&str>,
    ) {
        match expected {
            None => assert!(result.is_none(), "expected no clean result"),
            Some(expected_value) => {
                let result = result.expect("expected a clean result");
                assert_eq!(result.value, expected_value);
                assert_eq!(result.operation, expected_operation);
            }
        }
    }
}
