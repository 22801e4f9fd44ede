//! End-to-end scenarios for the chain engine.

use parz_pipeline::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// STEPS
// ============================================================================

fn length_is_5() -> impl Fn(String) -> Outcome<String, String, String> {
    validator(
        |s: &String| s.len() == 5,
        |s| {
            nonempty![format!(
                "String is not length 5, it is actually of length {}",
                s.len()
            )]
        },
    )
}

fn string_to_int() -> impl Fn(String) -> Outcome<String, i64, String> {
    parser(
        |s: &String| s.parse::<i64>().ok(),
        |s| nonempty![format!("{s} cannot be parsed to an integer")],
    )
}

fn less_than_ten() -> impl Fn(i64) -> Outcome<i64, i64, String> {
    validator(
        |n: &i64| *n < 10,
        |n| nonempty![format!("Expected a number less than 10, but was actually {n}")],
    )
}

fn strings(errors: &[&str]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

// ============================================================================
// SINGLE STEPS
// ============================================================================

#[rstest]
#[case("12345", true)]
#[case("1", false)]
#[case("", false)]
#[case("123456", false)]
fn test_length_validation(#[case] input: &str, #[case] passes: bool) {
    let verdict = start(input.to_string()).then(length_is_5()).value();
    assert_eq!(verdict.is_success(), passes);
    assert_eq!(verdict.original(), input);
}

#[test]
fn test_length_failure_message() {
    let verdict = start("1".to_string()).then(length_is_5()).value();
    assert_eq!(
        verdict,
        Verdict::Fail {
            original: "1".to_string(),
            errors: nonempty!["String is not length 5, it is actually of length 1".to_string()],
        }
    );
}

#[rstest]
#[case("1", 1)]
#[case("-42", -42)]
#[case("12345", 12345)]
fn test_parse_success(#[case] input: &str, #[case] expected: i64) {
    let verdict = start(input.to_string()).then(string_to_int()).value();
    assert_eq!(verdict.into_target(), Some(expected));
}

#[rstest]
#[case("abc")]
#[case("1.5")]
#[case("")]
fn test_parse_failure(#[case] input: &str) {
    let verdict = start(input.to_string()).then(string_to_int()).value();
    assert_eq!(
        verdict.errors(),
        strings(&[format!("{input} cannot be parsed to an integer").as_str()])
    );
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn test_validate_then_parse_success() {
    let verdict = start("12345".to_string())
        .then(length_is_5())
        .then(string_to_int())
        .value();
    assert_eq!(
        verdict,
        Verdict::Success {
            original: "12345".to_string(),
            target: 12345,
        }
    );
}

#[test]
fn test_soft_failure_before_successful_parse_still_fails() {
    let verdict = start("1".to_string())
        .then(length_is_5())
        .then(string_to_int())
        .value();
    assert!(is_fail(&verdict));
    assert_eq!(
        verdict.errors(),
        strings(&["String is not length 5, it is actually of length 1"])
    );
}

#[test]
fn test_errors_accumulate_in_step_order() {
    let verdict = start("100".to_string())
        .then(string_to_int())
        .then(less_than_ten())
        .then(less_than_ten())
        .value();
    assert_eq!(
        verdict.errors(),
        strings(&[
            "Expected a number less than 10, but was actually 100",
            "Expected a number less than 10, but was actually 100",
        ])
    );
}

#[test]
fn test_soft_then_hard_failure() {
    let verdict = start("abc".to_string())
        .then(length_is_5())
        .then(string_to_int())
        .then(less_than_ten())
        .value();
    assert_eq!(
        verdict.errors(),
        strings(&[
            "String is not length 5, it is actually of length 3",
            "abc cannot be parsed to an integer",
        ])
    );
}

#[test]
fn test_steps_are_reusable_by_reference() {
    let to_int = string_to_int();
    let small = less_than_ten();

    let first = chain!("3".to_string() => &to_int, &small).value();
    let second = chain!("30".to_string() => &to_int, &small).value();

    assert_eq!(first.target(), Some(&3));
    assert!(second.is_fail());
}

#[test]
fn test_composite_volume() {
    let dimension = |raw: &str| {
        start(raw.to_string())
            .then(string_to_int())
            .then(validator(
                |n: &i64| *n > 0,
                |n| nonempty![format!("{n} is not a positive dimension")],
            ))
            .value()
    };

    let volume = deflate((
        ("length", dimension("10")),
        ("width", dimension("10")),
        ("height", dimension("10")),
    ))
    .map_deflated(|(l, w, h)| l * w * h)
    .value();

    assert_eq!(volume.into_target(), Some(1000));
}

#[test]
fn test_two_soft_failures_then_hard_failure() {
    let verdict = start("a".to_string())
        .then(length_is_5())
        .then(length_is_5())
        .then(string_to_int())
        .value();
    assert_eq!(verdict.errors().len(), 3);
    assert_eq!(
        verdict.errors().last(),
        Some(&"a cannot be parsed to an integer".to_string())
    );
}

#[test]
fn test_soft_failure_parse_soft_failure() {
    let length_is_1 = validator(
        |s: &String| s.len() == 1,
        |s| nonempty![format!("String is not length 1, it is actually of length {}", s.len())],
    );
    let verdict = start("100".to_string())
        .then(length_is_1)
        .then(string_to_int())
        .then(less_than_ten())
        .value();
    assert_eq!(verdict.errors().len(), 2);
}

type Dimensions = (
    Verdict<String, i64, String>,
    Verdict<String, i64, String>,
    Verdict<String, i64, String>,
);

fn compute_volume() -> impl Fn(Dimensions) -> Outcome<Dimensions, i64, String> {
    parser(
        |(l, w, h): &Dimensions| Some(l.target()? * w.target()? * h.target()?),
        |_| nonempty!["Unable to compute volume".to_string()],
    )
}

#[rstest]
#[case(["10", "10", "10"], Ok(1000))]
#[case(["Hello!", "yolo", ":-)"], Err(vec!["Unable to compute volume".to_string()]))]
fn test_parser_over_a_record_of_verdicts(
    #[case] raw: [&str; 3],
    #[case] expected: Result<i64, Vec<String>>,
) {
    let parse = |s: &str| start(s.to_string()).then(string_to_int()).value();
    let dimensions = (parse(raw[0]), parse(raw[1]), parse(raw[2]));

    let verdict = start(dimensions).then(compute_volume()).value();
    assert_eq!(verdict.into_result().map_err(Vec::from), expected);
}

// ============================================================================
// CUSTOM ERROR PAYLOADS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct RangeError {
    must_be_valid: bool,
    is_valid: bool,
    msg: String,
}

#[test]
fn test_custom_error_struct() {
    let error = |n: &i32| RangeError {
        must_be_valid: true,
        is_valid: false,
        msg: format!("Number is ten or greater. Actual: {n}"),
    };
    let less_than_ten = validator(|n: &i32| *n < 10, move |n| nonempty![error(n)]);

    let verdict = start(11).then(less_than_ten).value();
    assert!(is_fail(&verdict));
    assert_eq!(verdict.errors(), [error(&11)]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FieldError {
    TooShort { min: usize, actual: usize },
    NotANumber(String),
}

#[test]
fn test_structured_error_payload() {
    let min_three = validator(
        |s: &String| s.len() >= 3,
        |s| {
            nonempty![FieldError::TooShort {
                min: 3,
                actual: s.len(),
            }]
        },
    );
    let to_u16 = parser(
        |s: &String| s.parse::<u16>().ok(),
        |s| nonempty![FieldError::NotANumber(s.clone())],
    );

    let verdict = start("x".to_string()).then(min_three).then(to_u16).value();
    assert_eq!(
        verdict.errors(),
        [
            FieldError::TooShort { min: 3, actual: 1 },
            FieldError::NotANumber("x".to_string()),
        ]
    );
}

#[test]
fn test_step_may_return_several_errors() {
    let checks = validator(
        |s: &String| s.chars().all(char::is_alphanumeric) && s.len() <= 3,
        |s| {
            let mut errors = nonempty![format!("{s} failed validation")];
            if s.len() > 3 {
                errors.push("too long".to_string());
            }
            errors
        },
    );

    let verdict = start("a-b-c".to_string()).then(checks).value();
    assert_eq!(
        verdict.errors(),
        strings(&["a-b-c failed validation", "too long"])
    );
}
