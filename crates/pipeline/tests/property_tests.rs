//! Property-based tests for parz-pipeline.

use std::cell::Cell;

use parz_pipeline::prelude::*;
use proptest::prelude::*;

fn string_to_int() -> impl Fn(String) -> Outcome<String, i64, String> {
    parser(
        |s: &String| s.parse::<i64>().ok(),
        |s| nonempty![format!("{s} cannot be parsed to an integer")],
    )
}

// ============================================================================
// IDENTITY: start(x).value() == Success(x, x)
// ============================================================================

proptest! {
    #[test]
    fn start_is_identity(s in ".*") {
        let verdict: Verdict<String, String, String> = start(s.clone()).value();
        prop_assert_eq!(verdict, Verdict::Success { original: s.clone(), target: s });
    }

    #[test]
    fn passing_validators_are_identity(n in any::<i32>(), count in 0usize..10) {
        let always = validator(|_: &i32| true, |_| nonempty!["never".to_string()]);
        let mut pipeline = start(n);
        for _ in 0..count {
            pipeline = pipeline.then(&always);
        }
        let verdict = pipeline.value();
        prop_assert_eq!(verdict.into_target(), Some(n));
    }
}

// ============================================================================
// ACCUMULATION: soft failures are all reported, in order
// ============================================================================

proptest! {
    #[test]
    fn soft_failures_accumulate_in_order(flags in prop::collection::vec(any::<bool>(), 0..12)) {
        let mut pipeline = start(0usize);
        for (position, passes) in flags.iter().copied().enumerate() {
            pipeline = pipeline.then(validator(
                move |_: &usize| passes,
                move |_| nonempty![position],
            ));
        }

        let expected: Vec<usize> = flags
            .iter()
            .enumerate()
            .filter(|(_, passes)| !**passes)
            .map(|(position, _)| position)
            .collect();

        prop_assert_eq!(pipeline.errors(), expected.as_slice());
        let verdict = pipeline.value();
        prop_assert_eq!(verdict.is_success(), expected.is_empty());
        prop_assert_eq!(verdict.errors(), expected.as_slice());
    }
}

// ============================================================================
// SHORT-CIRCUIT: nothing runs after a failed parse
// ============================================================================

proptest! {
    #[test]
    fn failed_parse_halts(s in "[a-z]{1,10}", later in 1usize..8) {
        let calls = Cell::new(0usize);
        let probe = |n: i64| {
            calls.set(calls.get() + 1);
            Outcome::<i64, i64, String>::validation_valid(n, n)
        };

        let mut pipeline = start(s).then(string_to_int()).then(&probe);
        for _ in 1..later {
            pipeline = pipeline.then(&probe);
        }

        prop_assert_eq!(calls.get(), 0);
        prop_assert!(pipeline.is_halted());
        prop_assert_eq!(pipeline.errors().len(), 1);
        prop_assert!(is_fail(&pipeline.value()));
    }

    #[test]
    fn parsed_integers_round_trip(n in any::<i64>()) {
        let verdict = start(n.to_string()).then(string_to_int()).value();
        prop_assert_eq!(verdict.into_target(), Some(n));
    }
}

// ============================================================================
// AGGREGATION: errors are the concatenation of the failing entries
// ============================================================================

proptest! {
    #[test]
    fn deflate_concatenates_failures(
        entries in prop::collection::vec(prop::option::of(1usize..4), 0..8)
    ) {
        let record: Vec<(usize, Verdict<(), i32, String>)> = entries
            .iter()
            .enumerate()
            .map(|(key, entry)| {
                let verdict = match entry {
                    None => Verdict::Success { original: (), target: 1 },
                    Some(count) => {
                        let mut errors = nonempty![format!("{key}.0")];
                        for i in 1..*count {
                            errors.push(format!("{key}.{i}"));
                        }
                        Verdict::Fail { original: (), errors }
                    }
                };
                (key, verdict)
            })
            .collect();

        let expected: Vec<String> = entries
            .iter()
            .enumerate()
            .filter_map(|(key, entry)| entry.map(|count| (key, count)))
            .flat_map(|(key, count)| (0..count).map(move |i| format!("{key}.{i}")))
            .collect();

        let verdict = deflate(record)
            .map_deflated(|targets| targets.iter().map(|(_, n)| n).sum::<i32>())
            .value();

        prop_assert_eq!(verdict.errors(), expected.as_slice());
        if expected.is_empty() {
            prop_assert_eq!(verdict.into_target(), Some(i32::try_from(entries.len()).unwrap()));
        }
    }
}
