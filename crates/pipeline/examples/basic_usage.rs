//! Basic usage: validators, parsers and materialization.
//!
//! Run with `PARZ_LOG=parz_pipeline=trace cargo run -p parz-pipeline --example basic_usage`
//! to see every step transition.

use parz_pipeline::prelude::*;

fn main() -> Result<(), parz_log::LogError> {
    parz_log::init_from_env()?;

    let length_is_5 = validator(
        |s: &String| s.len() == 5,
        |s| {
            nonempty![format!(
                "String is not length 5, it is actually of length {}",
                s.len()
            )]
        },
    );
    let string_to_int = parser(
        |s: &String| s.parse::<i64>().ok(),
        |s| nonempty![format!("{s} cannot be parsed to an integer")],
    );
    let less_than_ten = validator(
        |n: &i64| *n < 10,
        |n| nonempty![format!("Expected a number less than 10, but was actually {n}")],
    );

    for input in ["12345", "1", "abc", "100"] {
        let verdict = start(input.to_string())
            .then(&length_is_5)
            .then(&string_to_int)
            .then(&less_than_ten)
            .value();

        match verdict {
            Verdict::Success { original, target } => {
                println!("{original:>6} -> {target}");
            }
            Verdict::Fail { original, errors } => {
                println!("{original:>6} -> {} error(s)", errors.len());
                for error in &errors {
                    println!("         - {error}");
                }
            }
        }
    }

    Ok(())
}
