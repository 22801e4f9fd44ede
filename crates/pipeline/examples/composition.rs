//! Composing independent pipelines with `deflate`.

use parz_log::Config;
use parz_pipeline::prelude::*;

type Dimension = Verdict<String, u32, String>;

fn dimension(name: &str, raw: &str) -> Dimension {
    let name = name.to_string();
    start(raw.to_string())
        .then(parser(
            |s: &String| s.parse::<u32>().ok(),
            move |s| nonempty![format!("{name}: {s} cannot be parsed to an integer")],
        ))
        .then(validator(
            |n: &u32| *n > 0,
            |_| nonempty!["dimensions must be positive".to_string()],
        ))
        .value()
}

fn volume(length: &str, width: &str, height: &str) -> Result<u32, NonEmpty<String>> {
    let record = (
        ("length", dimension("length", length)),
        ("width", dimension("width", width)),
        ("height", dimension("height", height)),
    );

    deflate(record)
        .map_deflated(|(l, w, h)| l * w * h)
        .then(validator(
            |v: &u32| *v <= 1_000_000,
            |v| nonempty![format!("volume {v} exceeds the limit")],
        ))
        .value()
        .into_result()
}

fn main() -> Result<(), parz_log::LogError> {
    parz_log::init(Config::development())?;

    for (l, w, h) in [("10", "10", "10"), ("10", "ten", "0"), ("1000", "1000", "2")] {
        match volume(l, w, h) {
            Ok(v) => println!("{l} x {w} x {h} = {v}"),
            Err(errors) => {
                println!("{l} x {w} x {h} rejected:");
                for error in errors {
                    println!("  - {error}");
                }
            }
        }
    }

    Ok(())
}
