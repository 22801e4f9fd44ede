//! Workspace maintenance tasks.
//!
//! ```text
//! cargo xtask dist crates/pipeline            # -> dist/parz-pipeline/
//! cargo xtask dist crates/log --out target/dist
//! ```

mod dist;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Workspace maintenance tasks")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Stage a crate for publishing",
        long_about = "Dist copies README.md and a Cargo.toml without development-only tables \
                      (dev-dependencies, benches, examples, tests) into <out>/<crate-name>/.",
        after_help = "Example:\n    cargo xtask dist crates/pipeline --out dist"
    )]
    Dist {
        /// Directory containing the crate's Cargo.toml and README.md
        crate_dir: PathBuf,

        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Args::parse().command {
        Command::Dist { crate_dir, out } => {
            let staged = dist::stage(&crate_dir, &out)?;
            println!("staged {}", staged.display());
        }
    }
    Ok(())
}
