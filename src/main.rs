use clap::{Parser, Subcommand};
use serde::Serialize;

use leet_arrays::{merge_demo, merge_report, remove_demo, remove_report};

#[derive(Parser, Debug)]
#[command(version, about = "In-place array exercises")]
struct Args {
    /// Print results as JSON instead of the plain form
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge sorted `b` into the spare tail of sorted `a`
    Merge {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        a: Vec<i64>,
        /// Number of real values in `a`, defaults to len(a) - n
        #[arg(long)]
        m: Option<usize>,
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        b: Vec<i64>,
        /// Number of values taken from `b`, defaults to len(b)
        #[arg(long)]
        n: Option<usize>,
    },
    /// Drop every occurrence of `target` from `values`
    Remove {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i64>,
        #[arg(long, allow_hyphen_values = true)]
        target: i64,
    },
    /// Run both exercises on their fixed sample inputs
    Demo,
}

fn emit<R: Serialize + std::fmt::Display>(report: &R, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Fills in the counts the user left out: `n` falls back to len(b), `m` to
/// whatever of `a` is left once `n` slots are reserved for the merge.
fn resolve_counts(
    a_len: usize,
    m: Option<usize>,
    b_len: usize,
    n: Option<usize>,
) -> anyhow::Result<(usize, usize)> {
    let n = n.unwrap_or(b_len);
    let m = match m {
        Some(m) => m,
        None => a_len.checked_sub(n).ok_or_else(|| {
            anyhow::anyhow!("`a` has {a_len} slots, fewer than the {n} values taken from `b`")
        })?,
    };
    Ok((m, n))
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Merge { a, m, b, n } => {
            let (m, n) = resolve_counts(a.len(), m, b.len(), n)?;
            emit(&merge_report(a, m, b, n)?, args.json)?;
        }
        Command::Remove { values, target } => {
            emit(&remove_report(values, target), args.json)?;
        }
        Command::Demo => {
            log::info!("running merge demo");
            emit(&merge_demo()?, args.json)?;
            log::info!("running remove demo");
            emit(&remove_demo(), args.json)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");
    run(args)
}
