//! Command-line runner for the vector dot product benchmark.
//!
//! Usage:
//!   vector-dot                       # 10,000,000 pairs, time-based seed
//!   vector-dot 100                   # 100 pairs
//!   vector-dot 100 --seed 42         # Reproducible run
//!   vector-dot --strategy two-pass   # Generate everything, then sum
//!
//! The count is never rejected: the first token that is not one of the
//! options below is the count, and anything that does not parse as an
//! integer falls back to the default. Further unknown tokens are ignored.

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use tracing::{debug, warn, Level};
use vector_dot_bench::benchmark::{
    available_strategies, resolve_count, resolve_seed, BenchmarkConfig, Strategy,
};

/// Options that take a value, either as the next token or after `=`.
const VALUE_OPTIONS: [&str; 2] = ["--seed", "--strategy"];

/// Options without a value.
const FLAG_OPTIONS: [&str; 6] = [
    "--no-pin",
    "--verbose",
    "--help",
    "-h",
    "--version",
    "-V",
];

#[derive(Parser, Debug)]
#[command(
    name = "vector-dot",
    version,
    about = "Sum dot products of random 3D vectors and time it",
    override_usage = "vector-dot [OPTIONS] [COUNT]",
    after_help = "COUNT: number of vector pairs (default and fallback: 10000000)",
    args_override_self = true
)]
struct Cli {
    /// Seed for the random generator (default: current time in nanoseconds)
    #[arg(long)]
    seed: Option<String>,

    /// Accumulation strategy: interleaved or two-pass
    #[arg(long)]
    strategy: Option<String>,

    /// Do not pin the benchmark thread to a CPU core
    #[arg(long)]
    no_pin: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Command line split into recognised options, the count and leftovers.
#[derive(Debug)]
struct Invocation {
    cli: Cli,
    count: Option<String>,
    ignored: Vec<String>,
}

fn is_verbose_cluster(token: &str) -> bool {
    token.len() > 1
        && token.starts_with('-')
        && !token.starts_with("--")
        && token[1..].chars().all(|c| c == 'v')
}

fn is_value_option_with_value(token: &str) -> bool {
    VALUE_OPTIONS
        .iter()
        .any(|opt| token.strip_prefix(*opt).is_some_and(|rest| rest.starts_with('=')))
}

impl Invocation {
    /// Only recognised options reach clap; every other token is either the
    /// count (the first one) or ignored.
    fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut tokens = args
            .into_iter()
            .map(|t| t.into().to_string_lossy().into_owned());

        let mut clap_args: Vec<String> = tokens.next().into_iter().collect();
        let mut count = None;
        let mut ignored = Vec::new();

        while let Some(token) = tokens.next() {
            if VALUE_OPTIONS.contains(&token.as_str()) {
                match tokens.next() {
                    // `--opt=value` keeps clap from reading a dash value as a flag.
                    Some(value) => clap_args.push(format!("{}={}", token, value)),
                    None => ignored.push(token),
                }
            } else if FLAG_OPTIONS.contains(&token.as_str())
                || is_verbose_cluster(&token)
                || is_value_option_with_value(&token)
            {
                clap_args.push(token);
            } else if count.is_none() {
                count = Some(token);
            } else {
                ignored.push(token);
            }
        }

        let cli = Cli::try_parse_from(clap_args)?;
        Ok(Self {
            cli,
            count,
            ignored,
        })
    }

    fn into_config(self) -> BenchmarkConfig {
        if !self.ignored.is_empty() {
            debug!(ignored = ?self.ignored, "extra arguments ignored");
        }

        let strategy = match self.cli.strategy.as_deref() {
            None => Strategy::default(),
            Some(name) => Strategy::from_name(name).unwrap_or_else(|| {
                warn!(
                    "unknown strategy '{}', using '{}' (available: {:?})",
                    name,
                    Strategy::default().name(),
                    available_strategies()
                );
                Strategy::default()
            }),
        };

        BenchmarkConfig {
            count: resolve_count(self.count.as_deref()),
            seed: resolve_seed(self.cli.seed.as_deref()),
            strategy,
            pin_cpu: !self.cli.no_pin,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Only --help / --version end up here.
    let invocation = Invocation::parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_logging(invocation.cli.verbose);

    let config = invocation.into_config();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    vector_dot_bench::run_seeded(&mut out, &config)?;

    Ok(())
}
