//! # Vector Dot Product Benchmark
//!
//! Draws `count` pairs of random 3D vectors, sums the dot product of each
//! pair and reports how long that took.
//!
//! The run is strictly linear: configure, then generate and accumulate, then
//! report. Only the accumulation phase is timed. Both vector sequences are
//! kept in memory until the loop finishes, even though each element is read
//! exactly once.


use crate::math::vector3d::{dot, Vector3D};
use crate::random::{time_seed, ExtremeVectorSource, VectorSource};
use crate::utils::{measure, CpuPinGuard};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

pub use crate::utils::TimeBreakdown;

/// Vector count used when no valid count is given.
pub const DEFAULT_VECTOR_COUNT: i64 = 10_000_000;

/// Language tag printed in the first report line.
pub const LANGUAGE: &str = "Rust";

/// Resolve the optional count argument.
///
/// Any string that parses as a signed integer wins, negative values
/// included. Everything else, absence too, gives [`DEFAULT_VECTOR_COUNT`].
pub fn resolve_count(arg: Option<&str>) -> i64 {
    arg.and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_VECTOR_COUNT)
}

/// Resolve the optional seed argument, falling back to the current time.
pub fn resolve_seed(arg: Option<&str>) -> u64 {
    arg.and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(time_seed)
}

/// How the two vector sequences are filled and consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Generate `a[i]`, `b[i]`, add their dot product, move on.
    #[default]
    Interleaved,
    /// Generate both sequences completely, then sum over the indices.
    TwoPass,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Interleaved, Strategy::TwoPass];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Interleaved => "interleaved",
            Strategy::TwoPass => "two-pass",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::Interleaved => "Generate each pair and accumulate immediately",
            Strategy::TwoPass => "Generate both sequences first, then accumulate",
        }
    }

    pub fn from_name(name: &str) -> Option<Strategy> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Names of every accumulation strategy.
pub fn available_strategies() -> Vec<&'static str> {
    Strategy::ALL.iter().map(|s| s.name()).collect()
}

/// Everything a run needs, resolved up front.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub count: i64,
    pub seed: u64,
    pub strategy: Strategy,
    pub pin_cpu: bool,
}

/// Sum of `dot(a[i], b[i])` over `count` freshly drawn pairs.
///
/// Each index draws `a[i]` then `b[i]` from `source`. A count of zero or
/// less never enters the loop and returns `0.0`.
///
/// # Panics
/// Both sequences are allocated up front with room for `count` vectors, so a
/// count whose storage exceeds `isize::MAX` bytes panics with
/// "capacity overflow", and one that exceeds available memory aborts.
pub fn accumulate<S: VectorSource>(source: &mut S, count: i64, strategy: Strategy) -> f64 {
    let n = usize::try_from(count).unwrap_or(0);
    match strategy {
        Strategy::Interleaved => accumulate_interleaved(source, n),
        Strategy::TwoPass => accumulate_two_pass(source, n),
    }
}

fn accumulate_interleaved<S: VectorSource>(source: &mut S, n: usize) -> f64 {
    let mut vectors_a: Vec<Vector3D> = Vec::with_capacity(n);
    let mut vectors_b: Vec<Vector3D> = Vec::with_capacity(n);
    let mut sum = 0.0;

    for i in 0..n {
        vectors_a.push(source.next_vector());
        vectors_b.push(source.next_vector());
        sum += dot(&vectors_a[i], &vectors_b[i]);
    }

    sum
}

fn accumulate_two_pass<S: VectorSource>(source: &mut S, n: usize) -> f64 {
    let mut vectors_a: Vec<Vector3D> = Vec::with_capacity(n);
    let mut vectors_b: Vec<Vector3D> = Vec::with_capacity(n);

    for _ in 0..n {
        vectors_a.push(source.next_vector());
        vectors_b.push(source.next_vector());
    }

    let mut sum = 0.0;
    for i in 0..n {
        sum += dot(&vectors_a[i], &vectors_b[i]);
    }

    sum
}

/// Outcome of one run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkReport {
    pub count: i64,
    pub sum: f64,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    pub fn breakdown(&self) -> TimeBreakdown {
        TimeBreakdown::from_duration(self.elapsed)
    }

    pub fn total_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// The three lines printed before the timed phase.
pub fn write_header<W: Write>(out: &mut W, count: i64) -> std::io::Result<()> {
    writeln!(
        out,
        "Running {} vector dot product benchmark with size: {}",
        LANGUAGE, count
    )?;
    writeln!(out, "Generating {} random 3D vectors...", count)?;
    writeln!(out, "Starting benchmark...")?;
    out.flush()
}

/// The three lines printed once the timed phase is over.
pub fn write_result<W: Write>(out: &mut W, report: &BenchmarkReport) -> std::io::Result<()> {
    let breakdown = report.breakdown();
    writeln!(out, "Result: {:.6}", report.sum)?;
    writeln!(
        out,
        "Time breakdown: {} minutes, {} seconds, {} milliseconds",
        breakdown.minutes, breakdown.seconds, breakdown.milliseconds
    )?;
    writeln!(out, "Total time in seconds: {:.6}", report.total_seconds())?;
    out.flush()
}

/// Run the benchmark against `source`, writing the report to `out`.
///
/// `config.seed` is not used here; the caller builds the source from it.
pub fn run_benchmark<W, S>(
    out: &mut W,
    config: &BenchmarkConfig,
    mut source: S,
) -> Result<BenchmarkReport>
where
    W: Write,
    S: VectorSource,
{
    write_header(out, config.count).context("failed to write benchmark header")?;

    debug!(
        count = config.count,
        strategy = config.strategy.name(),
        "{}",
        config.strategy.description()
    );

    let pin = if config.pin_cpu {
        CpuPinGuard::pin_current()
    } else {
        CpuPinGuard::unpinned()
    };
    debug!(
        pinned = pin.is_pinned(),
        core_id = ?pin.core_id(),
        "starting timed phase"
    );
    let (elapsed, sum) = measure(|| accumulate(&mut source, config.count, config.strategy));
    drop(pin);

    let report = BenchmarkReport {
        count: config.count,
        sum,
        elapsed,
    };
    info!(
        count = report.count,
        sum = report.sum,
        elapsed_ms = elapsed.as_millis() as u64,
        "benchmark finished"
    );

    write_result(out, &report).context("failed to write benchmark result")?;
    Ok(report)
}

/// Seeded run with the random generator, as the binary does it.
pub fn run_seeded<W: Write>(out: &mut W, config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    info!(seed = config.seed, "seeding vector generator");
    run_benchmark(out, config, ExtremeVectorSource::from_seed(config.seed))
}

/// Check that every strategy reproduces the interleaved sum for `seed`.
pub fn verify_strategies(seed: u64, count: i64) -> Result<(), String> {
    let expected = accumulate(
        &mut ExtremeVectorSource::from_seed(seed),
        count,
        Strategy::Interleaved,
    );

    for strategy in Strategy::ALL {
        if strategy == Strategy::Interleaved {
            continue;
        }

        let result = accumulate(&mut ExtremeVectorSource::from_seed(seed), count, strategy);
        if result.to_bits() != expected.to_bits() {
            return Err(format!(
                "Strategy '{}' failed verification. Expected {}, got {}",
                strategy.name(),
                expected,
                result
            ));
        }
    }

    Ok(())
}
