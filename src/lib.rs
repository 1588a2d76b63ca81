//! # Vector-Dot-Bench
//!
//! Sums the dot products of many random 3D vector pairs and times it.

pub mod benchmark;
pub mod math;
pub mod random;
pub mod utils;

/// Re-export the entry points used by the binary
pub use benchmark::{run_benchmark, run_seeded};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::benchmark::{
        accumulate, resolve_count, BenchmarkConfig, BenchmarkReport, Strategy,
    };
    pub use crate::math::vector3d::Vector3D;
    pub use crate::random::{ExtremeVectorSource, FixedPairSource, VectorSource};
}
