//! Math primitives used by the benchmark.

pub mod vector3d;
