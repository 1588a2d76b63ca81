//! Utility modules for timing and execution.

pub mod cpu_affinity;
pub mod timer;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure, TimeBreakdown};
