//! Random vector sources.
//!
//! Every vector consumed by the benchmark comes from a [`VectorSource`]. The
//! production source, [`ExtremeVectorSource`], scales uniform draws up to the
//! edge of the `f64` range with an independent random sign per component.
//! Tests swap in [`FixedPairSource`] to get deterministic sums.

#[cfg(test)]
mod test;

use crate::math::vector3d::Vector3D;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that hands out vectors, one at a time.
pub trait VectorSource {
    fn next_vector(&mut self) -> Vector3D;
}

impl<S: VectorSource + ?Sized> VectorSource for &mut S {
    fn next_vector(&mut self) -> Vector3D {
        (**self).next_vector()
    }
}

/// Uniform `[0, 1)` magnitude times `f64::MAX`, with a fair random sign.
///
/// Draw order is magnitude first, then sign.
#[inline]
pub fn extreme_component<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let magnitude: f64 = rng.random();
    let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
    magnitude * f64::MAX * sign
}

/// Vectors whose components are spread over the whole finite `f64` range.
pub struct ExtremeVectorSource<R> {
    rng: R,
}

impl<R: Rng> ExtremeVectorSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ExtremeVectorSource<StdRng> {
    /// Seeded source over [`StdRng`]. Same seed, same stream.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VectorSource for ExtremeVectorSource<R> {
    fn next_vector(&mut self) -> Vector3D {
        let x = extreme_component(&mut self.rng);
        let y = extreme_component(&mut self.rng);
        let z = extreme_component(&mut self.rng);
        Vector3D::new(x, y, z)
    }
}

/// Alternates between two fixed vectors: `a, b, a, b, ...`
///
/// Paired with the benchmark loop (which draws A then B per index) every
/// pair is exactly `(a, b)`.
#[derive(Clone, Debug)]
pub struct FixedPairSource {
    a: Vector3D,
    b: Vector3D,
    next_is_a: bool,
}

impl FixedPairSource {
    pub fn new(a: Vector3D, b: Vector3D) -> Self {
        Self {
            a,
            b,
            next_is_a: true,
        }
    }
}

impl VectorSource for FixedPairSource {
    fn next_vector(&mut self) -> Vector3D {
        let v = if self.next_is_a { self.a } else { self.b };
        self.next_is_a = !self.next_is_a;
        v
    }
}

/// Get a seed from the current time, at nanosecond resolution.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
