use super::*;

#[test]
fn test_extreme_source_determinism() {
    let mut a = ExtremeVectorSource::from_seed(0xdeadbeef);
    let mut b = ExtremeVectorSource::from_seed(0xdeadbeef);

    for i in 0..1000 {
        assert_eq!(
            a.next_vector(),
            b.next_vector(),
            "streams diverged at index {}",
            i
        );
    }
}

#[test]
fn test_extreme_source_seeds_differ() {
    let mut a = ExtremeVectorSource::from_seed(1);
    let mut b = ExtremeVectorSource::from_seed(2);

    let same = (0..100).filter(|_| a.next_vector() == b.next_vector()).count();
    assert!(same < 100, "different seeds produced identical streams");
}

#[test]
fn test_extreme_components_are_finite_and_in_range() {
    let mut source = ExtremeVectorSource::from_seed(0x12345678);
    for _ in 0..10_000 {
        let v = source.next_vector();
        for c in [v.x, v.y, v.z] {
            assert!(c.is_finite(), "component {} is not finite", c);
            assert!(c.abs() <= f64::MAX);
        }
    }
}

#[test]
fn test_extreme_components_reach_large_magnitudes() {
    let mut source = ExtremeVectorSource::from_seed(7);
    let large = (0..1000)
        .map(|_| source.next_vector())
        .filter(|v| v.x.abs() > f64::MAX / 4.0)
        .count();
    // P(|x| > MAX/4) = 3/4
    assert!(large > 650 && large < 850, "got {} large components", large);
}

#[test]
fn test_extreme_signs_are_balanced_per_axis() {
    let mut source = ExtremeVectorSource::from_seed(0xcafebab);
    let n = 20_000;
    let mut negatives = [0usize; 3];

    for _ in 0..n {
        let v = source.next_vector();
        for (count, c) in negatives.iter_mut().zip([v.x, v.y, v.z]) {
            if c < 0.0 {
                *count += 1;
            }
        }
    }

    for (axis, &count) in negatives.iter().enumerate() {
        let ratio = count as f64 / n as f64;
        assert!(
            (ratio - 0.5).abs() < 0.02,
            "axis {} negative ratio {} is not close to 0.5",
            axis,
            ratio
        );
    }
}

#[test]
fn test_extreme_component_draw_order() {
    // Magnitude is drawn before the sign, component by component.
    let mut rng = StdRng::seed_from_u64(99);
    let magnitude: f64 = rng.random();
    let positive: bool = rng.random();
    let expected = magnitude * f64::MAX * if positive { 1.0 } else { -1.0 };

    let mut source = ExtremeVectorSource::from_seed(99);
    assert_eq!(source.next_vector().x, expected);
}

#[test]
fn test_fixed_pair_alternates() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let mut source = FixedPairSource::new(a, b);

    for _ in 0..5 {
        assert_eq!(source.next_vector(), a);
        assert_eq!(source.next_vector(), b);
    }
}

#[test]
fn test_borrowed_source_advances_owner() {
    let a = Vector3D::new(1.0, 0.0, 0.0);
    let b = Vector3D::new(0.0, 1.0, 0.0);
    let mut source = FixedPairSource::new(a, b);

    fn draw<S: VectorSource>(mut source: S) -> Vector3D {
        source.next_vector()
    }

    assert_eq!(draw(&mut source), a);
    assert_eq!(source.next_vector(), b);
}

#[test]
fn test_time_seed_changes() {
    let first = time_seed();
    std::thread::sleep(std::time::Duration::from_millis(1));
    assert_ne!(first, time_seed());
}
