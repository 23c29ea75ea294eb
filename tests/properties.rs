use approx::assert_relative_eq;
use synthgen::{Point, SampleRng, SamplerParams, SynthError, TrendDirection, gaussian_points, generate, inject};

#[test]
fn test_generate_returns_requested_count() {
    for size in [0, 1, 17, 500] {
        for k in [1, 3, 12] {
            assert_eq!(generate(size, k, Some(99)).unwrap().len(), size);
        }
    }
    assert_eq!(generate(25, 4, None).unwrap().len(), 25);
}

#[test]
fn test_generate_seeded_is_deterministic() {
    let a = generate(200, 6, Some(31337)).unwrap();
    let b = generate(200, 6, Some(31337)).unwrap();
    assert_eq!(a, b);

    let c = generate(200, 6, Some(31338)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_generate_converges_to_standard_normal() {
    let samples = generate(10000, 12, Some(77)).unwrap();
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

    assert!(mean.abs() < 0.05, "mean {mean}");
    assert!((variance - 1.0).abs() < 0.1, "variance {variance}");
}

#[test]
fn test_generate_edge_cases() {
    assert!(generate(0, 5, None).unwrap().is_empty());

    let err = generate(5, 0, None).unwrap_err();
    assert_eq!(err, SynthError::ZeroIterations);
    assert!(err.is_invalid_argument());
}

#[test]
fn test_inject_examples() {
    let result = inject(&[Point::from([1.0, 2.0])], &[1.0, 1.0], 2.0).unwrap();
    assert_eq!(result, vec![Point::from([1.0, 2.0, 6.0])]);

    let err = inject(&[], &[1.0], 1.0).unwrap_err();
    assert_eq!(err, SynthError::NoPoints);
    assert!(err.is_invalid_argument());

    let err = inject(&[Point::from([1.0, 2.0, 3.0])], &[1.0, 1.0], 1.0).unwrap_err();
    assert!(matches!(err, SynthError::DimensionMismatch { expected: 2, found: 3, .. }));
    assert!(err.is_invalid_argument());
}

#[test]
fn test_trend_over_gaussian_cloud() {
    let mut rng = SampleRng::from_seed(12);
    let cloud = gaussian_points(300, 3, &SamplerParams::default(), &mut rng).unwrap();

    let direction = [1.0, -2.0, 0.5];
    let trended = inject(&cloud, &direction, 1.5).unwrap();
    assert_eq!(trended.len(), cloud.len());

    for (input, output) in cloud.iter().zip(&trended) {
        assert_eq!(output.dims(), direction.len() + 1);
        assert_eq!(&output.coords()[..3], input.coords());

        let expected = 1.5 * (input[0] - 2.0 * input[1] + 0.5 * input[2]);
        assert_relative_eq!(output[3], expected, epsilon = 1e-9);
    }
}

#[test]
fn test_trend_direction_matches_inject() {
    let points = vec![Point::from([0.2, 0.4]), Point::from([-3.0, 1.0])];
    let trend = TrendDirection::new(vec![2.0, 3.0], -0.5);

    assert_eq!(trend.apply(&points).unwrap(), inject(&points, &[2.0, 3.0], -0.5).unwrap());
    assert_relative_eq!(trend.trend_value(&points[1]), 1.5, epsilon = 1e-12);
}
