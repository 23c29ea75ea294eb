use synthgen::gaussian::{SamplerParams, Rescale, generate, generate_with, gaussian_points};
use synthgen::rng::SampleRng;
use synthgen::trend::{Point, TrendDirection, inject};

fn main() {
    println!("=== Synthetic Data Demo ===\n");

    // 1. Seeded gaussian samples
    println!("1. Gaussian samples (12 uniforms each, seed 7):");
    let samples = generate(5, 12, Some(7)).expect("valid iteration count");
    for (i, x) in samples.iter().enumerate() {
        println!("  sample {}: {:+.4}", i, x);
    }

    let again = generate(5, 12, Some(7)).expect("valid iteration count");
    println!("  Reproducible with the same seed: {}", samples == again);

    // 2. Standard vs legacy rescaling
    println!("\n2. Rescaling with 3 uniforms per sample:");
    let standard = SamplerParams::with_iterations(3);
    let legacy = SamplerParams { iteration_count: 3, rescale: Rescale::Legacy };
    let a = generate_with(3, &standard, &mut SampleRng::from_seed(1)).expect("valid params");
    let b = generate_with(3, &legacy, &mut SampleRng::from_seed(1)).expect("valid params");
    for (s, l) in a.iter().zip(&b) {
        println!("  standard {:+.4}  legacy {:+.4}", s, l);
    }

    // 3. Trend injection
    println!("\n3. Linear trend:");
    let points = vec![Point::from([1.0, 2.0]), Point::from([3.0, -1.0])];
    let trended = inject(&points, &[1.0, 1.0], 2.0).expect("matching dimensions");
    for p in &trended {
        println!("  {:?}", p.coords());
    }

    match inject(&points, &[1.0, 1.0, 1.0], 2.0) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  Mismatched direction rejected: {}", e),
    }

    // 4. Gaussian cloud with a trend dimension
    println!("\n4. Gaussian points with a trend along (0.5, -0.25):");
    let mut rng = SampleRng::from_seed(2024);
    let cloud = gaussian_points(4, 2, &SamplerParams::default(), &mut rng).expect("valid params");
    let trend = TrendDirection::new(vec![0.5, -0.25], 4.0);
    for p in trend.apply(&cloud).expect("matching dimensions") {
        println!("  ({:+.3}, {:+.3}) -> trend {:+.3}", p[0], p[1], p[2]);
    }

    println!("\n=== Demo Complete ===");
}
