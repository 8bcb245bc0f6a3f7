//! Random search over a mixed hyperparameter space.
//!
//! A stand-in for a real continuous optimizer: sample uniform vectors from
//! the adapter's box bounds, evaluate through the cache, keep the best.
//! Run with `cargo run --example random_search`.

use mixspace::prelude::*;

fn main() {
    let objective = Objective::new(
        |params: &[Value], _extra: &[Value]| {
            let kernel = params[0].as_str().unwrap();
            let degree = params[1].as_int().unwrap();
            let c = params[2].as_float().unwrap();
            let gamma = params[3].as_float().unwrap();

            // Synthetic validation loss with a sweet spot at
            // (rbf, degree 3, C = 1.0, gamma = 0.01).
            let kernel_penalty = match kernel {
                "rbf" => 0.0,
                "poly" => 0.05,
                _ => 0.1,
            };
            let loss = kernel_penalty
                + (degree as f64 - 3.0).powi(2) * 0.01
                + (c - 1.0).powi(2) * 0.1
                + (gamma.log10() + 2.0).powi(2) * 0.05;
            Ok(loss)
        },
        vec![
            ChoiceVar::new(vec!["linear".into(), "poly".into(), "rbf".into()])
                .unwrap()
                .into(),
            RandintVar::new(1, 5).unwrap().into(),
            QuniformVar::new(0.1, 10.0, 0.1).unwrap().into(),
            UniformVar::new(1e-4, 1.0).unwrap().into(),
        ],
    );

    let bounds = objective.bounds().to_vec();
    let mut rng = fastrand::Rng::with_seed(42);
    let mut best_vector: Option<Vec<f64>> = None;
    let mut best_loss = f64::INFINITY;

    for i in 0..500 {
        let vector: Vec<f64> = bounds
            .iter()
            .map(|&(low, high)| low + rng.f64() * (high - low))
            .collect();
        let loss = objective.call(&vector, &[]).unwrap();
        if loss < best_loss {
            best_loss = loss;
            best_vector = Some(vector);
            println!("iter {i}: loss={loss:.4}");
        }
    }

    let best = objective.decode(&best_vector.unwrap()).unwrap();
    println!("\nBest loss: {best_loss:.4}");
    println!("  kernel: {}", best[0]);
    println!("  degree: {}", best[1]);
    println!("  C:      {}", best[2]);
    println!("  gamma:  {}", best[3]);

    let info = objective.cache_info();
    println!(
        "\nCache: {} hits, {} misses, {} entries",
        info.hits, info.misses, info.currsize
    );
}
