// Demonstration: n-step advantages for a small batch of two trajectories.
//
// Run from the repo root:
//   cargo run --example n_step_advantage -- --gamma 0.9 --n 4

use std::env;

use ndarray::array;
use nstep::{NStepAdvantage, NStepConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let gamma: f64 = arg_value(&args, "--gamma")
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.9);
    let n: Option<usize> = arg_value(&args, "--n").and_then(|s| s.parse().ok());

    let rewards = array![[1.0, 2.0, 3.0, 4.0, 5.0], [5.0, 4.0, 3.0, 2.0, 1.0]];
    let dones = array![[0.0, 0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 0.0, 0.0]];
    let values = array![
        [-100.0, 10.0, 20.0, 30.0, 40.0, 50.0],
        [-150.0, 15.0, 25.0, 35.0, 45.0, 55.0]
    ];

    let config = NStepConfig::new(gamma, n.or(Some(4)));
    let estimator = match NStepAdvantage::from_config(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    match estimator.discounted(rewards.view(), values.view(), dones.view()) {
        Ok(advantages) => {
            println!("gamma={} n={:?}", config.gamma, config.n);
            for (b, row) in advantages.rows().into_iter().enumerate() {
                let cells: Vec<String> = row.iter().map(|a| format!("{:9.3}", a)).collect();
                println!("trajectory {}: [{}]", b, cells.join(", "));
            }
        }
        Err(e) => {
            eprintln!("Failed to compute advantages: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
