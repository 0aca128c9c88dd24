use std::env;
use std::process;

fn main() {
    let mut args = env::args().skip(1);
    let raw = match args.next() {
        Some(raw) => raw,
        None => {
            eprintln!("usage: mcint <sample-count>");
            process::exit(2);
        }
    };

    let sample_count: usize = match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("sample count must be a positive integer, got '{}'", raw);
            process::exit(2);
        }
    };

    match mcint::estimate(sample_count) {
        Ok(result) => {
            println!("Number of simulations: {}", sample_count);
            println!("Reference value of the integral: {:.6}", result.reference);
            println!("Monte Carlo approximation: {:.6}", result.estimate);
            println!("Error percentage: {:.4}%", result.error_percent);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    }
}
