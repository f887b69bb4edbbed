//! Demonstrates timing a small pipeline with the process-wide timer.
//!
//! The calls of each stage are packed into their own block, and one call is left
//! unpacked on purpose to show how pending calls are reported.
//!
//! Run with: `RUST_LOG=debug cargo run --example block_timer_basic`.

use std::thread;
use std::time::Duration;

use block_timer::{Timer, timed};
use tracing_subscriber::EnvFilter;

fn read_input() -> Vec<u64> {
    thread::sleep(Duration::from_millis(12));
    (1..=50_000).collect()
}

fn checksum(values: &[u64]) -> u64 {
    values.iter().fold(0_u64, |acc, value| {
        acc.wrapping_mul(31).wrapping_add(*value)
    })
}

fn format_report(checksum: u64) -> String {
    thread::sleep(Duration::from_millis(3));
    format!("checksum = {checksum:016x}")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let timer = Timer::global();

    let values = timed!(timer, read_input());
    timer.pack("input");

    let sum = timed!(timer, checksum(&values));
    let report = timed!(timer, format_report(sum));
    timer.pack("processing");

    timer.record_as("cleanup", || drop(values));

    println!("{report}");
    println!();
    timer.show();
    println!();

    println!("Calls of the 'processing' block:");
    if let Err(error) = timer.show_block("processing") {
        eprintln!("{error}");
    }
    println!();

    println!("{timer}");
}
