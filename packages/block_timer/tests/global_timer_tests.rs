//! Tests for the process-wide timer.
//!
//! Tests in this file run in parallel and share [`Timer::global()`], so each test
//! uses its own block titles and only asserts on its own blocks.

use std::sync::Arc;
use std::thread;

use block_timer::{Timer, timed};

fn compute(seed: u64) -> u64 {
    (1..=seed).fold(1, u64::wrapping_mul)
}

#[test]
fn global_is_one_instance_across_threads() {
    let here: *const Timer = Timer::global();

    let there = thread::spawn(|| Timer::global() as *const Timer as usize)
        .join()
        .unwrap();

    assert_eq!(here as usize, there);
}

#[test]
fn global_timer_records_and_packs() {
    let timer = Timer::global();

    let value = timed!(timer, compute(10));
    assert_eq!(value, 3_628_800);

    // Other tests may record into the global pending buffer concurrently, so the
    // packed block contains at least this call.
    timer.pack("global_timer_records_and_packs");

    let rendered = timer.render_block("global_timer_records_and_packs").unwrap();
    assert!(rendered.contains("compute"), "{rendered}");
    assert!(timer.to_string().contains("global_timer_records_and_packs"));
}

#[test]
fn independent_timer_is_shared_by_handle() {
    let timer = Arc::new(Timer::new());

    let workers: Vec<_> = (0..3)
        .map(|_| {
            let timer = Arc::clone(&timer);
            thread::spawn(move || timed!(timer, compute(5)))
        })
        .collect();

    for worker in workers {
        assert_eq!(worker.join().unwrap(), 120);
    }

    assert_eq!(timer.pending_count(), 3);
    timer.pack("workers");
    assert_eq!(timer.block_count(), 1);
    assert_eq!(timer.pending_count(), 0);
}
