use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chart_geometry::core::IdSequence;

#[test]
fn ids_are_prefixed_and_start_at_one() {
    let ids = IdSequence::new("gradient");
    assert_eq!(ids.next_id(), "gradient-1");
    assert_eq!(ids.next_id(), "gradient-2");
    assert_eq!(ids.issued(), 2);
    assert_eq!(ids.prefix(), "gradient");
}

#[test]
fn default_sequence_uses_chart_prefix() {
    let ids = IdSequence::default();
    assert_eq!(ids.next_id(), "chart-1");
}

#[test]
fn independent_sequences_do_not_share_state() {
    let first = IdSequence::new("clip");
    let second = IdSequence::new("clip");
    assert_eq!(first.next_id(), "clip-1");
    assert_eq!(first.next_id(), "clip-2");
    assert_eq!(second.next_id(), "clip-1");
}

#[test]
fn reset_restarts_numbering() {
    let mut ids = IdSequence::new("mask");
    let _ = ids.next_id();
    let _ = ids.next_id();
    ids.reset();
    assert_eq!(ids.issued(), 0);
    assert_eq!(ids.next_id(), "mask-1");
}

#[test]
fn shared_sequence_never_repeats_across_threads() {
    let ids = Arc::new(IdSequence::new("series"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ids = Arc::clone(&ids);
            thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().expect("worker thread") {
            assert!(seen.insert(id), "duplicate id issued");
        }
    }
    assert_eq!(seen.len(), 2_000);
    assert_eq!(ids.issued(), 2_000);
}
