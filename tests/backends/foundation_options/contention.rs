//! `AtomicOption` under the shared contention scenarios.

use foundation_options::{AtomicOption, Optional};
use foundation_testing::scenarios::{Handoff, SetOnceRace};
use foundation_testing::stress::ContentionConfig;
use serial_test::serial;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
#[serial]
#[ntest::timeout(30000)]
fn test_set_once_race_passes_verification() {
    let report = SetOnceRace::new(ContentionConfig::new().contenders(16).rounds(100)).run();
    report.verify().unwrap();
}

#[test]
#[serial]
#[ntest::timeout(30000)]
fn test_handoff_passes_verification() {
    let report = Handoff::new(ContentionConfig::new().contenders(8))
        .values_per_producer(250)
        .run();
    assert_eq!(report.expected, 2000);
    report.verify().unwrap();
}

#[test]
#[serial]
#[ntest::timeout(30000)]
fn test_lazy_initialisation_runs_once() {
    const THREADS: usize = 12;

    let cache: Arc<AtomicOption<Vec<String>>> = Arc::new(AtomicOption::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|id| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let installed = cache.set_if_none(vec![format!("loaded-by-{id}")]);
                (installed, cache.get())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|(installed, _)| *installed).count(), 1);

    let first = results[0].1.clone();
    assert!(first.is_some());
    assert!(results.iter().all(|(_, seen)| *seen == first));
}

#[test]
#[serial]
fn test_clear_then_reinstall() {
    let cell = AtomicOption::with_value(String::from("v1"));
    assert_eq!(cell.get_and_clear(), Optional::Some(String::from("v1")));
    assert!(cell.set_if_none(String::from("v2")));
    assert_eq!(cell.into_inner(), Optional::Some(String::from("v2")));
}
