//! Integration tests for the two binding lifecycles.
//!
//! Instanced bindings re-run their factory on every resolution; singleton
//! bindings run theirs at most once and share the first result, including
//! under a concurrent first resolution from many threads.

use service_container::{must_resolve, Container, Resolver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

#[test]
fn test_instanced_factory_runs_per_resolution() {
    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();

    container.must_bind("ticket", move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst) + 1
    });

    let first: Arc<usize> = must_resolve("ticket", &container.resolver());
    let second: Arc<usize> = must_resolve("ticket", &container.resolver());

    assert_eq!(*first, 1);
    assert_eq!(*second, 2);
    assert_ne!(*first, *second);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_singleton_factory_runs_once() {
    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();

    container.must_bind_singleton("ticket", move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst) + 1
    });

    let resolver = container.resolver();
    let first: Arc<usize> = must_resolve("ticket", &resolver);
    for _ in 0..100 {
        let again: Arc<usize> = must_resolve("ticket", &resolver);
        assert!(Arc::ptr_eq(&first, &again));
    }

    assert_eq!(*first, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_first_resolution_runs_factory_once() {
    const THREADS: usize = 8;

    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();

    container.must_bind_singleton("expensive", move |_| {
        // Widen the race window so every thread arrives during construction
        thread::sleep(Duration::from_millis(20));
        calls_clone.fetch_add(1, Ordering::SeqCst);
        "constructed".to_string()
    });
    container.lock();

    let barrier = Arc::new(Barrier::new(THREADS));
    let mut handles = Vec::with_capacity(THREADS);
    for _ in 0..THREADS {
        let resolver = container.resolver();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            must_resolve::<String>("expensive", &resolver)
        }));
    }

    let values: Vec<Arc<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    for value in &values {
        assert_eq!(&**value, "constructed");
        assert!(Arc::ptr_eq(value, &values[0]));
    }
}

#[test]
fn test_lock_has_no_effect_on_resolved_singleton() {
    let container = Container::new();
    container.must_bind_singleton("config", |_| vec![1, 2, 3]);

    let before: Arc<Vec<i32>> = must_resolve("config", &container.resolver());
    container.lock();
    let after: Arc<Vec<i32>> = must_resolve("config", &container.resolver());

    assert!(Arc::ptr_eq(&before, &after));
}

#[test]
fn test_singleton_factory_resolves_sub_dependencies() {
    let container = Container::new();
    let builds = Arc::new(AtomicUsize::new(0));
    let builds_clone = builds.clone();

    container.must_bind("dsn", |_| "postgres://localhost".to_string());
    container.must_bind_singleton("database", move |resolver: &Resolver| {
        builds_clone.fetch_add(1, Ordering::SeqCst);
        let dsn: Arc<String> = must_resolve("dsn", resolver);
        format!("connection to {dsn}")
    });
    container.lock();

    let resolver = container.resolver();
    let a: Arc<String> = must_resolve("database", &resolver);
    let b: Arc<String> = must_resolve("database", &resolver);

    assert_eq!(&*a, "connection to postgres://localhost");
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_instanced_resolution_is_thread_safe() {
    const THREADS: usize = 4;
    const ROUNDS: usize = 50;

    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    container.must_bind("counter", move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst)
    });
    container.lock();

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let resolver = container.resolver();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ROUNDS {
                    let _: Arc<usize> = must_resolve("counter", &resolver);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), THREADS * ROUNDS);
}
