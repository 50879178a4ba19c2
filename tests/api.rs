use dot_bench::prelude::*;

#[test]
fn test_dot_public_api() {
    assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Ok(32.0));
    assert_eq!(dot(&[], &[]), Ok(0.0));
    assert_eq!(dot_pairs(&[(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]), 32.0);
}

#[test]
fn test_length_mismatch_is_an_error() {
    let err = dot(&[1.0, 2.0], &[3.0]).unwrap_err();
    assert_eq!(err, DotError::LengthMismatch { left: 2, right: 1 });

    let bench_err: BenchError = err.into();
    assert!(bench_err.to_string().contains("length mismatch"));
}

#[test]
fn test_concurrent_calls_on_shared_input() {
    let v1: Vec<f64> = (0..1000).map(|i| i as f64).collect();
    let v2 = vec![2.0; 1000];
    let expected = dot(&v1, &v2).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| dot(&v1, &v2))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Ok(expected));
        }
    });
    // 2 * (0 + 1 + ... + 999)
    assert_eq!(expected, 999_000.0);
}

#[test]
fn test_registry_lists_dot_product_variants() {
    let registry = build_registry();
    let algo = registry.find("dot_product").expect("dot_product is registered");
    let variants = algo.available_variants();
    assert_eq!(variants[0], "original");
    assert!(variants.contains(&"scalar_opt"));
    assert!(algo.verify().is_ok());
}

#[test]
fn test_run_compare() {
    let results = dot_bench::run_compare(1000, 42);
    assert!(results.iter().all(|r| r.answer.is_ok()));
    assert_eq!(results[0].name, "original");
}
