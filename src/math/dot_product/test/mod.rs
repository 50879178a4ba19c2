//! Tests for dot product implementations.

#[cfg(test)]
mod tests {
    use crate::error::DotError;
    use crate::math::dot_product::bench::{compare, generate_inputs};
    use crate::math::dot_product::code::*;
    use crate::math::dot_product::DotProductRunner;
    use crate::registry::AlgorithmRunner;

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: f64, b: f64, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff < EPSILON * b.abs().max(1.0),
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_original_basic() {
        // 1*4 + 2*5 + 3*6 = 32
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Ok(32.0));
    }

    #[test]
    fn test_original_empty() {
        assert_eq!(dot(&[], &[]), Ok(0.0));
    }

    #[test]
    fn test_original_single() {
        assert_eq!(dot(&[1.0], &[1.0]), Ok(1.0));
        assert_eq!(dot(&[3.0], &[4.0]), Ok(12.0));
    }

    #[test]
    fn test_second_shorter_is_rejected() {
        assert_eq!(
            dot(&[1.0, 2.0], &[3.0]),
            Err(DotError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_second_longer_is_rejected() {
        assert_eq!(
            dot(&[3.0], &[1.0, 2.0]),
            Err(DotError::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = dot(&[1.0, 2.0], &[3.0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "length mismatch: left vector has 2 elements, right vector has 1"
        );
    }

    #[test]
    fn test_accumulates_left_to_right() {
        // 1e16 + 1.0 rounds back to 1e16, so the 1.0 is lost before -1e16.
        let v1 = [1e16, 1.0, -1e16];
        let ones = [1.0, 1.0, 1.0];
        assert_eq!(dot(&v1, &ones), Ok(0.0));
        // Reordered so the large terms cancel first, the 1.0 survives.
        assert_eq!(dot(&[1e16, -1e16, 1.0], &ones), Ok(1.0));
    }

    #[test]
    fn test_inputs_untouched() {
        let v1 = vec![0.5, -1.5, 2.0];
        let v2 = vec![4.0, 2.0, -1.0];
        let (c1, c2) = (v1.clone(), v2.clone());
        dot(&v1, &v2).unwrap();
        assert_eq!(v1, c1);
        assert_eq!(v2, c2);
    }

    #[test]
    fn test_nan_propagates() {
        let result = dot(&[1.0, f64::NAN], &[1.0, 1.0]).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_dot_pairs_matches_dot() {
        let (a, b) = generate_inputs(257, 3);
        let pairs: Vec<(f64, f64)> = a.iter().copied().zip(b.iter().copied()).collect();
        assert_eq!(dot_pairs(&pairs), dot(&a, &b).unwrap());
        assert_eq!(dot_pairs(&[]), 0.0);
    }

    #[test]
    fn test_iterator_is_bit_identical() {
        let (a, b) = generate_inputs(1001, 11);
        assert_eq!(
            dot_iterator(&a, &b).unwrap().to_bits(),
            dot(&a, &b).unwrap().to_bits()
        );
    }

    #[test]
    fn test_all_variants_close_to_reference() {
        for size in [0, 1, 2, 3, 4, 5, 7, 8, 63, 64, 65, 1000] {
            let (a, b) = generate_inputs(size, size as u64);
            let expected = dot(&a, &b).unwrap();
            for variant in available_variants() {
                let result = (variant.function)(&a, &b).unwrap();
                assert_close(result, expected, &format!("{} size {}", variant.name, size));
            }
        }
    }

    #[test]
    fn test_all_variants_reject_mismatch() {
        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&[1.0, 2.0], &[3.0]),
                Err(DotError::LengthMismatch { left: 2, right: 1 }),
                "{}",
                variant.name
            );
        }
    }

    #[test]
    fn test_reference_variant_first() {
        assert_eq!(available_variants()[0].name, REFERENCE_VARIANT);
    }

    #[cfg(c_implementation_active)]
    #[test]
    fn test_c_original_is_bit_identical() {
        let (a, b) = generate_inputs(999, 5);
        assert_eq!(
            dot_c_original(&a, &b).unwrap().to_bits(),
            dot(&a, &b).unwrap().to_bits()
        );
    }

    #[test]
    fn test_runner_verify() {
        assert!(DotProductRunner.verify().is_ok());
    }

    #[test]
    fn test_runner_variants_return_results() {
        let runner = DotProductRunner;
        let mut variants = runner.variants(128, 9);
        assert_eq!(variants.len(), runner.available_variants().len());

        let (a, b) = generate_inputs(128, 9);
        let expected = dot(&a, &b).unwrap();
        for variant in &mut variants {
            let (_, result) = (variant.run)();
            assert_close(result.unwrap(), expected, variant.name);
        }
    }

    #[test]
    fn test_compare_one_result_per_variant() {
        let results = compare(10_000, 1);
        assert_eq!(results.len(), available_variants().len());

        let reference = results[0].answer.unwrap();
        // 10k products of U[0,1) values average 0.25
        assert!(reference > 2000.0 && reference < 3000.0);
        for r in &results {
            assert_close(r.answer.unwrap(), reference, r.name);
        }
    }
}

#[cfg(test)]
mod proptests {
    use crate::error::DotError;
    use crate::math::dot_product::code::*;
    use proptest::prelude::*;

    fn bounded_vec(len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-100.0f64..100.0, len)
    }

    fn two_vecs() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (0usize..64).prop_flat_map(|len| (bounded_vec(len), bounded_vec(len)))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn dot_commutative((a, b) in two_vecs()) {
            prop_assert_eq!(dot(&a, &b), dot(&b, &a));
        }

        #[test]
        fn dot_with_zero_vector(a in (0usize..64).prop_flat_map(bounded_vec)) {
            let zeros = vec![0.0; a.len()];
            prop_assert_eq!(dot(&a, &zeros), Ok(0.0));
        }

        #[test]
        fn dot_scaling((a, b) in two_vecs(), k in -10.0f64..10.0) {
            let scaled: Vec<f64> = a.iter().map(|x| k * x).collect();
            let lhs = dot(&scaled, &b).unwrap();
            let rhs = k * dot(&a, &b).unwrap();
            let magnitude: f64 = a.iter().zip(&b).map(|(x, y)| (k * x * y).abs()).sum();
            prop_assert!(
                (lhs - rhs).abs() <= 1e-10 * (magnitude + 1.0),
                "dot(k*a, b)={lhs}, k*dot(a, b)={rhs}"
            );
        }

        #[test]
        fn dot_rejects_any_mismatch(a in bounded_vec(5), extra in 1usize..4) {
            let b = vec![1.0; a.len() + extra];
            let err = DotError::LengthMismatch { left: a.len(), right: b.len() };
            prop_assert_eq!(dot(&a, &b), Err(err));
        }
    }
}
