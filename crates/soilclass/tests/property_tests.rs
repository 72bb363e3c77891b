//! Property-based tests for the classification pipeline.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p soilclass --test property_tests
//!
//! # Run with more cases
//! PROPTEST_CASES=10000 cargo test -p soilclass --test property_tests
//! ```

use proptest::prelude::*;

use soilclass::{
    STANDARD_SIEVES_MM, SoilClass, ValidationError, classify, classify_passing, compute_curve,
    compute_plasticity_index,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Six non-negative retained percentages summing to at most 100.
fn valid_retained() -> impl Strategy<Value = Vec<f64>> {
    (prop::collection::vec(0.0f64..1.0, 6), 0.0f64..=100.0).prop_map(|(weights, total)| {
        let sum: f64 = weights.iter().sum();
        if sum == 0.0 {
            return vec![0.0; 6];
        }
        // Scale slightly under the total so rounding cannot push the sum past 100.
        weights.iter().map(|w| w / sum * total * 0.999_999).collect()
    })
}

fn limit() -> impl Strategy<Value = f64> {
    0.0f64..150.0
}

// =============================================================================
// Gradation Properties
// =============================================================================

proptest! {
    /// Curves are non-increasing and bounded to [0, 100].
    #[test]
    fn curve_is_monotonic_and_bounded(retained in valid_retained()) {
        let curve = compute_curve(&STANDARD_SIEVES_MM, &retained).unwrap();
        let passing = curve.passing_percentages();

        prop_assert_eq!(passing.len(), 6);
        for value in &passing {
            prop_assert!((0.0..=100.0).contains(value));
        }
        for pair in passing.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    /// Any negative retained value is rejected.
    #[test]
    fn negative_retained_rejected(
        mut retained in valid_retained(),
        index in 0usize..6,
        negative in -100.0f64..-1e-6,
    ) {
        retained[index] = negative;
        let err = compute_curve(&STANDARD_SIEVES_MM, &retained).unwrap_err();
        let is_negative_retained = matches!(err, ValidationError::NegativeRetained { .. });
        prop_assert!(is_negative_retained);
    }

    /// Totals past 100 are rejected.
    #[test]
    fn overfull_sample_rejected(extra in 0.01f64..100.0, index in 0usize..6) {
        let mut retained = vec![0.0; 6];
        retained[0] = 100.0;
        retained[index] += extra;
        let err = compute_curve(&STANDARD_SIEVES_MM, &retained).unwrap_err();
        let is_exceeded = matches!(err, ValidationError::CumulativeExceeded { .. });
        prop_assert!(is_exceeded);
    }
}

// =============================================================================
// Plasticity Properties
// =============================================================================

proptest! {
    /// PI is exactly LL - PL, and errors iff negative.
    #[test]
    fn plasticity_index_is_difference(ll in limit(), pl in limit()) {
        match compute_plasticity_index(ll, pl) {
            Ok(pi) => {
                prop_assert!(ll >= pl);
                prop_assert_eq!(pi, ll - pl);
            }
            Err(err) => {
                prop_assert!(ll < pl);
                let is_negative_pi = matches!(err, ValidationError::NegativePlasticityIndex { .. });
                prop_assert!(is_negative_pi);
            }
        }
    }
}

// =============================================================================
// Classifier Properties
// =============================================================================

proptest! {
    /// Same inputs, same label.
    #[test]
    fn classification_is_deterministic(
        p2 in 0.0f64..=100.0,
        p0075 in 0.0f64..=100.0,
        pi in 0.0f64..60.0,
    ) {
        let first = classify_passing(p2, p0075, pi);
        for _ in 0..3 {
            prop_assert_eq!(classify_passing(p2, p0075, pi), first);
        }
    }

    /// Fine-grained samples only get fine-grained labels, and coarse samples coarse ones.
    #[test]
    fn fines_split_governs_branch(retained in valid_retained(), pi in 0.0f64..60.0) {
        let curve = compute_curve(&STANDARD_SIEVES_MM, &retained).unwrap();
        let class = classify(&curve, pi).unwrap();
        let p2 = curve.passing_at(2.0).unwrap();
        let fines = curve.last_passing().unwrap();

        if p2 >= 50.0 && fines >= 50.0 {
            prop_assert!(class.is_fine_grained());
        } else {
            prop_assert!(!class.is_fine_grained());
        }
    }

    /// Classification only depends on the two boundary sieves.
    #[test]
    fn classify_matches_boundary_lookup(retained in valid_retained(), pi in 0.0f64..60.0) {
        let curve = compute_curve(&STANDARD_SIEVES_MM, &retained).unwrap();
        let expected = classify_passing(
            curve.passing_at(2.0).unwrap(),
            curve.passing_at(0.075).unwrap(),
            pi,
        );
        prop_assert_eq!(classify(&curve, pi).unwrap(), expected);
    }

    /// Fine-grained PI bands: <4 silt, >7 clay, otherwise silty clay.
    #[test]
    fn fine_grained_pi_bands(pi in 0.0f64..60.0) {
        let class = classify_passing(100.0, 100.0, pi);
        let expected = if pi < 4.0 {
            SoilClass::Silt
        } else if pi > 7.0 {
            SoilClass::Clay
        } else {
            SoilClass::SiltyClay
        };
        prop_assert_eq!(class, expected);
    }
}
