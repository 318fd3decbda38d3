// In: src/compare/strategy_tests.rs

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::capability::CpuFeatures;
use crate::compare::Strategy;
use crate::layout::corpus::*;
use crate::layout::Identifier;

// Test Helpers
fn random_identifier(rng: &mut StdRng) -> Identifier {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Identifier::from_canonical_bytes(bytes)
}

/// Copies `base` and overwrites one canonical byte, so the pair differs at a
/// single known position.
fn mutate_one_byte(base: &Identifier, rng: &mut StdRng) -> Identifier {
    let mut bytes = base.to_canonical_bytes();
    let position = rng.random_range(0..16);
    bytes[position] = rng.random::<u8>();
    Identifier::from_canonical_bytes(bytes)
}

fn expected_order(x: &Identifier, y: &Identifier) -> Ordering {
    x.to_canonical_bytes().cmp(&y.to_canonical_bytes())
}

fn assert_agrees_with_reference(strategy: Strategy, x: &Identifier, y: &Identifier) {
    let expected = expected_order(x, y);
    assert_eq!(
        strategy.compare(x, y),
        expected,
        "{strategy}: compare({x}, {y})"
    );
    assert_eq!(
        strategy.greater_than(x, y),
        expected == Ordering::Greater,
        "{strategy}: greater_than({x}, {y})"
    );
    assert_eq!(strategy.compare_sign(x, y), expected as i32);
}

#[test]
fn test_all_strategies_agree_on_reference_identifiers() {
    for strategy in Strategy::ALL {
        for x in REFERENCE_IDENTIFIERS.iter() {
            for y in REFERENCE_IDENTIFIERS.iter() {
                assert_agrees_with_reference(strategy, x, y);
            }
        }
    }
}

#[test]
fn test_all_strategies_agree_on_random_pairs() {
    let mut rng = StdRng::seed_from_u64(0x6a09_e667);
    for _ in 0..2_000 {
        let x = random_identifier(&mut rng);
        let y = random_identifier(&mut rng);
        for strategy in Strategy::ALL {
            assert_agrees_with_reference(strategy, &x, &y);
        }
    }
}

#[test]
fn test_all_strategies_agree_on_near_equal_pairs() {
    // Random pairs almost always differ in the first byte; these differ in exactly one.
    let mut rng = StdRng::seed_from_u64(0xbb67_ae85);
    for _ in 0..4_000 {
        let x = random_identifier(&mut rng);
        let y = mutate_one_byte(&x, &mut rng);
        for strategy in Strategy::ALL {
            assert_agrees_with_reference(strategy, &x, &y);
            assert_agrees_with_reference(strategy, &y, &x);
        }
    }
}

fn assert_fallback_agrees(strategy: Strategy, x: &Identifier, y: &Identifier) {
    let none = CpuFeatures::default();
    let expected = expected_order(x, y);
    assert_eq!(
        strategy.compare_with(&none, x, y),
        expected,
        "{strategy} (scalar fallback): compare({x}, {y})"
    );
    assert_eq!(
        strategy.greater_than_with(&none, x, y),
        expected == Ordering::Greater,
        "{strategy} (scalar fallback): greater_than({x}, {y})"
    );
}

#[test]
fn test_scalar_fallback_agrees_without_vector_features() {
    let mut rng = StdRng::seed_from_u64(0xa54f_f53a);
    let mut pairs: Vec<(Identifier, Identifier)> = Vec::new();
    for x in REFERENCE_IDENTIFIERS.iter() {
        for y in REFERENCE_IDENTIFIERS.iter() {
            pairs.push((*x, *y));
        }
    }
    for _ in 0..1_000 {
        let x = random_identifier(&mut rng);
        pairs.push((x, random_identifier(&mut rng)));
        let y = mutate_one_byte(&x, &mut rng);
        pairs.push((x, y));
        pairs.push((y, x));
    }

    for strategy in Strategy::ALL {
        for (x, y) in pairs.iter() {
            assert_fallback_agrees(strategy, x, y);
        }
    }
}

#[test]
fn test_host_features_match_default_dispatch() {
    let host = *crate::capability::features();
    let mut rng = StdRng::seed_from_u64(0x510e_527f);
    for _ in 0..500 {
        let x = random_identifier(&mut rng);
        let y = mutate_one_byte(&x, &mut rng);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.compare_with(&host, &x, &y), strategy.compare(&x, &y));
            assert_eq!(
                strategy.greater_than_with(&host, &x, &y),
                strategy.greater_than(&x, &y)
            );
        }
    }
}

#[test]
fn test_every_pair_of_byte_positions() {
    // Two canonical positions changed at once, with values straddling the sign bit.
    const VALUES: [u8; 6] = [0x00, 0x01, 0x7F, 0x80, 0xFE, 0xFF];
    let none = CpuFeatures::default();
    let base = BASE_B7.to_canonical_bytes();
    for p in 0..16 {
        for q in 0..16 {
            for vp in VALUES {
                for vq in VALUES {
                    let mut bytes = base;
                    bytes[p] = vp;
                    bytes[q] = vq;
                    let x = Identifier::from_canonical_bytes(bytes);
                    let expected = expected_order(&x, &BASE_B7);
                    for strategy in Strategy::ALL {
                        assert_eq!(strategy.compare(&x, &BASE_B7), expected, "{strategy}");
                        assert_eq!(
                            strategy.compare_with(&none, &x, &BASE_B7),
                            expected,
                            "{strategy}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_reflexive_and_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    let pool: Vec<Identifier> = (0..64).map(|_| random_identifier(&mut rng)).collect();
    for strategy in Strategy::ALL {
        for x in pool.iter().chain(REFERENCE_IDENTIFIERS.iter()) {
            assert_eq!(strategy.compare(x, x), Ordering::Equal);
            assert!(!strategy.greater_than(x, x));
            for y in pool.iter() {
                assert_eq!(strategy.compare(x, y), strategy.compare(y, x).reverse());
                assert!(!(strategy.greater_than(x, y) && strategy.greater_than(y, x)));
            }
        }
    }
}

#[test]
fn test_sorting_is_transitive() {
    let mut rng = StdRng::seed_from_u64(42);
    let base = random_identifier(&mut rng);
    let mut pool: Vec<Identifier> = (0..256).map(|_| mutate_one_byte(&base, &mut rng)).collect();
    pool.extend_from_slice(&REFERENCE_IDENTIFIERS);

    for strategy in Strategy::ALL {
        let mut sorted = pool.clone();
        sorted.sort_by(|x, y| strategy.compare(x, y));
        for window in sorted.windows(2) {
            assert!(window[0].to_canonical_bytes() <= window[1].to_canonical_bytes());
        }
        for triple in sorted.windows(3) {
            if strategy.greater_than(&triple[1], &triple[0])
                && strategy.greater_than(&triple[2], &triple[1])
            {
                assert!(strategy.greater_than(&triple[2], &triple[0]));
            }
        }
    }
}

#[test]
fn test_agrees_with_unsigned_word_order() {
    let mut rng = StdRng::seed_from_u64(0x3c6e_f372);
    for _ in 0..1_000 {
        let x = random_identifier(&mut rng);
        let y = random_identifier(&mut rng);
        let wide_order = u128::from(x.to_u128()).cmp(&u128::from(y.to_u128()));
        let be_order = u128::from_be_bytes(x.to_canonical_bytes())
            .cmp(&u128::from_be_bytes(y.to_canonical_bytes()));
        assert_eq!(wide_order, be_order);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.compare(&x, &y), wide_order, "{strategy}");
        }
    }
}

#[test]
fn test_boundary_cases() {
    for strategy in Strategy::ALL {
        assert!(strategy.greater_than(&Identifier::MAX, &Identifier::MIN), "{strategy}");
        assert!(!strategy.greater_than(&Identifier::MIN, &Identifier::MAX), "{strategy}");
        assert_eq!(strategy.compare(&Identifier::MAX, &Identifier::MAX), Ordering::Equal);
        assert_eq!(strategy.compare_sign(&Identifier::MIN, &Identifier::MAX), -1);

        // Last byte 0x03 vs 0xC0: low bits agree, high bits decide.
        assert!(strategy.greater_than(&BASE_B6, &BASE_B5), "{strategy}");
        assert_eq!(strategy.compare_sign(&BASE_B5, &BASE_B6), -1, "{strategy}");

        // `c` = 0xFFFF is negative as i16 but must order above 1.
        assert!(strategy.greater_than(&HIGH_C, &LOW_C), "{strategy}");

        // Top byte of `a` decides against a value saturated everywhere else.
        assert!(strategy.greater_than(&Identifier::MAX, &NEAR_MAX), "{strategy}");
        assert_eq!(strategy.compare_sign(&NEAR_MAX, &BASE_B7), 1, "{strategy}");
    }
}

#[test]
fn test_name_round_trip_and_unknown_name() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        assert_eq!(strategy.to_string(), strategy.name());
    }
    assert_eq!(" Vector128_Max ".parse::<Strategy>().unwrap(), Strategy::Vector128Max);
    assert!(matches!(
        "vector512".parse::<Strategy>(),
        Err(crate::error::GuidOrderError::UnknownStrategy(name)) if name == "vector512"
    ));
}

#[test]
fn test_best_available_is_supported() {
    let best = Strategy::best_available();
    assert!(best.is_supported());
    assert!(matches!(best, Strategy::Vector128 | Strategy::TailWord));
}
