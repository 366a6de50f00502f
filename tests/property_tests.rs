use cipherbreak::alphabet;
use cipherbreak::cipher::poly;
use cipherbreak::search::{Beam, Candidate};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_round_trip_recovers_plaintext(
        plaintext in "[A-Z]{1,200}",
        key in "[A-Z]{1,20}"
    ) {
        let ciphertext = poly::encrypt(&plaintext, &key).unwrap();
        prop_assert_eq!(poly::decrypt(&ciphertext, &key).unwrap(), plaintext);
    }

    #[test]
    fn test_encrypt_ignores_case_and_noise(
        raw in "[ -~]{1,200}",
        key in "[A-Z]{1,10}"
    ) {
        let normalized = alphabet::normalize(&raw);
        prop_assume!(!normalized.is_empty());

        prop_assert_eq!(
            poly::encrypt(&raw, &key).unwrap(),
            poly::encrypt(&normalized, &key).unwrap()
        );
    }

    #[test]
    fn test_normalize_is_idempotent(raw in "[ -~]{0,200}") {
        let once = alphabet::normalize(&raw);
        prop_assert_eq!(alphabet::normalize(&once), once.clone());
    }

    #[test]
    fn test_beam_retains_exactly_the_top_k(
        scores in proptest::collection::vec(-1e6..1e6f64, 1..200),
        capacity in 1usize..20
    ) {
        let mut beam = Beam::new(capacity);
        for (i, &score) in scores.iter().enumerate() {
            beam.push(Candidate::new(score, format!("K{}", i)));
            prop_assert!(beam.len() <= capacity);
        }

        let mut expected = scores.clone();
        expected.sort_by(|a, b| b.total_cmp(a));
        expected.truncate(capacity);
        expected.sort_by(|a, b| a.total_cmp(b));

        let mut retained: Vec<f64> = beam.candidates().map(|c| c.score).collect();
        retained.sort_by(|a, b| a.total_cmp(b));

        prop_assert_eq!(retained, expected);
    }

    #[test]
    fn test_beam_min_never_decreases(
        scores in proptest::collection::vec(-1e6..1e6f64, 1..100),
        capacity in 1usize..10
    ) {
        let mut beam = Beam::new(capacity);
        let mut last_min = f64::NEG_INFINITY;
        for (i, &score) in scores.iter().enumerate() {
            beam.push(Candidate::new(score, format!("K{}", i)));
            if beam.len() == beam.capacity() {
                let min = beam.min_score().unwrap();
                prop_assert!(min >= last_min);
                last_min = min;
            }
        }
    }
}
