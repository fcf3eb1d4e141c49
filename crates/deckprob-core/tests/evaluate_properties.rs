use deckprob_core::eval::{EvalError, evaluate, orderings};
use deckprob_core::model::deck::{DECK, Deck, MAX_SEQUENCE_LEN};
use deckprob_core::model::sequence::Sequence;
use deckprob_core::model::symbol::Symbol;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seq(text: &str) -> Sequence {
    Sequence::normalize(text)
}

/// Replace each position of `dealt` with a wildcard with probability `mask_rate`.
fn mask<R: Rng>(dealt: &Sequence, mask_rate: f64, rng: &mut R) -> Sequence {
    dealt
        .iter()
        .map(|symbol| {
            if rng.gen_bool(mask_rate) {
                Symbol::Wildcard
            } else {
                symbol
            }
        })
        .collect()
}

/// Enumerate every distinct deck ordering and count how many match `given`,
/// and how many match both `given` and `observed`.
fn brute_force_conditional(given: &Sequence, observed: &Sequence) -> f64 {
    let matches = |order: &[Symbol], pattern: &Sequence| {
        pattern
            .iter()
            .zip(order.iter())
            .all(|(p, card)| p.is_wildcard() || p == *card)
    };

    let mut given_hits = 0u64;
    let mut joint_hits = 0u64;
    for bits in 0u32..(1 << MAX_SEQUENCE_LEN) {
        if bits.count_ones() != u32::from(DECK.black) {
            continue;
        }
        let order: Vec<Symbol> = (0..MAX_SEQUENCE_LEN)
            .map(|i| {
                if bits & (1 << i) != 0 {
                    Symbol::Black
                } else {
                    Symbol::Red
                }
            })
            .collect();
        if matches(order.as_slice(), given) {
            given_hits += 1;
            if matches(order.as_slice(), observed) {
                joint_hits += 1;
            }
        }
    }
    joint_hits as f64 / given_hits as f64
}

#[test]
fn known_value_first_card_red() {
    let p = evaluate(&seq("X"), &seq("R")).expect("valid pair");
    assert!((p.value() - 8008.0 / 12376.0).abs() < 1e-12);
    assert!((p.value() - 11.0 / 17.0).abs() < 1e-12);
}

#[test]
fn identical_dealt_sequences_are_certain() {
    for seed in 0..64u64 {
        let deck = Deck::shuffled_with_seed(seed);
        let len = (seed as usize % MAX_SEQUENCE_LEN) + 1;
        let dealt = deck.deal(len);
        let p = evaluate(&dealt, &dealt).expect("dealt sequences are valid");
        assert_eq!(p.value(), 1.0, "seed {seed} sequence {dealt}");
    }
}

#[test]
fn fully_masked_observation_is_certain() {
    for seed in 0..64u64 {
        let deck = Deck::shuffled_with_seed(seed);
        let dealt = deck.deal((seed as usize % MAX_SEQUENCE_LEN) + 1);
        let p = evaluate(&dealt, &dealt.masked()).expect("valid pair");
        assert_eq!(p.value(), 1.0, "seed {seed} sequence {dealt}");
    }
}

#[test]
fn results_stay_within_unit_interval() {
    let mut rng = StdRng::seed_from_u64(20241018);
    for _ in 0..500 {
        let deck = Deck::shuffled(&mut rng);
        let len = rng.gen_range(1..=MAX_SEQUENCE_LEN);
        let dealt = deck.deal(len);
        let given = mask(&dealt, 0.5, &mut rng);
        let observed = mask(&dealt, 0.5, &mut rng);
        let p = evaluate(&given, &observed).expect("masks of one deal are consistent");
        assert!(
            (0.0..=1.0).contains(&p.value()),
            "{given} / {observed} -> {}",
            p.value()
        );
    }
}

#[test]
fn refined_observation_matches_enumeration() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..12 {
        let deck = Deck::shuffled(&mut rng);
        let len = rng.gen_range(1..=8);
        let dealt = deck.deal(len);
        // observed keeps every position given fixes, plus some more
        let observed = mask(&dealt, 0.3, &mut rng);
        let given: Sequence = observed
            .iter()
            .map(|symbol| {
                if rng.gen_bool(0.5) {
                    Symbol::Wildcard
                } else {
                    symbol
                }
            })
            .collect();

        let p = evaluate(&given, &observed).expect("valid pair");
        let expected = brute_force_conditional(&given, &observed);
        assert!(
            (p.value() - expected).abs() < 1e-9,
            "{given} / {observed}: {} vs {expected}",
            p.value()
        );
    }
}

#[test]
fn orderings_agree_with_statrs_binomial() {
    for red in 0..=u64::from(DECK.red) {
        for black in 0..=u64::from(DECK.black) {
            let expected = statrs::function::factorial::binomial(red + black, red);
            assert_eq!(orderings(red, black).map(|n| n as f64), Some(expected.round()));
        }
    }
}

#[test]
fn documented_error_cases() {
    assert!(matches!(
        evaluate(&seq("R"), &seq("B")),
        Err(EvalError::PositionalConflict { index: 0, .. })
    ));
    assert_eq!(evaluate(&seq(""), &seq("")), Err(EvalError::AwaitingInput));
    let twelve = "R".repeat(12);
    assert_eq!(
        evaluate(&seq(&twelve), &seq(&twelve)),
        Err(EvalError::TooManyR)
    );
    assert_eq!(evaluate(&seq("R"), &seq("RR")), Err(EvalError::LengthMismatch));
}

#[test]
fn full_length_pair_reports_conflict_at_last_index() {
    let given: Sequence = format!("{}B", "X".repeat(16)).parse().expect("valid letters");
    let observed: Sequence = format!("{}R", "X".repeat(16)).parse().expect("valid letters");
    assert_eq!(given.len(), MAX_SEQUENCE_LEN);
    assert_eq!(
        evaluate(&given, &observed),
        Err(EvalError::PositionalConflict {
            index: 16,
            given: Symbol::Black,
            observed: Symbol::Red,
        })
    );
}

#[test]
fn full_length_pair_reports_conflict_at_first_index() {
    let full: Sequence = format!("{}{}", "R".repeat(11), "B".repeat(6))
        .parse()
        .expect("valid letters");
    let mut flipped = full.symbols().to_vec();
    flipped[16] = Symbol::Red;
    flipped[0] = Symbol::Black;
    let observed = Sequence::from_symbols(flipped);
    assert_eq!(
        evaluate(&full, &observed),
        Err(EvalError::PositionalConflict {
            index: 0,
            given: Symbol::Red,
            observed: Symbol::Black,
        })
    );
}

#[test]
fn full_length_consistent_pair_is_certain() {
    let full: Sequence = format!("{}{}", "R".repeat(11), "B".repeat(6))
        .parse()
        .expect("valid letters");
    assert_eq!(evaluate(&full, &full.masked()).map(|p| p.value()), Ok(1.0));
    assert_eq!(evaluate(&full, &full).map(|p| p.value()), Ok(1.0));
}
