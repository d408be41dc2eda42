use quickcheck_macros::quickcheck;
use shared_lists_roulette::domain::errors::RouletteError;
use shared_lists_roulette::domain::roulette::{Candidate, select_winner};

fn pool(len: usize) -> Vec<Candidate> {
    (0..len).map(|i| Candidate::named(i.to_string().as_str(), format!("item {}", i))).collect()
}

#[quickcheck]
fn winner_index_is_always_in_pool(len: u8, sample: f64) -> bool {
    let len = len as usize % 64 + 1;
    let mut rng = move || sample;
    match select_winner(&pool(len), &mut rng) {
        Ok(index) => index < len,
        Err(_) => false,
    }
}

#[test]
fn every_length_accepts_extreme_samples() {
    for len in 1..=50 {
        for sample in [0.0, 0.25, 0.5, 0.999_999_999, 1.0] {
            let mut rng = move || sample;
            let index = select_winner(&pool(len), &mut rng).unwrap();
            assert!(index < len, "len {} sample {} gave {}", len, sample, index);
        }
    }
}

#[test]
fn injected_source_makes_pick_deterministic() {
    let pool = pool(4);
    let mut rng = || 0.6;
    assert_eq!(select_winner(&pool, &mut rng), Ok(2));
    assert_eq!(select_winner(&pool, &mut rng), Ok(2));
}

#[test]
fn every_index_is_reachable() {
    let pool = pool(5);
    let mut hits = [false; 5];
    for step in 0..100 {
        let sample = step as f64 / 100.0;
        let mut rng = move || sample;
        hits[select_winner(&pool, &mut rng).unwrap()] = true;
    }
    assert!(hits.iter().all(|hit| *hit));
}

#[test]
fn empty_pool_never_selects() {
    let mut rng = || 0.3;
    assert_eq!(select_winner(&[], &mut rng), Err(RouletteError::EmptyPool));
}
