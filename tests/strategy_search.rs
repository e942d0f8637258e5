use video_poker::cards::{parse_cards, Card};
use video_poker::deck::Deck;
use video_poker::evaluator::Category;
use video_poker::hand::{HandError, HoldMask};
use video_poker::paytable::PayTable;
use video_poker::strategy::{find_best_hold, spawn_analysis, Analysis, Analyzer, Outcome, SearchConfig};

fn seeded() -> SearchConfig {
    SearchConfig::default().with_seed(2024).with_sample_size(400)
}

fn analyze(hand: &str) -> Analysis {
    let cards = parse_cards(hand).unwrap();
    let population = Deck::population_for(&cards);
    Analyzer::default().with_config(seeded()).analyze(&cards, &population).unwrap()
}

fn mask(positions: &[usize]) -> HoldMask {
    HoldMask::from_positions(positions).unwrap()
}

#[test]
fn pat_royal_is_strictly_dominant() {
    let hand = parse_cards("Ts Js Qs Ks As").unwrap();
    let population = Deck::population_for(&hand);
    let moves = find_best_hold(&hand, &population).unwrap();
    assert_eq!(moves.len(), 32);
    assert_eq!(moves[0].mask, HoldMask::KEEP_ALL);
    assert_eq!(moves[0].expected_value, 800.0);
    assert_eq!(moves[0].hit_rate, 1.0);
    assert_eq!(moves[0].outcome, Outcome::Made(Category::RoyalFlush));
    assert!(moves[1..].iter().all(|m| m.expected_value < 800.0));
}

#[test]
fn max_bet_royal_pays_four_thousand() {
    let hand = parse_cards("Ts Js Qs Ks As").unwrap();
    let population = Deck::population_for(&hand);
    let analysis = Analyzer::new(PayTable::JACKS_OR_BETTER.at_max_bet())
        .with_config(seeded())
        .analyze(&hand, &population)
        .unwrap();
    assert_eq!(analysis.best().mask, HoldMask::KEEP_ALL);
    assert_eq!(analysis.best().expected_value, 4000.0);
}

#[test]
fn four_to_a_royal_holds_the_draw() {
    // Breaking a pat flush for the royal draw is right at any bet.
    let a = analyze("Ts Js Qs Ks 2s");
    let royal_draw = mask(&[0, 1, 2, 3]);
    assert_eq!(a.pat.category, Category::Flush);
    assert_eq!(a.best().mask, royal_draw);
    let m = a.best();
    assert!(m.exact);
    assert_eq!(m.draws_evaluated, 47);
    // 1 royal, 1 straight flush (9s), 6 flushes, 6 straights, 9 high pairs.
    let ev = (800.0 + 50.0 + 6.0 * 6.0 + 6.0 * 4.0 + 9.0) / 47.0;
    assert!((m.expected_value - ev).abs() < 1e-12, "{}", m.expected_value);
    assert!(a.move_for(HoldMask::KEEP_ALL).unwrap().expected_value == 6.0);
}

#[test]
fn high_pair_beats_drawing_to_nothing() {
    let a = analyze("Jh Jd 4c 8s 2h");
    assert_eq!(a.best().mask, mask(&[0, 1]));
    assert_eq!(a.best().outcome, Outcome::Made(Category::Pair));
    assert_eq!(a.best().label(), "Pair");
}

#[test]
fn low_pair_is_labelled_and_beats_every_exact_hold() {
    let a = analyze("7h 7d Kc 2s 9h");
    let pair = a.move_for(mask(&[0, 1])).unwrap();
    assert!(pair.exact);
    assert_eq!(pair.outcome, Outcome::LowPair);
    // Sampled holds carry noise at 400 draws; only exact EVs are compared.
    for m in a.iter().filter(|m| m.exact) {
        assert!(pair.expected_value >= m.expected_value, "{m}");
    }
    assert_eq!(a.move_for(HoldMask::KEEP_ALL).unwrap().outcome, Outcome::LowPair);
}

#[test]
fn low_pair_ranks_first_at_default_sampling() {
    let cards = parse_cards("7h 7d Kc 2s 9h").unwrap();
    let population = Deck::population_for(&cards);
    let a = Analyzer::default()
        .with_config(SearchConfig::default().with_seed(2024))
        .analyze(&cards, &population)
        .unwrap();
    assert_eq!(a.best().mask, mask(&[0, 1]));
}

#[test]
fn dropping_a_dead_card_never_lowers_ev() {
    // Both holds discard three or fewer cards, so both EVs are exact.
    let a = analyze("Jh Jd 4c 8s 2h");
    let pair = a.move_for(mask(&[0, 1])).unwrap();
    let pair_and_four = a.move_for(mask(&[0, 1, 2])).unwrap();
    assert!(pair.exact && pair_and_four.exact);
    assert!(pair.expected_value >= pair_and_four.expected_value);
    assert!((pair.expected_value - 1.5365).abs() < 1e-4, "{}", pair.expected_value);
    assert!((pair_and_four.expected_value - 1.4163).abs() < 1e-4, "{}", pair_and_four.expected_value);
}

#[test]
fn every_hold_has_draws_and_sane_rates() {
    let a = analyze("2c 7d 9h Js Kh");
    for m in a.iter() {
        assert!(m.draws_evaluated >= 1, "{m}");
        assert!(m.expected_value >= 0.0);
        assert!((0.0..=1.0).contains(&m.hit_rate));
    }
}

#[test]
fn every_mask_appears_exactly_once() {
    let a = analyze("3c 8d Th Qs 4h");
    let mut bits: Vec<u8> = a.iter().map(|m| m.mask.bits()).collect();
    bits.sort_unstable();
    assert_eq!(bits, (0u8..32).collect::<Vec<_>>());
    assert!(a.moves.windows(2).all(|w| w[0].expected_value >= w[1].expected_value));
    for m in a.iter() {
        assert_eq!(m.held_cards.len(), m.mask.held_count());
        assert_eq!(m.exact, m.mask.discard_count() <= 3);
    }
}

#[test]
fn exhaustive_config_enumerates_everything() {
    let cards = parse_cards("Ts Js Qs Ks As").unwrap();
    let population = Deck::population_for(&cards);
    let a = Analyzer::default()
        .with_config(SearchConfig::exhaustive())
        .analyze(&cards, &population)
        .unwrap();
    let draw_all = a.move_for(HoldMask::DISCARD_ALL).unwrap();
    assert!(draw_all.exact);
    assert_eq!(draw_all.draws_evaluated, 1_533_939);
}

#[test]
fn seeded_analysis_is_reproducible() {
    let a = analyze("5c 9d Th Qs 3h");
    let b = analyze("5c 9d Th Qs 3h");
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.seed, 2024);
}

#[test]
fn small_population_enumerates_every_draw() {
    let hand = parse_cards("2c 7d 9h Js Kh").unwrap();
    let population = parse_cards("Ah Ad Ac As 3c 4c").unwrap();
    let a = Analyzer::default().with_config(seeded()).analyze(&hand, &population).unwrap();
    assert!(a.iter().all(|m| m.exact));
    assert_eq!(a.move_for(HoldMask::DISCARD_ALL).unwrap().draws_evaluated, 6);
    let keep_king = a.move_for(mask(&[4])).unwrap();
    assert_eq!(keep_king.draws_evaluated, 15);
}

#[test]
fn input_errors() {
    let hand = parse_cards("2c 7d 9h Js Kh").unwrap();
    let population = Deck::population_for(&hand);

    assert_eq!(find_best_hold(&hand[..4], &population).unwrap_err(), HandError::InvalidHandSize(4));

    let mut dup_hand = hand.clone();
    dup_hand[4] = dup_hand[0];
    assert_eq!(find_best_hold(&dup_hand, &population).unwrap_err(), HandError::DuplicateCard(hand[0]));

    let mut overlapping = population.clone();
    overlapping.push(hand[2]);
    assert_eq!(
        find_best_hold(&hand, &overlapping).unwrap_err(),
        HandError::PopulationOverlap(hand[2])
    );

    let short: Vec<Card> = population[..3].to_vec();
    assert_eq!(
        find_best_hold(&hand, &short).unwrap_err(),
        HandError::PopulationTooSmall { needed: 5, available: 3 }
    );
}

#[test]
fn background_analysis() {
    let hand = parse_cards("Qh Jh Th 4c 4d").unwrap();
    let population = Deck::population_for(&hand);
    let handle = spawn_analysis(Analyzer::default().with_config(seeded()), hand.clone(), population);
    let a = handle.join().unwrap().unwrap();
    assert_eq!(a.hand.cards().as_slice(), hand.as_slice());
    assert_eq!(a.len(), 32);
}
