//! Expected-value search over the 32 hold masks.
//!
//! For every mask the held cards are fixed and the discarded positions are
//! refilled with each k-card draw from the remaining population (or a seeded
//! sample of them when the draw space is large). EV is the mean payout
//! multiplier across those draws. Results come back sorted best-first.
//!
//! ```
//! use video_poker::cards::parse_cards;
//! use video_poker::deck::Deck;
//! use video_poker::strategy::find_best_hold;
//!
//! let hand = parse_cards("Ts Js Qs Ks As").unwrap();
//! let population = Deck::population_for(&hand);
//! let moves = find_best_hold(&hand, &population).unwrap();
//! assert_eq!(moves.len(), 32);
//! assert_eq!(moves[0].held_cards, hand);
//! assert_eq!(moves[0].expected_value, 800.0);
//! ```

pub(crate) mod cache;
pub(crate) mod combinations;
pub mod outcome;

pub use outcome::Outcome;

use crate::cards::Card;
use crate::evaluator::Classification;
use crate::hand::{validate_population, Hand, HandError, HoldMask};
use crate::paytable::{PayTable, Payout};
use cache::ClassificationCache;
use combinations::{binomial, Combination, Combinations};
use log::{debug, trace};
use outcome::DrawTally;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use std::thread::JoinHandle;
use std::time::Instant;

/// How much of each draw space to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Draws evaluated per mask when the space is sampled.
    pub sample_size: usize,
    /// Masks discarding this many cards or fewer are always enumerated.
    pub max_exhaustive_discards: usize,
    /// Base seed for sampled masks. `None` draws a fresh seed per analysis.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;
    pub const DEFAULT_MAX_EXHAUSTIVE_DISCARDS: usize = 3;

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size.max(1);
        self
    }

    pub fn with_max_exhaustive_discards(mut self, discards: usize) -> Self {
        self.max_exhaustive_discards = discards;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enumerate every draw for every mask.
    pub fn exhaustive() -> Self {
        Self::default().with_max_exhaustive_discards(5)
    }

    /// Draws per sampled mask; never zero, even when the field was set directly.
    fn samples(&self) -> usize {
        self.sample_size.max(1)
    }

    fn is_exhaustive(&self, discards: usize, draw_space: usize) -> bool {
        discards <= self.max_exhaustive_discards || draw_space <= self.samples()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sample_size: Self::DEFAULT_SAMPLE_SIZE,
            max_exhaustive_discards: Self::DEFAULT_MAX_EXHAUSTIVE_DISCARDS,
            seed: None,
        }
    }
}

/// Evaluation of one hold mask.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub mask: HoldMask,
    /// Held cards in hand-position order.
    pub held_cards: Vec<Card>,
    /// Mean payout multiplier over the evaluated draws.
    pub expected_value: f64,
    /// Fraction of evaluated draws that pay anything.
    pub hit_rate: f64,
    pub outcome: Outcome,
    pub draws_evaluated: usize,
    /// Every draw was enumerated, so `expected_value` is exact.
    pub exact: bool,
}

impl MoveResult {
    pub fn label(&self) -> String {
        self.outcome.to_string()
    }

    pub fn discard_count(&self) -> usize {
        self.mask.discard_count()
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held = if self.held_cards.is_empty() {
            "(draw five)".to_string()
        } else {
            self.held_cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        };
        write!(
            f,
            "{} {:<14} EV {:>9.4}  hit {:>5.1}%  {}{}",
            self.mask,
            held,
            self.expected_value,
            self.hit_rate * 100.0,
            self.outcome,
            if self.exact { "" } else { " (sampled)" }
        )
    }
}

/// Every mask evaluated for one hand, best first.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub hand: Hand,
    /// Classification of the hand as dealt.
    pub pat: Classification,
    pub moves: Vec<MoveResult>,
    /// Base seed used for sampled masks; replaying with it reproduces the result.
    pub seed: u64,
}

impl Analysis {
    /// The top-ranked hold. Ties resolve to the lowest mask.
    pub fn best(&self) -> &MoveResult {
        &self.moves[0]
    }

    pub fn move_for(&self, mask: HoldMask) -> Option<&MoveResult> {
        self.moves.iter().find(|m| m.mask == mask)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveResult> {
        self.moves.iter()
    }
}

/// Hold search against a payout schedule.
#[derive(Debug, Clone)]
pub struct Analyzer<P: Payout = PayTable> {
    payout: P,
    config: SearchConfig,
}

impl Default for Analyzer<PayTable> {
    fn default() -> Self {
        Self::new(PayTable::JACKS_OR_BETTER)
    }
}

impl<P: Payout> Analyzer<P> {
    pub fn new(payout: P) -> Self {
        Self { payout, config: SearchConfig::default() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn payout(&self) -> &P {
        &self.payout
    }

    /// Validate the inputs and evaluate all 32 masks.
    pub fn analyze(&self, hand: &[Card], population: &[Card]) -> Result<Analysis, HandError> {
        let hand = Hand::try_new(hand)?;
        self.analyze_hand(&hand, population)
    }

    pub fn analyze_hand(&self, hand: &Hand, population: &[Card]) -> Result<Analysis, HandError> {
        validate_population(hand, population)?;
        let started = Instant::now();
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let cache = ClassificationCache::new();
        let pat = cache.classify(hand.cards());

        let mut moves = self.evaluate_masks(hand, population, &cache, seed);
        // Stable sort: equal EVs keep ascending mask order.
        moves.sort_by(|a, b| b.expected_value.total_cmp(&a.expected_value));

        debug!(
            "analyzed {hand} ({pat}) against {} cards in {:?}: best {} EV {:.4}; {} hands classified over {} lookups",
            population.len(),
            started.elapsed(),
            moves[0].mask,
            moves[0].expected_value,
            cache.len(),
            cache.lookups(),
        );

        Ok(Analysis { hand: *hand, pat, moves, seed })
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_masks(
        &self,
        hand: &Hand,
        population: &[Card],
        cache: &ClassificationCache,
        seed: u64,
    ) -> Vec<MoveResult> {
        HoldMask::all().map(|mask| self.evaluate_mask(hand, mask, population, cache, seed)).collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_masks(
        &self,
        hand: &Hand,
        population: &[Card],
        cache: &ClassificationCache,
        seed: u64,
    ) -> Vec<MoveResult> {
        use rayon::prelude::*;

        let masks: Vec<HoldMask> = HoldMask::all().collect();
        masks
            .into_par_iter()
            .map(|mask| self.evaluate_mask(hand, mask, population, cache, seed))
            .collect()
    }

    fn evaluate_mask(
        &self,
        hand: &Hand,
        mask: HoldMask,
        population: &[Card],
        cache: &ClassificationCache,
        seed: u64,
    ) -> MoveResult {
        let held = mask.held(hand);
        let discards = mask.discard_count();
        let n = population.len();
        let draw_space = binomial(n, discards);
        let exact = self.config.is_exhaustive(discards, draw_space);

        let mut candidate = *hand.cards();
        candidate[..held.len()].copy_from_slice(&held);
        let mut tally = DrawTally::default();
        let mut score = |draw: &[usize]| {
            for (slot, &i) in candidate[held.len()..].iter_mut().zip(draw) {
                *slot = population[i];
            }
            let c = cache.classify(&candidate);
            tally.record(c.category, self.payout.multiplier(&c));
        };

        if exact {
            for combo in Combinations::new(n, discards) {
                score(combo.as_slice());
            }
        } else {
            let mut rng = ChaCha8Rng::seed_from_u64(mask_seed(seed, mask));
            for rank in index::sample(&mut rng, draw_space, self.config.samples()) {
                if let Some(combo) = Combination::unrank(n, discards, rank) {
                    score(combo.as_slice());
                }
            }
        }

        let outcome = outcome::predict(&held, &tally, &self.payout);
        trace!(
            "mask {mask}: {} draws ({}), EV {:.4}, {outcome}",
            tally.draws,
            if exact { "exact" } else { "sampled" },
            tally.expected_value()
        );

        MoveResult {
            mask,
            held_cards: held,
            expected_value: tally.expected_value(),
            hit_rate: tally.hit_rate(),
            outcome,
            draws_evaluated: tally.draws,
            exact,
        }
    }
}

/// Per-mask RNG seed, so one mask's sample never depends on evaluation order.
fn mask_seed(seed: u64, mask: HoldMask) -> u64 {
    seed ^ u64::from(mask.bits() + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Run the default Jacks-or-Better search and return the ranked moves.
pub fn find_best_hold(hand: &[Card], population: &[Card]) -> Result<Vec<MoveResult>, HandError> {
    Ok(analyze(hand, population)?.moves)
}

/// Default Jacks-or-Better analysis of a hand.
pub fn analyze(hand: &[Card], population: &[Card]) -> Result<Analysis, HandError> {
    Analyzer::default().analyze(hand, population)
}

/// Run an analysis on a worker thread; join the handle for the result.
pub fn spawn_analysis<P>(
    analyzer: Analyzer<P>,
    hand: Vec<Card>,
    population: Vec<Card>,
) -> JoinHandle<Result<Analysis, HandError>>
where
    P: Payout + Send + 'static,
{
    std::thread::spawn(move || analyzer.analyze(&hand, &population))
}
