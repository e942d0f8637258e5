use crate::cards::{Card, CardSet, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck. Cards are dealt from the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use video_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::ALL {
            for r in Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// The cards of a standard deck that are not in `hand`, in standard order.
    ///
    /// ```
    /// use video_poker::cards::parse_cards;
    /// use video_poker::deck::Deck;
    ///
    /// let hand = parse_cards("As Ks Qs Js Ts").unwrap();
    /// let population = Deck::population_for(&hand);
    /// assert_eq!(population.len(), 47);
    /// ```
    pub fn population_for(hand: &[Card]) -> Vec<Card> {
        Deck::standard().remaining_without(hand)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal up to `n` cards from the top of the deck.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.deal()).collect()
    }

    /// Cards still in the deck minus `exclude`, preserving deck order.
    /// The deck itself is left untouched.
    pub fn remaining_without(&self, exclude: &[Card]) -> Vec<Card> {
        let excluded = CardSet::from_cards(exclude);
        self.cards.iter().copied().filter(|c| !excluded.contains(*c)).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        assert_eq!(CardSet::from_cards(d.as_slice()).len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.deal().unwrap();
        let c2 = d.deal().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.deal_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
        assert!(!d.contains(c1));
    }

    #[test]
    fn deal_n_stops_when_empty() {
        let mut d = Deck::standard();
        assert_eq!(d.deal_n(60).len(), 52);
        assert!(d.is_empty());
        assert_eq!(d.deal(), None);
    }

    #[test]
    fn population_is_disjoint_from_hand() {
        let hand = parse_cards("2c 7d 9h Js Ah").unwrap();
        let pop = Deck::population_for(&hand);
        assert_eq!(pop.len(), 47);
        let set = CardSet::from_cards(&pop);
        assert!(hand.iter().all(|c| !set.contains(*c)));
    }

    #[test]
    fn remaining_without_leaves_deck_untouched() {
        let mut d = Deck::standard();
        d.shuffle_seeded(3);
        let hand = d.deal_n(5);
        let rest = d.remaining_without(&hand);
        assert_eq!(rest.len(), 47);
        assert_eq!(d.len(), 47);
        assert_eq!(rest, d.as_slice());
    }
}
