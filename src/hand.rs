use crate::cards::{parse_cards, Card, CardError, CardSet};
use crate::evaluator::{evaluate_five, Classification};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a video poker hand.
pub const HAND_SIZE: usize = 5;

/// Number of distinct hold masks over a five-card hand.
pub const MASK_COUNT: usize = 1 << HAND_SIZE;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    #[error("hold mask {0} does not fit in 5 bits")]
    InvalidMask(u8),
    #[error("hand position {0} is out of range")]
    InvalidPosition(usize),
    #[error("remaining deck contains hand card {0}")]
    PopulationOverlap(Card),
    #[error("duplicate card in remaining deck: {0}")]
    DuplicatePopulationCard(Card),
    #[error("remaining deck has {available} cards, need at least {needed}")]
    PopulationTooSmall { needed: usize, available: usize },
    #[error("card parse error: {0}")]
    CardParse(#[from] CardError),
}

/// Five distinct cards in dealt order.
///
/// ```
/// use video_poker::hand::Hand;
///
/// let hand: Hand = "Ts Js Qs Ks As".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// assert!("Ts Ts Qs Ks As".parse::<Hand>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let array: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Self::from_array(array)
    }

    pub fn from_array(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        let mut seen = CardSet::EMPTY;
        for card in cards {
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard(card));
            }
        }
        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn card_set(&self) -> CardSet {
        CardSet::from_cards(&self.0)
    }

    /// Classify the hand. Infallible: a `Hand` is always five distinct cards.
    pub fn classify(&self) -> Classification {
        evaluate_five(&self.0)
    }

    /// Replace every discarded position with the next card from `replacements`,
    /// in position order. Returns `None` if there are too few replacements.
    pub fn redraw(&self, mask: HoldMask, replacements: &[Card]) -> Option<Hand> {
        let mut out = self.0;
        let mut fresh = replacements.iter();
        for (pos, slot) in out.iter_mut().enumerate() {
            if !mask.is_held(pos) {
                *slot = *fresh.next()?;
            }
        }
        Hand::from_array(out).ok()
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Hand::try_new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Which of the five hand positions are kept; bit `i` set means position `i` is held.
///
/// ```
/// use video_poker::hand::HoldMask;
///
/// let m = HoldMask::from_positions(&[0, 2]).unwrap();
/// assert_eq!(m.bits(), 0b00101);
/// assert_eq!(m.discard_count(), 3);
/// assert_eq!(m.to_string(), "H.H..");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HoldMask(u8);

impl HoldMask {
    pub const DISCARD_ALL: HoldMask = HoldMask(0);
    pub const KEEP_ALL: HoldMask = HoldMask((MASK_COUNT - 1) as u8);

    pub fn try_new(bits: u8) -> Result<Self, HandError> {
        if bits as usize >= MASK_COUNT {
            return Err(HandError::InvalidMask(bits));
        }
        Ok(Self(bits))
    }

    pub fn from_positions(positions: &[usize]) -> Result<Self, HandError> {
        let mut bits = 0u8;
        for &pos in positions {
            if pos >= HAND_SIZE {
                return Err(HandError::InvalidPosition(pos));
            }
            bits |= 1 << pos;
        }
        Ok(Self(bits))
    }

    /// All 32 masks in ascending order, from discard-all to keep-all.
    pub fn all() -> impl Iterator<Item = HoldMask> {
        (0..MASK_COUNT as u8).map(HoldMask)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_held(self, pos: usize) -> bool {
        pos < HAND_SIZE && self.0 & (1 << pos) != 0
    }

    pub const fn held_count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn discard_count(self) -> usize {
        HAND_SIZE - self.held_count()
    }

    /// Held cards of `hand`, in position order.
    pub fn held(self, hand: &Hand) -> Vec<Card> {
        hand.cards().iter().enumerate().filter(|(i, _)| self.is_held(*i)).map(|(_, c)| *c).collect()
    }
}

impl fmt::Display for HoldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in 0..HAND_SIZE {
            write!(f, "{}", if self.is_held(pos) { 'H' } else { '.' })?;
        }
        Ok(())
    }
}

/// Check that `population` can serve as the draw pool for `hand`:
/// no duplicates, no card shared with the hand, and enough cards to
/// replace the whole hand. Returns the population as a set.
pub fn validate_population(hand: &Hand, population: &[Card]) -> Result<CardSet, HandError> {
    let held = hand.card_set();
    let mut set = CardSet::EMPTY;
    for &card in population {
        if held.contains(card) {
            return Err(HandError::PopulationOverlap(card));
        }
        if !set.insert(card) {
            return Err(HandError::DuplicatePopulationCard(card));
        }
    }
    if population.len() < HAND_SIZE {
        return Err(HandError::PopulationTooSmall {
            needed: HAND_SIZE,
            available: population.len(),
        });
    }
    Ok(set)
}
