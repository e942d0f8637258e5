pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use std::fmt;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers into a comparable value.
    /// Unused tiebreak slots are zero, so they never outrank a real card.
    pub fn from_parts(category: Category, tiebreak: &[Rank]) -> Self {
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in tiebreak.iter().take(5).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const ALL: [Category; Category::COUNT] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable classification of five cards. `value` drives ordering.
///
/// The tiebreak holds only the ranks that matter for the category, most
/// significant first: the pair rank then kickers for a Pair, trips then pair
/// for a Full House, the resolved high card for straights (5 for the wheel).
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub category: Category,
    pub best_five: [Card; 5],
    tiebreak: [Rank; 5],
    significant: u8,
    value: HandValue,
}

impl Classification {
    pub(crate) fn new(category: Category, best_five: [Card; 5], tiebreak: &[Rank]) -> Self {
        let significant = tiebreak.len().min(5);
        let mut ranks = [Rank::Two; 5];
        ranks[..significant].copy_from_slice(&tiebreak[..significant]);
        let value = HandValue::from_parts(category, &tiebreak[..significant]);
        Self { category, best_five, tiebreak: ranks, significant: significant as u8, value }
    }

    /// The rank that defines the category (pair rank, trips rank, straight high card, ...).
    pub fn primary(&self) -> Rank {
        self.tiebreak[0]
    }

    /// The second defining rank when there is one (Full House pair, lower of two pairs, kicker).
    pub fn secondary(&self) -> Option<Rank> {
        self.tiebreak().get(1).copied()
    }

    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak[..self.significant as usize]
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Classification {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Classification {}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::Pair => write!(f, "Pair of {}", self.primary().plural()),
            Category::HighCard => write!(f, "{} High", self.primary().name()),
            Category::Straight | Category::StraightFlush => {
                write!(f, "{}, {} high", self.category, self.primary().name())
            }
            c => write!(f, "{c}"),
        }
    }
}

/// Classify exactly five distinct cards.
///
/// ```
/// use video_poker::cards::parse_cards;
/// use video_poker::evaluator::{classify, Category};
/// use video_poker::cards::Rank;
///
/// let c = classify(&parse_cards("3h 3d 3c Ah As").unwrap()).unwrap();
/// assert_eq!(c.category, Category::FullHouse);
/// assert_eq!(c.primary(), Rank::Three);
/// assert_eq!(c.secondary(), Some(Rank::Ace));
/// ```
pub fn classify(cards: &[Card]) -> Result<Classification, HandError> {
    Ok(Hand::try_new(cards)?.classify())
}

/// Classify five cards without validation; the caller guarantees they are distinct.
pub fn evaluate_five(cards: &[Card; 5]) -> Classification {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Highest category first; the last detector always matches.
    DETECTORS
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.build_classification(&analysis))
        .unwrap_or_else(|| analysis.build_classification(Category::HighCard, &analysis.ranks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn five(s: &str) -> Classification {
        classify(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn classify_rejects_wrong_sizes_and_duplicates() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(classify(&four).unwrap_err(), HandError::InvalidHandSize(4));
        let dup = parse_cards("As Ks Qs As Ts").unwrap();
        assert_eq!(
            classify(&dup).unwrap_err(),
            HandError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades))
        );
    }

    #[test]
    fn royal_and_wheel_straight_flush() {
        let royal = five("Ts Js Qs Ks As");
        assert_eq!(royal.category, Category::RoyalFlush);
        assert_eq!(royal.primary(), Rank::Ace);

        let wheel = five("As 2s 3s 4s 5s");
        assert_eq!(wheel.category, Category::StraightFlush);
        assert_eq!(wheel.primary(), Rank::Five);
        assert!(royal > wheel);
    }

    #[test]
    fn pair_keeps_category_below_jacks() {
        let tens = five("Th Td 2c 5s 9h");
        assert_eq!(tens.category, Category::Pair);
        assert_eq!(tens.primary(), Rank::Ten);
        assert_eq!(tens.tiebreak(), &[Rank::Ten, Rank::Nine, Rank::Five, Rank::Two]);
    }

    #[test]
    fn high_card_tiebreak_is_highest_rank() {
        let hi = five("2c 7d 9h Js Kh");
        assert_eq!(hi.category, Category::HighCard);
        assert_eq!(hi.primary(), Rank::King);
        assert_eq!(hi.to_string(), "King High");
    }

    #[test]
    fn category_order_beats_tiebreaks() {
        let low_two_pair = five("2c 2d 3h 3s 4c");
        let ace_pair = five("Ac Ad Kh Qs Jc");
        assert!(low_two_pair > ace_pair);
        assert!(Category::RoyalFlush > Category::StraightFlush);
        assert_eq!(Category::ALL.len(), Category::COUNT);
    }

    #[test]
    fn display_names() {
        assert_eq!(five("Ts Js Qs Ks As").to_string(), "Royal Flush");
        assert_eq!(five("4s 5c 6s 7s 8s").to_string(), "Straight, Eight high");
        assert_eq!(five("Jh Jd 2c 5s 9h").to_string(), "Pair of Jacks");
        assert_eq!(Category::ThreeOfAKind.to_string(), "Three of a Kind");
    }
}
