use crate::cards::{Card, Suit};

/// Suit distribution of up to five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    /// All five cards share one suit.
    pub is_flush: bool,
    /// The most common suit and how many cards carry it.
    pub dominant: Option<(Suit, u8)>,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0u8; 4];
        for c in cards {
            counts[c.suit() as usize] += 1;
        }
        let dominant = Suit::ALL
            .iter()
            .map(|&s| (s, counts[s as usize]))
            .filter(|(_, n)| *n > 0)
            .max_by_key(|(_, n)| *n);
        let is_flush = cards.len() == 5 && matches!(dominant, Some((_, 5)));
        SuitInfo { is_flush, dominant }
    }

    /// Number of cards in the most common suit.
    pub fn suited(&self) -> u8 {
        self.dominant.map_or(0, |(_, n)| n)
    }
}
