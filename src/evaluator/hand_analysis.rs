use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Classification};

/// Pre-computed facts about a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Cards by rank descending, then suit descending.
    pub sorted_cards: [Card; 5],
    /// Ranks of `sorted_cards`.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_unstable_by(|a, b| b.cmp(a));
        let ranks = sorted_cards.map(Card::rank);

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_cards(&sorted_cards),
            suit_info: SuitInfo::detect(&sorted_cards),
            straight_info: StraightInfo::detect(&ranks),
        }
    }

    pub fn is_straight_flush(&self) -> bool {
        self.suit_info.is_flush && self.straight_info.is_straight
    }

    pub fn build_classification(&self, category: Category, tiebreak: &[Rank]) -> Classification {
        Classification::new(category, self.sorted_cards, tiebreak)
    }
}
