use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Classification};

/// Each detector recognises one category and builds its classification.
pub trait CategoryDetector: Sync {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_classification(&self, analysis: &HandAnalysis) -> Classification;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ten through Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush() && analysis.straight_info.top_rank == Some(Rank::Ace)
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        analysis.build_classification(Category::RoyalFlush, &[Rank::Ace])
    }
}

/// Straight Flush: five consecutive ranks of one suit, wheel included
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush()
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        let top = analysis.straight_info.top_rank.unwrap_or(analysis.ranks[0]);
        analysis.build_classification(Category::StraightFlush, &[top])
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        // groups are (count desc, rank desc): quad first, kicker second
        let (ranks, len) = analysis.rank_groups.ordered_ranks();
        analysis.build_classification(Category::FourOfAKind, &ranks[..len])
    }
}

/// Full House: trips plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        let (ranks, len) = analysis.rank_groups.ordered_ranks();
        analysis.build_classification(Category::FullHouse, &ranks[..len])
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        analysis.build_classification(Category::Flush, &analysis.ranks)
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        let top = analysis.straight_info.top_rank.unwrap_or(analysis.ranks[0]);
        analysis.build_classification(Category::Straight, &[top])
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some() && !analysis.rank_groups.has_full_house()
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        let (ranks, len) = analysis.rank_groups.ordered_ranks();
        analysis.build_classification(Category::ThreeOfAKind, &ranks[..len])
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        let (ranks, len) = analysis.rank_groups.ordered_ranks();
        analysis.build_classification(Category::TwoPair, &ranks[..len])
    }
}

/// One Pair: the pair rank is the primary tiebreak and decides the Jacks-or-better gate
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1 && analysis.rank_groups.trips().is_none()
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        let (ranks, len) = analysis.rank_groups.ordered_ranks();
        analysis.build_classification(Category::Pair, &ranks[..len])
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_classification(&self, analysis: &HandAnalysis) -> Classification {
        analysis.build_classification(Category::HighCard, &analysis.ranks)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
