use crate::cards::{Card, Rank};
use crate::evaluator::rank_groups::RankGroups;
use crate::evaluator::straight_info::fits_straight_window;
use crate::evaluator::suit_info::SuitInfo;
use crate::evaluator::{evaluate_five, Category};
use crate::paytable::Payout;
use std::fmt;

/// Advisory description of what a hold is playing for. Never affects EV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    /// The held cards already make a paying category.
    Made(Category),
    /// Four cards of one suit.
    FlushDraw,
    /// Four distinct ranks inside one five-rank window.
    StraightDraw,
    /// A pair below the paying threshold.
    LowPair,
    /// Three cards of one suit.
    ThreeToFlush,
    /// Most frequent non-High-Card category across the evaluated draws.
    Likely(Category),
    Nothing,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Made(c) => write!(f, "{c}"),
            Outcome::FlushDraw => f.write_str("Flush draw"),
            Outcome::StraightDraw => f.write_str("Straight draw"),
            Outcome::LowPair => f.write_str("Low pair"),
            Outcome::ThreeToFlush => f.write_str("Three to a flush"),
            Outcome::Likely(c) => write!(f, "Likely {c}"),
            Outcome::Nothing => f.write_str("Nothing"),
        }
    }
}

/// Running totals over the draws evaluated for one hold.
#[derive(Debug, Clone, Default)]
pub(crate) struct DrawTally {
    pub draws: usize,
    pub hits: usize,
    pub total_payout: u64,
    categories: [usize; Category::COUNT],
}

impl DrawTally {
    pub fn record(&mut self, category: Category, multiplier: u32) {
        self.draws += 1;
        self.total_payout += u64::from(multiplier);
        if multiplier > 0 {
            self.hits += 1;
        }
        self.categories[category as usize] += 1;
    }

    pub fn expected_value(&self) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        self.total_payout as f64 / self.draws as f64
    }

    pub fn hit_rate(&self) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        self.hits as f64 / self.draws as f64
    }

    /// Most frequent category above High Card; ties go to the stronger category.
    pub fn most_frequent_made(&self) -> Option<Category> {
        Category::ALL[1..]
            .iter()
            .copied()
            .filter(|c| self.categories[*c as usize] > 0)
            .max_by_key(|c| (self.categories[*c as usize], *c))
    }
}

/// Paying category formed by the held cards alone, if any.
fn made_category<P: Payout + ?Sized>(held: &[Card], payout: &P) -> Option<Category> {
    if let Ok(five) = <[Card; 5]>::try_from(held) {
        let c = evaluate_five(&five);
        return (payout.multiplier(&c) > 0).then_some(c.category);
    }

    let groups = RankGroups::from_cards(held);
    let pairs = groups.pairs();
    if groups.quad().is_some() {
        Some(Category::FourOfAKind)
    } else if groups.trips().is_some() {
        Some(Category::ThreeOfAKind)
    } else if pairs.len() == 2 {
        Some(Category::TwoPair)
    } else if pairs.first().is_some_and(|&r| r >= payout.min_paying_pair()) {
        Some(Category::Pair)
    } else {
        None
    }
}

/// Label a hold from its held cards, falling back to the draw statistics.
pub(crate) fn predict<P: Payout + ?Sized>(held: &[Card], tally: &DrawTally, payout: &P) -> Outcome {
    if let Some(c) = made_category(held, payout) {
        return Outcome::Made(c);
    }

    if held.len() == 5 {
        // A non-paying pat hand is already final; a lone pair needs no draw statistics.
        let groups = RankGroups::from_cards(held);
        if groups.pairs().len() == 1 && groups.trips().is_none() {
            return Outcome::LowPair;
        }
    } else {
        let suits = SuitInfo::detect(held);
        let ranks: Vec<Rank> = held.iter().map(|c| c.rank()).collect();
        if held.len() == 4 && suits.suited() == 4 {
            return Outcome::FlushDraw;
        }
        if held.len() == 4 && fits_straight_window(&ranks) {
            return Outcome::StraightDraw;
        }
        if !RankGroups::from_cards(held).pairs().is_empty() {
            return Outcome::LowPair;
        }
        if held.len() == 3 && suits.suited() == 3 {
            return Outcome::ThreeToFlush;
        }
    }

    tally.most_frequent_made().map_or(Outcome::Nothing, Outcome::Likely)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::paytable::PayTable;

    fn label(held: &str, tally: &DrawTally) -> Outcome {
        let cards = parse_cards(held).unwrap();
        predict(&cards, tally, &PayTable::JACKS_OR_BETTER)
    }

    #[test]
    fn made_hands_win_over_draw_heuristics() {
        let t = DrawTally::default();
        assert_eq!(label("Jh Jd", &t), Outcome::Made(Category::Pair));
        assert_eq!(label("7h 7d 7c", &t), Outcome::Made(Category::ThreeOfAKind));
        assert_eq!(label("7h 7d 4c 4s", &t), Outcome::Made(Category::TwoPair));
        assert_eq!(label("Ts Js Qs Ks As", &t), Outcome::Made(Category::RoyalFlush));
    }

    #[test]
    fn draws() {
        let t = DrawTally::default();
        assert_eq!(label("2s 5s 9s Ks", &t), Outcome::FlushDraw);
        assert_eq!(label("5c 6d 7h 9s", &t), Outcome::StraightDraw);
        assert_eq!(label("7h 7d", &t), Outcome::LowPair);
        assert_eq!(label("2h 8h Kh", &t), Outcome::ThreeToFlush);
    }

    #[test]
    fn pat_hands_that_do_not_pay() {
        let mut t = DrawTally::default();
        t.record(Category::Pair, 0);
        assert_eq!(label("Th Td 2c 5s 9h", &t), Outcome::LowPair);
        let mut t = DrawTally::default();
        t.record(Category::HighCard, 0);
        assert_eq!(label("2c 7d 9h Js Kh", &t), Outcome::Nothing);
    }

    #[test]
    fn falls_back_to_most_frequent_draw_category() {
        let mut t = DrawTally::default();
        t.record(Category::HighCard, 0);
        t.record(Category::HighCard, 0);
        t.record(Category::HighCard, 0);
        t.record(Category::Pair, 0);
        t.record(Category::Pair, 1);
        t.record(Category::Flush, 6);
        assert_eq!(label("2c 9d", &t), Outcome::Likely(Category::Pair));
        assert_eq!(label("2c 9d", &DrawTally::default()), Outcome::Nothing);
    }

    #[test]
    fn tally_rates() {
        let mut t = DrawTally::default();
        assert_eq!(t.expected_value(), 0.0);
        t.record(Category::Flush, 6);
        t.record(Category::HighCard, 0);
        assert_eq!(t.expected_value(), 3.0);
        assert_eq!(t.hit_rate(), 0.5);
    }

    #[test]
    fn labels_read_well() {
        assert_eq!(Outcome::Made(Category::FullHouse).to_string(), "Full House");
        assert_eq!(Outcome::Likely(Category::Pair).to_string(), "Likely Pair");
        assert_eq!(Outcome::FlushDraw.to_string(), "Flush draw");
    }
}
