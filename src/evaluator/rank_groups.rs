use crate::cards::{Card, Rank};

/// Groups ranks by their multiplicity, sorted by (count desc, rank desc).
/// Works for any number of cards up to five, so partial holds can be
/// inspected the same way as complete hands.
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankGroups {
    groups: [(Rank, u8); 5],
    len: usize,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Build from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups = [(Rank::Two, 0u8); 5];
        let mut len = 0;
        for rank in Rank::ALL.iter().rev().copied() {
            let count = rank_counts[rank.value() as usize];
            if count > 0 && len < groups.len() {
                groups[len] = (rank, count);
                len += 1;
            }
        }
        // Ranks were pushed high to low; a stable sort on count keeps that order within ties.
        groups[..len].sort_by(|a, b| b.1.cmp(&a.1));
        Self { groups, len }
    }

    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups[..self.len]
    }

    /// Group ranks in order, padded to five; only the first `len` are meaningful.
    pub fn ordered_ranks(&self) -> ([Rank; 5], usize) {
        let mut ranks = [Rank::Two; 5];
        for (slot, (r, _)) in ranks.iter_mut().zip(self.groups()) {
            *slot = *r;
        }
        (ranks, self.len)
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups().iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Exactly one trips and one pair.
    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.with_count(2).count() == 1
    }
}
