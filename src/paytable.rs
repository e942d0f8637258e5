//! Payout multipliers for Jacks or Better.
//!
//! The [`PayTable`] maps a classification to a per-coin multiplier. The
//! max-bet Royal Flush bonus is a betting-tier rule, so it lives in
//! [`MaxBet`], which wraps a table instead of changing it. Anything that
//! needs a multiplier (the EV search, a session) takes a [`Payout`].

use crate::cards::Rank;
use crate::evaluator::{Category, Classification};

/// Per-coin multiplier for a classified hand.
pub trait Payout: Sync {
    fn multiplier(&self, classification: &Classification) -> u32;

    /// Lowest pair rank that pays; used to label holds, never to score them.
    fn min_paying_pair(&self) -> Rank {
        Rank::Jack
    }
}

/// Multiplier per category, plus the lowest pair rank that pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayTable {
    multipliers: [u32; Category::COUNT],
    min_paying_pair: Rank,
}

impl PayTable {
    /// Royal 800, Straight Flush 50, Quads 25, Full House 9, Flush 6,
    /// Straight 4, Trips 3, Two Pair 2, Jacks or Better 1.
    pub const JACKS_OR_BETTER: PayTable = PayTable {
        multipliers: [0, 1, 2, 3, 4, 6, 9, 25, 50, 800],
        min_paying_pair: Rank::Jack,
    };

    /// Royal Flush multiplier at maximum bet.
    pub const MAX_BET_ROYAL: u32 = 4000;

    /// Build a custom table; `multipliers` is indexed by [`Category::ordinal`].
    pub const fn new(multipliers: [u32; Category::COUNT], min_paying_pair: Rank) -> Self {
        Self { multipliers, min_paying_pair }
    }

    /// Base table value for a category, ignoring the pair gate.
    pub const fn multiplier_for(&self, category: Category) -> u32 {
        self.multipliers[category as usize]
    }

    pub const fn min_paying_pair(&self) -> Rank {
        self.min_paying_pair
    }

    /// Multiplier for a category given its primary tiebreak rank.
    /// A Pair below `min_paying_pair` pays nothing.
    pub fn payout(&self, category: Category, tie_break: Rank) -> u32 {
        if category == Category::Pair && tie_break < self.min_paying_pair {
            return 0;
        }
        self.multiplier_for(category)
    }

    /// Wrap this table with the max-bet Royal Flush bonus.
    pub const fn at_max_bet(self) -> MaxBet {
        MaxBet { table: self, royal: Self::MAX_BET_ROYAL }
    }
}

impl Default for PayTable {
    fn default() -> Self {
        Self::JACKS_OR_BETTER
    }
}

impl Payout for PayTable {
    fn multiplier(&self, c: &Classification) -> u32 {
        self.payout(c.category, c.primary())
    }

    fn min_paying_pair(&self) -> Rank {
        self.min_paying_pair
    }
}

/// Multiplier against the default Jacks-or-Better table.
///
/// ```
/// use video_poker::cards::Rank;
/// use video_poker::evaluator::Category;
/// use video_poker::paytable::payout;
///
/// assert_eq!(payout(Category::Pair, Rank::Ten), 0);
/// assert_eq!(payout(Category::Pair, Rank::Jack), 1);
/// assert_eq!(payout(Category::RoyalFlush, Rank::Ace), 800);
/// ```
pub fn payout(category: Category, tie_break: Rank) -> u32 {
    PayTable::JACKS_OR_BETTER.payout(category, tie_break)
}

/// A pay table played at maximum bet: Royal Flush pays `royal` instead of the table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxBet {
    pub table: PayTable,
    pub royal: u32,
}

impl Payout for MaxBet {
    fn multiplier(&self, c: &Classification) -> u32 {
        match c.category {
            Category::RoyalFlush => self.royal,
            _ => self.table.multiplier(c),
        }
    }

    fn min_paying_pair(&self) -> Rank {
        self.table.min_paying_pair
    }
}

/// The schedule a wager is paid on: the plain table, or the max-bet override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Table(PayTable),
    MaxBet(MaxBet),
}

impl Payout for Schedule {
    fn multiplier(&self, c: &Classification) -> u32 {
        match self {
            Schedule::Table(t) => t.multiplier(c),
            Schedule::MaxBet(m) => m.multiplier(c),
        }
    }

    fn min_paying_pair(&self) -> Rank {
        match self {
            Schedule::Table(t) => t.min_paying_pair,
            Schedule::MaxBet(m) => m.table.min_paying_pair,
        }
    }
}

/// Coins bet on one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wager {
    coins: u32,
}

impl Wager {
    pub const MAX_COINS: u32 = 5;

    /// Clamp to 1..=MAX_COINS.
    pub fn new(coins: u32) -> Self {
        Self { coins: coins.clamp(1, Self::MAX_COINS) }
    }

    pub const fn max() -> Self {
        Self { coins: Self::MAX_COINS }
    }

    pub const fn coins(self) -> u32 {
        self.coins
    }

    pub const fn is_max(self) -> bool {
        self.coins == Self::MAX_COINS
    }

    /// The multiplier schedule that applies to this wager.
    pub fn schedule(self, table: PayTable) -> Schedule {
        if self.is_max() {
            Schedule::MaxBet(table.at_max_bet())
        } else {
            Schedule::Table(table)
        }
    }

    /// Coins returned for a final hand.
    pub fn payout(self, table: PayTable, c: &Classification) -> u64 {
        u64::from(self.schedule(table).multiplier(c)) * u64::from(self.coins)
    }
}

impl Default for Wager {
    fn default() -> Self {
        Self::new(1)
    }
}
