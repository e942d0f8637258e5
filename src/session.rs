//! Perfect-play session simulation.
//!
//! Each hand is dealt from a freshly shuffled deck, analyzed, played with the
//! top-ranked hold and paid on the wager's schedule. The analyzer itself keeps
//! no state between hands; only the session accumulates totals.

use crate::deck::Deck;
use crate::evaluator::Classification;
use crate::hand::{Hand, HandError, HoldMask, HAND_SIZE};
use crate::paytable::{PayTable, Schedule, Wager};
use crate::strategy::{Analyzer, SearchConfig};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::fmt;

/// Big wins kept for the report.
const BIG_WIN_HISTORY: usize = 5;
/// A hand paying at least this many times the bet counts as a big win.
const BIG_WIN_FACTOR: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub hands: usize,
    pub wager: Wager,
    /// Starting bankroll in coins.
    pub starting_bankroll: u64,
    /// Seeds both the shuffles and the per-hand search. `None` picks one at random.
    pub seed: Option<u64>,
    pub search: SearchConfig,
    /// Log progress every this many hands; 0 disables it.
    pub progress_every: usize,
}

impl SessionConfig {
    pub fn with_hands(mut self, hands: usize) -> Self {
        self.hands = hands;
        self
    }

    pub fn with_wager(mut self, wager: Wager) -> Self {
        self.wager = wager;
        self
    }

    pub fn with_starting_bankroll(mut self, coins: u64) -> Self {
        self.starting_bankroll = coins;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hands: 100,
            wager: Wager::default(),
            starting_bankroll: 100,
            seed: None,
            search: SearchConfig::default(),
            progress_every: 10,
        }
    }
}

/// One played hand.
#[derive(Debug, Clone)]
pub struct HandRecord {
    /// 1-based hand number within the session.
    pub number: usize,
    pub dealt: Hand,
    pub hold: HoldMask,
    pub expected_value: f64,
    pub final_hand: Hand,
    pub result: Classification,
    /// Coins returned, bet included in the multiplier.
    pub payout: u64,
}

impl fmt::Display for HandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand #{}: {} (+{})", self.number, self.result.category, self.payout)
    }
}

/// Totals for a session so far.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub hands: usize,
    pub invested: u64,
    pub returned: u64,
    pub wins: usize,
    pub losses: usize,
    pub bankroll: i64,
    /// Most recent big wins, oldest first.
    pub big_wins: Vec<HandRecord>,
}

impl SessionReport {
    pub fn net(&self) -> i64 {
        self.returned as i64 - self.invested as i64
    }

    /// Returned over invested, as a percentage.
    pub fn roi(&self) -> f64 {
        if self.invested == 0 {
            return 0.0;
        }
        self.returned as f64 / self.invested as f64 * 100.0
    }

    /// Share of hands that paid anything, as a percentage.
    pub fn win_frequency(&self) -> f64 {
        if self.hands == 0 {
            return 0.0;
        }
        self.wins as f64 / self.hands as f64 * 100.0
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{rule}")?;
        writeln!(f, "{:^50}", "SESSION SUMMARY")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total Hands:     {}", self.hands)?;
        writeln!(f, "Final Bankroll:  {}", self.bankroll)?;
        writeln!(f, "Net Profit/Loss: {:+}", self.net())?;
        writeln!(f, "Return (ROI):    {:.2}%", self.roi())?;
        writeln!(f, "Win Frequency:   {:.1}%", self.win_frequency())?;
        if !self.big_wins.is_empty() {
            writeln!(f)?;
            writeln!(f, "--- Top Hits ---")?;
            for win in &self.big_wins {
                writeln!(f, "{win}")?;
            }
        }
        write!(f, "{rule}")
    }
}

/// A bankroll playing hands back to back.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    table: PayTable,
    analyzer: Analyzer<Schedule>,
    rng: ChaCha8Rng,
    hands: usize,
    invested: u64,
    returned: u64,
    wins: usize,
    bankroll: i64,
    big_wins: VecDeque<HandRecord>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_table(config, PayTable::JACKS_OR_BETTER)
    }

    pub fn with_table(config: SessionConfig, table: PayTable) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let analyzer = Analyzer::new(config.wager.schedule(table)).with_config(config.search);
        Self {
            bankroll: config.starting_bankroll as i64,
            config,
            table,
            analyzer,
            rng,
            hands: 0,
            invested: 0,
            returned: 0,
            wins: 0,
            big_wins: VecDeque::with_capacity(BIG_WIN_HISTORY),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bankroll(&self) -> i64 {
        self.bankroll
    }

    /// Deal, analyze, draw and settle one hand.
    pub fn play_hand(&mut self) -> Result<HandRecord, HandError> {
        let coins = u64::from(self.config.wager.coins());

        let mut deck = Deck::standard();
        deck.shuffle_with(&mut self.rng);
        let dealt = Hand::try_new(&deck.deal_n(HAND_SIZE))?;

        // Reseed the search per hand so seeded sessions replay exactly.
        let search = self.config.search.with_seed(self.rng.random());
        let analysis = self.analyzer.clone().with_config(search).analyze_hand(&dealt, deck.as_slice())?;
        let best = analysis.best();

        let replacements = deck.deal_n(best.discard_count());
        let final_hand = dealt.redraw(best.mask, &replacements).ok_or(HandError::PopulationTooSmall {
            needed: best.discard_count(),
            available: replacements.len(),
        })?;
        let result = final_hand.classify();
        let payout = self.config.wager.payout(self.table, &result);

        // Totals change only after the hand is fully played.
        self.hands += 1;
        self.invested += coins;
        self.returned += payout;
        self.bankroll += payout as i64 - coins as i64;
        let record = HandRecord {
            number: self.hands,
            dealt,
            hold: best.mask,
            expected_value: best.expected_value,
            final_hand,
            result,
            payout,
        };

        if payout > 0 {
            self.wins += 1;
            if payout >= coins * BIG_WIN_FACTOR {
                if self.big_wins.len() == BIG_WIN_HISTORY {
                    self.big_wins.pop_front();
                }
                self.big_wins.push_back(record.clone());
            }
        }
        Ok(record)
    }

    /// Play the configured number of hands and report.
    pub fn run(&mut self) -> Result<SessionReport, HandError> {
        info!(
            "starting session: {} hands at {} coin(s), bankroll {}",
            self.config.hands,
            self.config.wager.coins(),
            self.bankroll
        );
        for i in 1..=self.config.hands {
            self.play_hand()?;
            if self.config.progress_every > 0 && i % self.config.progress_every == 0 {
                info!("progress: {i}/{} | bankroll: {}", self.config.hands, self.bankroll);
            }
        }
        Ok(self.report())
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            hands: self.hands,
            invested: self.invested,
            returned: self.returned,
            wins: self.wins,
            losses: self.hands - self.wins,
            bankroll: self.bankroll,
            big_wins: self.big_wins.iter().cloned().collect(),
        }
    }
}
