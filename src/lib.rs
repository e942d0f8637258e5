//! video-poker: Jacks-or-Better hand classification and hold advice
//!
//! Goals:
//! - Deterministic, fast classification of five-card hands
//! - Expected-value search over every hold, exact where it is cheap, seeded sampling where it is not
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: find the best hold
//! ```
//! use video_poker::cards::parse_cards;
//! use video_poker::deck::Deck;
//! use video_poker::evaluator::Category;
//! use video_poker::strategy::{Analyzer, SearchConfig};
//!
//! let hand = parse_cards("Jh Jd 4c 8s 2h").unwrap();
//! let population = Deck::population_for(&hand);
//! let analysis = Analyzer::default()
//!     .with_config(SearchConfig::default().with_seed(1))
//!     .analyze(&hand, &population)
//!     .unwrap();
//!
//! assert_eq!(analysis.pat.category, Category::Pair);
//! assert_eq!(analysis.best().held_cards, parse_cards("Jh Jd").unwrap());
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin vp-advisor -- advise Jh Jd 4c 8s 2h
//! cargo run --release --bin vp-advisor -- simulate --hands 200 --seed 7
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod paytable;
pub mod session;
pub mod strategy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
