use clap::{Parser, Subcommand};
use log::error;
use std::process::ExitCode;
use video_poker::cards::{parse_cards, Card};
use video_poker::deck::Deck;
use video_poker::hand::HandError;
use video_poker::paytable::{PayTable, Payout, Wager};
use video_poker::session::{Session, SessionConfig};
use video_poker::strategy::{Analyzer, SearchConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Jacks-or-Better hold advisor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every hold for a dealt hand.
    Advise {
        /// Five cards, e.g. `Jh Jd 4c 8s 2h`.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
        /// Pay the Royal Flush at the max-bet rate.
        #[clap(long)]
        max_bet: bool,
        #[clap(flatten)]
        search: SearchArgs,
        /// Number of holds to print.
        #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=32))]
        top: u8,
    },
    /// Play a perfect-strategy session and report the results.
    Simulate {
        #[clap(long, default_value_t = 100)]
        hands: usize,
        /// Coins bet per hand; 5 plays at max bet.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
        coins: u32,
        /// Starting bankroll in coins.
        #[clap(long, default_value_t = 100)]
        bankroll: u64,
        #[clap(flatten)]
        search: SearchArgs,
    },
}

#[derive(Debug, clap::Args)]
struct SearchArgs {
    /// Draws sampled per hold when the draw space is too large to enumerate.
    #[clap(long, default_value_t = SearchConfig::DEFAULT_SAMPLE_SIZE)]
    samples: usize,
    /// Enumerate every draw for holds discarding this many cards or fewer.
    #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=5))]
    exhaustive: u8,
    /// Seed for reproducible sampling.
    #[clap(long)]
    seed: Option<u64>,
}

impl SearchArgs {
    fn config(&self) -> SearchConfig {
        let config = SearchConfig::default()
            .with_sample_size(self.samples)
            .with_max_exhaustive_discards(self.exhaustive.into());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn advise<P: Payout>(analyzer: Analyzer<P>, cards: &[Card], top: usize) -> Result<(), HandError> {
    let population = Deck::population_for(cards);
    let analysis = analyzer.analyze(cards, &population)?;

    println!("Hand: {}  ({})", analysis.hand, analysis.pat);
    println!();
    for (i, m) in analysis.iter().take(top).enumerate() {
        println!("{:>2}. {m}", i + 1);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), HandError> {
    match cli.command {
        Command::Advise { cards, max_bet, search, top } => {
            let cards = parse_cards(&cards.join(" "))?;
            let table = PayTable::JACKS_OR_BETTER;
            if max_bet {
                advise(Analyzer::new(table.at_max_bet()).with_config(search.config()), &cards, top.into())
            } else {
                advise(Analyzer::new(table).with_config(search.config()), &cards, top.into())
            }
        }
        Command::Simulate { hands, coins, bankroll, search } => {
            let mut config = SessionConfig::default()
                .with_hands(hands)
                .with_wager(Wager::new(coins))
                .with_starting_bankroll(bankroll)
                .with_search(search.config());
            if let Some(seed) = search.seed {
                config = config.with_seed(seed);
            }
            let report = Session::new(config).run()?;
            println!("{report}");
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
