#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]

use clap::Parser;

use msquare::generator::RandomDigits;
use msquare::report::ConsoleReporter;
use msquare::search::{Search, SearchConfig, DEFAULT_LOOP_LIMIT};

/// Randomized brute-force search for 3x3 magic squares.
#[derive(Parser)]
#[command(name = "msquare", version, about)]
struct Cli {
    /// Only show messages whose level is at or above this threshold
    #[arg(long = "debuglevel", default_value_t = -1)]
    debug_level: i32,

    /// Dump any grid whose first-row total equals this value
    #[arg(long = "sampletotal")]
    sample_total: Option<u32>,

    /// Attempts before the search gives up
    #[arg(long = "looplimit", default_value_t = DEFAULT_LOOP_LIMIT)]
    loop_limit: u64,

    /// Print every distinct total observed after a failed run
    #[arg(long = "showtotals")]
    show_totals: bool,

    /// Keep searching until a match is found
    #[arg(long = "nolimit")]
    no_limit: bool,

    /// Pre-seed position 0 with 2 and position 7 with 1 (the Professor
    /// Layton partial square)
    #[arg(long = "laytonseed")]
    layton_seed: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = SearchConfig {
        loop_limit: cli.loop_limit,
        no_limit: cli.no_limit,
        sample_total: cli.sample_total,
    };
    let digits = RandomDigits::new(rand::thread_rng(), cli.layton_seed);
    let reporter = ConsoleReporter::new(cli.debug_level, cli.show_totals);

    Search::new(config, digits, reporter).run();
}
