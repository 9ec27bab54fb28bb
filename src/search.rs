use crate::generator::DigitSource;
use crate::grid::{Grid, LineSums};
use crate::report::Reporter;
use crate::totals::TotalsTracker;

pub const DEFAULT_LOOP_LIMIT: u64 = 320_000;
pub const PROGRESS_INTERVAL: u64 = 500_000;

/// Immutable per-run knobs. Display concerns (debug level, totals
/// dump) live with the reporter, not here.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub loop_limit: u64,
    pub no_limit: bool,
    pub sample_total: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            loop_limit: DEFAULT_LOOP_LIMIT,
            no_limit: false,
            sample_total: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Found {
        attempt: u64,
        grid: Grid,
        sums: LineSums,
    },
    LimitReached {
        attempts: u64,
        totals: TotalsTracker,
    },
}

/// Drives generate -> build -> evaluate until a magic square shows up
/// or the loop limit is hit.
pub struct Search<S, R> {
    config: SearchConfig,
    digits: S,
    reporter: R,
    totals: TotalsTracker,
    attempts: u64,
}

impl<S: DigitSource, R: Reporter> Search<S, R> {
    #[must_use]
    pub fn new(config: SearchConfig, digits: S, reporter: R) -> Self {
        Self {
            config,
            digits,
            reporter,
            totals: TotalsTracker::new(),
            attempts: 0,
        }
    }

    pub fn run(mut self) -> Outcome {
        loop {
            self.attempts += 1;
            let grid = Grid::from_digits(self.digits.next_digits());
            let sums = grid.line_sums();
            // win or lose, the target total goes into the registry
            self.totals.record(sums.target);

            if self.attempts % PROGRESS_INTERVAL == 0 {
                self.reporter.progress(self.attempts);
            }
            if self.config.sample_total == Some(sums.target) {
                self.reporter.sample(&grid, sums.target);
            }

            if sums.all_match {
                self.reporter.found(self.attempts, &grid, &sums);
                return Outcome::Found {
                    attempt: self.attempts,
                    grid,
                    sums,
                };
            }
            if !self.config.no_limit && self.attempts >= self.config.loop_limit {
                self.reporter.gave_up(self.attempts, &self.totals);
                return Outcome::LimitReached {
                    attempts: self.attempts,
                    totals: self.totals,
                };
            }
        }
    }
}
