use crate::grid::{Grid, LineSums};
use crate::totals::TotalsTracker;

/// Display collaborator for the search loop. The loop itself never
/// prints; everything an operator sees goes through one of these.
pub trait Reporter {
    /// Progress marker, fired every 500 000 attempts.
    fn progress(&mut self, attempts: u64);
    /// A grid whose row-0 total hit the configured sample total.
    fn sample(&mut self, grid: &Grid, total: u32);
    fn found(&mut self, attempt: u64, grid: &Grid, sums: &LineSums);
    fn gave_up(&mut self, attempts: u64, totals: &TotalsTracker);
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn progress(&mut self, attempts: u64) {
        (**self).progress(attempts);
    }

    fn sample(&mut self, grid: &Grid, total: u32) {
        (**self).sample(grid, total);
    }

    fn found(&mut self, attempt: u64, grid: &Grid, sums: &LineSums) {
        (**self).found(attempt, grid, sums);
    }

    fn gave_up(&mut self, attempts: u64, totals: &TotalsTracker) {
        (**self).gave_up(attempts, totals);
    }
}

/// Prints to stdout, filtered by message level: a message shows only
/// when its level is at or above the configured threshold, so the
/// default threshold of -1 shows everything.
pub struct ConsoleReporter {
    debug_level: i32,
    show_totals: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new(debug_level: i32, show_totals: bool) -> Self {
        Self {
            debug_level,
            show_totals,
        }
    }

    fn show_msg(&self, msg: &str, level: i32) {
        if level >= self.debug_level {
            print!("{msg}");
        }
    }
}

impl Reporter for ConsoleReporter {
    fn progress(&mut self, _attempts: u64) {
        self.show_msg(".", 1);
    }

    fn sample(&mut self, grid: &Grid, _total: u32) {
        self.show_msg(&format!("{grid}\n"), 1);
    }

    fn found(&mut self, attempt: u64, grid: &Grid, sums: &LineSums) {
        self.show_msg("Found square with totals matching, total values were: ", 1);
        for sum in sums.sums {
            self.show_msg(&format!(" {sum}"), 1);
        }
        self.show_msg("\n", 1);
        self.show_msg(&format!("Found it on loop {attempt}!\n"), 1);
        self.show_msg(&format!("{grid}\n"), 1);
    }

    fn gave_up(&mut self, attempts: u64, totals: &TotalsTracker) {
        self.show_msg(
            &format!(
                "Loop limit hit without a match, used {} totals and {} loops\n",
                totals.count(),
                attempts
            ),
            1,
        );
        if self.show_totals {
            for total in totals.all() {
                self.show_msg(&format!("{total} "), 1);
            }
            self.show_msg("\n", 1);
        }
    }
}

/// No-op reporter for silent runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn progress(&mut self, _attempts: u64) {}
    fn sample(&mut self, _grid: &Grid, _total: u32) {}
    fn found(&mut self, _attempt: u64, _grid: &Grid, _sums: &LineSums) {}
    fn gave_up(&mut self, _attempts: u64, _totals: &TotalsTracker) {}
}
