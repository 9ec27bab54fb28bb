#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]

use std::fmt;

/// A full draw of the digits 1-9, in fill order.
pub type DigitSeq = [u8; 9];

/// 3 rows, 3 columns, 2 diagonals.
pub const LINE_COUNT: usize = 8;

/// A 3x3 square of digits, stored row-major. `from_digits` places
/// sequence element `i` in row `i / 3`, column `i % 3`; the sum
/// evaluation below iterates with the same convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid(pub [[u8; 3]; 3]);

/// The eight line sums of one candidate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSums {
    /// Fixed order: `[row0, row1, row2, col0, col1, col2, diag TL-BR, diag BL-TR]`.
    pub sums: [u32; LINE_COUNT],
    /// Sum of row 0, the reference every other line is checked against
    /// and the "total" recorded per attempt.
    pub target: u32,
    pub all_match: bool,
}

impl Grid {
    #[must_use]
    pub fn from_digits(digits: DigitSeq) -> Self {
        let mut cells = [[0_u8; 3]; 3];
        for (i, digit) in digits.into_iter().enumerate() {
            cells[i / 3][i % 3] = digit;
        }
        Self(cells)
    }

    /// Computes all eight line sums. A mismatch never cuts the scan
    /// short: the full set of sums stays available for display.
    #[must_use]
    pub fn line_sums(&self) -> LineSums {
        let rows = &self.0;
        let mut sums = [0_u32; LINE_COUNT];

        let target: u32 = rows[0].iter().copied().map(u32::from).sum();
        sums[0] = target;

        for y in 1..3 {
            sums[y] = rows[y].iter().copied().map(u32::from).sum();
        }
        for x in 0..3 {
            sums[3 + x] = (0..3).map(|y| u32::from(rows[y][x])).sum();
        }
        sums[6] = (0..3).map(|i| u32::from(rows[i][i])).sum();
        sums[7] = (0..3).map(|i| u32::from(rows[2 - i][i])).sum();

        let all_match = sums.iter().all(|&sum| sum == target);
        LineSums {
            sums,
            target,
            all_match,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, " -----")?;
        for row in &self.0 {
            for cell in row {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, " -----")
    }
}
