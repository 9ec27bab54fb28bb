use rand::Rng;

use crate::grid::DigitSeq;

/// Where the search loop gets its candidate sequences. The real source
/// draws from an RNG; tests substitute rigged ones.
pub trait DigitSource {
    fn next_digits(&mut self) -> DigitSeq;
}

/// Rejection-sampling permutation generator over the digits 1-9.
///
/// With `layton_seed` set, position 0 is pinned to 2 and position 7 to
/// 1 before the rest is randomized (the partial square from the
/// Professor Layton puzzle).
pub struct RandomDigits<R> {
    rng: R,
    layton_seed: bool,
}

impl<R: Rng> RandomDigits<R> {
    #[must_use]
    pub const fn new(rng: R, layton_seed: bool) -> Self {
        Self { rng, layton_seed }
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digits(&mut self) -> DigitSeq {
        let mut seq: DigitSeq = [0; 9];
        if self.layton_seed {
            seq[0] = 2;
            seq[7] = 1;
        }

        for i in 0..seq.len() {
            if seq[i] != 0 {
                continue;
            }
            // The candidate space shrinks with every placed digit, so
            // the retry loop terminates with probability 1; no cap.
            loop {
                let draw: u8 = self.rng.gen_range(1..=9);
                if !seq.contains(&draw) {
                    seq[i] = draw;
                    break;
                }
            }
        }

        seq
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_permutation(seq: DigitSeq) {
        let mut sorted = seq;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn generates_permutations_of_one_through_nine() {
        let mut source = RandomDigits::new(StdRng::seed_from_u64(42), false);
        for _ in 0..1_000 {
            assert_permutation(source.next_digits());
        }
    }

    #[test]
    fn layton_seed_pins_both_positions() {
        let mut source = RandomDigits::new(StdRng::seed_from_u64(7), true);
        for _ in 0..1_000 {
            let seq = source.next_digits();
            assert_eq!(seq[0], 2);
            assert_eq!(seq[7], 1);
            assert_permutation(seq);
        }
    }
}
