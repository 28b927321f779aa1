//! Windowing of interesting positions into context-padded hunks
//!
//! `HunkGatherer` consumes an ascending stream of positions (changed line
//! numbers) and widens every position into a window of surrounding
//! positions. Windows that overlap or touch are merged into one block, and a
//! `Gathered::Separator` is emitted before each block so the consumer can
//! tell where one hunk ends and the next one starts.
//!
//! ```
//! use linediff::{Gathered, GatherHunks};
//!
//! let gathered = vec![1, 11]
//!     .into_iter()
//!     .gather_hunks(1, 13)
//!     .unwrap()
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(
//!     gathered,
//!     vec![
//!         Gathered::Separator,
//!         Gathered::Position(0),
//!         Gathered::Position(1),
//!         Gathered::Position(2),
//!         Gathered::Separator,
//!         Gathered::Position(10),
//!         Gathered::Position(11),
//!         Gathered::Position(12),
//!     ]
//! );
//! ```

use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gathered {
    /// Start of a new, non-adjacent block
    Separator,
    Position(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    before: usize,
    after: usize,
    upper: usize,
}

impl Window {
    /// Inclusive bounds of the window around `position`, clamped into `0..upper`
    fn around(&self, position: usize) -> (usize, usize) {
        let hi = position.saturating_add(self.after).min(self.upper - 1);
        let lo = position.saturating_sub(self.before).min(hi);
        (lo, hi)
    }
}

/// Single pass, forward only windowing adaptor over ascending positions
#[derive(Debug, Clone)]
pub struct HunkGatherer<I> {
    positions: I,
    window: Option<Window>,
    hi: Option<usize>,
    separator_pending: bool,
    pending: RangeInclusive<usize>,
}

impl<I> HunkGatherer<I>
where
    I: Iterator<Item = usize>,
{
    /// Passes positions through untouched, without windows or separators
    pub fn passthrough(positions: I) -> Self {
        HunkGatherer {
            positions,
            window: None,
            hi: None,
            separator_pending: false,
            pending: empty_range(),
        }
    }

    /// Widens each position by `radius_before` and `radius_after`, bounded by
    /// `upper_bound` (exclusive), merging overlapping or adjacent windows
    pub fn windowed(
        positions: I,
        radius_before: isize,
        radius_after: isize,
        upper_bound: usize,
    ) -> anyhow::Result<Self> {
        if radius_before < 0 || radius_after < 0 {
            anyhow::bail!(
                "hunk radius must not be negative, got {} before and {} after",
                radius_before,
                radius_after
            );
        }
        if upper_bound == 0 {
            anyhow::bail!("hunk upper bound must be positive");
        }

        Ok(HunkGatherer {
            positions,
            window: Some(Window {
                before: radius_before as usize,
                after: radius_after as usize,
                upper: upper_bound,
            }),
            hi: None,
            separator_pending: false,
            pending: empty_range(),
        })
    }
}

fn empty_range() -> RangeInclusive<usize> {
    1..=0
}

impl<I> Iterator for HunkGatherer<I>
where
    I: Iterator<Item = usize>,
{
    type Item = Gathered;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.separator_pending {
                self.separator_pending = false;
                return Some(Gathered::Separator);
            }
            if let Some(position) = self.pending.next() {
                return Some(Gathered::Position(position));
            }

            let position = self.positions.next()?;
            let Some(window) = self.window else {
                return Some(Gathered::Position(position));
            };

            let (lo, hi) = window.around(position);
            match self.hi {
                Some(open_hi) if lo <= open_hi + 1 => {
                    if hi > open_hi {
                        self.pending = open_hi + 1..=hi;
                        self.hi = Some(hi);
                    }
                }
                _ => {
                    debug_log!("hunk gatherer: window {}..={} around {}", lo, hi, position);
                    self.separator_pending = true;
                    self.pending = lo..=hi;
                    self.hi = Some(hi);
                }
            }
        }
    }
}

/// `gather_hunks` on any iterator of positions
pub trait GatherHunks: Iterator<Item = usize> + Sized {
    /// Symmetric windows of `radius` positions, bounded by `upper_bound`
    fn gather_hunks(self, radius: isize, upper_bound: usize) -> anyhow::Result<HunkGatherer<Self>> {
        HunkGatherer::windowed(self, radius, radius, upper_bound)
    }
}

impl<I: Iterator<Item = usize>> GatherHunks for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Renders the stream as `|0 1 2|10 11 12` for readable expectations
    fn render(gatherer: impl Iterator<Item = Gathered>) -> String {
        gatherer
            .map(|gathered| match gathered {
                Gathered::Separator => "|".to_string(),
                Gathered::Position(p) => format!("{p} "),
            })
            .collect::<String>()
            .replace(" |", "|")
            .trim_end()
            .to_string()
    }

    #[rstest]
    #[case::single(vec![5], 2, 20, "|3 4 5 6 7")]
    #[case::clamped_low(vec![0], 3, 20, "|0 1 2 3")]
    #[case::clamped_high(vec![9], 3, 10, "|6 7 8 9")]
    #[case::overlapping(vec![2, 4], 2, 20, "|0 1 2 3 4 5 6")]
    #[case::adjacent(vec![2, 7], 2, 20, "|0 1 2 3 4 5 6 7 8 9")]
    #[case::gap(vec![2, 8], 2, 20, "|0 1 2 3 4|6 7 8 9 10")]
    #[case::zero_radius(vec![1, 2, 4], 0, 20, "|1 2|4")]
    #[case::repeated(vec![3, 3, 3], 1, 20, "|2 3 4")]
    #[case::empty(vec![], 3, 20, "")]
    fn windows_are_merged_when_they_touch(
        #[case] positions: Vec<usize>,
        #[case] radius: isize,
        #[case] upper: usize,
        #[case] expected: &str,
    ) {
        let gatherer = positions.into_iter().gather_hunks(radius, upper).unwrap();

        assert_eq!(render(gatherer), expected);
    }

    #[test]
    fn asymmetric_radius_widens_each_side_independently() {
        let gatherer = HunkGatherer::windowed(vec![5, 9].into_iter(), 1, 0, 20).unwrap();

        assert_eq!(render(gatherer), "|4 5|8 9");
    }

    #[test]
    fn passthrough_keeps_positions_as_they_are() {
        let gathered = HunkGatherer::passthrough(vec![1, 11, 12].into_iter()).collect::<Vec<_>>();

        assert_eq!(
            gathered,
            vec![
                Gathered::Position(1),
                Gathered::Position(11),
                Gathered::Position(12)
            ]
        );
    }

    #[test]
    fn output_is_produced_lazily() {
        let mut gatherer = (0..).step_by(100).gather_hunks(1, usize::MAX).unwrap();

        assert_eq!(gatherer.next(), Some(Gathered::Separator));
        assert_eq!(gatherer.next(), Some(Gathered::Position(0)));
        assert_eq!(gatherer.next(), Some(Gathered::Position(1)));
        assert_eq!(gatherer.next(), Some(Gathered::Separator));
        assert_eq!(gatherer.next(), Some(Gathered::Position(99)));
    }

    #[rstest]
    #[case(-1, 10)]
    #[case(3, 0)]
    fn invalid_windows_are_rejected(#[case] radius: isize, #[case] upper: usize) {
        let result = vec![1].into_iter().gather_hunks(radius, upper);

        assert!(result.is_err());
    }
}
