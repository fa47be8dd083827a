//! Season and episode ranges.

/// An inclusive `begin..=end` range of season or episode numbers.
///
/// `end` is only ever set when `begin` is set and strictly smaller, so the
/// total derived from the pair is never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberRange {
    begin: Option<u32>,
    end: Option<u32>,
}

impl NumberRange {
    /// First number of the range.
    pub fn begin(&self) -> Option<u32> {
        self.begin
    }

    /// Last number of the range, when it spans more than one unit.
    pub fn end(&self) -> Option<u32> {
        self.end
    }

    /// Number of units covered: `end - begin + 1`, `1` with only a begin,
    /// `0` when empty.
    pub fn total(&self) -> u32 {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => end - begin + 1,
            (Some(_), None) => 1,
            _ => 0,
        }
    }

    /// Whether no number has been recorded.
    pub fn is_empty(&self) -> bool {
        self.begin.is_none()
    }

    /// Start over at `begin`. Zero means "unknown" in release names and is
    /// not recorded.
    pub(crate) fn start(&mut self, begin: u32) {
        if begin > 0 {
            self.begin = Some(begin);
            self.end = None;
        }
    }

    /// Extend the range up to `end`. Ignored unless `end` lies past `begin`.
    pub(crate) fn extend_to(&mut self, end: u32) -> bool {
        match self.begin {
            Some(begin) if end > begin => {
                self.end = Some(end);
                true
            }
            _ => false,
        }
    }

    /// Record `n`: the first number starts the range, a later larger one
    /// extends it.
    pub(crate) fn record(&mut self, n: u32) {
        if self.begin.is_none() {
            self.start(n);
        } else {
            self.extend_to(n);
        }
    }

    /// Drop the end of the range when it covers more than `max` units.
    pub(crate) fn collapse_above(&mut self, max: u32) {
        if self.total() > max {
            self.end = None;
        }
    }

    /// Set the range to `1..=count`.
    pub(crate) fn set_count(&mut self, count: u32) {
        if count > 0 {
            self.start(1);
            self.extend_to(count);
        }
    }
}
