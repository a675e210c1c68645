//! Half-open booking interval

use chrono::{DateTime, Duration, Utc};

use crate::domain::{DomainError, DomainResult};

/// A half-open interval `[start, end)` on the booking timeline.
///
/// The start is inclusive and the end exclusive, so two slots that share an
/// endpoint (one ends at 12:00, the next starts at 12:00) do not overlap.
///
/// # Invariants
/// `start` is always strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a slot, rejecting empty or inverted intervals.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::Validation(format!(
                "startDate ({}) must be before endDate ({})",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns `true` if the two slots share at least one instant.
    ///
    /// `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
    #[inline]
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    fn slot(from: (u32, u32), to: (u32, u32)) -> TimeSlot {
        TimeSlot::new(at(from.0, from.1), at(to.0, to.1)).unwrap()
    }

    #[test]
    fn rejects_inverted_and_empty_slots() {
        assert!(matches!(
            TimeSlot::new(at(12, 0), at(10, 0)),
            Err(DomainError::Validation(_))
        ));
        assert!(TimeSlot::new(at(10, 0), at(10, 0)).is_err());
    }

    #[test]
    fn adjacent_slots_do_not_overlap() {
        let morning = slot((10, 0), (12, 0));
        let noon = slot((12, 0), (14, 0));
        assert!(!morning.overlaps(&noon));
        assert!(!noon.overlaps(&morning));
    }

    #[test]
    fn partial_and_contained_overlaps() {
        let base = slot((10, 0), (12, 0));
        assert!(base.overlaps(&slot((11, 0), (13, 0))));
        assert!(base.overlaps(&slot((9, 0), (10, 30))));
        assert!(base.overlaps(&slot((10, 30), (11, 0))));
        assert!(base.overlaps(&slot((8, 0), (16, 0))));
        assert!(base.overlaps(&base));
        assert!(!base.overlaps(&slot((8, 0), (10, 0))));
    }

    #[test]
    fn overlap_is_symmetric() {
        let slots = [
            slot((8, 0), (9, 0)),
            slot((8, 30), (10, 0)),
            slot((9, 0), (11, 0)),
            slot((10, 0), (10, 15)),
            slot((7, 0), (12, 0)),
        ];
        for a in &slots {
            for b in &slots {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn duration_matches_bounds() {
        assert_eq!(slot((10, 0), (12, 30)).duration(), Duration::minutes(150));
    }
}
