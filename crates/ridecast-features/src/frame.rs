//! Sorted time-series frame.

use ridecast_core::types::{LocationId, PickupHour, TsRecord};

/// A time-series table sorted by `(location, hour)` with unique keys.
///
/// Construction normalizes whatever the store returned: rows are sorted,
/// and duplicate `(location, hour)` keys collapse to the last occurrence
/// (upsert semantics). All windowing runs against this frame, so the
/// transform itself never re-checks ordering.
#[derive(Debug, Clone, Default)]
pub struct TsFrame {
    records: Vec<TsRecord>,
}

impl TsFrame {
    /// Build a frame from raw records, sorting and deduplicating by key
    #[must_use]
    pub fn from_records(mut records: Vec<TsRecord>) -> Self {
        records.sort_by_key(TsRecord::key);
        // Last write wins for duplicate keys.
        records.reverse();
        records.dedup_by_key(|r| r.key());
        records.reverse();
        Self { records }
    }

    /// Keep only rows with `start <= hour <= end`
    #[must_use]
    pub fn filter_between(mut self, start: PickupHour, end: PickupHour) -> Self {
        self.records.retain(|r| r.hour >= start && r.hour <= end);
        self
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the frame has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows, sorted by `(location, hour)`
    #[must_use]
    pub fn records(&self) -> &[TsRecord] {
        &self.records
    }

    /// Iterate per-location contiguous slices, location ascending
    pub fn locations(&self) -> LocationSlices<'_> {
        LocationSlices {
            remaining: &self.records,
        }
    }

    /// Number of distinct locations
    #[must_use]
    pub fn num_locations(&self) -> usize {
        self.locations().count()
    }

    /// Count missing hours across all locations.
    ///
    /// A location spanning H hours with fewer than H rows has gaps; the
    /// windowing transform slides positionally over them, which misaligns
    /// features, so callers log when this is non-zero.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        let mut gaps = 0usize;
        for series in self.locations() {
            let first = series[0].hour;
            let last = series[series.len() - 1].hour;
            let span = usize::try_from(last.hours_since(first) + 1).unwrap_or(0);
            gaps += span.saturating_sub(series.len());
        }
        gaps
    }
}

/// Iterator over per-location slices of a frame
pub struct LocationSlices<'a> {
    remaining: &'a [TsRecord],
}

impl<'a> Iterator for LocationSlices<'a> {
    type Item = &'a [TsRecord];

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.remaining.first()?;
        let location: LocationId = first.location;
        let end = self
            .remaining
            .iter()
            .position(|r| r.location != location)
            .unwrap_or(self.remaining.len());
        let (head, tail) = self.remaining.split_at(end);
        self.remaining = tail;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridecast_core::types::LocationId;

    fn rec(loc: u32, hour: i64, rides: u32) -> TsRecord {
        TsRecord::new(LocationId::new(loc), PickupHour::from_hours(hour), rides)
    }

    #[test]
    fn test_sorting_and_dedup() {
        let frame = TsFrame::from_records(vec![
            rec(2, 11, 5),
            rec(1, 10, 1),
            rec(1, 12, 3),
            rec(1, 11, 2),
            rec(1, 11, 9), // later duplicate wins
        ]);

        let rows = frame.records();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].rides, 9);
        assert!(rows.windows(2).all(|w| w[0].key() < w[1].key()));
    }

    #[test]
    fn test_filter_between_inclusive() {
        let frame = TsFrame::from_records(vec![rec(1, 9, 1), rec(1, 10, 2), rec(1, 11, 3)])
            .filter_between(PickupHour::from_hours(10), PickupHour::from_hours(11));

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.records()[0].hour.as_hours(), 10);
    }

    #[test]
    fn test_location_slices() {
        let frame = TsFrame::from_records(vec![
            rec(3, 10, 1),
            rec(1, 10, 1),
            rec(1, 11, 1),
            rec(3, 11, 1),
            rec(3, 12, 1),
        ]);

        let lens: Vec<usize> = frame.locations().map(<[TsRecord]>::len).collect();
        assert_eq!(lens, vec![2, 3]);
        assert_eq!(frame.num_locations(), 2);
    }

    #[test]
    fn test_gap_count() {
        // location 1 is contiguous, location 2 misses hour 11
        let frame = TsFrame::from_records(vec![
            rec(1, 10, 1),
            rec(1, 11, 1),
            rec(2, 10, 1),
            rec(2, 12, 1),
        ]);
        assert_eq!(frame.gap_count(), 1);
    }

    #[test]
    fn test_empty_frame() {
        let frame = TsFrame::from_records(Vec::new());
        assert!(frame.is_empty());
        assert_eq!(frame.num_locations(), 0);
        assert_eq!(frame.gap_count(), 0);
    }
}
