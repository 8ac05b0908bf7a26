use std::collections::HashMap;

use chrono::NaiveDate;

/// Per-student calendar: one entry per date, `true` meaning present.
#[derive(Debug, Default, Clone)]
pub struct AttendanceRecord {
    days: HashMap<NaiveDate, bool>,
}

impl AttendanceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `date` present. Recording the same date twice keeps one entry.
    pub fn record_presence(&mut self, date: NaiveDate) {
        self.days.insert(date, true);
    }

    /// Percentage of recorded dates marked present, or 0 for an empty record.
    ///
    /// The denominator is the number of recorded dates, not calendar days.
    pub fn percentage(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }

        let present = self.days.values().filter(|present| **present).count();
        (present as f64 * 100.0) / self.days.len() as f64
    }

    /// Recorded `(date, present)` pairs in unspecified order.
    pub fn detail(&self) -> impl Iterator<Item = (NaiveDate, bool)> + Clone + '_ {
        self.days.iter().map(|(date, present)| (*date, *present))
    }

    #[cfg(test)]
    pub(crate) fn record_absence(&mut self, date: NaiveDate) {
        self.days.insert(date, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn empty_record_is_zero_percent() {
        let record = AttendanceRecord::new();
        assert_eq!(record.percentage(), 0.0);
        assert_eq!(record.detail().count(), 0);
    }

    #[test]
    fn recording_same_date_twice_is_idempotent() {
        let mut record = AttendanceRecord::new();
        record.record_presence(day(1));
        record.record_presence(day(1));

        assert_eq!(record.detail().collect::<Vec<_>>(), vec![(day(1), true)]);
        assert_eq!(record.percentage(), 100.0);
    }

    #[test]
    fn denominator_counts_recorded_entries_only() {
        let mut record = AttendanceRecord::new();
        record.record_presence(day(1));
        record.record_absence(day(2));
        record.record_presence(day(3));
        record.record_absence(day(4));

        assert_eq!(record.percentage(), 50.0);
    }

    #[test]
    fn percentage_never_drops_while_marking_present() {
        let mut record = AttendanceRecord::new();
        record.record_absence(day(1));

        let mut last = record.percentage();
        for d in 2..10 {
            record.record_presence(day(d));
            let now = record.percentage();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn detail_can_be_walked_more_than_once() {
        let mut record = AttendanceRecord::new();
        record.record_presence(day(5));
        record.record_absence(day(6));

        let detail = record.detail();
        let mut first: Vec<_> = detail.clone().collect();
        let mut second: Vec<_> = detail.collect();
        first.sort();
        second.sort();

        assert_eq!(first, vec![(day(5), true), (day(6), false)]);
        assert_eq!(first, second);
    }
}
