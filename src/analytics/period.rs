//! Filtering and reduction of dated records over an inclusive date window.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Anything that falls on a calendar date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Inclusive `[start, end]` window; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl PeriodWindow {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// `n` calendar days ending on `end`, inclusive.
    pub fn trailing_days(end: NaiveDate, n: u32) -> Self {
        let back = i64::from(n.max(1)) - 1;
        Self::between(end - Duration::days(back), end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }

    /// Span used as the averaging divisor: whole days from start to end, at least 1.
    /// An open bound yields 1.
    pub fn days(&self) -> i64 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (end - start).num_days().max(1),
            _ => 1,
        }
    }
}

/// The records inside a window and the sum of one measure over them.
#[derive(Debug, Clone)]
pub struct PeriodAggregate<'a, T> {
    pub filtered: Vec<&'a T>,
    pub total: Decimal,
    pub count: usize,
}

/// One point of a chronological series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Records whose date lies in `window`, in input order.
pub fn within<'a, T: Dated>(records: &'a [T], window: &PeriodWindow) -> Vec<&'a T> {
    records.iter().filter(|r| window.contains(r.date())).collect()
}

pub fn aggregate<'a, T, F>(records: &'a [T], window: &PeriodWindow, measure: F) -> PeriodAggregate<'a, T>
where
    T: Dated,
    F: Fn(&T) -> Decimal,
{
    let filtered = within(records, window);
    let total = sum(filtered.iter().copied(), &measure);
    let count = filtered.len();
    PeriodAggregate {
        filtered,
        total,
        count,
    }
}

/// Saturates at the `Decimal` bounds instead of overflowing.
pub fn sum<'a, T: 'a, I, F>(records: I, measure: F) -> Decimal
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Decimal,
{
    records
        .into_iter()
        .fold(Decimal::ZERO, |total, record| total.saturating_add(measure(record)))
}

/// Totals per distinct key.
pub fn group_by_key<'a, T: 'a, I, K, KF, MF>(records: I, key: KF, measure: MF) -> BTreeMap<K, Decimal>
where
    I: IntoIterator<Item = &'a T>,
    K: Ord,
    KF: Fn(&T) -> K,
    MF: Fn(&T) -> Decimal,
{
    let mut totals = BTreeMap::new();
    for record in records {
        let total = totals.entry(key(record)).or_insert(Decimal::ZERO);
        *total = total.saturating_add(measure(record));
    }
    totals
}

/// Totals per date, strictly ascending.
pub fn group_by_date<'a, T, I, F>(records: I, measure: F) -> Vec<DatePoint>
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Decimal,
{
    group_by_key(records, |r: &T| r.date(), measure)
        .into_iter()
        .map(|(date, value)| DatePoint { date, value })
        .collect()
}

pub fn average_per_day(total: Decimal, window: &PeriodWindow) -> Decimal {
    total / Decimal::from(window.days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[derive(Debug, Clone)]
    struct Entry {
        date: NaiveDate,
        kind: &'static str,
        amount: Decimal,
    }

    impl Dated for Entry {
        fn date(&self) -> NaiveDate {
            self.date
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { date: d(2024, 11, 23), kind: "feed", amount: dec!(2500) },
            Entry { date: d(2024, 11, 10), kind: "electricity", amount: dec!(3500) },
            Entry { date: d(2024, 11, 23), kind: "feed", amount: dec!(150.5) },
            Entry { date: d(2024, 10, 31), kind: "labor", amount: dec!(800) },
        ]
    }

    #[rstest]
    #[case(PeriodWindow::unbounded(), dec!(6950.5), 4)]
    #[case(PeriodWindow::between(d(2024, 11, 1), d(2024, 11, 30)), dec!(6150.5), 3)]
    #[case(PeriodWindow::new(Some(d(2024, 11, 11)), None), dec!(2650.5), 2)]
    #[case(PeriodWindow::new(None, d(2024, 11, 10).into()), dec!(4300), 2)]
    #[case(PeriodWindow::between(d(2024, 11, 23), d(2024, 11, 23)), dec!(2650.5), 2)]
    fn aggregate_respects_inclusive_bounds(
        #[case] window: PeriodWindow,
        #[case] total: Decimal,
        #[case] count: usize,
    ) {
        let records = entries();
        let result = aggregate(&records, &window, |e| e.amount);
        assert_eq!(result.total, total);
        assert_eq!(result.count, count);
        assert!(result.filtered.iter().all(|e| window.contains(e.date)));
    }

    #[test]
    fn january_window_keeps_only_january_dates() {
        let records: Vec<Entry> = [d(2024, 1, 1), d(2024, 1, 15), d(2024, 2, 1)]
            .into_iter()
            .map(|date| Entry { date, kind: "milk", amount: dec!(1) })
            .collect();
        let window = PeriodWindow::between(d(2024, 1, 1), d(2024, 1, 31));
        let result = aggregate(&records, &window, |e| e.amount);
        assert_eq!(
            result.filtered.iter().map(|e| e.date).collect::<Vec<_>>(),
            vec![d(2024, 1, 1), d(2024, 1, 15)]
        );
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let records = vec![
            Entry { date: d(2024, 11, 1), kind: "feed", amount: Decimal::MAX },
            Entry { date: d(2024, 11, 2), kind: "feed", amount: Decimal::MAX },
        ];
        let result = aggregate(&records, &PeriodWindow::unbounded(), |e| e.amount);
        assert_eq!(result.total, Decimal::MAX);
        assert_eq!(group_by_key(&records, |e| e.kind, |e| e.amount)["feed"], Decimal::MAX);
    }

    #[test]
    fn empty_window_sums_to_zero() {
        let records = entries();
        let window = PeriodWindow::between(d(2023, 1, 1), d(2023, 1, 31));
        let result = aggregate(&records, &window, |e| e.amount);
        assert!(result.filtered.is_empty());
        assert_eq!(result.total, Decimal::ZERO);

        let none: Vec<Entry> = Vec::new();
        assert_eq!(aggregate(&none, &PeriodWindow::unbounded(), |e| e.amount).total, Decimal::ZERO);
    }

    #[rstest]
    #[case(PeriodWindow::between(d(2024, 11, 1), d(2024, 11, 30)), 29)]
    #[case(PeriodWindow::between(d(2024, 11, 23), d(2024, 11, 23)), 1)]
    #[case(PeriodWindow::between(d(2024, 11, 30), d(2024, 11, 1)), 1)]
    #[case(PeriodWindow::new(Some(d(2024, 11, 1)), None), 1)]
    #[case(PeriodWindow::unbounded(), 1)]
    fn days_never_drops_below_one(#[case] window: PeriodWindow, #[case] days: i64) {
        assert_eq!(window.days(), days);
    }

    #[test]
    fn average_per_day_divides_by_span() {
        let window = PeriodWindow::between(d(2024, 11, 1), d(2024, 11, 11));
        assert_eq!(average_per_day(dec!(150), &window), dec!(15));
        // Same-day window must not divide by zero
        let same_day = PeriodWindow::between(d(2024, 11, 1), d(2024, 11, 1));
        assert_eq!(average_per_day(dec!(150), &same_day), dec!(150));
    }

    #[test]
    fn group_by_key_has_one_entry_per_key() {
        let records = entries();
        let totals = group_by_key(&records, |e| e.kind, |e| e.amount);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals["feed"], dec!(2650.5));
        assert_eq!(totals["labor"], dec!(800));
    }

    #[test]
    fn group_by_date_is_strictly_ascending() {
        let records = entries();
        let series = group_by_date(&records, |e| e.amount);
        assert_eq!(
            series.iter().map(|p| p.date).collect::<Vec<_>>(),
            vec![d(2024, 10, 31), d(2024, 11, 10), d(2024, 11, 23)]
        );
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(series[2].value, dec!(2650.5));
    }

    #[test]
    fn trailing_days_is_inclusive_of_end() {
        let window = PeriodWindow::trailing_days(d(2024, 11, 23), 7);
        assert_eq!(window.start, Some(d(2024, 11, 17)));
        assert_eq!(window.end, Some(d(2024, 11, 23)));
        assert_eq!(PeriodWindow::trailing_days(d(2024, 11, 23), 1).start, Some(d(2024, 11, 23)));
    }
}
