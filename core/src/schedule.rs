// SPDX-FileCopyrightText: 2026 Aura contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

/// The ordered sequence of check-in dates between a task's start and end date.
///
/// Non-empty and strictly increasing by construction: the first entry is the
/// task's start date and the last is its end date, unless the span is empty,
/// in which case the schedule collapses to the single start date. Early
/// entries are dense and later ones increasingly spaced, so attention is
/// front-loaded while the task is fresh.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Date>", into = "Vec<Date>")]
pub struct AuraSchedule(Vec<Date>);

impl AuraSchedule {
    /// Generates the schedule for the given span.
    ///
    /// The step between entries starts at one day and grows under a
    /// duration-tiered policy: short spans cap the gap at three days, longer
    /// spans let it grow faster and cap it at a fraction of the total span.
    /// The end date is always the final entry when the span is positive.
    pub fn generate(start: Date, end: Date) -> Self {
        let total_days = start.until(end).map_or(0, |span| span.get_days());
        if total_days <= 0 {
            return Self(vec![start]);
        }

        let mut dates = vec![start];
        let mut current = start;
        let mut gap: i32 = 1;
        while current < end {
            let next = current.saturating_add((gap as i64).days());
            if next >= end {
                if dates.last() != Some(&end) {
                    dates.push(end);
                }
                break;
            }

            dates.push(next);
            current = next;

            gap = if total_days <= 10 {
                (gap + 1).min(3)
            } else if total_days <= 30 {
                (gap + 1).min(total_days / 5)
            } else {
                (gap + 2).min(total_days / 4)
            };
        }

        Self(dates)
    }

    /// The first scheduled date, i.e. the task's start date.
    pub fn first(&self) -> Date {
        match self.0.first() {
            Some(date) => *date,
            None => unreachable!("schedule is non-empty by construction"),
        }
    }

    /// The last scheduled date, i.e. the task's end date.
    pub fn last(&self) -> Date {
        match self.0.last() {
            Some(date) => *date,
            None => unreachable!("schedule is non-empty by construction"),
        }
    }

    /// The number of scheduled dates, at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The scheduled dates in order.
    pub fn dates(&self) -> &[Date] {
        &self.0
    }

    /// Iterates over the scheduled dates in order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }

    /// The entry immediately after the given date, if any.
    pub fn next_after(&self, date: Date) -> Option<Date> {
        self.0.iter().copied().find(|&entry| entry > date)
    }
}

impl TryFrom<Vec<Date>> for AuraSchedule {
    type Error = &'static str;

    fn try_from(dates: Vec<Date>) -> Result<Self, Self::Error> {
        if dates.is_empty() {
            return Err("schedule must not be empty");
        }
        if dates.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("schedule dates must be strictly increasing");
        }
        Ok(Self(dates))
    }
}

impl From<AuraSchedule> for Vec<Date> {
    fn from(schedule: AuraSchedule) -> Self {
        schedule.0
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn collapses_to_single_date_when_span_is_empty() {
        let d = date(2024, 1, 1);
        assert_eq!(AuraSchedule::generate(d, d).dates(), &[d]);
    }

    #[test]
    fn collapses_to_single_date_when_end_before_start() {
        let d = date(2024, 1, 1);
        assert_eq!(AuraSchedule::generate(d, date(2023, 12, 31)).dates(), &[d]);
    }

    #[test]
    fn one_day_span_has_exactly_both_endpoints() {
        let schedule = AuraSchedule::generate(date(2024, 1, 1), date(2024, 1, 2));
        assert_eq!(schedule.dates(), &[date(2024, 1, 1), date(2024, 1, 2)]);
    }

    #[test]
    fn ten_day_span_matches_known_sequence() {
        // Gaps 1, 2, 3, 3, then the overshooting step is replaced by the end.
        let schedule = AuraSchedule::generate(date(2024, 1, 1), date(2024, 1, 11));
        assert_eq!(
            schedule.dates(),
            &[
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 4),
                date(2024, 1, 7),
                date(2024, 1, 10),
                date(2024, 1, 11),
            ]
        );
    }

    #[test]
    fn short_span_gaps_grow_by_one_capped_at_three() {
        let schedule = AuraSchedule::generate(date(2024, 1, 1), date(2024, 1, 9));
        assert_eq!(
            schedule.dates(),
            &[
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 4),
                date(2024, 1, 7),
                date(2024, 1, 9),
            ]
        );
    }

    #[test]
    fn long_span_gaps_grow_by_two_capped_at_quarter_span() {
        // 100-day span: gaps 1, 3, 5, ... capped at 25.
        let start = date(2024, 1, 1);
        let end = date(2024, 4, 10);
        let schedule = AuraSchedule::generate(start, end);

        assert_eq!(schedule.first(), start);
        assert_eq!(schedule.last(), end);

        let gaps: Vec<i32> = schedule
            .dates()
            .windows(2)
            .map(|pair| pair[0].until(pair[1]).unwrap().get_days())
            .collect();
        assert!(gaps.iter().all(|&gap| gap > 0 && gap <= 25));
        // Interior gaps grow by exactly two; only the final step may shrink
        // to land on the end date.
        for pair in gaps[..gaps.len() - 1].windows(2) {
            assert_eq!(pair[1] - pair[0], 2);
        }
    }

    #[test]
    fn long_span_exact_dates() {
        let schedule = AuraSchedule::generate(date(2024, 1, 1), date(2024, 4, 10));
        assert_eq!(
            schedule.dates(),
            &[
                date(2024, 1, 1),
                date(2024, 1, 2),
                date(2024, 1, 5),
                date(2024, 1, 10),
                date(2024, 1, 17),
                date(2024, 1, 26),
                date(2024, 2, 6),
                date(2024, 2, 19),
                date(2024, 3, 5),
                date(2024, 3, 22),
                date(2024, 4, 10),
            ]
        );
    }

    #[test]
    fn always_starts_and_ends_on_the_span_endpoints() {
        let start = date(2024, 3, 15);
        for days in 1..200 {
            let end = start.saturating_add(jiff::Span::new().days(days));
            let schedule = AuraSchedule::generate(start, end);
            assert_eq!(schedule.first(), start, "days = {days}");
            assert_eq!(schedule.last(), end, "days = {days}");
            assert!(
                schedule.dates().windows(2).all(|pair| pair[0] < pair[1]),
                "days = {days}"
            );
        }
    }

    #[test]
    fn next_after_returns_following_entry() {
        let schedule = AuraSchedule::generate(date(2024, 1, 1), date(2024, 1, 11));
        assert_eq!(schedule.next_after(date(2024, 1, 1)), Some(date(2024, 1, 2)));
        assert_eq!(schedule.next_after(date(2024, 1, 5)), Some(date(2024, 1, 7)));
        assert_eq!(schedule.next_after(date(2024, 1, 11)), None);
    }

    #[test]
    fn rejects_empty_and_unordered_sequences() {
        assert!(AuraSchedule::try_from(Vec::new()).is_err());
        assert!(AuraSchedule::try_from(vec![date(2024, 1, 2), date(2024, 1, 1)]).is_err());
        assert!(AuraSchedule::try_from(vec![date(2024, 1, 1), date(2024, 1, 1)]).is_err());
        assert!(AuraSchedule::try_from(vec![date(2024, 1, 1), date(2024, 1, 3)]).is_ok());
    }

    #[test]
    fn serde_round_trip_preserves_dates() {
        let schedule = AuraSchedule::generate(date(2024, 1, 1), date(2024, 1, 11));
        let json = serde_json::to_string(&schedule).unwrap();
        let parsed: AuraSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schedule);
    }

    #[test]
    fn serde_rejects_empty_sequence() {
        assert!(serde_json::from_str::<AuraSchedule>("[]").is_err());
    }
}
