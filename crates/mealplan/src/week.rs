use nutriplan_shared::{format_date, week_days, week_end_of, week_start_of};
use time::{Date, Duration, OffsetDateTime};

/// A seven day window, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: Date,
    pub end: Date,
}

impl Week {
    /// Seven days beginning at `start`, whatever weekday it is.
    pub fn starting(start: Date) -> Self {
        Self {
            start,
            end: week_end_of(start),
        }
    }

    /// The week containing `date`.
    pub fn of(date: Date) -> Self {
        Self::starting(week_start_of(date))
    }

    pub fn current() -> Self {
        Self::of(OffsetDateTime::now_utc().date())
    }

    pub fn previous(&self) -> Self {
        Self::starting(self.start.saturating_sub(Duration::weeks(1)))
    }

    pub fn next(&self) -> Self {
        Self::starting(self.start.saturating_add(Duration::weeks(1)))
    }

    pub fn days(&self) -> [Date; 7] {
        week_days(self.start)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn label(&self) -> String {
        format!("{} .. {}", format_date(self.start), format_date(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_week_of_monday() {
        let week = Week::of(date!(2025 - 01 - 20));

        assert_eq!(
            week,
            Week {
                start: date!(2025 - 01 - 20),
                end: date!(2025 - 01 - 26),
            }
        );
    }

    #[test]
    fn test_week_of_wednesday() {
        let week = Week::of(date!(2025 - 01 - 22));

        assert_eq!(week.start, date!(2025 - 01 - 20));
        assert_eq!(week.end, date!(2025 - 01 - 26));
    }

    #[test]
    fn test_week_of_sunday() {
        let week = Week::of(date!(2025 - 01 - 26));

        assert_eq!(week.start, date!(2025 - 01 - 20));
        assert!(week.contains(date!(2025 - 01 - 26)));
        assert!(!week.contains(date!(2025 - 01 - 27)));
    }

    #[test]
    fn test_previous_and_next_cross_year() {
        let week = Week::of(date!(2025 - 01 - 01));

        assert_eq!(week.start, date!(2024 - 12 - 30));
        assert_eq!(week.previous().start, date!(2024 - 12 - 23));
        assert_eq!(week.next().start, date!(2025 - 01 - 06));
        assert_eq!(week.next().previous(), week);
    }

    #[test]
    fn test_starting_keeps_start_day() {
        let week = Week::starting(date!(2024 - 01 - 03));

        assert_eq!(week.days()[6], date!(2024 - 01 - 09));
        assert_eq!(week.label(), "2024-01-03 .. 2024-01-09");
    }
}
