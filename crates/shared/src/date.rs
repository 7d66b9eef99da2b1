use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: impl AsRef<str>) -> crate::Result<Date> {
    let value = value.as_ref().trim();

    Date::parse(value, ISO_DATE)
        .map_err(|e| crate::Error::User(format!("invalid date {value}: {e}")))
}

/// Formats a date as the `YYYY-MM-DD` key used by the meal plan table.
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// Monday of the week containing `date`.
pub fn week_start_of(date: Date) -> Date {
    let offset = date.weekday().number_days_from_monday();

    date.saturating_sub(Duration::days(offset.into()))
}

/// Last day of the 7 day window beginning at `start`.
pub fn week_end_of(start: Date) -> Date {
    start.saturating_add(Duration::days(6))
}

pub fn week_days(start: Date) -> [Date; 7] {
    std::array::from_fn(|i| start.saturating_add(Duration::days(i as i64)))
}
