//! Calendar arithmetic: recognized pattern + reference date → absolute date.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::pattern::{OffsetUnit, RecognizedPattern};

/// Resolve a recognized pattern to an absolute calendar date.
///
/// Total — every variant has a well-defined resolution and the function
/// cannot fail:
///
/// - `Today` and `ThisWeek` return the reference unchanged ("this week" is
///   not normalized to a week start).
/// - `LastWeek` is a literal seven-day offset, not "start of previous week".
/// - `NamedWeekdayLastWeek` walks back to the most recent occurrence of the
///   weekday strictly before the reference: on a Monday, "last Monday" is
///   seven days back, never the reference itself.
/// - Month and year offsets clamp the day-of-month to the last valid day of
///   the target month (2024-03-31 minus one month is 2024-02-29).
/// - Offsets that would leave the representable calendar range saturate at
///   its boundary.
pub fn resolve_pattern(pattern: RecognizedPattern, reference: NaiveDate) -> NaiveDate {
    match pattern {
        RecognizedPattern::Today | RecognizedPattern::ThisWeek => reference,
        RecognizedPattern::Yesterday => reference.pred_opt().unwrap_or(NaiveDate::MIN),
        RecognizedPattern::Tomorrow => reference.succ_opt().unwrap_or(NaiveDate::MAX),
        RecognizedPattern::LastWeek => sub_days(reference, 7),
        RecognizedPattern::NamedWeekdayLastWeek(weekday) => {
            let days_back = (reference.weekday().num_days_from_monday() as i64
                - weekday.num_days_from_monday() as i64
                + 7)
                % 7;
            // Same weekday means a full week back, never the reference day.
            let days_back = if days_back == 0 { 7 } else { days_back };
            sub_days(reference, days_back as u64)
        }
        RecognizedPattern::RelativeOffset { amount, unit } => match unit {
            OffsetUnit::Days => sub_days(reference, u64::from(amount)),
            OffsetUnit::Weeks => sub_days(reference, u64::from(amount) * 7),
            OffsetUnit::Months => sub_months(reference, amount),
            OffsetUnit::Years => amount
                .checked_mul(12)
                .map(|months| sub_months(reference, months))
                .unwrap_or(NaiveDate::MIN),
        },
        RecognizedPattern::AbsoluteYear(year) => {
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
        }
        RecognizedPattern::AbsoluteMonthYear { month, year } => {
            NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap_or(NaiveDate::MIN)
        }
    }
}

fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

// ── Tests ───────────────────────────────────────────────────────────────────
