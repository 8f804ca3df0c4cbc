//! Ordered recognizer rules for natural-language temporal references.
//!
//! One rule table drives both classification and span location: each rule is
//! a single case-insensitive regex whose first hit yields the tagged
//! [`RecognizedPattern`] *and* the byte span of the literal phrase. Rules are
//! tried in a fixed priority order and the first hit wins — never the longest
//! or most specific match. Reordering the table changes observable behavior.

use std::ops::Range;
use std::sync::LazyLock;

use chrono::{Month, Weekday};
use regex::Regex;

/// Recognized years must fall within this range; anything else is treated as
/// "no match" for the rule, not as an error.
const YEAR_MIN: i32 = 1900;
const YEAR_MAX: i32 = 2100;

// Compiled rule regexes — allocated once, in priority order.
static TODAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:today|now)\b").unwrap());
static YESTERDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\byesterday\b").unwrap());
static TOMORROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btomorrow\b").unwrap());
static LAST_WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blast\s+week\b").unwrap());
static THIS_WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bthis\s+week\b").unwrap());
static LAST_WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\blast\s+(sunday|monday|tuesday|wednesday|thursday|friday|saturday)\b")
        .unwrap()
});
static RELATIVE_OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s+(day|week|month|year)s?\s+ago\b").unwrap());
static ABSOLUTE_YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:in|during|since)\s+(\d{4})\b").unwrap());
static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:in|during)\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+(\d{4})\b",
    )
    .unwrap()
});

/// Unit of a digit-form relative offset ("3 weeks ago").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// A recognized temporal reference. Carries only the captured values — the
/// literal substring lives in the match span, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizedPattern {
    /// "today" or "now".
    Today,
    /// "yesterday".
    Yesterday,
    /// "tomorrow".
    Tomorrow,
    /// "last week" — a literal seven-day offset, not a week boundary.
    LastWeek,
    /// "this week" — resolves to the reference date itself.
    ThisWeek,
    /// "last <weekday>" — the most recent occurrence strictly before the
    /// reference date.
    NamedWeekdayLastWeek(Weekday),
    /// "<n> <unit>s ago", digits only ("three days ago" never matches).
    RelativeOffset { amount: u32, unit: OffsetUnit },
    /// "(in|during|since) <year>", year within 1900..=2100.
    AbsoluteYear(i32),
    /// "(in|during) <month-name> <year>".
    AbsoluteMonthYear { month: Month, year: i32 },
}

/// A rule hit: the tagged pattern plus the byte span of the literal phrase.
#[derive(Debug, Clone)]
pub(crate) struct PatternMatch {
    pub(crate) pattern: RecognizedPattern,
    pub(crate) span: Range<usize>,
}

/// Classify the first temporal reference in `text`.
///
/// Returns `None` when the text carries no recognizable reference — that is
/// not an error, merely absence of temporal content. Callers must not assume
/// longest- or most-specific-match semantics: "tomorrow, unlike yesterday"
/// classifies as `Yesterday` because that rule sits higher in the table.
pub fn classify(text: &str) -> Option<RecognizedPattern> {
    match_reference(text).map(|hit| hit.pattern)
}

/// Run the rule table against `text` in priority order.
///
/// A rule whose regex matches but whose numeric capture is out of range
/// yields nothing; evaluation then continues with the next lower-priority
/// rule only.
pub(crate) fn match_reference(text: &str) -> Option<PatternMatch> {
    literal(&TODAY_RE, text, RecognizedPattern::Today)
        .or_else(|| literal(&YESTERDAY_RE, text, RecognizedPattern::Yesterday))
        .or_else(|| literal(&TOMORROW_RE, text, RecognizedPattern::Tomorrow))
        .or_else(|| literal(&LAST_WEEK_RE, text, RecognizedPattern::LastWeek))
        .or_else(|| literal(&THIS_WEEK_RE, text, RecognizedPattern::ThisWeek))
        .or_else(|| try_last_weekday(text))
        .or_else(|| try_relative_offset(text))
        .or_else(|| try_absolute_year(text))
        .or_else(|| try_month_year(text))
}

/// A keyword rule with no captures: the whole match is the span.
fn literal(re: &Regex, text: &str, pattern: RecognizedPattern) -> Option<PatternMatch> {
    re.find(text).map(|m| PatternMatch {
        pattern,
        span: m.range(),
    })
}

/// "last <weekday>".
fn try_last_weekday(text: &str) -> Option<PatternMatch> {
    let caps = LAST_WEEKDAY_RE.captures(text)?;
    let weekday = parse_weekday(caps.get(1)?.as_str())?;
    Some(PatternMatch {
        pattern: RecognizedPattern::NamedWeekdayLastWeek(weekday),
        span: caps.get(0)?.range(),
    })
}

/// "<n> <unit>s ago".
fn try_relative_offset(text: &str) -> Option<PatternMatch> {
    let caps = RELATIVE_OFFSET_RE.captures(text)?;
    // Amounts that do not fit u32 are out of range for this rule.
    let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = parse_unit(caps.get(2)?.as_str())?;
    Some(PatternMatch {
        pattern: RecognizedPattern::RelativeOffset { amount, unit },
        span: caps.get(0)?.range(),
    })
}

/// "(in|during|since) <4-digit-year>".
fn try_absolute_year(text: &str) -> Option<PatternMatch> {
    let caps = ABSOLUTE_YEAR_RE.captures(text)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return None;
    }
    Some(PatternMatch {
        pattern: RecognizedPattern::AbsoluteYear(year),
        span: caps.get(0)?.range(),
    })
}

/// "(in|during) <month-name> <4-digit-year>".
fn try_month_year(text: &str) -> Option<PatternMatch> {
    let caps = MONTH_YEAR_RE.captures(text)?;
    let month = parse_month(caps.get(1)?.as_str())?;
    let year: i32 = caps.get(2)?.as_str().parse().ok()?;
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return None;
    }
    Some(PatternMatch {
        pattern: RecognizedPattern::AbsoluteMonthYear { month, year },
        span: caps.get(0)?.range(),
    })
}

/// Parse a full weekday name (any case — the regex already constrained it).
fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse a full month name.
fn parse_month(s: &str) -> Option<Month> {
    match s.to_ascii_lowercase().as_str() {
        "january" => Some(Month::January),
        "february" => Some(Month::February),
        "march" => Some(Month::March),
        "april" => Some(Month::April),
        "may" => Some(Month::May),
        "june" => Some(Month::June),
        "july" => Some(Month::July),
        "august" => Some(Month::August),
        "september" => Some(Month::September),
        "october" => Some(Month::October),
        "november" => Some(Month::November),
        "december" => Some(Month::December),
        _ => None,
    }
}

/// Parse an offset unit name (singular form — the regex strips the plural).
fn parse_unit(s: &str) -> Option<OffsetUnit> {
    match s.to_ascii_lowercase().as_str() {
        "day" => Some(OffsetUnit::Days),
        "week" => Some(OffsetUnit::Weeks),
        "month" => Some(OffsetUnit::Months),
        "year" => Some(OffsetUnit::Years),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
