//! The public entry points: classify, resolve, and strip in one call.
//!
//! Resolution never touches a system clock — the caller supplies the
//! reference date, either as a [`NaiveDate`] or as a string (RFC 3339 or
//! `%Y-%m-%d`). Whatever matched is removed from the text so the caller can
//! store the cleaned sentence next to the normalized date.

use std::ops::Range;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::calendar::resolve_pattern;
use crate::error::RecallError;
use crate::pattern::match_reference;

/// The outcome of resolving one piece of free text.
///
/// `date == None` implies the input carried no recognizable reference; in
/// that case `cleaned_text` is the input unchanged and `matched_phrase` is
/// `None`. Consumers must not assume phrase removal succeeded just because a
/// date resolved — treat the two fields independently.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    /// The resolved calendar date, if a reference was recognized.
    pub date: Option<NaiveDate>,
    /// Input with the matched phrase removed and whitespace normalized;
    /// unchanged when nothing matched.
    pub cleaned_text: String,
    /// The literal phrase that encoded the reference, original casing.
    pub matched_phrase: Option<String>,
}

/// Resolve the first temporal reference in `text` against `reference`.
///
/// At most one reference is extracted per call; re-running on the returned
/// `cleaned_text` finds no residue of the stripped phrase.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use recall_engine::resolve_temporal_reference;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(); // a Friday
/// let result = resolve_temporal_reference("I went there last Tuesday", reference);
/// assert_eq!(result.date, NaiveDate::from_ymd_opt(2024, 3, 12));
/// assert_eq!(result.cleaned_text, "I went there");
/// assert_eq!(result.matched_phrase.as_deref(), Some("last Tuesday"));
/// ```
pub fn resolve_temporal_reference(text: &str, reference: NaiveDate) -> ResolutionResult {
    let Some(hit) = match_reference(text) else {
        return ResolutionResult {
            date: None,
            cleaned_text: text.to_string(),
            matched_phrase: None,
        };
    };

    let date = resolve_pattern(hit.pattern, reference);
    let phrase = text[hit.span.clone()].to_string();
    let cleaned = remove_span(text, hit.span);

    ResolutionResult {
        date: Some(date),
        cleaned_text: cleaned,
        matched_phrase: Some(phrase),
    }
}

/// Like [`resolve_temporal_reference`], with the reference date supplied as
/// a string: RFC 3339 (`"2024-03-15T09:00:00Z"`) or plain `"%Y-%m-%d"`.
///
/// # Errors
///
/// Returns [`RecallError::InvalidDatetime`] if the reference parses as
/// neither format.
pub fn resolve_temporal_reference_str(
    text: &str,
    reference: &str,
) -> Result<ResolutionResult, RecallError> {
    let reference = parse_reference(reference)?;
    Ok(resolve_temporal_reference(text, reference))
}

/// Parse a reference date string: RFC 3339 first, then `%Y-%m-%d`.
fn parse_reference(s: &str) -> Result<NaiveDate, RecallError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RecallError::InvalidDatetime(format!("'{s}': {e}")))
}

/// Delete `span` from `text`, collapse every whitespace run to a single
/// space, and trim the ends.
fn remove_span(text: &str, span: Range<usize>) -> String {
    let mut remainder = String::with_capacity(text.len());
    remainder.push_str(&text[..span.start]);
    remainder.push(' ');
    remainder.push_str(&text[span.end..]);
    remainder.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Friday.
    fn reference() -> NaiveDate {
        date(2024, 3, 15)
    }

    #[test]
    fn test_no_match_is_identity() {
        let result = resolve_temporal_reference("met Sarah at the cafe", reference());
        assert_eq!(result.date, None);
        assert_eq!(result.cleaned_text, "met Sarah at the cafe");
        assert_eq!(result.matched_phrase, None);
    }

    #[test]
    fn test_empty_input_is_identity() {
        let result = resolve_temporal_reference("", reference());
        assert_eq!(result.date, None);
        assert_eq!(result.cleaned_text, "");
        assert_eq!(result.matched_phrase, None);
    }

    #[test]
    fn test_yesterday() {
        let result = resolve_temporal_reference("yesterday", reference());
        assert_eq!(result.date, Some(date(2024, 3, 14)));
    }

    #[test]
    fn test_tomorrow() {
        let result = resolve_temporal_reference("tomorrow", reference());
        assert_eq!(result.date, Some(date(2024, 3, 16)));
    }

    #[test]
    fn test_last_tuesday_full_result() {
        let result = resolve_temporal_reference("I went there last Tuesday", reference());
        assert_eq!(result.date, Some(date(2024, 3, 12)));
        assert_eq!(result.cleaned_text, "I went there");
        assert_eq!(result.matched_phrase.as_deref(), Some("last Tuesday"));
    }

    #[test]
    fn test_phrase_preserves_input_casing() {
        let result = resolve_temporal_reference("Saw them Last Tuesday", reference());
        assert_eq!(result.matched_phrase.as_deref(), Some("Last Tuesday"));
        assert_eq!(result.cleaned_text, "Saw them");
    }

    #[test]
    fn test_word_numbers_not_recognized() {
        let result = resolve_temporal_reference("three days ago", reference());
        assert_eq!(result.date, None);
        assert_eq!(result.cleaned_text, "three days ago");
        assert_eq!(result.matched_phrase, None);
    }

    #[test]
    fn test_year_range_boundaries() {
        assert_eq!(resolve_temporal_reference("in 1850", reference()).date, None);
        assert_eq!(resolve_temporal_reference("in 2101", reference()).date, None);
        assert_eq!(
            resolve_temporal_reference("in 1900", reference()).date,
            Some(date(1900, 1, 1))
        );
        assert_eq!(
            resolve_temporal_reference("in 2100", reference()).date,
            Some(date(2100, 1, 1))
        );
    }

    #[test]
    fn test_month_year_phrase() {
        let result = resolve_temporal_reference("moved houses during March 2020", reference());
        assert_eq!(result.date, Some(date(2020, 3, 1)));
        assert_eq!(result.cleaned_text, "moved houses");
        assert_eq!(result.matched_phrase.as_deref(), Some("during March 2020"));
    }

    #[test]
    fn test_relative_offset_phrase() {
        let result = resolve_temporal_reference("met Sarah 3 days ago at the cafe", reference());
        assert_eq!(result.date, Some(date(2024, 3, 12)));
        assert_eq!(result.cleaned_text, "met Sarah at the cafe");
        assert_eq!(result.matched_phrase.as_deref(), Some("3 days ago"));
    }

    #[test]
    fn test_leading_phrase_trimmed() {
        let result = resolve_temporal_reference("yesterday we met", reference());
        assert_eq!(result.cleaned_text, "we met");
    }

    #[test]
    fn test_trailing_phrase_trimmed() {
        let result = resolve_temporal_reference("we met yesterday", reference());
        assert_eq!(result.cleaned_text, "we met");
    }

    #[test]
    fn test_whitespace_collapsed_after_removal() {
        let result = resolve_temporal_reference("note   3 days ago   done", reference());
        assert_eq!(result.cleaned_text, "note done");
    }

    #[test]
    fn test_idempotent_single_extraction() {
        let first = resolve_temporal_reference("we met yesterday", reference());
        assert!(first.date.is_some());
        let second = resolve_temporal_reference(&first.cleaned_text, reference());
        assert_eq!(second.date, None);
        assert_eq!(second.cleaned_text, first.cleaned_text);
    }

    #[test]
    fn test_same_weekday_is_seven_days_back() {
        // Reference is a Friday; "last friday" must be a full week back.
        let result = resolve_temporal_reference("we spoke last friday", reference());
        assert_eq!(result.date, Some(date(2024, 3, 8)));
    }

    #[test]
    fn test_now_resolves_to_reference() {
        let result = resolve_temporal_reference("do it now", reference());
        assert_eq!(result.date, Some(reference()));
        assert_eq!(result.cleaned_text, "do it");
        assert_eq!(result.matched_phrase.as_deref(), Some("now"));
    }

    #[test]
    fn test_this_week_resolves_to_reference() {
        let result = resolve_temporal_reference("busy this week", reference());
        assert_eq!(result.date, Some(reference()));
        assert_eq!(result.cleaned_text, "busy");
    }

    #[test]
    fn test_str_reference_rfc3339() {
        let result =
            resolve_temporal_reference_str("yesterday", "2024-03-15T10:30:00Z").unwrap();
        assert_eq!(result.date, Some(date(2024, 3, 14)));
    }

    #[test]
    fn test_str_reference_plain_date() {
        let result = resolve_temporal_reference_str("tomorrow", "2024-03-15").unwrap();
        assert_eq!(result.date, Some(date(2024, 3, 16)));
    }

    #[test]
    fn test_str_reference_invalid() {
        let err = resolve_temporal_reference_str("yesterday", "not-a-date").unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");
    }
}
